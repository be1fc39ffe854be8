pub mod error;
pub mod literal;
pub mod parser;

pub use error::ParseError;
pub use literal::{integer_literal, parse_i64, parse_u64};
pub use parser::{parse_poly, parse_poly_with, ParseOptions, DEFAULT_MAX_NESTING};
