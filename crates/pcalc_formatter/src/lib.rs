//! Text renderings of canonical polynomials.
//!
//! [`DisplayPoly`] produces the calculator's own notation, the inverse of
//! `pcalc_parser::parse_poly`. [`DisplayPolyVars`] is a readable form with
//! named variables, meant for logs.

pub mod text;
pub mod vars;

pub use text::{poly_to_text, DisplayPoly};
pub use vars::DisplayPolyVars;
