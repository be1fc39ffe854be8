//! Sparse multivariate polynomials with `i64` coefficients.
//!
//! Values are kept in a unique canonical form, so structural equality is
//! polynomial equality. See [`Poly`] for the invariants.

pub mod arithmetic;
pub mod degree;
pub mod eval;
pub mod poly;

pub use poly::{Coeff, Exp, Mono, Poly, MAX_EXP};
