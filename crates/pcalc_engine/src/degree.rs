//! Degree queries.
//!
//! Both queries return `-1` for the zero polynomial and `0` for any other
//! constant.

use crate::poly::Poly;

impl Poly {
    /// Degree with respect to the variable at nesting depth `var_idx`
    /// (`0` is `x_1`), treating every other variable as a parameter.
    pub fn deg_by(&self, var_idx: usize) -> i64 {
        match self {
            _ if self.is_zero() => -1,
            Poly::Coeff(_) => 0,
            Poly::Sum(monos) if var_idx == 0 => monos.first().map_or(-1, |m| i64::from(m.exp)),
            Poly::Sum(monos) => monos
                .iter()
                .map(|m| m.poly.deg_by(var_idx - 1))
                .max()
                .unwrap_or(-1),
        }
    }

    /// Total degree: the largest sum of exponents over all terms.
    pub fn deg(&self) -> i64 {
        match self {
            _ if self.is_zero() => -1,
            Poly::Coeff(_) => 0,
            Poly::Sum(monos) => monos
                .iter()
                .map(|m| i64::from(m.exp) + m.poly.deg())
                .max()
                .unwrap_or(-1),
        }
    }
}
