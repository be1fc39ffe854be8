//! Point evaluation of the outermost variable.

use crate::debug_assert_canonical;
use crate::poly::{Coeff, Poly};

impl Poly {
    /// Substitutes `x` for `x_1`.
    ///
    /// The result is a polynomial in the remaining variables, shifted one
    /// level up (`x_2` becomes the outermost variable). Powers are computed
    /// by binary exponentiation and wrap on overflow, like every other
    /// coefficient operation.
    pub fn at(&self, x: Coeff) -> Poly {
        let monos = match self {
            Poly::Coeff(_) => return self.clone(),
            Poly::Sum(monos) => monos,
        };
        let result = monos.iter().fold(Poly::zero(), |acc, m| {
            acc.add_owned(m.poly.mul_by_coeff(x.wrapping_pow(m.exp)))
        });
        debug_assert_canonical!(result);
        result
    }
}
