use std::fmt;

use pcalc_engine::Poly;

/// Readable rendering with explicit variables, e.g.
/// `(1 + 3 * x_2^1) * x_1^2 + 5`.
///
/// Terms are listed highest exponent first; `x^0` factors are omitted.
pub struct DisplayPolyVars<'a> {
    pub poly: &'a Poly,
    /// Index of the outermost variable, normally 1.
    pub first_var: usize,
}

impl<'a> DisplayPolyVars<'a> {
    pub fn new(poly: &'a Poly) -> Self {
        Self { poly, first_var: 1 }
    }

    fn nested(poly: &'a Poly, first_var: usize) -> Self {
        Self { poly, first_var }
    }
}

impl fmt::Display for DisplayPolyVars<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let monos = match self.poly {
            Poly::Coeff(c) => return write!(f, "{}", c),
            Poly::Sum(monos) => monos,
        };
        for (i, mono) in monos.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            let coeff = DisplayPolyVars::nested(&mono.poly, self.first_var + 1);
            match (&mono.poly, mono.exp) {
                (Poly::Coeff(_), 0) => write!(f, "{}", coeff)?,
                (Poly::Coeff(1), e) => write!(f, "x_{}^{}", self.first_var, e)?,
                (Poly::Coeff(_), e) => write!(f, "{} * x_{}^{}", coeff, self.first_var, e)?,
                (Poly::Sum(_), 0) => write!(f, "({})", coeff)?,
                (Poly::Sum(_), e) => write!(f, "({}) * x_{}^{}", coeff, self.first_var, e)?,
            }
        }
        Ok(())
    }
}
