use std::fmt;

use pcalc_engine::Poly;

/// Renders a polynomial in the input notation.
///
/// Constants print as plain decimals. Sums print their monomials in
/// ascending exponent order as `(coeff,exp)` joined by `+`, with no outer
/// parentheses.
pub struct DisplayPoly<'a> {
    pub poly: &'a Poly,
}

impl<'a> DisplayPoly<'a> {
    pub fn new(poly: &'a Poly) -> Self {
        Self { poly }
    }
}

impl fmt::Display for DisplayPoly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.poly {
            Poly::Coeff(c) => write!(f, "{}", c),
            Poly::Sum(monos) => {
                for (i, mono) in monos.iter().rev().enumerate() {
                    if i > 0 {
                        f.write_str("+")?;
                    }
                    write!(f, "({},{})", DisplayPoly::new(&mono.poly), mono.exp)?;
                }
                Ok(())
            }
        }
    }
}

pub fn poly_to_text(poly: &Poly) -> String {
    DisplayPoly::new(poly).to_string()
}
