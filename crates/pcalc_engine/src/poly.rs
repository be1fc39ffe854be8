//! Canonical recursive representation of sparse multivariate polynomials.
//!
//! A polynomial in `x_1` is either a constant or a sum of monomials
//! `c_i * x_1^e_i`, where every `c_i` is itself a polynomial in `x_2`, and so
//! on. The number of variables is never stored: it is the nesting depth.

/// Coefficient type. Arithmetic on coefficients wraps on overflow.
pub type Coeff = i64;

/// Exponent type.
pub type Exp = u32;

/// Largest exponent accepted from textual input.
pub const MAX_EXP: Exp = i32::MAX as Exp;

/// Debug-build check that a value satisfies the canonical-form invariants.
#[macro_export]
macro_rules! debug_assert_canonical {
    ($poly:expr) => {
        debug_assert!(
            $poly.is_canonical(),
            "non-canonical polynomial: {:?}",
            $poly
        )
    };
}

/// A polynomial in canonical form.
///
/// Canonical form:
/// - `Sum` is never empty (the empty sum is `Coeff(0)`)
/// - no monomial has the zero polynomial as its coefficient
/// - exponents strictly decrease from the first monomial to the last
/// - anything recursively equal to a constant is stored as `Coeff`
///
/// Every operation in this crate returns canonical values. Building a `Sum`
/// by hand is allowed only when the list already satisfies these rules;
/// otherwise go through [`Poly::add_monos`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Poly {
    Coeff(Coeff),
    /// Monomials in strictly decreasing exponent order.
    Sum(Vec<Mono>),
}

/// `poly * x^exp`, where `poly` is a polynomial in the next variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mono {
    pub exp: Exp,
    pub poly: Poly,
}

impl Mono {
    pub fn new(exp: Exp, poly: Poly) -> Self {
        Mono { exp, poly }
    }

    #[inline]
    pub fn exp(&self) -> Exp {
        self.exp
    }

    #[inline]
    pub fn poly(&self) -> &Poly {
        &self.poly
    }
}

impl Default for Poly {
    fn default() -> Self {
        Poly::zero()
    }
}

impl From<Coeff> for Poly {
    fn from(c: Coeff) -> Self {
        Poly::Coeff(c)
    }
}

impl Poly {
    /// The zero polynomial.
    #[inline]
    pub const fn zero() -> Self {
        Poly::Coeff(0)
    }

    #[inline]
    pub const fn from_coeff(c: Coeff) -> Self {
        Poly::Coeff(c)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Poly::Coeff(0))
    }

    #[inline]
    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Coeff(_))
    }

    /// The constant value, if this polynomial is a constant.
    #[inline]
    pub fn as_coeff(&self) -> Option<Coeff> {
        match self {
            Poly::Coeff(c) => Some(*c),
            Poly::Sum(_) => None,
        }
    }

    /// Monomials in storage order (highest exponent first). Empty for constants.
    #[inline]
    pub fn monos(&self) -> &[Mono] {
        match self {
            Poly::Coeff(_) => &[],
            Poly::Sum(monos) => monos,
        }
    }

    /// Structural equality of two canonical polynomials.
    pub fn is_eq(&self, other: &Poly) -> bool {
        self == other
    }

    /// Sums an unordered list of monomials, possibly with repeated exponents.
    ///
    /// This is the normalization entry point: monomials are sorted by
    /// exponent (stable, highest first), runs with equal exponents are merged
    /// by adding their coefficients, and zero groups are dropped.
    pub fn add_monos(mut monos: Vec<Mono>) -> Poly {
        monos.sort_by(|a, b| b.exp.cmp(&a.exp));

        let mut merged: Vec<Mono> = Vec::with_capacity(monos.len());
        for mono in monos {
            match merged.last_mut() {
                Some(last) if last.exp == mono.exp => {
                    let acc = std::mem::take(&mut last.poly);
                    last.poly = acc.add_owned(mono.poly);
                }
                _ => merged.push(mono),
            }
        }
        merged.retain(|m| !m.poly.is_zero());

        let result = Poly::from_sorted(merged);
        debug_assert_canonical!(result);
        result
    }

    /// Wraps monomials that are already sorted, deduplicated and free of zero
    /// coefficients, collapsing the empty sum and a lone constant term.
    pub(crate) fn from_sorted(monos: Vec<Mono>) -> Poly {
        if monos.is_empty() {
            return Poly::zero();
        }
        if let [Mono {
            exp: 0,
            poly: Poly::Coeff(c),
        }] = monos.as_slice()
        {
            return Poly::Coeff(*c);
        }
        Poly::Sum(monos)
    }

    /// Checks every canonical-form invariant, recursively.
    pub fn is_canonical(&self) -> bool {
        let monos = match self {
            Poly::Coeff(_) => return true,
            Poly::Sum(monos) => monos,
        };
        if monos.is_empty() {
            return false;
        }
        if let [Mono {
            exp: 0,
            poly: Poly::Coeff(_),
        }] = monos.as_slice()
        {
            return false;
        }
        let descending = monos.windows(2).all(|w| w[0].exp > w[1].exp);
        descending
            && monos
                .iter()
                .all(|m| !m.poly.is_zero() && m.poly.is_canonical())
    }

    /// Depth of monomial nesting: 0 for constants, 1 for polynomials in `x_1`
    /// with constant coefficients, and so on.
    pub fn depth(&self) -> usize {
        self.monos()
            .iter()
            .map(|m| 1 + m.poly.depth())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(exp: Exp, poly: Poly) -> Mono {
        Mono::new(exp, poly)
    }

    fn c(v: Coeff) -> Poly {
        Poly::from_coeff(v)
    }

    #[test]
    fn test_zero_and_coeff_predicates() {
        assert!(Poly::zero().is_zero());
        assert!(Poly::zero().is_coeff());
        assert!(c(5).is_coeff());
        assert!(!c(5).is_zero());
        assert_eq!(c(-3).as_coeff(), Some(-3));
        assert_eq!(Poly::default(), Poly::zero());
    }

    #[test]
    fn test_add_monos_empty_is_zero() {
        assert_eq!(Poly::add_monos(vec![]), Poly::zero());
    }

    #[test]
    fn test_add_monos_sorts_descending() {
        let p = Poly::add_monos(vec![mono(1, c(1)), mono(3, c(2)), mono(0, c(7))]);
        let exps: Vec<Exp> = p.monos().iter().map(Mono::exp).collect();
        assert_eq!(exps, vec![3, 1, 0]);
        assert!(p.is_canonical());
    }

    #[test]
    fn test_add_monos_merges_equal_exponents() {
        let p = Poly::add_monos(vec![mono(2, c(1)), mono(2, c(4)), mono(1, c(1))]);
        assert_eq!(p, Poly::Sum(vec![mono(2, c(5)), mono(1, c(1))]));
    }

    #[test]
    fn test_add_monos_drops_cancelled_groups() {
        let p = Poly::add_monos(vec![mono(2, c(1)), mono(1, c(3)), mono(2, c(-1))]);
        assert_eq!(p, Poly::Sum(vec![mono(1, c(3))]));

        let q = Poly::add_monos(vec![mono(4, c(2)), mono(4, c(-2))]);
        assert!(q.is_zero());
    }

    #[test]
    fn test_add_monos_collapses_constant_term() {
        assert_eq!(Poly::add_monos(vec![mono(0, c(9))]), c(9));
    }

    #[test]
    fn test_add_monos_collapses_nested_constant_chain() {
        // ((((7,0),0),0)) is just 7
        let inner = Poly::add_monos(vec![mono(0, c(7))]);
        let middle = Poly::add_monos(vec![mono(0, inner)]);
        let outer = Poly::add_monos(vec![mono(0, middle)]);
        assert_eq!(outer, c(7));
    }

    #[test]
    fn test_single_zero_exponent_with_polynomial_is_kept() {
        // x_2 as a polynomial in x_1: (x_2) * x_1^0
        let x2 = Poly::add_monos(vec![mono(1, c(1))]);
        let p = Poly::add_monos(vec![mono(0, x2.clone())]);
        assert_eq!(p, Poly::Sum(vec![mono(0, x2)]));
        assert!(p.is_canonical());
    }

    #[test]
    fn test_is_canonical_rejects_bad_shapes() {
        assert!(!Poly::Sum(vec![]).is_canonical());
        assert!(!Poly::Sum(vec![mono(0, c(1))]).is_canonical());
        assert!(!Poly::Sum(vec![mono(1, c(1)), mono(2, c(1))]).is_canonical());
        assert!(!Poly::Sum(vec![mono(2, c(1)), mono(2, c(1))]).is_canonical());
        assert!(!Poly::Sum(vec![mono(2, c(0))]).is_canonical());
    }

    #[test]
    fn test_depth() {
        assert_eq!(c(3).depth(), 0);
        let x1 = Poly::add_monos(vec![mono(1, c(1))]);
        assert_eq!(x1.depth(), 1);
        let x1x2 = Poly::add_monos(vec![mono(1, x1.clone())]);
        assert_eq!(x1x2.depth(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Poly::add_monos(vec![mono(2, c(3)), mono(0, c(1))]);
        let mut copy = original.clone();
        if let Poly::Sum(monos) = &mut copy {
            monos[0].poly = c(100);
        }
        assert_eq!(original.monos()[0].poly, c(3));
        assert_ne!(original, copy);
    }
}
