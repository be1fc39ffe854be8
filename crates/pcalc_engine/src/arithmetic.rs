//! Ring operations on canonical polynomials.
//!
//! Addition merges the two descending monomial lists; multiplication forms
//! the full cross product and hands it to [`Poly::add_monos`] for merging.
//! Coefficient arithmetic wraps on `i64` overflow.

use std::cmp::Ordering;

use tracing::trace;

use crate::debug_assert_canonical;
use crate::poly::{Coeff, Mono, Poly};

impl Poly {
    /// `self + other`.
    pub fn add(&self, other: &Poly) -> Poly {
        let result = self.clone().add_owned(other.clone());
        debug_assert_canonical!(result);
        result
    }

    /// `self - other`.
    pub fn sub(&self, other: &Poly) -> Poly {
        let result = self.clone().add_owned(other.neg());
        debug_assert_canonical!(result);
        result
    }

    /// `-self`.
    pub fn neg(&self) -> Poly {
        self.mul_by_coeff(-1)
    }

    /// `self * other`.
    pub fn mul(&self, other: &Poly) -> Poly {
        let result = match (self, other) {
            _ if self.is_zero() || other.is_zero() => Poly::zero(),
            (Poly::Coeff(c), p) | (p, Poly::Coeff(c)) => p.mul_by_coeff(*c),
            (Poly::Sum(lhs), Poly::Sum(rhs)) => {
                trace!(lhs_terms = lhs.len(), rhs_terms = rhs.len(), "cross product");
                let products = lhs
                    .iter()
                    .flat_map(|l| rhs.iter().map(move |r| (l, r)))
                    .filter_map(|(l, r)| {
                        let poly = l.poly.mul(&r.poly);
                        (!poly.is_zero()).then(|| Mono::new(l.exp.wrapping_add(r.exp), poly))
                    })
                    .collect();
                Poly::add_monos(products)
            }
        };
        debug_assert_canonical!(result);
        result
    }

    /// `self * c` for a scalar `c`.
    pub fn mul_by_coeff(&self, c: Coeff) -> Poly {
        match (c, self) {
            (0, _) => Poly::zero(),
            (1, p) => p.clone(),
            (c, Poly::Coeff(a)) => Poly::Coeff(a.wrapping_mul(c)),
            (c, Poly::Sum(monos)) => {
                // A product can wrap to zero, so terms may disappear.
                let scaled = monos
                    .iter()
                    .filter_map(|m| {
                        let poly = m.poly.mul_by_coeff(c);
                        (!poly.is_zero()).then(|| Mono::new(m.exp, poly))
                    })
                    .collect();
                Poly::from_sorted(scaled)
            }
        }
    }

    /// Consuming addition used by every other operation.
    pub(crate) fn add_owned(self, other: Poly) -> Poly {
        match (self, other) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_add(b)),
            (Poly::Coeff(c), Poly::Sum(monos)) | (Poly::Sum(monos), Poly::Coeff(c)) => {
                add_coeff(monos, c)
            }
            (Poly::Sum(lhs), Poly::Sum(rhs)) => merge(lhs, rhs),
        }
    }
}

/// Adds a constant to a polynomial by folding it into the `x^0` slot.
fn add_coeff(mut monos: Vec<Mono>, c: Coeff) -> Poly {
    if c == 0 {
        return Poly::Sum(monos);
    }
    match monos.pop() {
        Some(last) if last.exp == 0 => {
            let constant = last.poly.add_owned(Poly::Coeff(c));
            if !constant.is_zero() {
                monos.push(Mono::new(0, constant));
            }
        }
        Some(last) => {
            monos.push(last);
            monos.push(Mono::new(0, Poly::Coeff(c)));
        }
        None => monos.push(Mono::new(0, Poly::Coeff(c))),
    }
    Poly::from_sorted(monos)
}

/// Merges two descending monomial lists, adding coefficients on equal exponents.
fn merge(lhs: Vec<Mono>, rhs: Vec<Mono>) -> Poly {
    let mut out = Vec::with_capacity(lhs.len() + rhs.len());
    let mut lhs = lhs.into_iter().peekable();
    let mut rhs = rhs.into_iter().peekable();

    while let (Some(l), Some(r)) = (lhs.peek(), rhs.peek()) {
        match l.exp.cmp(&r.exp) {
            Ordering::Greater => out.extend(lhs.next()),
            Ordering::Less => out.extend(rhs.next()),
            Ordering::Equal => {
                if let (Some(l), Some(r)) = (lhs.next(), rhs.next()) {
                    let sum = l.poly.add_owned(r.poly);
                    if !sum.is_zero() {
                        out.push(Mono::new(l.exp, sum));
                    }
                }
            }
        }
    }
    out.extend(lhs);
    out.extend(rhs);

    Poly::from_sorted(out)
}
