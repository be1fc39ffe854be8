use pcalc_engine::{Mono, Poly};
use proptest::prelude::*;

/// Small coefficients keep products well inside `i64` so the ring laws hold
/// exactly; wraparound has its own unit tests.
pub fn arb_coeff() -> impl Strategy<Value = i64> {
    -6i64..=6
}

pub fn arb_monos(inner: impl Strategy<Value = Poly>) -> impl Strategy<Value = Vec<Mono>> {
    prop::collection::vec(
        (0u32..5, inner).prop_map(|(exp, poly)| Mono::new(exp, poly)),
        0..5,
    )
}

/// Random canonical polynomials in up to three variables.
pub fn arb_poly() -> impl Strategy<Value = Poly> {
    let leaf = arb_coeff().prop_map(Poly::from_coeff);
    leaf.prop_recursive(
        3,  // nesting levels
        48, // max nodes
        5,  // monomials per level
        |inner| arb_monos(inner).prop_map(Poly::add_monos),
    )
}

/// A list of monomials with repeated exponents and possibly zero
/// coefficients, for exercising `add_monos` directly.
pub fn arb_raw_monos() -> impl Strategy<Value = Vec<Mono>> {
    arb_monos(arb_poly())
}
