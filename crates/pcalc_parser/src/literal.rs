//! Decimal integer literals: an optional `-` followed by one or more digits.
//!
//! Shared by the polynomial decoder and the command parameters of the
//! calculator, which use the same spelling.

use nom::{
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    sequence::pair,
    IResult,
};

/// Recognizes `-?[0-9]+` and returns the matched text.
pub fn integer_literal(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1))(input)
}

/// The whole of `input` as an `i64`. `None` on bad spelling, trailing text
/// or overflow.
pub fn parse_i64(input: &str) -> Option<i64> {
    match integer_literal(input) {
        Ok(("", lexeme)) => lexeme.parse().ok(),
        _ => None,
    }
}

/// The whole of `input` as a `u64`.
///
/// A minus sign is tolerated only on zero (`-0`, `-000`).
pub fn parse_u64(input: &str) -> Option<u64> {
    match integer_literal(input) {
        Ok(("", lexeme)) => match lexeme.strip_prefix('-') {
            Some(digits) => digits.bytes().all(|b| b == b'0').then_some(0),
            None => lexeme.parse().ok(),
        },
        _ => None,
    }
}
