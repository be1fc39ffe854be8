//! Decoder for the parenthesized polynomial notation.
//!
//! ```text
//! poly    := INTEGER | monosum
//! monosum := mono ("+" mono)*
//! mono    := "(" poly "," INTEGER ")"
//! ```
//!
//! There is no AST. The line is scanned once, left to right, and every
//! token goes onto a scratch stack that is reduced in place: `,` closes a
//! pending coefficient, `)` builds a monomial, and the end of the line sums
//! whatever monomials are left. Dropping the stack on error releases every
//! partially built value.

use pcalc_engine::{Exp, Mono, Poly, MAX_EXP};

use crate::error::ParseError;
use crate::literal::integer_literal;

/// Default limit on open parentheses. Engine operations recurse once per
/// level, so this also bounds their stack usage.
pub const DEFAULT_MAX_NESTING: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

/// Parses one line with default options. Anything after the first `\n` is
/// ignored.
pub fn parse_poly(input: &str) -> Result<Poly, ParseError> {
    parse_poly_with(input, &ParseOptions::default())
}

pub fn parse_poly_with(input: &str, options: &ParseOptions) -> Result<Poly, ParseError> {
    let line = input.find('\n').map_or(input, |end| &input[..end]);
    ScratchStack::new(options.max_nesting).run(line)
}

/// Scratch-stack entry.
#[derive(Debug)]
enum Token {
    Open,
    Plus,
    Comma,
    Int(i64),
    Mono(Mono),
    Poly(Poly),
}

struct ScratchStack {
    tokens: Vec<Token>,
    depth: usize,
    max_nesting: usize,
}

impl ScratchStack {
    fn new(max_nesting: usize) -> Self {
        Self {
            tokens: Vec::new(),
            depth: 0,
            max_nesting,
        }
    }

    fn run(mut self, line: &str) -> Result<Poly, ParseError> {
        let mut rest = line;
        while let Some(ch) = rest.chars().next() {
            let pos = line.len() - rest.len();
            match ch {
                '(' => self.open(pos)?,
                '+' => self.tokens.push(Token::Plus),
                ',' => self.comma(pos)?,
                ')' => self.close(pos)?,
                '-' | '0'..='9' => {
                    rest = self.integer(rest, pos)?;
                    continue;
                }
                other => return Err(ParseError::UnexpectedChar { ch: other, pos }),
            }
            rest = &rest[1..];
        }
        self.finish(line.len())
    }

    fn open(&mut self, pos: usize) -> Result<(), ParseError> {
        if self.depth >= self.max_nesting {
            return Err(ParseError::TooDeep {
                limit: self.max_nesting,
                pos,
            });
        }
        self.depth += 1;
        self.tokens.push(Token::Open);
        Ok(())
    }

    /// Lexes an integer at the start of `rest` and returns what follows it.
    fn integer<'a>(&mut self, rest: &'a str, pos: usize) -> Result<&'a str, ParseError> {
        let (after, lexeme) =
            integer_literal(rest).map_err(|_| ParseError::InvalidNumber { pos })?;
        let value = lexeme
            .parse::<i64>()
            .map_err(|_| ParseError::NumberOutOfRange { pos })?;
        self.tokens.push(Token::Int(value));
        Ok(after)
    }

    /// `,` ends the coefficient of the innermost open monomial.
    fn comma(&mut self, pos: usize) -> Result<(), ParseError> {
        let coeff = match self.tokens.pop() {
            Some(Token::Int(n)) => Poly::from_coeff(n),
            Some(Token::Mono(first)) => self.reduce_sum(first, true, pos)?,
            _ => {
                return Err(ParseError::Malformed {
                    reason: "expected a coefficient before ','",
                    pos,
                })
            }
        };
        self.tokens.push(Token::Poly(coeff));
        self.tokens.push(Token::Comma);
        Ok(())
    }

    /// `)` turns `( poly , exp` into a monomial.
    fn close(&mut self, pos: usize) -> Result<(), ParseError> {
        let raw_exp = match self.tokens.pop() {
            Some(Token::Int(n)) => n,
            _ => {
                return Err(ParseError::Malformed {
                    reason: "expected an exponent before ')'",
                    pos,
                })
            }
        };
        let exp = Exp::try_from(raw_exp)
            .ok()
            .filter(|e| *e <= MAX_EXP)
            .ok_or(ParseError::ExponentOutOfRange {
                value: raw_exp,
                pos,
            })?;
        self.expect(Token::Comma, "expected ',' before the exponent", pos)?;
        let poly = match self.tokens.pop() {
            Some(Token::Int(n)) => Poly::from_coeff(n),
            Some(Token::Poly(p)) => p,
            _ => {
                return Err(ParseError::Malformed {
                    reason: "expected a coefficient inside '(...)'",
                    pos,
                })
            }
        };
        self.expect(Token::Open, "unmatched ')'", pos)?;
        self.depth -= 1;

        let exp = if poly.is_zero() { 0 } else { exp };
        self.tokens.push(Token::Mono(Mono::new(exp, poly)));
        Ok(())
    }

    fn expect(&mut self, marker: Token, reason: &'static str, pos: usize) -> Result<(), ParseError> {
        let matches = matches!(
            (&marker, self.tokens.last()),
            (Token::Comma, Some(Token::Comma)) | (Token::Open, Some(Token::Open))
        );
        if !matches {
            return Err(ParseError::Malformed { reason, pos });
        }
        self.tokens.pop();
        Ok(())
    }

    /// Pops `mono (+ mono)*` below `first` and sums it.
    ///
    /// Enclosed sums stop at (and leave) the nearest `(`; the top-level sum
    /// must consume the whole stack.
    fn reduce_sum(&mut self, first: Mono, enclosed: bool, pos: usize) -> Result<Poly, ParseError> {
        let mut monos = vec![first];
        loop {
            match self.tokens.last() {
                Some(Token::Open) if enclosed => break,
                None if !enclosed => break,
                Some(Token::Plus) => {
                    self.tokens.pop();
                    match self.tokens.pop() {
                        Some(Token::Mono(m)) => monos.push(m),
                        _ => {
                            return Err(ParseError::Malformed {
                                reason: "expected a monomial before '+'",
                                pos,
                            })
                        }
                    }
                }
                _ => {
                    return Err(ParseError::Malformed {
                        reason: "monomials must be joined by '+'",
                        pos,
                    })
                }
            }
        }
        Ok(Poly::add_monos(monos))
    }

    fn finish(mut self, end: usize) -> Result<Poly, ParseError> {
        match self.tokens.pop() {
            None => Err(ParseError::Empty),
            Some(Token::Int(n)) if self.tokens.is_empty() => Ok(Poly::from_coeff(n)),
            Some(Token::Poly(p)) if self.tokens.is_empty() => Ok(p),
            Some(Token::Mono(last)) => self.reduce_sum(last, false, end),
            Some(_) => Err(ParseError::Malformed {
                reason: "incomplete polynomial",
                pos: end,
            }),
        }
    }
}
