//! Evaluation stack and command execution, without I/O.
//!
//! [`Interpreter::execute_line`] classifies a raw input line, runs it, and
//! returns at most one [`CalcMsg`]. Writing it anywhere is the caller's job.

use pcalc_engine::Poly;
use pcalc_formatter::{poly_to_text, DisplayPolyVars};
use pcalc_parser::{parse_poly_with, ParseOptions};
use tracing::{debug, trace};

use super::command::Command;
use super::error::{CalcError, LineError};
use super::output::CalcMsg;

/// What an input line asks for, decided by its first byte.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Skip,
    Command(&'a str),
    Literal(&'a str),
}

fn classify(line: &[u8]) -> Result<LineKind<'_>, CalcError> {
    let has_nul = line.contains(&0);
    match line.first() {
        None => Ok(LineKind::Skip),
        Some(b'#') if has_nul => Err(CalcError::WrongPoly),
        Some(b'#') => Ok(LineKind::Skip),
        Some(b) if b.is_ascii_alphabetic() => match std::str::from_utf8(line) {
            Ok(text) if !has_nul => Ok(LineKind::Command(text)),
            _ => Err(CalcError::WrongCommand),
        },
        Some(_) => match std::str::from_utf8(line) {
            Ok(text) if !has_nul => Ok(LineKind::Literal(text)),
            _ => Err(CalcError::WrongPoly),
        },
    }
}

fn flag(b: bool) -> String {
    u8::from(b).to_string()
}

/// The calculator state: one stack of polynomials for the whole session.
pub struct Interpreter {
    stack: Vec<Poly>,
    parse_options: ParseOptions,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    pub fn with_options(parse_options: ParseOptions) -> Self {
        Self {
            stack: Vec::new(),
            parse_options,
        }
    }

    /// Stack contents, bottom first.
    pub fn stack(&self) -> &[Poly] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Runs one input line. `raw` may still end in `\n`.
    pub fn execute_line(&mut self, line_nr: usize, raw: &[u8]) -> Option<CalcMsg> {
        let line = raw.strip_suffix(b"\n").unwrap_or(raw);
        let result = classify(line).and_then(|kind| match kind {
            LineKind::Skip => Ok(None),
            LineKind::Command(text) => {
                let command = text.parse::<Command>()?;
                debug!(
                    line = line_nr,
                    command = command.name(),
                    depth = self.stack.len(),
                    "execute"
                );
                self.execute(command)
            }
            LineKind::Literal(text) => self.push_literal(text).map(|_| None).map_err(|err| {
                debug!(line = line_nr, error = %err, "rejected polynomial literal");
                CalcError::from(err)
            }),
        });

        match result {
            Ok(reply) => reply.map(CalcMsg::Output),
            Err(kind) => {
                debug!(line = line_nr, %kind, "line failed");
                Some(CalcMsg::Error(LineError {
                    line: line_nr,
                    kind,
                }))
            }
        }
    }

    /// Decodes a polynomial literal and pushes it.
    pub fn push_literal(&mut self, text: &str) -> Result<(), pcalc_parser::ParseError> {
        let poly = parse_poly_with(text, &self.parse_options)?;
        trace!(poly = %DisplayPolyVars::new(&poly), "push");
        self.stack.push(poly);
        Ok(())
    }

    /// Runs a command against the stack. Returns the text to print, if any.
    ///
    /// On failure the stack is left as it was.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>, CalcError> {
        if self.stack.len() < command.min_depth() {
            return Err(CalcError::StackUnderflow);
        }

        let reply = match command {
            Command::Zero => {
                self.stack.push(Poly::zero());
                None
            }
            Command::IsCoeff => Some(flag(self.top()?.is_coeff())),
            Command::IsZero => Some(flag(self.top()?.is_zero())),
            Command::Clone => {
                let copy = self.top()?.clone();
                self.stack.push(copy);
                None
            }
            Command::Add => self.binary(Poly::add)?,
            Command::Sub => self.binary(Poly::sub)?,
            Command::Mul => self.binary(Poly::mul)?,
            Command::Neg => {
                let p = self.pop()?;
                self.stack.push(p.neg());
                None
            }
            Command::IsEq => {
                let (top, second) = self.top_two()?;
                Some(flag(top.is_eq(second)))
            }
            Command::Deg => Some(self.top()?.deg().to_string()),
            Command::DegBy(idx) => {
                // Indices past usize::MAX are deeper than any polynomial.
                let idx = usize::try_from(idx).unwrap_or(usize::MAX);
                Some(self.top()?.deg_by(idx).to_string())
            }
            Command::At(x) => {
                let p = self.pop()?;
                self.stack.push(p.at(x));
                None
            }
            Command::Print => Some(poly_to_text(self.top()?)),
            Command::Pop => {
                self.pop()?;
                None
            }
        };

        if let Some(top) = self.stack.last() {
            trace!(depth = self.stack.len(), top = %DisplayPolyVars::new(top), "stack");
        }
        Ok(reply)
    }

    fn top(&self) -> Result<&Poly, CalcError> {
        self.stack.last().ok_or(CalcError::StackUnderflow)
    }

    fn top_two(&self) -> Result<(&Poly, &Poly), CalcError> {
        match self.stack.as_slice() {
            [.., second, top] => Ok((top, second)),
            _ => Err(CalcError::StackUnderflow),
        }
    }

    fn pop(&mut self) -> Result<Poly, CalcError> {
        self.stack.pop().ok_or(CalcError::StackUnderflow)
    }

    /// Pops the top two operands and pushes `op(top, second)`.
    fn binary(&mut self, op: fn(&Poly, &Poly) -> Poly) -> Result<Option<String>, CalcError> {
        let (top, second) = self.top_two()?;
        let result = op(top, second);
        self.stack.truncate(self.stack.len() - 2);
        self.stack.push(result);
        Ok(None)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
