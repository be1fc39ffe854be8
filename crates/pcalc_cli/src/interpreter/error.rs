use pcalc_parser::ParseError;
use thiserror::Error;

/// Per-line failure. `Display` is the exact tag written after
/// `ERROR <line>`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("WRONG POLY")]
    WrongPoly,
    #[error("WRONG COMMAND")]
    WrongCommand,
    #[error("STACK UNDERFLOW")]
    StackUnderflow,
    #[error("DEG BY WRONG VARIABLE")]
    DegByWrongVariable,
    #[error("AT WRONG VALUE")]
    AtWrongValue,
}

impl From<ParseError> for CalcError {
    fn from(_: ParseError) -> Self {
        CalcError::WrongPoly
    }
}

/// A [`CalcError`] tied to its 1-based input line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ERROR {line} {kind}")]
pub struct LineError {
    pub line: usize,
    pub kind: CalcError,
}
