use thiserror::Error;

/// Why a polynomial literal was rejected. Positions are byte offsets into
/// the line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected character {ch:?} at {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("malformed number at {pos}")]
    InvalidNumber { pos: usize },
    #[error("number out of range at {pos}")]
    NumberOutOfRange { pos: usize },
    #[error("exponent {value} out of range at {pos}")]
    ExponentOutOfRange { value: i64, pos: usize },
    #[error("{reason} at {pos}")]
    Malformed { reason: &'static str, pos: usize },
    #[error("nesting deeper than {limit} at {pos}")]
    TooDeep { limit: usize, pos: usize },
    #[error("empty input")]
    Empty,
}

impl ParseError {
    pub fn pos(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedChar { pos, .. }
            | ParseError::InvalidNumber { pos }
            | ParseError::NumberOutOfRange { pos }
            | ParseError::ExponentOutOfRange { pos, .. }
            | ParseError::Malformed { pos, .. }
            | ParseError::TooDeep { pos, .. } => Some(*pos),
            ParseError::Empty => None,
        }
    }
}
