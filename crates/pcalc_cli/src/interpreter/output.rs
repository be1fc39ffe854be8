//! What a line produces, kept separate from where it gets written.

use super::error::LineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcMsg {
    /// Query result, goes to stdout.
    Output(String),
    /// Rejected line, goes to stderr.
    Error(LineError),
}

impl CalcMsg {
    pub fn output(s: impl Into<String>) -> Self {
        CalcMsg::Output(s.into())
    }
}
