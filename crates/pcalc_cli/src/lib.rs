//! Line-oriented stack calculator for sparse multivariate polynomials.
//!
//! [`interpreter`] holds the evaluation stack and executes one line at a
//! time without doing any I/O; [`session`] feeds it from a reader and writes
//! replies to stdout/stderr.

pub mod config;
pub mod interpreter;
pub mod session;

pub use config::{CalcConfig, LogLevel};
pub use interpreter::{CalcError, CalcMsg, Command, Interpreter, LineError};
pub use session::{run_session, SessionStats};
