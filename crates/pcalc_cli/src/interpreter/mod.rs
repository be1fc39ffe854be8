pub mod command;
pub mod core;
pub mod error;
pub mod output;


pub use self::command::Command;
pub use self::core::Interpreter;
pub use self::error::{CalcError, LineError};
pub use self::output::CalcMsg;
