//! Command-line grammar.
//!
//! A command line is a bare command name, or `DEG_BY`/`AT` followed by
//! exactly one space and a parameter that runs to the end of the line.

use std::str::FromStr;

use pcalc_parser::{parse_i64, parse_u64};

use super::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Zero,
    IsCoeff,
    IsZero,
    Clone,
    Add,
    Sub,
    Mul,
    Neg,
    IsEq,
    Deg,
    DegBy(u64),
    At(i64),
    Print,
    Pop,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Zero => "ZERO",
            Command::IsCoeff => "IS_COEFF",
            Command::IsZero => "IS_ZERO",
            Command::Clone => "CLONE",
            Command::Add => "ADD",
            Command::Sub => "SUB",
            Command::Mul => "MUL",
            Command::Neg => "NEG",
            Command::IsEq => "IS_EQ",
            Command::Deg => "DEG",
            Command::DegBy(_) => "DEG_BY",
            Command::At(_) => "AT",
            Command::Print => "PRINT",
            Command::Pop => "POP",
        }
    }

    /// Number of polynomials that must be on the stack.
    pub fn min_depth(&self) -> usize {
        match self {
            Command::Zero => 0,
            Command::Add | Command::Sub | Command::Mul | Command::IsEq => 2,
            _ => 1,
        }
    }
}

impl FromStr for Command {
    type Err = CalcError;

    /// Parses one command line; a trailing `\n` is ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let command = match line {
            "ZERO" => Command::Zero,
            "IS_COEFF" => Command::IsCoeff,
            "IS_ZERO" => Command::IsZero,
            "CLONE" => Command::Clone,
            "ADD" => Command::Add,
            "SUB" => Command::Sub,
            "MUL" => Command::Mul,
            "NEG" => Command::Neg,
            "IS_EQ" => Command::IsEq,
            "DEG" => Command::Deg,
            "PRINT" => Command::Print,
            "POP" => Command::Pop,
            "DEG_BY" => return Err(CalcError::DegByWrongVariable),
            "AT" => return Err(CalcError::AtWrongValue),
            _ => match line.split_once(' ') {
                Some(("DEG_BY", arg)) => {
                    Command::DegBy(parse_u64(arg).ok_or(CalcError::DegByWrongVariable)?)
                }
                Some(("AT", arg)) => Command::At(parse_i64(arg).ok_or(CalcError::AtWrongValue)?),
                _ => return Err(CalcError::WrongCommand),
            },
        };
        Ok(command)
    }
}
