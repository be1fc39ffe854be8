//! Drives an [`Interpreter`] over a byte stream.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::interpreter::{CalcMsg, Interpreter};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines read, including comments and blank lines.
    pub lines: usize,
    /// Lines that produced an `ERROR` report.
    pub errors: usize,
}

/// Reads `input` to EOF, one line at a time, and writes query results to
/// `out` and error reports to `err`.
///
/// Lines are raw bytes; the last line does not need a terminating `\n`.
/// Only I/O failures abort the session.
pub fn run_session<R, W, E>(
    interp: &mut Interpreter,
    mut input: R,
    mut out: W,
    mut err: E,
) -> io::Result<SessionStats>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut stats = SessionStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        stats.lines += 1;

        match interp.execute_line(stats.lines, &line) {
            Some(CalcMsg::Output(text)) => writeln!(out, "{}", text)?,
            Some(CalcMsg::Error(e)) => {
                stats.errors += 1;
                writeln!(err, "{}", e)?;
            }
            None => {}
        }
    }

    out.flush()?;
    err.flush()?;
    info!(
        lines = stats.lines,
        errors = stats.errors,
        depth = interp.depth(),
        "session finished"
    );
    Ok(stats)
}
