//! pcalc_cli: reads a polynomial calculator script from stdin.
//!
//! Query results go to stdout, `ERROR <line> <kind>` reports to stderr.
//! Per-line errors never change the exit status.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pcalc_cli::{run_session, CalcConfig, Interpreter, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "pcalc_cli", version, about = "Stack calculator for sparse multivariate polynomials")]
struct Cli {
    /// TOML config file with `log_level` and `max_nesting`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Diagnostic verbosity on stderr (overrides the config file)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Deepest parenthesis nesting accepted in a literal (overrides the config file)
    #[arg(long)]
    max_nesting: Option<usize>,
}

impl Cli {
    fn resolve_config(&self) -> Result<CalcConfig> {
        let mut config = match &self.config {
            Some(path) => CalcConfig::load(path)?,
            None => CalcConfig::default(),
        };
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(max_nesting) = self.max_nesting {
            config.max_nesting = max_nesting;
        }
        Ok(config)
    }
}

fn init_logging(level: LogLevel) {
    if level == LogLevel::Off {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level.to_level_filter())
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_logging(config.log_level);
    tracing::debug!(?config, "starting");

    let mut interp = Interpreter::with_options(config.parse_options());
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &mut interp,
        stdin.lock(),
        BufWriter::new(stdout.lock()),
        io::stderr().lock(),
    )?;
    Ok(())
}
