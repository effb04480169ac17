// crates/hashify-cli/src/main.rs

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use hashify_core::WriteMode;
use tracing::info;

mod logging;
mod session;

use crate::logging::{init_logging, LogConfig, LogFormat};
use crate::session::{ErrorPolicy, SessionConfig};

#[derive(Parser)]
#[command(name = "hashify")]
#[command(
    about = "Cut every line of a text file at its first comma (tab-led lines are kept)",
    long_about = None
)]
pub struct Cli {
    /// Files to hashify without prompting. Omit to enter paths interactively (STOP ends).
    pub paths: Vec<PathBuf>,

    /// Report a file that cannot be hashified and carry on instead of exiting
    #[arg(long)]
    pub keep_going: bool,

    /// Write through a temporary file renamed over the original
    #[arg(long, conflicts_with = "dry_run")]
    pub atomic: bool,

    /// Report line counts without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let write_mode = if self.dry_run {
            WriteMode::DryRun
        } else if self.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        };
        let policy = if self.keep_going {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Abort
        };
        SessionConfig { policy, write_mode }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_format(cli.log_format))?;

    let cfg = cli.session_config();
    let result = if cli.paths.is_empty() {
        session::run_interactive(&cfg, io::stdin().lock(), io::stdout().lock())
    } else {
        session::run_batch(&cfg, &cli.paths, io::stdout().lock())
    };

    // A fatal error is reported once, by the runtime, as `Error: ...`.
    let summary = result?;
    info!(
        files = summary.files,
        lines = summary.lines,
        failures = summary.failures,
        "session finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_and_in_place() {
        let cli = Cli::try_parse_from(["hashify"]).unwrap();
        let cfg = cli.session_config();
        assert_eq!(cfg.policy, ErrorPolicy::Abort);
        assert_eq!(cfg.write_mode, WriteMode::InPlace);
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn flags_map_onto_session_config() {
        let cli = Cli::try_parse_from(["hashify", "--keep-going", "--atomic", "-vv", "a.txt"]).unwrap();
        let cfg = cli.session_config();
        assert_eq!(cfg.policy, ErrorPolicy::Continue);
        assert_eq!(cfg.write_mode, WriteMode::Atomic);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.paths, vec![PathBuf::from("a.txt")]);
    }

    #[test]
    fn atomic_and_dry_run_conflict() {
        assert!(Cli::try_parse_from(["hashify", "--atomic", "--dry-run"]).is_err());
    }

    #[test]
    fn log_format_parses() {
        let cli = Cli::try_parse_from(["hashify", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
