// crates/hashify-cli/src/session.rs
//
// Prompt loop and batch runner. Both share the per-file report and the
// error policy; neither touches stdin/stdout directly so tests can drive
// them with in-memory buffers.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use hashify_core::{hashify_file, LineStats, WriteMode};
use tracing::{debug, info, warn};

pub const PROMPT: &str = "\nEnter filepath to hashify: ";
pub const SENTINEL: &str = "STOP";
pub const SUCCESS: &str = "Files successfully hashified!";
pub const COUNT_LABEL: &str = "Hashes in file: ";
pub const DRY_RUN_NOTE: &str = "Dry run: file left unchanged.";
pub const FAREWELL: &str = "Have a nice day! :D";

/// What to do when a file cannot be hashified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// End the session with the error; no farewell.
    #[default]
    Abort,
    /// Report the failure and move on to the next path.
    Continue,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    pub policy: ErrorPolicy,
    pub write_mode: WriteMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub files: usize,
    pub lines: usize,
    pub failures: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Path(String),
    Stop,
    Closed,
}

/// Read one answer. Only the line terminator is stripped; the sentinel
/// must match exactly.
pub fn read_input<R: BufRead>(input: &mut R) -> Result<Input> {
    let mut buf = String::new();
    let n = input
        .read_line(&mut buf)
        .context("read file path from input")?;
    if n == 0 {
        return Ok(Input::Closed);
    }

    let answer = buf
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&buf);

    if answer == SENTINEL {
        Ok(Input::Stop)
    } else {
        Ok(Input::Path(answer.to_string()))
    }
}

pub fn run_interactive<R: BufRead, W: Write>(
    cfg: &SessionConfig,
    mut input: R,
    mut out: W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        match read_input(&mut input)? {
            Input::Stop => break,
            Input::Closed => bail!("input closed before {SENTINEL}"),
            Input::Path(path) => process_one(cfg, Path::new(&path), &mut out, &mut summary)?,
        }
    }

    writeln!(out, "{FAREWELL}")?;
    out.flush()?;
    Ok(summary)
}

pub fn run_batch<P: AsRef<Path>, W: Write>(
    cfg: &SessionConfig,
    paths: &[P],
    mut out: W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    for path in paths {
        process_one(cfg, path.as_ref(), &mut out, &mut summary)?;
    }
    writeln!(out, "{FAREWELL}")?;
    out.flush()?;
    Ok(summary)
}

fn process_one<W: Write>(
    cfg: &SessionConfig,
    path: &Path,
    out: &mut W,
    summary: &mut SessionSummary,
) -> Result<()> {
    debug!(path = %path.display(), mode = %cfg.write_mode, "hashify");

    match hashify_file(path, cfg.write_mode) {
        Ok(stats) => {
            report_success(out, &stats, cfg.write_mode)?;
            summary.files += 1;
            summary.lines += stats.lines;
            info!(
                path = %path.display(),
                lines = stats.lines,
                truncated = stats.truncated,
                tab_leading = stats.tab_leading,
                "hashified"
            );
            Ok(())
        }
        Err(e) => match cfg.policy {
            ErrorPolicy::Abort => Err(e.into()),
            ErrorPolicy::Continue => {
                warn!(path = %path.display(), error = %e, "skipping file");
                writeln!(out, "Could not hashify {}: {e}", path.display())?;
                summary.failures += 1;
                Ok(())
            }
        },
    }
}

fn report_success<W: Write>(out: &mut W, stats: &LineStats, mode: WriteMode) -> Result<()> {
    writeln!(out, "{SUCCESS}")?;
    writeln!(out, "{COUNT_LABEL}{}", stats.lines)?;
    if mode == WriteMode::DryRun {
        writeln!(out, "{DRY_RUN_NOTE}")?;
    }
    Ok(())
}
