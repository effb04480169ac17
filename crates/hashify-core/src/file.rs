// crates/hashify-core/src/file.rs
//
// Read-all / rewrite-all for one file. Every handle is scoped to its phase:
// the read handle is dropped before the write handle is opened.

use std::fmt;
use std::fs::{self, File, Metadata};
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{AccessOp, HashifyError, Result};
use crate::transform::{hashify_bytes, LineStats};
use crate::validate::check_target;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and rewrite the original path. A failed write can leave the
    /// file truncated; there is no backup.
    #[default]
    InPlace,
    /// Write a sibling temp file, then rename it over the original.
    Atomic,
    /// Transform and report only.
    DryRun,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::InPlace => f.write_str("in-place"),
            WriteMode::Atomic => f.write_str("atomic"),
            WriteMode::DryRun => f.write_str("dry-run"),
        }
    }
}

/// Hashify the file at `path` and return its line statistics.
/// `stats.lines` counts every line read, modified or not.
pub fn hashify_file(path: &Path, mode: WriteMode) -> Result<LineStats> {
    let meta = check_target(path, mode != WriteMode::DryRun)?;
    let input = read_all(path)?;
    let out = hashify_bytes(&input);
    drop(input);

    debug!(
        path = %path.display(),
        %mode,
        lines = out.stats.lines,
        truncated = out.stats.truncated,
        "transformed"
    );

    match mode {
        WriteMode::InPlace => write_in_place(path, &out.bytes)?,
        WriteMode::Atomic => write_atomic(path, &meta, &out.bytes)?,
        WriteMode::DryRun => {}
    }

    Ok(out.stats)
}

fn read_all(path: &Path) -> Result<Vec<u8>> {
    let mut f = File::open(path).map_err(|e| HashifyError::access(path, AccessOp::Read, e))?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)
        .map_err(|e| HashifyError::access(path, AccessOp::Read, e))?;
    Ok(buf)
}

fn write_in_place(path: &Path, bytes: &[u8]) -> Result<()> {
    // Truncates immediately; from here on a failure loses the original content.
    let mut f = File::create(path).map_err(|e| HashifyError::access(path, AccessOp::Write, e))?;
    write_body(path, &mut f, bytes)
}

fn write_atomic(path: &Path, meta: &Metadata, bytes: &[u8]) -> Result<()> {
    // Rename replaces a symlink itself; write next to the file it points at.
    let target =
        fs::canonicalize(path).map_err(|e| HashifyError::access(path, AccessOp::Write, e))?;
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| HashifyError::access(path, AccessOp::Write, e))?;
    write_body(path, &mut tmp, bytes)?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| HashifyError::write(path, e))?;
    fs::set_permissions(tmp.path(), meta.permissions())
        .map_err(|e| HashifyError::write(path, e))?;

    debug!(tmp = %tmp.path().display(), target = %target.display(), "renaming over original");
    tmp.persist(&target)
        .map_err(|e| HashifyError::write(path, e.error))?;
    Ok(())
}

fn write_body<W: Write>(path: &Path, sink: &mut W, bytes: &[u8]) -> Result<()> {
    sink.write_all(bytes).map_err(|e| HashifyError::write(path, e))?;
    sink.flush().map_err(|e| HashifyError::write(path, e))
}
