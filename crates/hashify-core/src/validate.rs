// crates/hashify-core/src/validate.rs

use std::fs::{self, Metadata, OpenOptions};
use std::io;
use std::path::Path;

use crate::error::{AccessOp, HashifyError, Result};

/// Pre-flight check that `path` names an existing regular file.
///
/// With `need_write`, the file is opened for writing (without truncating)
/// so the OS decides; a refusal surfaces before any rewrite starts.
pub fn check_target(path: &Path, need_write: bool) -> Result<Metadata> {
    let meta = fs::metadata(path).map_err(|e| HashifyError::access(path, AccessOp::Read, e))?;

    if !meta.is_file() {
        return Err(HashifyError::access(
            path,
            AccessOp::Read,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    if need_write {
        OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| HashifyError::access(path, AccessOp::Write, e))?;
    }

    Ok(meta)
}
