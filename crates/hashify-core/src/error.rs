// crates/hashify-core/src/error.rs

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HashifyError>;

/// Which access to the target file was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOp {
    Read,
    Write,
}

impl fmt::Display for AccessOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessOp::Read => f.write_str("read"),
            AccessOp::Write => f.write_str("write"),
        }
    }
}

#[derive(Debug, Error)]
pub enum HashifyError {
    /// The path is missing, not a regular file, or cannot be opened for `op`.
    #[error("cannot {op} {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        op: AccessOp,
        #[source]
        source: io::Error,
    },

    /// The file was opened for writing but the rewrite did not complete.
    /// In-place mode may leave the file truncated.
    #[error("write to {} did not complete: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HashifyError {
    pub(crate) fn access(path: impl Into<PathBuf>, op: AccessOp, source: io::Error) -> Self {
        HashifyError::FileAccess {
            path: path.into(),
            op,
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HashifyError::Write {
            path: path.into(),
            source,
        }
    }
}
