// crates/hashify-core/src/lib.rs

pub mod error;
pub mod validate;

pub mod file;
pub mod line;
pub mod text_norm;
pub mod transform;

pub use crate::error::{AccessOp, HashifyError, Result};
pub use crate::file::{hashify_file, WriteMode};
pub use crate::line::{classify, hashify_line, LineKind};
pub use crate::transform::{hashify_bytes, Hashified, LineStats};
