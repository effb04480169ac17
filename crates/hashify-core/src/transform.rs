// crates/hashify-core/src/transform.rs

use crate::line::{classify, hashify_line, LineKind};
use crate::text_norm::{normalize_newlines, split_lines};

/// Counts gathered while hashifying one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    /// Every line read, modified or not. This is the number reported to users.
    pub lines: usize,
    pub truncated: usize,
    pub tab_leading: usize,
    pub passthrough: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
}

impl LineStats {
    fn record(&mut self, kind: LineKind) {
        self.lines += 1;
        match kind {
            LineKind::TabLeading => self.tab_leading += 1,
            LineKind::Truncated { .. } => self.truncated += 1,
            LineKind::Passthrough => self.passthrough += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashified {
    pub bytes: Vec<u8>,
    pub stats: LineStats,
}

/// Hashify a whole buffer: normalize newlines, then rewrite line by line,
/// preserving order. Never merges or drops lines.
pub fn hashify_bytes(input: &[u8]) -> Hashified {
    let normalized = normalize_newlines(input);

    let mut stats = LineStats {
        bytes_in: input.len(),
        ..LineStats::default()
    };
    let mut bytes = Vec::with_capacity(normalized.len());

    for line in split_lines(&normalized) {
        stats.record(classify(line));
        bytes.extend_from_slice(&hashify_line(line));
    }

    stats.bytes_out = bytes.len();
    Hashified { bytes, stats }
}
