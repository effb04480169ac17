// crates/hashify-core/src/text_norm.rs
//
// Byte-level newline normalization, matching text-mode reads.
//
// Rules:
// - Convert CRLF and CR to LF.
// - Leave all other bytes unchanged.

use std::borrow::Cow;

pub fn normalize_newlines(input: &[u8]) -> Cow<'_, [u8]> {
    if !input.contains(&b'\r') {
        return Cow::Borrowed(input);
    }

    let mut out = Vec::with_capacity(input.len());
    let mut i = 0usize;
    while i < input.len() {
        let b = input[i];
        if b == b'\r' {
            out.push(b'\n');
            // CRLF collapses into a single LF
            if input.get(i + 1) == Some(&b'\n') {
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        out.push(b);
        i += 1;
    }
    Cow::Owned(out)
}

/// Split into lines, each keeping its `\n` terminator. A trailing segment
/// without a terminator is still a line; an empty buffer has no lines.
pub fn split_lines(input: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    input.split_inclusive(|&b| b == b'\n')
}
