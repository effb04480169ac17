// crates/hashify-core/src/line.rs
//
// Per-line hashify rule. Lines are raw bytes including their `\n`
// terminator, if any. Tab and comma are ASCII, so byte offsets are safe
// for UTF-8 and any other ASCII-compatible encoding.

use std::borrow::Cow;

pub const TAB: u8 = b'\t';
pub const COMMA: u8 = b',';
pub const NEWLINE: u8 = b'\n';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with a tab; never modified.
    TabLeading,
    /// No leading tab; cut at the first comma found at byte offset `comma`.
    Truncated { comma: usize },
    /// No leading tab and no comma; kept as-is.
    Passthrough,
}

pub fn classify(line: &[u8]) -> LineKind {
    if line.first() == Some(&TAB) {
        return LineKind::TabLeading;
    }
    match line.iter().position(|&b| b == COMMA) {
        Some(comma) => LineKind::Truncated { comma },
        None => LineKind::Passthrough,
    }
}

/// Apply the hashify rule to one line.
///
/// A truncated line always ends in `\n`, even when the original was the
/// unterminated last line of a file.
pub fn hashify_line(line: &[u8]) -> Cow<'_, [u8]> {
    match classify(line) {
        LineKind::TabLeading | LineKind::Passthrough => Cow::Borrowed(line),
        LineKind::Truncated { comma } => {
            let mut out = Vec::with_capacity(comma + 1);
            out.extend_from_slice(&line[..comma]);
            out.push(NEWLINE);
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_leading_wins_over_comma() {
        assert_eq!(classify(b"\tbanana,yellow\n"), LineKind::TabLeading);
        assert_eq!(&*hashify_line(b"\tbanana,yellow\n"), b"\tbanana,yellow\n");
    }

    #[test]
    fn first_comma_only() {
        assert_eq!(classify(b"a,b,c\n"), LineKind::Truncated { comma: 1 });
        assert_eq!(&*hashify_line(b"a,b,c\n"), b"a\n");
    }

    #[test]
    fn leading_comma_leaves_bare_newline() {
        assert_eq!(&*hashify_line(b",x\n"), b"\n");
    }

    #[test]
    fn no_comma_is_borrowed() {
        let out = hashify_line(b"cherry\n");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(classify(b"cherry\n"), LineKind::Passthrough);
    }

    #[test]
    fn unterminated_truncated_line_gains_newline() {
        assert_eq!(&*hashify_line(b"last,line"), b"last\n");
    }

    #[test]
    fn unterminated_passthrough_stays_unterminated() {
        assert_eq!(&*hashify_line(b"last"), b"last");
    }

    #[test]
    fn tab_after_first_byte_does_not_exempt() {
        assert_eq!(&*hashify_line(b" \tx,y\n"), b" \tx\n");
    }

    #[test]
    fn non_ascii_bytes_before_comma_survive() {
        let line = "caf\u{e9},cr\u{e8}me\n".as_bytes();
        assert_eq!(&*hashify_line(line), "caf\u{e9}\n".as_bytes());
    }
}
