use hashify_core::hashify_bytes;
use proptest::prelude::*;

fn build_input(lines: &[String], trailing_newline: bool) -> Vec<u8> {
    let mut out = lines.join("\n").into_bytes();
    if trailing_newline && !lines.is_empty() {
        out.push(b'\n');
    }
    out
}

proptest! {
    #[test]
    fn each_line_follows_the_rule(
        lines in prop::collection::vec("[ab, \t]{0,8}", 0..24),
        trailing_newline in any::<bool>(),
    ) {
        let input = build_input(&lines, trailing_newline);
        let out = hashify_bytes(&input);

        let before: Vec<&[u8]> = input.split_inclusive(|&b| b == b'\n').collect();
        let after: Vec<&[u8]> = out.bytes.split_inclusive(|&b| b == b'\n').collect();

        prop_assert_eq!(out.stats.lines, before.len());
        prop_assert_eq!(after.len(), before.len());
        prop_assert_eq!(
            out.stats.lines,
            out.stats.truncated + out.stats.tab_leading + out.stats.passthrough
        );

        for (src, dst) in before.iter().zip(after.iter()) {
            if src.first() == Some(&b'\t') {
                prop_assert_eq!(dst, src);
            } else if let Some(i) = src.iter().position(|&b| b == b',') {
                let mut expected = src[..i].to_vec();
                expected.push(b'\n');
                prop_assert_eq!(dst.to_vec(), expected);
            } else {
                prop_assert_eq!(dst, src);
            }
        }
    }

    #[test]
    fn no_untabbed_line_keeps_a_comma(lines in prop::collection::vec("[xy,\t]{0,6}", 0..16)) {
        let input = build_input(&lines, true);
        let out = hashify_bytes(&input);

        for line in out.bytes.split_inclusive(|&b| b == b'\n') {
            if line.first() != Some(&b'\t') {
                prop_assert!(!line.contains(&b','));
            }
        }
    }
}
