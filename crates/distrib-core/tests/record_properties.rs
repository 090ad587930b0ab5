//! Property-based tests for the record parser.
//!
//! 1. Well-formed text round-trips to the same pairs in the same order.
//! 2. Comment and blank lines never show up in the output.
//! 3. A single bad line fails the parse and is reported by line number.

use distrib_core::record::{Record, parse_records};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn records(max_len: usize) -> impl Strategy<Value = Vec<(String, u32)>> {
    proptest::collection::vec(("[a-z][a-z0-9_]{0,11}", 0u32..=100_000), 0..=max_len)
}

fn render(pairs: &[(String, u32)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name} {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn expected(pairs: &[(String, u32)]) -> Vec<Record> {
    pairs
        .iter()
        .map(|(name, value)| Record::new(name.clone(), f64::from(*value)))
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn well_formed_text_round_trips(pairs in records(200)) {
        let parsed = parse_records(&render(&pairs)).unwrap();
        prop_assert_eq!(parsed, expected(&pairs));
    }

    #[test]
    fn comments_and_blanks_are_invisible(
        pairs in records(50),
        noise in proptest::collection::vec((0usize..60, prop_oneof![Just(""), Just("# note"), Just("#x 1")]), 0..20),
    ) {
        let mut lines: Vec<String> = pairs.iter().map(|(n, v)| format!("{n} {v}")).collect();
        for (pos, filler) in noise {
            let at = pos.min(lines.len());
            lines.insert(at, filler.to_string());
        }

        let parsed = parse_records(&lines.join("\n")).unwrap();
        prop_assert_eq!(parsed, expected(&pairs));
    }

    #[test]
    fn bad_line_is_reported_by_number(pairs in records(30), at in 0usize..31, bad in "[a-z]{1,8}") {
        let mut lines: Vec<String> = pairs.iter().map(|(n, v)| format!("{n} {v}")).collect();
        let at = at.min(lines.len());
        lines.insert(at, bad.clone());

        let err = parse_records(&lines.join("\n")).unwrap_err();
        prop_assert_eq!(err.line, at + 1);
        prop_assert_eq!(err.content, bad);
    }
}
