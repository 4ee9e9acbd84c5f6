// Property tests for strip_crlf and the to-odb filter

use bytes::Bytes;
use eolstrip::{
    CrlfFilter, Declined, EolPreference, Filter, Filtered, LineEndingAction, ResolvedAttrs,
    TextStats, strip_crlf,
};
use proptest::prelude::*;

/// Straightforward model: drop every CR whose successor is LF.
fn model(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .enumerate()
        .filter(|&(i, &b)| !(b == b'\r' && input.get(i + 1) == Some(&b'\n')))
        .map(|(_, &b)| b)
        .collect()
}

/// Bytes biased towards line ending characters.
fn eol_heavy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(b'\r'),
            3 => Just(b'\n'),
            1 => Just(0u8),
            4 => any::<u8>(),
        ],
        0..256,
    )
}

/// Text built from whole line endings, with lone CRs never followed by
/// another CR or LF.
fn crlf_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            Just(&b"\r\n"[..]),
            Just(&b"\n"[..]),
            Just(&b"\ra"[..]),
            Just(&b"line"[..]),
            Just(&b"\t"[..]),
        ],
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

fn output_or_input(input: &[u8]) -> Vec<u8> {
    strip_crlf(input)
        .unwrap()
        .into_bytes_or(Bytes::copy_from_slice(input))
        .to_vec()
}

proptest! {
    #[test]
    fn matches_model(input in eol_heavy()) {
        prop_assert_eq!(output_or_input(&input), model(&input));
    }

    #[test]
    fn declines_without_cr_before_last_byte(
        mut input in prop::collection::vec(any::<u8>().prop_filter("no CR", |b| *b != b'\r'), 1..128),
        last in any::<u8>(),
    ) {
        input.push(last);
        prop_assert_eq!(strip_crlf(&input).unwrap(), Filtered::Declined(Declined::Clean));
    }

    #[test]
    fn single_byte_declines(b in any::<u8>()) {
        prop_assert_eq!(strip_crlf(&[b]).unwrap(), Filtered::Declined(Declined::Clean));
    }

    #[test]
    fn idempotent(input in crlf_text()) {
        let once = output_or_input(&input);
        prop_assert_eq!(output_or_input(&once), once);
    }

    #[test]
    fn only_crs_before_lf_are_dropped(input in eol_heavy()) {
        let output = output_or_input(&input);
        let stats_in = TextStats::gather(&input);
        let stats_out = TextStats::gather(&output);

        prop_assert_eq!(input.len() - output.len(), stats_in.crlf as usize);
        prop_assert_eq!(stats_out.lf, stats_in.lf);

        let non_cr_in: Vec<u8> = input.iter().copied().filter(|&b| b != b'\r').collect();
        let non_cr_out: Vec<u8> = output.iter().copied().filter(|&b| b != b'\r').collect();
        prop_assert_eq!(non_cr_in, non_cr_out);
    }

    #[test]
    fn heuristic_actions_never_convert_unsafe_content(input in eol_heavy()) {
        let stats = TextStats::gather(&input);
        let filter = CrlfFilter::new(ResolvedAttrs::new(LineEndingAction::Auto, EolPreference::Unset));
        let out = filter.apply(&input).unwrap();

        if stats.cr != stats.crlf || stats.is_binary() {
            prop_assert!(!out.is_converted());
        }
    }

    #[test]
    fn forced_actions_match_model(input in eol_heavy()) {
        for action in [LineEndingAction::Text, LineEndingAction::Input, LineEndingAction::Crlf] {
            let filter = CrlfFilter::new(ResolvedAttrs::new(action, EolPreference::Unset));
            let out = filter
                .apply(&input)
                .unwrap()
                .into_bytes_or(Bytes::copy_from_slice(&input));
            prop_assert_eq!(out.to_vec(), model(&input));
        }
    }
}
