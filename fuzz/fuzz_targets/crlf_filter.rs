#![no_main]

use eolstrip::{
    CrlfFilter, EolPreference, Filter, LineEndingAction, ResolvedAttrs, TextStats, strip_crlf,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let stats = TextStats::gather(&data);

    for action in [
        LineEndingAction::Guess,
        LineEndingAction::Auto,
        LineEndingAction::Text,
        LineEndingAction::Input,
        LineEndingAction::Crlf,
    ] {
        let filter = CrlfFilter::new(ResolvedAttrs::new(action, EolPreference::Unset));
        let out = filter.apply(&data).unwrap();

        // Verify: heuristic actions never touch bare-CR or binary content
        if action.is_heuristic() && (stats.cr != stats.crlf || stats.is_binary()) {
            assert!(!out.is_converted());
        }

        // Verify: conversions agree with the raw rewrite
        if out.is_converted() {
            assert_eq!(out, strip_crlf(&data).unwrap());
        }
    }
});
