#![no_main]

use bytes::Bytes;
use eolstrip::{Declined, Filtered, strip_crlf};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let out = strip_crlf(&data).unwrap();

    // Verify: declining only happens when there is nothing to strip
    if let Filtered::Declined(reason) = &out {
        let scan_end = data.len().saturating_sub(1);
        assert!(!data[..scan_end].contains(&b'\r'));
        if data.is_empty() {
            assert_eq!(*reason, Declined::Empty);
        }
    }

    let output = out.into_bytes_or(Bytes::copy_from_slice(&data));

    // Verify: exactly the CRs of CRLF pairs were dropped
    let pairs = data.windows(2).filter(|w| *w == b"\r\n").count();
    assert_eq!(data.len() - output.len(), pairs);

    // Verify: everything other than CR is kept in order
    let a: Vec<u8> = data.iter().copied().filter(|&b| b != b'\r').collect();
    let b: Vec<u8> = output.iter().copied().filter(|&b| b != b'\r').collect();
    assert_eq!(a, b);

    // Verify: the final byte is always preserved
    assert_eq!(data.last(), output.last());
});
