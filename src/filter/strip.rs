//! CRLF to LF rewrite.
//!
//! The scan covers `[0, len - 1)`: a carriage return is only dropped when
//! the byte after it is a line feed, and the final byte of the buffer has
//! no successor, so it is always copied verbatim. A CRLF pair ending the
//! buffer is still collapsed because its `\r` sits at `len - 2`.

use bytes::Bytes;

use super::{Declined, Filtered};
use crate::error::FilterError;
use crate::util::try_buffer;

/// Collapses every `\r\n` pair in `source` to `\n`.
///
/// Lone carriage returns are preserved. Declines with [`Declined::Clean`]
/// when no carriage return precedes the final byte, since the result would
/// be byte-identical to the input, and with [`Declined::Empty`] on empty
/// input.
///
/// # Errors
///
/// Returns [`FilterError::OutOfMemory`] if the destination buffer cannot be
/// allocated.
///
/// # Example
///
/// ```
/// use eolstrip::{Filtered, strip_crlf};
///
/// let out = strip_crlf(b"one\r\ntwo\r\n")?;
/// assert_eq!(out, Filtered::Converted(bytes::Bytes::from_static(b"one\ntwo\n")));
/// # Ok::<(), eolstrip::FilterError>(())
/// ```
pub fn strip_crlf(source: &[u8]) -> Result<Filtered, FilterError> {
    let Some(last) = source.len().checked_sub(1) else {
        return Ok(Declined::Empty.into());
    };
    let body = &source[..last];

    let Some(first_cr) = find_cr(body) else {
        return Ok(Declined::Clean.into());
    };

    let mut dest = try_buffer(source.len())?;
    dest.extend_from_slice(&body[..first_cr]);

    let mut i = first_cr;
    while i < last {
        let run = find_cr(&body[i..]).unwrap_or(last - i);
        dest.extend_from_slice(&body[i..i + run]);
        i += run;
        if i == last {
            break;
        }

        // body[i] is '\r' and i < last, so source[i + 1] exists
        if source[i + 1] != b'\n' {
            dest.push(b'\r');
        }
        i += 1;
    }

    dest.push(source[last]);

    tracing::trace!(
        input = source.len(),
        output = dest.len(),
        dropped = source.len() - dest.len(),
        "stripped carriage returns"
    );
    Ok(Filtered::Converted(Bytes::from(dest)))
}

fn find_cr(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\r')
}
