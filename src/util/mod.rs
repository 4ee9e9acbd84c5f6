//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use crate::error::FilterError;

/// Allocates an empty buffer able to hold `capacity` bytes, reporting
/// allocation failure instead of aborting.
pub(crate) fn try_buffer(capacity: usize) -> Result<Vec<u8>, FilterError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| FilterError::OutOfMemory {
            requested: capacity,
        })?;
    Ok(buf)
}
