/// Version and error-level selection
use crate::encoder::tables::{HEADER_OVERHEAD, capacity, max_capacity};
use crate::error::EncodeError;
use crate::models::{ECLevel, Version};

/// Pick the smallest version, and within it the strongest level, whose capacity
/// holds `payload_len` bytes plus the header overhead.
pub fn select_version(payload_len: usize) -> Result<(Version, ECLevel), EncodeError> {
    let required = payload_len + HEADER_OVERHEAD;

    for version in Version::all() {
        for level in ECLevel::STRONGEST_FIRST {
            if capacity(version, level) >= required {
                return Ok((version, level));
            }
        }
    }

    Err(EncodeError::PayloadTooLong {
        len: payload_len,
        max: max_payload_len(),
    })
}

/// Longest payload any version accepts
pub fn max_payload_len() -> usize {
    max_capacity() - HEADER_OVERHEAD
}
