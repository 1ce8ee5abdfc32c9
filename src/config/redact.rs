//! Display-safe rendering of secrets.

use super::defaults::{REDACT_MASK, REDACT_VISIBLE};

/// Masks a secret, leaving only its last four characters visible.
///
/// Secrets of four characters or fewer become exactly `****`, so very short
/// keys do not reveal their length. Longer secrets keep their length.
///
/// Lengths are counted in characters, not bytes.
#[must_use]
pub fn redact(value: &str) -> String {
    let len = value.chars().count();
    if len <= REDACT_VISIBLE {
        return REDACT_MASK.to_string().repeat(REDACT_VISIBLE);
    }

    let hidden = len - REDACT_VISIBLE;
    std::iter::repeat_n(REDACT_MASK, hidden)
        .chain(value.chars().skip(hidden))
        .collect()
}
