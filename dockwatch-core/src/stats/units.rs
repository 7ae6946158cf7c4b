//! Decoding of human-readable metric tokens
//!
//! `docker stats` prints byte counts with mixed binary and decimal
//! suffixes ("10MiB", "1.2kB") and percentages with a trailing `%`.
//! Decoding yields the canonical magnitude used for all comparisons.

/// Byte-size suffixes and their factors, longest first.
///
/// Iteration order matters: every multi-character suffix must be tried
/// before the bare `B` that is also a substring match, and the empty
/// suffix (factor 1) catches plain numbers last.
pub const BYTE_UNITS: [(&str, u64); 8] = [
    ("KiB", 1024),
    ("MiB", 1024 * 1024),
    ("GiB", 1024 * 1024 * 1024),
    ("kB", 1000),
    ("MB", 1000 * 1000),
    ("GB", 1000 * 1000 * 1000),
    ("B", 1),
    ("", 1),
];

/// Decodes a byte-size token ("10MiB", "1.2kB", "0B", "512") into bytes.
///
/// The first matching suffix in [`BYTE_UNITS`] wins; the numeric prefix
/// is parsed as a decimal and multiplied by the unit factor, truncating
/// to a whole byte count. Returns `None` when the prefix is not a number.
#[must_use]
pub fn decode_byte_size(token: &str) -> Option<u64> {
    let token = token.trim();
    for (suffix, factor) in BYTE_UNITS {
        if let Some(prefix) = token.strip_suffix(suffix) {
            let value: f64 = prefix.trim().parse().ok()?;
            return Some((value * factor as f64) as u64);
        }
    }
    // The empty suffix always matches
    None
}

/// Decodes a percentage token ("12.5%") into its numeric value.
///
/// Returns `None` when the trailing `%` is missing or the remainder is
/// not a number.
#[must_use]
pub fn decode_percent(token: &str) -> Option<f64> {
    token.trim().strip_suffix('%')?.trim().parse().ok()
}
