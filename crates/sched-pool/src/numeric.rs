//! Permissive leading-integer parsing.
//!
//! Pool documents carry numbers as text and the scheduler has always read
//! them the way C's `atoi`/`atol` do: leading whitespace and one sign are
//! accepted, digits are consumed up to the first non-digit, and text with no
//! leading digits reads as zero. Nothing here ever reports an error.
//!
//! Out-of-range values saturate at the `i64` bounds (as `strtol` does) and
//! narrower results are obtained by truncating casts.

/// Whitespace as classified by C's `isspace` in the "C" locale.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Parse the leading decimal integer of `text` as an `i64`.
///
/// # Examples
///
/// ```
/// use sched_pool::parse_leading_long;
///
/// assert_eq!(parse_leading_long("  -12kb"), -12);
/// assert_eq!(parse_leading_long("abc"), 0);
/// ```
pub fn parse_leading_long(text: &str) -> i64 {
    let bytes = text.as_bytes();
    let mut pos = bytes.iter().take_while(|b| is_c_space(**b)).count();

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut magnitude: u64 = 0;
    let mut overflowed = false;
    for b in bytes[pos..].iter().take_while(|b| b.is_ascii_digit()) {
        if overflowed {
            continue;
        }
        match magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(b - b'0')))
        {
            Some(m) => magnitude = m,
            None => overflowed = true,
        }
    }

    if negative {
        if overflowed || magnitude > i64::MIN.unsigned_abs() {
            i64::MIN
        } else {
            (magnitude as i64).wrapping_neg()
        }
    } else if overflowed || magnitude > i64::MAX as u64 {
        i64::MAX
    } else {
        magnitude as i64
    }
}

/// Parse the leading decimal integer of `text` as an `i32`.
///
/// The 64-bit result of [`parse_leading_long`] is truncated to 32 bits.
pub fn parse_leading_int(text: &str) -> i32 {
    parse_leading_long(text) as i32
}

/// Narrow a parsed value to `u32`, keeping the low 32 bits.
///
/// `4294967296` becomes `0` and `-1` becomes `u32::MAX`.
pub fn truncate_to_u32(value: i64) -> u32 {
    value as u32
}
