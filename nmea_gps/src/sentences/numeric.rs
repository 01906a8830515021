//! Lenient number conversion for NMEA field text.
//!
//! Every function here parses the longest valid prefix of its input and falls
//! back to zero when there is none, so `"12a"` reads as 12 and `"abc"` as 0.
//! Field text is clipped to [`MAX_FIELD_LEN`] bytes first.

use core::str::FromStr;

use num_traits::{float::FloatCore, FromPrimitive, PrimInt, Unsigned};

use crate::constants::MAX_FIELD_LEN;

pub(crate) fn clip(text: &[u8]) -> &[u8] {
    &text[..text.len().min(MAX_FIELD_LEN)]
}

/// Leading decimal digits as an unsigned integer, saturating at `T::max_value()`.
pub(crate) fn parse_uint<T>(text: &[u8]) -> T
where
    T: PrimInt + Unsigned + FromPrimitive,
{
    let ten = T::from_u8(10).unwrap_or_else(T::max_value);
    clip(text)
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(T::zero(), |acc, &b| {
            let digit = T::from_u8(b - b'0').unwrap_or_else(T::zero);
            acc.checked_mul(&ten)
                .and_then(|v| v.checked_add(&digit))
                .unwrap_or_else(T::max_value)
        })
}

/// Two-digit component at `offset`, as found in `HHMMSS` and `DDMMYY` fields.
pub(crate) fn two_digits(text: &[u8], offset: usize) -> u8 {
    text.get(offset..offset + 2).map_or(0, parse_uint::<u8>)
}

/// Length of the longest prefix of the form `[+-]?digits[.digits]`
fn decimal_prefix_len(text: &[u8]) -> usize {
    let mut len = usize::from(matches!(text.first(), Some(b'+' | b'-')));
    let digits = |from: usize| text[from..].iter().take_while(|b| b.is_ascii_digit()).count();
    len += digits(len);
    if text.get(len) == Some(&b'.') {
        len += 1 + digits(len + 1);
    }
    len
}

/// Leading signed decimal number, `0` when the text does not start with one.
pub(crate) fn parse_decimal<T>(text: &[u8]) -> T
where
    T: FloatCore + FromStr,
{
    let text = clip(text);
    let prefix = &text[..decimal_prefix_len(text)];
    core::str::from_utf8(prefix)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(T::zero)
}

/// Converts `[d]ddmm.mmmm` into signed decimal degrees.
///
/// `degree_digits` is 2 for latitude and 3 for longitude. Returns `None` when
/// the text is too short to hold the degrees and whole minutes.
pub(crate) fn parse_coordinate(text: &[u8], degree_digits: usize, negative: bool) -> Option<f64> {
    let text = clip(text);
    if text.len() < degree_digits + 2 {
        return None;
    }
    let degrees: u16 = parse_uint(&text[..degree_digits]);
    let minutes: f64 = parse_decimal(&text[degree_digits..]);
    let value = f64::from(degrees) + minutes / 60.0;
    Some(if negative { -value } else { value })
}
