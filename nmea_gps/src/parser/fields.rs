//! Zero-copy access to the comma-delimited fields of a framed sentence.
//!
//! Field 0 is the type token (`GPRMC`), field 1 is the first data field.
//! Scanning stops at the `*` checksum delimiter, so the checksum digits are
//! never reported as a field.

use core::ops::Range;

use crate::constants::{
    NMEA_CHECKSUM_DELIMITER, NMEA_END_CHAR_1, NMEA_END_CHAR_2, NMEA_FIELD_DELIMITER,
    NMEA_SYNC_CHAR,
};

/// Strict view of a single field, keeping "not there" apart from "there but empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    /// The sentence has fewer fields than the requested index
    Missing,
    /// Two consecutive delimiters
    Empty,
    Value(&'a [u8]),
}

impl<'a> Field<'a> {
    /// Collapses `Missing` and `Empty` into `None`.
    pub fn value(self) -> Option<&'a [u8]> {
        match self {
            Field::Value(v) => Some(v),
            Field::Missing | Field::Empty => None,
        }
    }
}

/// Iterator over the byte ranges of all fields, relative to the sentence start
#[derive(Debug, Clone)]
pub struct FieldSpans<'a> {
    sentence: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> FieldSpans<'a> {
    pub fn new(sentence: &'a [u8]) -> Self {
        let pos = usize::from(sentence.first() == Some(&NMEA_SYNC_CHAR));
        Self {
            sentence,
            pos,
            done: false,
        }
    }
}

impl Iterator for FieldSpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.pos;
        let mut end = start;
        while end < self.sentence.len() {
            match self.sentence[end] {
                NMEA_FIELD_DELIMITER => {
                    self.pos = end + 1;
                    return Some(start..end);
                },
                NMEA_CHECKSUM_DELIMITER | NMEA_END_CHAR_1 | NMEA_END_CHAR_2 => break,
                _ => end += 1,
            }
        }
        self.done = true;
        Some(start..end)
    }
}

/// Iterator over all fields of a sentence as (possibly empty) slices
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    spans: FieldSpans<'a>,
}

impl<'a> Fields<'a> {
    pub fn new(sentence: &'a [u8]) -> Self {
        Self {
            spans: FieldSpans::new(sentence),
        }
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let sentence = self.spans.sentence;
        let span = self.spans.next()?;
        Some(&sentence[span])
    }
}

/// Location (start offset and length, as a range) of the field at `index`.
/// Empty fields are reported as `None`.
pub fn field_span(sentence: &[u8], index: usize) -> Option<Range<usize>> {
    FieldSpans::new(sentence)
        .nth(index)
        .filter(|span| !span.is_empty())
}

/// The field at `index`, or `None` when it is absent or empty.
pub fn field(sentence: &[u8], index: usize) -> Option<&[u8]> {
    field_span(sentence, index).map(|span| &sentence[span])
}

/// The field at `index`, distinguishing an empty field from a missing one.
pub fn raw_field(sentence: &[u8], index: usize) -> Field<'_> {
    match FieldSpans::new(sentence).nth(index) {
        None => Field::Missing,
        Some(span) if span.is_empty() => Field::Empty,
        Some(span) => Field::Value(&sentence[span]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RMC: &[u8] = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

    #[test]
    fn test_type_token_is_field_zero() {
        assert_eq!(field(RMC, 0), Some(&b"GPRMC"[..]));
    }

    #[test]
    fn test_data_fields() {
        assert_eq!(field(RMC, 1), Some(&b"123519"[..]));
        assert_eq!(field(RMC, 2), Some(&b"A"[..]));
        assert_eq!(field(RMC, 9), Some(&b"230394"[..]));
    }

    #[test]
    fn test_last_field_stops_at_checksum() {
        assert_eq!(field(RMC, 11), Some(&b"W"[..]));
        assert_eq!(field(RMC, 12), None);
        assert_eq!(raw_field(RMC, 12), Field::Missing);
    }

    #[test]
    fn test_span_points_into_sentence() {
        let span = field_span(RMC, 1).unwrap();
        assert_eq!(span, 7..13);
        assert_eq!(&RMC[span], b"123519");
    }

    #[test]
    fn test_empty_field_is_absent() {
        let gga = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
        assert_eq!(field(gga, 13), None);
        assert_eq!(raw_field(gga, 13), Field::Empty);
        assert_eq!(raw_field(gga, 14), Field::Empty);
        assert_eq!(raw_field(gga, 15), Field::Missing);
    }

    #[test]
    fn test_without_checksum() {
        let s = b"$GPGGA,1,2";
        assert_eq!(field(s, 2), Some(&b"2"[..]));
        assert_eq!(field(s, 3), None);
    }

    #[test]
    fn test_trailing_line_ending_is_not_part_of_field() {
        let s = b"$GPGGA,1,2\r\n";
        assert_eq!(field(s, 2), Some(&b"2"[..]));
    }

    #[test]
    fn test_without_sync_char() {
        assert_eq!(field(b"GPRMC,1", 0), Some(&b"GPRMC"[..]));
        assert_eq!(field(b"GPRMC,1", 1), Some(&b"1"[..]));
    }

    #[test]
    fn test_empty_sentence() {
        assert_eq!(field(b"", 0), None);
        assert_eq!(raw_field(b"$", 0), Field::Empty);
        assert_eq!(raw_field(b"$", 1), Field::Missing);
    }

    #[test]
    fn test_fields_iterator() {
        let mut it = Fields::new(b"$GPGGA,,x*00");
        assert_eq!(it.next(), Some(&b"GPGGA"[..]));
        assert_eq!(it.next(), Some(&b""[..]));
        assert_eq!(it.next(), Some(&b"x"[..]));
        assert_eq!(it.next(), None);
        assert_eq!(Fields::new(RMC).count(), 12);
    }

    #[test]
    fn test_field_value() {
        assert_eq!(Field::Value(b"A").value(), Some(&b"A"[..]));
        assert_eq!(Field::Empty.value(), None);
        assert_eq!(Field::Missing.value(), None);
    }
}
