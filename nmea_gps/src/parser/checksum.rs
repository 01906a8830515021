use crate::{
    constants::{NMEA_CHECKSUM_DELIMITER, NMEA_CHECKSUM_DIGITS, NMEA_SYNC_CHAR},
    ParserError,
};

/// NMEA checksum calculator: XOR of every byte between `$` and `*`, supporting
/// both streaming and single-shot use
#[derive(Default, Clone, Copy)]
pub(crate) struct NmeaChecksumCalc {
    ck: u8,
}

impl NmeaChecksumCalc {
    pub(crate) const fn new() -> Self {
        Self { ck: 0 }
    }

    /// Update checksum with new bytes
    pub(crate) const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    pub(crate) const fn update_byte(&mut self, byte: u8) {
        self.ck ^= byte;
    }

    pub(crate) const fn result(self) -> u8 {
        self.ck
    }

    pub(crate) const fn validate_result(self, received: u8) -> Result<(), ParserError> {
        if self.ck == received {
            Ok(())
        } else {
            Err(ParserError::InvalidChecksum {
                expect: received,
                got: self.ck,
            })
        }
    }
}

/// Computes the checksum of a sentence: the XOR of every byte strictly between
/// the leading `$` and the `*` delimiter (or the end of input when there is no `*`).
///
/// Input that does not start with `$` yields `0`; callers are expected to frame
/// sentences before asking for their checksum.
pub const fn compute_checksum(sentence: &[u8]) -> u8 {
    if sentence.is_empty() || sentence[0] != NMEA_SYNC_CHAR {
        return 0;
    }
    let mut calc = NmeaChecksumCalc::new();
    let mut i = 1;
    while i < sentence.len() && sentence[i] != NMEA_CHECKSUM_DELIMITER {
        calc.update_byte(sentence[i]);
        i += 1;
    }
    calc.result()
}

/// Checks the two hex digits after `*` against [`compute_checksum`].
///
/// Anything after the two digits (usually `\r\n`) is ignored.
pub fn validate_checksum(sentence: &[u8]) -> Result<(), ParserError> {
    if sentence.first() != Some(&NMEA_SYNC_CHAR) {
        return Err(ParserError::MissingSyncChar);
    }
    let star = sentence
        .iter()
        .position(|&b| b == NMEA_CHECKSUM_DELIMITER)
        .ok_or(ParserError::MissingChecksum)?;
    let digits = sentence
        .get(star + 1..star + 1 + NMEA_CHECKSUM_DIGITS)
        .ok_or(ParserError::MissingChecksum)?;
    let received = parse_hex_byte(digits[0], digits[1]).ok_or(ParserError::MissingChecksum)?;

    let mut calc = NmeaChecksumCalc::new();
    calc.update(&sentence[1..star]);
    calc.validate_result(received)
}

/// `true` when the sentence carries a well-formed checksum that matches its content.
pub fn verify_checksum(sentence: &[u8]) -> bool {
    validate_checksum(sentence).is_ok()
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

const fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    match (hex_value(hi), hex_value(lo)) {
        (Some(hi), Some(lo)) => Some((hi << 4) | lo),
        _ => None,
    }
}
