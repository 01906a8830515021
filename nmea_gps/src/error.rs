use core::fmt;

use crate::sentences::SentenceKind;

/// Errors raised while framing and decoding sentences.
///
/// None of these are fatal to the [`Parser`](crate::Parser): each one discards
/// the sentence in progress and the parser waits for the next `$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserError {
    InvalidChecksum {
        expect: u8,
        got: u8,
    },
    /// Sentence does not start with `$`
    MissingSyncChar,
    /// No `*` delimiter, or fewer than two characters after it
    MissingChecksum,
    MissingField {
        sentence: &'static str,
        field: &'static str,
    },
    UnexpectedSentence {
        expect: SentenceKind,
    },
    UnknownSentence,
    BufferOverflow {
        capacity: usize,
    },
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::InvalidChecksum { expect, got } => write!(
                f,
                "Not valid sentence's checksum, expect {:02X}, got {:02X}",
                expect, got
            ),
            ParserError::MissingSyncChar => f.write_str("Sentence does not start with '$'"),
            ParserError::MissingChecksum => f.write_str("Sentence has no checksum"),
            ParserError::MissingField { sentence, field } => {
                write!(f, "Missing field {} of sentence {}", field, sentence)
            },
            ParserError::UnexpectedSentence { expect } => {
                write!(f, "Unexpected sentence type, expect {}", expect)
            },
            ParserError::UnknownSentence => f.write_str("Unknown sentence type"),
            ParserError::BufferOverflow { capacity } => write!(
                f,
                "Sentence does not fit in {} bytes, dropped",
                capacity
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParserError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    InvalidDate,
    InvalidTime,
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeError::InvalidDate => f.write_str("invalid date"),
            DateTimeError::InvalidTime => f.write_str("invalid time"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DateTimeError {}
