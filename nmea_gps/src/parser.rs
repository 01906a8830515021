use crate::{
    constants::{NMEA_END_CHAR_1, NMEA_END_CHAR_2, NMEA_MAX_SENTENCE_LENGTH, NMEA_SYNC_CHAR},
    error::ParserError,
    gps_data::{GpsData, Updated},
    sentences::{self, SentenceId},
    sink::{EventSink, NoopSink, ParseEvent},
};

mod buffer;
mod checksum;
mod fields;

pub use buffer::{FixedBuffer, FixedLinearBuffer, UnderlyingBuffer};
pub use checksum::{compute_checksum, validate_checksum, verify_checksum};
pub use fields::{field, field_span, raw_field, Field, FieldSpans, Fields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for `$`, everything else is dropped
    Idle,
    /// Buffering a sentence until `\r` or `\n`
    InSentence,
}

/// Incremental NMEA parser, fed one byte at a time.
///
/// The default constructor builds a parser around an 82 byte [`FixedBuffer`],
/// enough for any standard sentence. Pass your own [`UnderlyingBuffer`] to
/// [`Parser::new`] to change the limit; sentences that do not fit are dropped.
///
/// Each parser carries its own state, so several receivers can be decoded
/// side by side with one parser per stream.
pub struct Parser<T = FixedBuffer<NMEA_MAX_SENTENCE_LENGTH>, S = NoopSink>
where
    T: UnderlyingBuffer,
    S: EventSink,
{
    buf: T,
    state: State,
    sink: S,
    last_updated: Updated,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(FixedBuffer::new())
    }
}

impl<T: UnderlyingBuffer> Parser<T> {
    pub fn new(underlying: T) -> Self {
        Self {
            buf: underlying,
            state: State::Idle,
            sink: NoopSink,
            last_updated: Updated::empty(),
        }
    }
}

impl<T: UnderlyingBuffer, S: EventSink> Parser<T, S> {
    /// Replaces the event sink, keeping the buffer and framing state.
    pub fn with_sink<S2: EventSink>(self, sink: S2) -> Parser<T, S2> {
        Parser {
            buf: self.buf,
            state: self.state,
            sink,
            last_updated: self.last_updated,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn is_buffer_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }

    /// `true` between a `$` and the line ending that closes it
    pub fn is_in_sentence(&self) -> bool {
        self.state == State::InSentence
    }

    /// Fields written by the most recent sentence, empty if it was rejected or
    /// overflowed the buffer.
    pub fn last_updated(&self) -> Updated {
        self.last_updated
    }

    /// Drops any partial sentence and waits for the next `$`.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.state = State::Idle;
    }

    /// Feeds one byte. Returns `true` exactly when this byte completed a
    /// sentence that was decoded into `data`.
    pub fn feed(&mut self, byte: u8, data: &mut GpsData) -> bool {
        matches!(self.process(byte, data), Some(Ok(_)))
    }

    /// Feeds one byte and reports how the sentence in progress ended, if it did.
    ///
    /// Returns `None` while a sentence is being buffered or no sentence is
    /// active. Every `Some` leaves the parser idle, waiting for the next `$`.
    pub fn process(
        &mut self,
        byte: u8,
        data: &mut GpsData,
    ) -> Option<Result<SentenceId, ParserError>> {
        if byte == NMEA_SYNC_CHAR {
            self.start_sentence();
            return None;
        }
        if self.state == State::Idle {
            return None;
        }
        if byte == NMEA_END_CHAR_1 || byte == NMEA_END_CHAR_2 {
            let result = self.finish_sentence(data);
            self.reset();
            return Some(result);
        }
        if self.buf.push(byte) {
            return None;
        }

        let capacity = self.buf.max_capacity();
        self.reset();
        self.last_updated = Updated::empty();
        self.sink.event(ParseEvent::Overflow { capacity });
        Some(Err(ParserError::BufferOverflow { capacity }))
    }

    /// Feeds a chunk of bytes, returning how many sentences were decoded.
    pub fn consume(&mut self, bytes: &[u8], data: &mut GpsData) -> usize {
        bytes.iter().filter(|&&b| self.feed(b, data)).count()
    }

    fn start_sentence(&mut self) {
        self.buf.clear();
        if self.buf.push(NMEA_SYNC_CHAR) {
            self.state = State::InSentence;
            self.sink.event(ParseEvent::SentenceStart);
        } else {
            self.state = State::Idle;
        }
    }

    fn finish_sentence(&mut self, data: &mut GpsData) -> Result<SentenceId, ParserError> {
        self.last_updated = Updated::empty();
        let sentence = self.buf.as_slice();
        let result = validate_checksum(sentence)
            .and_then(|()| sentences::decode_verified(sentence, data));
        match result {
            Ok((id, updated)) => {
                self.last_updated = updated;
                self.sink.event(ParseEvent::Decoded { id, updated });
                Ok(id)
            },
            Err(error) => {
                self.sink.event(ParseEvent::Rejected { sentence, error });
                Err(error)
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const RMC: &[u8] = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";

    #[test]
    fn parser_idle_ignores_noise() {
        let mut parser = Parser::default();
        let mut data = GpsData::default();
        for b in b"garbage,*12\r\n" {
            assert_eq!(parser.process(*b, &mut data), None);
        }
        assert!(!parser.is_in_sentence());
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_terminator_resets() {
        let mut parser = Parser::default();
        let mut data = GpsData::default();
        let (last, body) = RMC.split_last().unwrap();
        for b in &body[..body.len() - 1] {
            assert!(!parser.feed(*b, &mut data));
        }
        assert!(parser.is_in_sentence());
        assert!(parser.feed(b'\r', &mut data));
        assert!(!parser.is_in_sentence());
        assert_eq!(parser.buffer_len(), 0);
        assert!(!parser.feed(*last, &mut data));
    }

    #[test]
    fn parser_sync_restarts_sentence() {
        let mut parser = Parser::default();
        let mut data = GpsData::default();
        parser.consume(b"$GPGGA,12", &mut data);
        assert_eq!(parser.buffer_len(), 9);
        parser.feed(b'$', &mut data);
        assert_eq!(parser.buffer_len(), 1);
        assert!(parser.is_in_sentence());
    }

    #[test]
    fn parser_zero_capacity_never_starts() {
        let mut storage = [0u8; 0];
        let mut parser = Parser::new(FixedLinearBuffer::new(&mut storage));
        let mut data = GpsData::default();
        assert_eq!(parser.process(b'$', &mut data), None);
        assert!(!parser.is_in_sentence());
    }

    #[test]
    fn parser_small_buffer_overflows() {
        let mut parser = Parser::new(FixedBuffer::<8>::new());
        let mut data = GpsData::default();
        parser.consume(b"$GPRMC,", &mut data);
        assert_eq!(parser.process(b'1', &mut data), None);
        assert_eq!(
            parser.process(b'2', &mut data),
            Some(Err(ParserError::BufferOverflow { capacity: 8 }))
        );
        assert!(!parser.is_in_sentence());
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_reports_checksum_error() {
        let mut parser = Parser::default();
        let mut data = GpsData::default();
        parser.consume(b"$GPGGA,1*00", &mut data);
        assert!(matches!(
            parser.process(b'\n', &mut data),
            Some(Err(ParserError::InvalidChecksum { expect: 0, .. }))
        ));
        assert_eq!(parser.last_updated(), Updated::empty());
    }

    #[test]
    fn parser_last_updated() {
        let mut parser = Parser::default();
        let mut data = GpsData::default();
        assert_eq!(parser.consume(RMC, &mut data), 1);
        assert!(parser.last_updated().contains(Updated::TIME | Updated::POSITION));
    }

    #[test]
    fn parser_with_sink_keeps_state() {
        let mut parser = Parser::default();
        let mut data = GpsData::default();
        parser.consume(b"$GP", &mut data);
        let mut starts = 0;
        let mut parser = parser.with_sink(|e: ParseEvent<'_>| {
            if e == ParseEvent::SentenceStart {
                starts += 1;
            }
        });
        assert_eq!(parser.buffer_len(), 3);
        parser.consume(b"RMC$GPGGA", &mut data);
        drop(parser);
        assert_eq!(starts, 1);
    }
}
