use core::fmt;

use crate::{error::ParserError, gps_data::Updated, sentences::SentenceId};

/// Something worth reporting while framing and decoding sentences
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseEvent<'a> {
    /// A `$` was seen and a new sentence started
    SentenceStart,
    /// The sentence in progress outgrew the buffer and was dropped
    Overflow { capacity: usize },
    /// A complete sentence was decoded into the GPS record
    Decoded { id: SentenceId, updated: Updated },
    /// A complete sentence was discarded, `error` says why
    Rejected {
        sentence: &'a [u8],
        error: ParserError,
    },
}

/// Receiver of [`ParseEvent`]s.
///
/// Implemented for any `FnMut(ParseEvent)` closure, so a parser can be hooked
/// up to whatever diagnostics the caller has:
/// ```
/// use nmea_gps::{GpsData, ParseEvent, Parser};
///
/// let mut decoded = 0;
/// let mut parser = Parser::default().with_sink(|event: ParseEvent<'_>| {
///     if let ParseEvent::Decoded { .. } = event {
///         decoded += 1;
///     }
/// });
/// let mut data = GpsData::default();
/// parser.consume(
///     b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n",
///     &mut data,
/// );
/// drop(parser);
/// assert_eq!(decoded, 1);
/// ```
pub trait EventSink {
    fn event(&mut self, event: ParseEvent<'_>);
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopSink;

impl EventSink for NoopSink {
    #[inline]
    fn event(&mut self, _event: ParseEvent<'_>) {}
}

impl<F> EventSink for F
where
    F: FnMut(ParseEvent<'_>),
{
    fn event(&mut self, event: ParseEvent<'_>) {
        self(event)
    }
}

/// Forwards events to the `log` facade under the `nmea_gps` target.
#[cfg(feature = "log")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSink;

#[cfg(feature = "log")]
impl EventSink for LogSink {
    fn event(&mut self, event: ParseEvent<'_>) {
        match event {
            ParseEvent::SentenceStart => log::trace!(target: "nmea_gps", "sentence start"),
            ParseEvent::Overflow { capacity } => {
                log::warn!(target: "nmea_gps", "sentence longer than {} bytes, dropped", capacity)
            },
            ParseEvent::Decoded { id, updated } => {
                log::debug!(target: "nmea_gps", "decoded {}: {:?}", id, updated)
            },
            ParseEvent::Rejected { sentence, error } => log::debug!(
                target: "nmea_gps",
                "rejected {}: {}",
                Printable(sentence),
                error
            ),
        }
    }
}

/// Displays raw sentence bytes, escaping anything that is not printable ASCII.
#[derive(Debug, Clone, Copy)]
pub struct Printable<'a>(pub &'a [u8]);

impl fmt::Display for Printable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_escapes() {
        assert_eq!(Printable(b"$GP,1*00\r\n").to_string(), "$GP,1*00\\x0d\\x0a");
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = 0;
        {
            let mut sink = |_: ParseEvent<'_>| seen += 1;
            sink.event(ParseEvent::SentenceStart);
            sink.event(ParseEvent::Overflow { capacity: 82 });
        }
        assert_eq!(seen, 2);
    }

    #[cfg(feature = "log")]
    #[test]
    fn test_log_sink_handles_every_event() {
        use crate::{
            gps_data::GpsData,
            parser::Parser,
            sentences::{SentenceKind, Talker},
        };

        let mut sink = LogSink;
        sink.event(ParseEvent::SentenceStart);
        sink.event(ParseEvent::Overflow { capacity: 82 });
        sink.event(ParseEvent::Decoded {
            id: SentenceId {
                talker: Talker::Gps,
                kind: SentenceKind::Rmc,
            },
            updated: Updated::TIME,
        });
        sink.event(ParseEvent::Rejected {
            sentence: b"$GPGGA,1*00\r",
            error: ParserError::MissingChecksum,
        });

        let mut parser = Parser::default().with_sink(LogSink);
        let mut data = GpsData::default();
        assert_eq!(
            parser.consume(
                b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n$GPGGA,1*00\r\n",
                &mut data,
            ),
            1
        );
        assert_eq!(parser.sink(), &LogSink);
    }
}
