//! # nmea_gps
//!
//! Incremental parser for the NMEA 0183 sentences sent by GPS receivers over a
//! serial link. Bytes are fed one at a time, no allocation happens, and the
//! decoded values land in a [`GpsData`] record owned by the caller.
//!
//! Two sentence layouts are decoded, with either the `GP` or the `GN` talker:
//! - RMC: time, date, position, speed (stored in km/h) and course
//! - GGA: position, altitude, fix quality, satellites in use and HDOP
//!
//! Every other sentence is framed, checked and skipped.
//!
//! Parsing
//! =======
//!
//! ```
//! use nmea_gps::{GpsData, Parser};
//!
//! let mut parser = Parser::default();
//! let mut data = GpsData::default();
//! let serial = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
//! for &byte in serial {
//!     if parser.feed(byte, &mut data) {
//!         // a sentence was just decoded into `data`
//!     }
//! }
//! assert_eq!((data.hour, data.minute, data.second), (12, 35, 19));
//! assert!(data.has_fix);
//! ```
//!
//! [`Parser::process`] returns the same signal with the reason a sentence was
//! dropped, and [`Parser::with_sink`] routes framing events to an
//! [`EventSink`] such as `LogSink` (with the `log` feature).
//!
//! The decoders and checksum helpers can also be used on their own, on
//! sentences that are already framed:
//! ```
//! use nmea_gps::{decode_gga, verify_checksum, GpsData};
//!
//! let gga = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
//! assert!(verify_checksum(gga));
//!
//! let mut data = GpsData::default();
//! decode_gga(gga, &mut data).unwrap();
//! assert_eq!(data.satellites, 8);
//! ```
//!
//! no_std Support
//! ==============
//!
//! Turn off the default `std` feature. The parser then works with a
//! [`FixedBuffer`] or with a [`FixedLinearBuffer`] borrowed from static memory:
//! ```
//! let mut storage = [0; 82];
//! let buf = nmea_gps::FixedLinearBuffer::new(&mut storage[..]);
//! let mut parser = nmea_gps::Parser::new(buf);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate core;
#[cfg(feature = "serde")]
extern crate serde;

pub use crate::{
    error::{DateTimeError, ParserError},
    gps_data::{FixQuality, GpsData, Updated},
    parser::{
        compute_checksum, field, field_span, raw_field, validate_checksum, verify_checksum,
        Field, FieldSpans, Fields, FixedBuffer, FixedLinearBuffer, Parser, UnderlyingBuffer,
    },
    sentences::{decode, decode_gga, decode_rmc, SentenceId, SentenceKind, Talker},
    sink::{EventSink, NoopSink, ParseEvent, Printable},
};

#[cfg(feature = "log")]
pub use crate::sink::LogSink;

pub mod constants;
mod error;
mod gps_data;
mod parser;
mod sentences;
mod sink;
