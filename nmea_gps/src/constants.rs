pub const NMEA_SYNC_CHAR: u8 = 0x24; // '$'
pub const NMEA_END_CHAR_1: u8 = 0x0d; // '\r' (<CR>)
pub const NMEA_END_CHAR_2: u8 = 0x0a; // '\n' (<LF>)
pub const NMEA_CHECKSUM_DELIMITER: u8 = 0x2a; // '*'
pub const NMEA_FIELD_DELIMITER: u8 = 0x2c; // ','

/// Maximum number of bytes buffered for one sentence, counting the leading `$`.
pub const NMEA_MAX_SENTENCE_LENGTH: usize = 82;

pub(crate) const NMEA_CHECKSUM_DIGITS: usize = 2;
pub(crate) const NMEA_TYPE_TOKEN_LEN: usize = 5; // talker (2) + sentence type (3)

/// Longest field text handed to numeric conversion, longer fields are truncated.
pub const MAX_FIELD_LEN: usize = 15;

pub const KNOTS_TO_KMH: f32 = 1.852;

/// Year stored when the RMC date field carries a year that does not fit in two digits.
pub const DEFAULT_YEAR: u8 = 25;
pub(crate) const DEFAULT_DAY: u8 = 1;
pub(crate) const DEFAULT_MONTH: u8 = 1;

pub(crate) const LATITUDE_DEGREE_DIGITS: usize = 2;
pub(crate) const LONGITUDE_DEGREE_DIGITS: usize = 3;
