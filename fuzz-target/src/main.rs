#[macro_use]
extern crate afl;
extern crate nmea_gps;

use nmea_gps::{FixedLinearBuffer, GpsData, Parser};

const RMC: &[u8] = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";

fn parse(bufsize: usize, chunksize: usize, data: &[u8]) {
    let mut buf = vec![0; bufsize];
    let buf = FixedLinearBuffer::new(&mut buf[..]);
    let mut parser = Parser::new(buf);
    let mut gps = GpsData::default();
    for chunk in data.chunks(chunksize) {
        parser.consume(chunk, &mut gps);
        assert!(parser.buffer_len() <= bufsize);
    }

    // Whatever came before, a '$' starts over and a well-formed sentence decodes
    let mut fresh = GpsData::default();
    assert_eq!(parser.consume(RMC, &mut fresh), 1);
    assert_eq!((fresh.hour, fresh.minute, fresh.second), (12, 35, 19));
    assert!(!parser.is_in_sentence());
}

fn main() {
    fuzz!(|data: &[u8]| {
        if data.len() > 2 {
            let bufsize = RMC.len() + data[0] as usize;
            let chunksize = data[1] as usize;
            if chunksize != 0 {
                parse(bufsize, chunksize, &data[2..]);
            }
        }
    });
}
