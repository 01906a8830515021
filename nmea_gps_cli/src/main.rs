use anyhow::Result;
use log::info;
use nmea_gps::{GpsData, LogSink, Parser, Updated};

mod cli;

fn main() -> Result<()> {
    let command = cli::CommandBuilder::default()
        .build()
        .about(clap::crate_description!())
        .name(clap::crate_name!());
    let options = cli::Options::from_matches(&command.get_matches())?;

    env_logger::Builder::new()
        .filter_level(options.log_level())
        .parse_env("NMEA_LOGLEVEL")
        .init();

    let mut input = cli::Input::open(&options.source)?;
    let mut parser = Parser::default().with_sink(LogSink);
    let mut gps = GpsData::default();
    let mut decoded = 0usize;

    info!("Reading from {:?}", options.source);
    let mut local_buf = [0; 256];
    while let Some(nbytes) = input.read_chunk(&mut local_buf)? {
        for &byte in &local_buf[..nbytes] {
            if parser.feed(byte, &mut gps) {
                decoded += 1;
                report(&gps, parser.last_updated(), options.json)?;
            }
        }
    }
    info!("End of input, {} sentences decoded", decoded);
    Ok(())
}

fn report(gps: &GpsData, updated: Updated, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(gps)?);
        return Ok(());
    }

    let time = match gps.datetime() {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        Err(_) => format!("{:02}:{:02}:{:02} UTC", gps.hour, gps.minute, gps.second),
    };
    let fix = if gps.has_fix { "fix" } else { "no fix" };
    println!(
        "{} [{}] lat {:.6} lon {:.6} alt {:.1} m speed {:.1} km/h course {:.1} sats {} hdop {:.1} quality {:?} ({:?})",
        time,
        fix,
        gps.latitude,
        gps.longitude,
        gps.altitude,
        gps.speed,
        gps.course,
        gps.satellites,
        gps.hdop,
        gps.fix_quality(),
        updated,
    );
    Ok(())
}
