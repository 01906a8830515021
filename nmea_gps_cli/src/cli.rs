use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches};
use log::LevelFilter;
use serialport::{FlowControl as SerialFlowControl, SerialPort};
use std::{
    fs::File,
    io::{BufReader, ErrorKind, Read},
    path::PathBuf,
    time::Duration,
};

pub struct CommandBuilder {
    command: clap::Command,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBuilder {
    pub fn new() -> Self {
        let command = clap::Command::new("NMEA GPS reader")
            .about("Decodes RMC and GGA sentences from a GPS receiver")
            .arg_required_else_help(true)
            .arg(
                Arg::new("port")
                    .value_name("port")
                    .short('p')
                    .long("port")
                    .help("Serial port the GPS receiver is attached to"),
            )
            .arg(
                Arg::new("baud")
                    .value_name("baud")
                    .short('s')
                    .long("baud")
                    .required(false)
                    .default_value("9600")
                    .value_parser(value_parser!(u32))
                    .help("Baud rate for the selected port"),
            )
            .arg(
                Arg::new("file")
                    .value_name("file")
                    .short('f')
                    .long("file")
                    .value_parser(value_parser!(PathBuf))
                    .help("Read a raw NMEA capture instead of a serial port"),
            )
            .group(
                ArgGroup::new("source")
                    .args(["port", "file"])
                    .required(true),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Print the GPS record as JSON after every decoded sentence"),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count)
                    .help("Log parser events, repeat for more detail"),
            );
        Self { command }
    }

    pub fn build(&self) -> clap::Command {
        self.command.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Serial { port: String, baud: u32 },
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub source: Source,
    pub json: bool,
    pub verbosity: u8,
}

impl Options {
    pub fn from_matches(cli: &ArgMatches) -> Result<Self> {
        let source = match (
            cli.get_one::<String>("port"),
            cli.get_one::<PathBuf>("file"),
        ) {
            (Some(port), _) => Source::Serial {
                port: port.clone(),
                baud: cli.get_one::<u32>("baud").copied().unwrap_or(9600),
            },
            (None, Some(path)) => Source::File(path.clone()),
            (None, None) => anyhow::bail!("Either --port or --file is required"),
        };
        Ok(Self {
            source,
            json: cli.get_flag("json"),
            verbosity: cli.get_count("verbose"),
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Byte source feeding the parser
pub enum Input {
    Serial(Box<dyn SerialPort>),
    File(BufReader<File>),
}

impl Input {
    pub fn open(source: &Source) -> Result<Self> {
        match source {
            Source::Serial { port, baud } => {
                let builder = serialport::new(port, *baud)
                    .timeout(Duration::from_millis(10))
                    .flow_control(SerialFlowControl::None);
                log::debug!("{:?}", &builder);
                let port = builder
                    .open()
                    .with_context(|| format!("Failed to open port: {}", port))?;
                Ok(Input::Serial(port))
            },
            Source::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open file: {}", path.display()))?;
                Ok(Input::File(BufReader::new(file)))
            },
        }
    }

    /// Reads the next chunk. `None` once a capture file is exhausted, a serial
    /// port never ends and reports a read timeout as zero bytes.
    pub fn read_chunk(&mut self, output: &mut [u8]) -> std::io::Result<Option<usize>> {
        match self {
            Input::Serial(port) => match port.read(output) {
                Ok(n) => Ok(Some(n)),
                Err(e) if e.kind() == ErrorKind::TimedOut => Ok(Some(0)),
                Err(e) => Err(e),
            },
            Input::File(reader) => match reader.read(output)? {
                0 => Ok(None),
                n => Ok(Some(n)),
            },
        }
    }
}
