mod error;
mod help;

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::encoding::{decode, decode_to, encode, encode_to, Mode};
use crate::input::{Scan, Units};
use crate::utils::color::{Highlight, ESCAPED_COLOR, UNESCAPED_COLOR};
use crate::utils::log;

pub use error::CliError;
pub use help::encodings_message;

/// Encodes/decodes the input value for HTTP URL by default and prints
/// the encoded/decoded value to STDOUT.
#[derive(Parser, Debug)]
#[command(name = "urlencode", version, after_help = encodings_message())]
pub struct Args {
    /// encode/decode format
    #[arg(short = 'e', long = "encoding", default_value = "path-segment")]
    pub encoding: String,

    /// decodes, instead of encodes
    #[arg(short, long)]
    pub decode: bool,

    /// use all input at once, instead of line-by-line
    #[arg(short, long)]
    pub all: bool,

    /// highlight escaped/unescaped characters
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto)]
    pub color: ColorWhen,

    /// log debug information to STDERR
    #[arg(short, long)]
    pub verbose: bool,

    /// read from this file instead of STDIN
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => is_terminal && env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Warning for forced highlighting on output that is not a terminal,
    /// where the ANSI codes end up in the data.
    pub fn warning(self, is_terminal: bool) -> Option<&'static str> {
        match self {
            ColorWhen::Always if !is_terminal => {
                Some("--color always writes ANSI escapes into non-terminal output")
            }
            _ => None,
        }
    }
}

/// Everything a run needs, resolved and validated from [`Args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub decode: bool,
    pub scan: Scan,
    pub highlight: bool,
    pub file: Option<PathBuf>,
}

impl Config {
    pub fn from_args(args: &Args, stdout_is_terminal: bool) -> Result<Config, CliError> {
        let mode: Mode = args.encoding.parse()?;

        if args.files.len() > 1 {
            return Err(CliError::TooManyFiles);
        }

        if let Some(warning) = args.color.warning(stdout_is_terminal) {
            log::warn("cli", warning);
        }

        Ok(Config {
            mode,
            decode: args.decode,
            scan: if args.all { Scan::Whole } else { Scan::Lines },
            highlight: args.color.enabled(stdout_is_terminal),
            file: args.files.first().cloned(),
        })
    }
}

/// Transform every unit of the configured input and write one line per unit
/// to `out`. Stops at the first unit that fails to decode.
pub fn run<R: BufRead, W: Write>(config: &Config, stdin: R, out: &mut W) -> Result<(), CliError> {
    log::debug(
        "cli",
        &format!(
            "{} as {}",
            if config.decode { "decoding" } else { "encoding" },
            config.mode
        ),
    );

    match &config.file {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            process(config, BufReader::new(file), out)
        }
        None => process(config, stdin, out),
    }
}

fn process<R: BufRead, W: Write>(config: &Config, reader: R, out: &mut W) -> Result<(), CliError> {
    for (index, unit) in Units::new(reader, config.scan).enumerate() {
        let unit = unit.map_err(CliError::Read)?;
        log::debug("cli", &format!("unit {} ({} bytes)", index + 1, unit.len()));

        let transformed = if config.decode {
            decode_unit(config, &unit).map_err(|err| {
                log::debug("cli", &format!("unit {} rejected: {}", index + 1, err));
                err
            })?
        } else {
            encode_unit(config, &unit)
        };

        out.write_all(&transformed).map_err(CliError::Write)?;
        out.write_all(b"\n").map_err(CliError::Write)?;
    }

    Ok(())
}

fn encode_unit(config: &Config, unit: &[u8]) -> Vec<u8> {
    if config.highlight {
        let mut sink = Highlight::new(Vec::new(), ESCAPED_COLOR);
        encode_to(unit, config.mode, &mut sink);
        return sink.into_inner();
    }
    encode(unit, config.mode).into_owned().into_bytes()
}

fn decode_unit(config: &Config, unit: &[u8]) -> Result<Vec<u8>, CliError> {
    if config.highlight {
        let mut sink = Highlight::new(Vec::new(), UNESCAPED_COLOR);
        decode_to(unit, config.mode, &mut sink)?;
        return Ok(sink.into_inner());
    }
    Ok(decode(unit, config.mode)?.into_owned())
}
