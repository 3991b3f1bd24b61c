pub mod input;
pub mod unicode;

use std::io::Write;

use clap::{Parser, ValueEnum};
use itertools::Itertools;
use tracing::{debug, warn};

use crate::input::{parse_codepoint, parse_unit};
use crate::unicode::*;

#[derive(Parser, Debug)]
#[command(
    name = "codepoint",
    version,
    about = "Show the UTF-8 and UTF-16 encodings of Unicode codepoints"
)]
pub struct Cli {
    /// Which encodings to print
    #[arg(short, long, value_enum, default_value_t = Encoding::All)]
    pub encoding: Encoding,

    /// Read the inputs as high/low UTF-16 surrogate pairs and decode them
    #[arg(long)]
    pub pairs: bool,

    /// Codepoints (U+20AC, 0x20AC, 8364 or a literal character), or hex code
    /// units with --pairs
    #[arg(required = true)]
    pub inputs: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    Utf8,
    Utf16,
    All,
}

impl Encoding {
    const fn utf8(self) -> bool {
        matches!(self, Encoding::Utf8 | Encoding::All)
    }
    const fn utf16(self) -> bool {
        matches!(self, Encoding::Utf16 | Encoding::All)
    }
}

/// Prints one line per input to `out`. Inputs that fail to parse or encode are
/// reported on their own line and do not stop the run.
pub fn codepoint<W: Write>(cli: &Cli, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    if cli.inputs.is_empty() {
        return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into());
    }
    if cli.pairs {
        for pair in cli.inputs.chunks(2) {
            write_pair(out, pair)?;
        }
    } else {
        for input in cli.inputs.iter() {
            match parse_codepoint(input) {
                Ok(code) => write_codepoint(out, code, cli.encoding)?,
                Err(error) => {
                    warn!(input = %input, %error, "skipping input");
                    writeln!(out, "{input}: {error}")?;
                }
            }
        }
    }
    Ok(())
}

fn write_codepoint<W: Write>(out: &mut W, code: u32, encoding: Encoding) -> std::io::Result<()> {
    let mut utf8 = [0u8; MAX_LEN_UTF8];
    let mut utf16 = [0u16; MAX_LEN_UTF16];
    let lengths = encode_utf8(code, &mut utf8)
        .and_then(|utf8_len| encode_utf16(code, &mut utf16).map(|utf16_len| (utf8_len, utf16_len)));
    write!(out, "U+{code:04X}: {}", Class::of(code))?;
    match lengths {
        Ok((utf8_len, utf16_len)) => {
            debug!(code, utf8_len, utf16_len, "encoded codepoint");
            if encoding.utf8() {
                let bytes = utf8[..utf8_len]
                    .iter()
                    .format_with(" ", |byte, f| f(&format_args!("{byte:02X}")));
                write!(out, ", UTF-8 {bytes}")?;
            }
            if encoding.utf16() {
                let units = utf16[..utf16_len]
                    .iter()
                    .format_with(" ", |unit, f| f(&format_args!("{unit:04X}")));
                write!(out, ", UTF-16 {units}")?;
            }
            writeln!(out)
        }
        Err(error) => {
            warn!(%error, "cannot encode codepoint");
            writeln!(out, ", encoding error")
        }
    }
}

fn write_pair<W: Write>(out: &mut W, pair: &[String]) -> std::io::Result<()> {
    let mut units = Vec::with_capacity(pair.len());
    for input in pair {
        match parse_unit(input) {
            Ok(unit) => units.push(unit),
            Err(error) => {
                warn!(input = %input, %error, "skipping pair");
                return writeln!(out, "{input}: {error}");
            }
        }
    }
    match units[..] {
        [high, low] if is_high_surrogate(high) && is_low_surrogate(low) => {
            let code = decode_surrogate_pair(high, low);
            debug!(high, low, code, "decoded surrogate pair");
            writeln!(out, "{high:04X} {low:04X}: U+{code:04X}")
        }
        [high, low] => {
            warn!(high, low, "not a surrogate pair");
            writeln!(out, "{high:04X} {low:04X}: not a surrogate pair")
        }
        [high] => writeln!(out, "{high:04X}: missing low surrogate"),
        _ => Ok(()),
    }
}
