//! Terminal front end: flag parsing, prompts and result formatting
//!
//! Exactly one command flag is accepted per invocation. The shell collects
//! the integers and text a command needs from `input`, calls into the core
//! and writes the formatted result to `output`. It owns no cryptographic
//! logic of its own.

use std::ffi::OsString;
use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use log::{debug, warn};
use rand::{CryptoRng, RngCore};
use thiserror::Error as ThisError;

use crate::api::{Ciphertext, PrivateKey, PublicKey};
use crate::params::KEY_SPACE;
use crate::pke::ToyRsa;

/// Usage text printed for `-h` and after any invocation error
pub const USAGE: &str = "\
usage:
  toyrsa -h       (display this help message)
  toyrsa -g       (generate keypair)
  toyrsa -e       (encrypt a message)
  toyrsa -d       (decrypt a message)
  toyrsa -c       (crack a public key)
";

/// Errors raised by the shell
#[derive(Debug, ThisError)]
pub enum Error {
    /// Command line did not name exactly one known command
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// Text typed where an integer was expected
    #[error("malformed {field}: {input:?} is not a non-negative integer")]
    MalformedInput {
        /// Which value was being read
        field: &'static str,
        /// The offending text, trimmed
        input: String,
    },

    /// Failure reported by the core operations
    #[error(transparent)]
    Core(#[from] crate::api::Error),

    /// Reading the prompts or writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shell result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Parser, Debug)]
#[command(name = "toyrsa", disable_help_flag = true, disable_version_flag = true)]
#[command(group(
    ArgGroup::new("command")
        .required(true)
        .multiple(false)
        .args(["help", "generate", "encrypt", "decrypt", "crack"])
))]
struct Cli {
    /// Display this help message
    #[arg(short = 'h', long)]
    help: bool,

    /// Generate a key pair
    #[arg(short = 'g', long)]
    generate: bool,

    /// Encrypt a message
    #[arg(short = 'e', long)]
    encrypt: bool,

    /// Decrypt a message
    #[arg(short = 'd', long)]
    decrypt: bool,

    /// Crack a public key
    #[arg(short = 'c', long)]
    crack: bool,

    /// Upper bound for prime candidates during key generation
    #[arg(long, env = "TOYRSA_KEY_SPACE")]
    key_space: Option<String>,
}

/// The single command selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `-h`
    Help,
    /// `-g`
    Generate,
    /// `-e`
    Encrypt,
    /// `-d`
    Decrypt,
    /// `-c`
    Crack,
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Command to run
    pub command: Command,
    /// Key space for `-g`; [`KEY_SPACE`] for every other command
    pub key_space: u64,
}

fn is_command_flag(arg: &OsString) -> bool {
    matches!(
        arg.to_str(),
        Some("-h" | "-g" | "-e" | "-d" | "-c" | "--help" | "--generate" | "--encrypt" | "--decrypt" | "--crack")
    )
}

/// Parse the full argument list, program name included
///
/// The key space is only read, and only validated, for `-g`.
pub fn parse_args<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let cli = Cli::try_parse_from(args.iter()).map_err(|err| {
        warn!("rejected command line: {:?}", err.kind());
        Error::InvalidArgument(match err.kind() {
            ErrorKind::MissingRequiredArgument => "no command given",
            ErrorKind::ArgumentConflict => "too many arguments",
            ErrorKind::UnknownArgument if args.iter().skip(1).any(is_command_flag) => "too many arguments",
            ErrorKind::InvalidValue => "invalid key space",
            _ => "invalid command",
        })
    })?;

    let command = if cli.help {
        Command::Help
    } else if cli.generate {
        Command::Generate
    } else if cli.encrypt {
        Command::Encrypt
    } else if cli.decrypt {
        Command::Decrypt
    } else {
        Command::Crack
    };

    let key_space = match (command, cli.key_space) {
        (Command::Generate, Some(raw)) => raw.parse::<u64>().map_err(|_| {
            warn!("rejected key space {:?}", raw);
            Error::InvalidArgument("invalid key space")
        })?,
        _ => KEY_SPACE,
    };

    Ok(Invocation { command, key_space })
}

/// Tracks whether the last byte written left a prompt line open
struct PromptWriter<W> {
    inner: W,
    line_open: bool,
}

impl<W: Write> PromptWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            line_open: false,
        }
    }
}

impl<W: Write> Write for PromptWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        if written > 0 {
            self.line_open = buf[written - 1] != b'\n';
        }
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Run one invocation against the given terminal streams and random source
///
/// If the command fails while a prompt line is still open, the line is
/// terminated before the error is returned.
pub fn run<R, W, G>(invocation: &Invocation, input: &mut R, output: &mut W, rng: &mut G) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: RngCore + CryptoRng,
{
    debug!(
        "running {:?} (key space {})",
        invocation.command, invocation.key_space
    );

    let mut output = PromptWriter::new(output);
    let result = match invocation.command {
        Command::Help => write!(output, "{}", USAGE).map_err(Error::from),
        Command::Generate => generate(invocation.key_space, &mut output, rng),
        Command::Encrypt => encrypt(input, &mut output),
        Command::Decrypt => decrypt(input, &mut output),
        Command::Crack => crack(input, &mut output),
    };

    if let Err(err) = result {
        if output.line_open {
            let _ = writeln!(output);
            let _ = output.flush();
        }
        return Err(err);
    }

    output.flush()?;
    Ok(())
}

fn generate<W: Write, G: RngCore + CryptoRng>(key_space: u64, output: &mut W, rng: &mut G) -> Result<()> {
    let pair = ToyRsa::keypair(rng, key_space)?;

    writeln!(output, "modulus:     {}", pair.n)?;
    writeln!(output, "public key:  {}", pair.e)?;
    writeln!(output, "private key: {}", pair.d)?;
    write_internal(output, pair.phi, pair.p, pair.q)
}

fn encrypt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let public_key = PublicKey {
        modulus: read_integer(input, output, "modulus")?,
        exponent: read_integer(input, output, "public key")?,
    };
    let message = read_message(input, output)?;

    let ciphertext = ToyRsa::encrypt(&public_key, &message)?;
    writeln!(output, "{}", ciphertext)?;
    Ok(())
}

fn decrypt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let private_key = PrivateKey {
        modulus: read_integer(input, output, "modulus")?,
        exponent: read_integer(input, output, "private key")?,
    };
    let message = read_message(input, output)?;
    let ciphertext = parse_ciphertext(&message)?;

    let plaintext = ToyRsa::decrypt(&private_key, &ciphertext)?;
    writeln!(output, "{}", plaintext)?;
    Ok(())
}

fn crack<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let public_key = PublicKey {
        modulus: read_integer(input, output, "modulus")?,
        exponent: read_integer(input, output, "public key")?,
    };

    let cracked = ToyRsa::crack(&public_key)?;
    writeln!(output, "private key: {}", cracked.d)?;
    write_internal(output, cracked.phi, cracked.p, cracked.q)
}

fn write_internal<W: Write>(output: &mut W, phi: u64, p: u64, q: u64) -> Result<()> {
    writeln!(output, "(internal information)")?;
    writeln!(output, "phi:         {}", phi)?;
    writeln!(output, "p,q:         {},{}", p, q)?;
    Ok(())
}

/// Split whitespace-delimited decimal tokens into a ciphertext
pub fn parse_ciphertext(text: &str) -> Result<Ciphertext> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<u64>().map_err(|_| Error::MalformedInput {
                field: "ciphertext",
                input: token.to_string(),
            })
        })
        .collect()
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn read_integer<R: BufRead, W: Write>(input: &mut R, output: &mut W, field: &'static str) -> Result<u64> {
    write!(output, "{}: ", field)?;
    output.flush()?;

    let line = read_line(input)?;
    let trimmed = line.trim();
    trimmed.parse::<u64>().map_err(|_| Error::MalformedInput {
        field,
        input: trimmed.to_string(),
    })
}

fn read_message<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    writeln!(output, "type message:")?;
    output.flush()?;

    let mut line = read_line(input)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
