#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `crc-hash` command-line front-end. It resolves an
//! algorithm name through [`checksums::CrcAlgorithm::resolve`], streams each
//! operand through a [`checksums::CrcChecksum`] and prints one
//! `DIGEST  NAME` line per operand.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error so the whole front-end can be driven from tests.
//! [`run_with_input`] additionally takes the reader used for `-` operands.
//! A [`clap`](https://docs.rs/clap/) builder definition performs the parse;
//! help and version output are rendered from static text so the wording stays
//! stable.
//!
//! # Invariants
//!
//! - `run` never panics; I/O failures surface as non-zero exit codes.
//! - An unreadable operand is reported on stderr and the remaining operands
//!   are still processed.
//!
//! # Errors
//!
//! Argument errors, a missing or unsupported algorithm and unreadable
//! operands all produce exit code `1` with a `crc-hash: ` prefixed line on
//! stderr.
//!
//! # Examples
//!
//! ```
//! use cli::run_with_input;
//!
//! let mut stdin: &[u8] = b"Hello world.";
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = run_with_input(["crc-hash", "-a", "crc32"], &mut stdin, &mut stdout, &mut stderr);
//!
//! assert_eq!(code, 0);
//! assert_eq!(stdout, b"8b3a0404  -\n");
//! ```

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use checksums::{CrcAlgorithm, CrcChecksum, CrcDigest};
use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use logging::VerbosityConfig;

/// Program name used in diagnostics, help and version output.
pub const PROGRAM_NAME: &str = "crc-hash";

/// Maximum exit code representable by the operating system.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Operand name that selects standard input.
const STDIN_OPERAND: &str = "-";

/// Deterministic help text describing the supported options.
const HELP_TEXT: &str = concat!(
    "crc-hash ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: crc-hash [-h] [-V] [-l] [-v...] [--debug=FLAGS] [-a ALGORITHM] [-e ENCODING] [FILE...]\n",
    "\n",
    "Compute a CRC checksum of each FILE. With no FILE, or when FILE is -,\n",
    "read standard input. The following options are recognised:\n",
    "  -h, --help       Show this help message and exit.\n",
    "  -V, --version    Output version information and exit.\n",
    "  -l, --list       List the supported algorithms and exit.\n",
    "  -a, --algorithm=NAME  Checksum algorithm (see --list).\n",
    "  -e, --encoding=ENC  Digest encoding: hex (default) or base64.\n",
    "  -v, --verbose    Increase diagnostic verbosity (repeatable).\n",
    "      --debug=FLAGS  Enable debug flags (hash, registry, io, ALL, NONE).\n",
);

/// Text encodings accepted by `--encoding`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum OutputEncoding {
    #[default]
    Hex,
    Base64,
}

impl OutputEncoding {
    fn from_label(label: &str) -> Self {
        if label == "base64" {
            Self::Base64
        } else {
            Self::Hex
        }
    }

    fn render(self, digest: &CrcDigest) -> String {
        match self {
            Self::Hex => digest.to_hex(),
            Self::Base64 => digest.to_base64(),
        }
    }
}

#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    list: bool,
    verbosity: u8,
    debug_flags: Vec<String>,
    algorithm: Option<String>,
    encoding: OutputEncoding,
    files: Vec<OsString>,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .short('l')
                .help("List the supported algorithms and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic verbosity.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Enable debug flags.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .value_name("NAME")
                .help("Checksum algorithm.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("encoding")
                .long("encoding")
                .short('e')
                .value_name("ENC")
                .help("Digest encoding.")
                .value_parser(["hex", "base64"])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let list = matches.get_flag("list");
    let verbosity = matches.get_count("verbose");
    let debug_flags = matches
        .remove_many::<String>("debug")
        .map(Iterator::collect)
        .unwrap_or_default();
    let algorithm = matches.remove_one::<String>("algorithm");
    let encoding = matches
        .get_one::<String>("encoding")
        .map(|label| OutputEncoding::from_label(label))
        .unwrap_or_default();
    let files = matches
        .remove_many::<OsString>("files")
        .map(Iterator::collect)
        .unwrap_or_default();

    Ok(ParsedArgs {
        show_help,
        show_version,
        list,
        verbosity,
        debug_flags,
        algorithm,
        encoding,
        files,
    })
}

/// Renders the one-line version banner.
fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

/// Writes `crc-hash: MESSAGE` to `stderr`.
fn write_error<Err: Write>(stderr: &mut Err, message: impl std::fmt::Display) {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
}

/// Runs the CLI reading `-` operands from the process's standard input.
///
/// The function returns the process exit code that should be used by the caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    run_with_input(arguments, &mut stdin, stdout, stderr)
}

/// Runs the CLI with an explicit reader standing in for standard input.
pub fn run_with_input<I, S, In, Out, Err>(
    arguments: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: Read,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdin, stdout, stderr),
        Err(error) => {
            let rendered = error.to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            write_error(stderr, first_line.trim_start_matches("error: "));
            1
        }
    }
}

fn execute<In, Out, Err>(
    parsed: ParsedArgs,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    In: Read,
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        list,
        verbosity,
        debug_flags,
        algorithm,
        encoding,
        files,
    } = parsed;

    if show_help {
        return i32::from(stdout.write_all(HELP_TEXT.as_bytes()).is_err());
    }

    if show_version {
        return i32::from(stdout.write_all(render_version().as_bytes()).is_err());
    }

    if list {
        for name in checksums::algorithms() {
            if writeln!(stdout, "{name}").is_err() {
                return 1;
            }
        }
        return 0;
    }

    let mut config = VerbosityConfig::from_verbose_level(verbosity);
    for flags in &debug_flags {
        if let Err(message) = config.apply_debug_flags(flags) {
            write_error(stderr, message);
            return 1;
        }
    }
    if config != VerbosityConfig::default() {
        logging::init_tracing(&config);
    }

    let algorithm = match CrcAlgorithm::resolve(algorithm.as_deref()) {
        Ok(algorithm) => algorithm,
        Err(error) => {
            write_error(stderr, error);
            return 1;
        }
    };

    let operands = if files.is_empty() {
        vec![OsString::from(STDIN_OPERAND)]
    } else {
        files
    };

    let mut status = 0;
    for operand in &operands {
        let display = operand.to_string_lossy();
        match hash_operand(algorithm, operand, stdin) {
            Ok(digest) => {
                if writeln!(stdout, "{}  {display}", encoding.render(&digest)).is_err() {
                    return 1;
                }
            }
            Err(error) => {
                write_error(stderr, format_args!("{display}: {error}"));
                status = 1;
            }
        }
    }

    if stdout.flush().is_err() {
        return 1;
    }
    status
}

/// Streams one operand through a fresh checksum.
fn hash_operand<In: Read>(
    algorithm: CrcAlgorithm,
    operand: &OsString,
    stdin: &mut In,
) -> io::Result<CrcDigest> {
    let mut checksum = CrcChecksum::new(algorithm);
    let total = if operand.as_os_str() == STDIN_OPERAND {
        checksum.update_reader(stdin)?
    } else {
        let mut file = File::open(Path::new(operand))?;
        checksum.update_reader(&mut file)?
    };
    logging::trace_io!("hashed {total} bytes from {}", operand.to_string_lossy());
    Ok(checksum.finish())
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
