//! Purpose: `jsonparser` CLI entry point; parses one document and prints its tree.
//! Role: Binary crate root and demonstration consumer of `jsonparser::api`.
//! Invariants: Successful parses print a pretty rendering on stdout only.
//! Invariants: Non-interactive errors are emitted as one JSON line on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::error::Error as StdError;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Parser as ClapParser, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value as JsonValue, json};
use tracing_subscriber::EnvFilter;

use jsonparser::api::{
    Error, ErrorKind, ParseOptions, Parser, categorize_error, hint_for_error, to_exit_code,
};
use jsonparser::color_json::colorize_json;

const SAMPLE_DOCUMENT: &str =
    r#"{"name": "John Doe", "age": 30, "city": "New York", "hobbies": ["reading", "swimming"]}"#;

#[derive(ClapParser)]
#[command(
    name = "jsonparser",
    version,
    about = "Parse a JSON document and print the resulting value tree",
    after_help = r#"EXAMPLES
  $ jsonparser                      # parse the built-in sample document
  $ jsonparser data.json
  $ echo '[1, 2, 3]' | jsonparser -
  $ jsonparser --max-depth 64 data.json

NOTES
  - Only the first value is parsed; trailing text is ignored with a warning.
  - String contents are shown raw, escape sequences are not decoded.
  - Set RUST_LOG=debug for parser diagnostics."#
)]
struct Cli {
    #[arg(
        help = "Input file, or - for stdin (default: built-in sample document)",
        value_hint = ValueHint::FilePath
    )]
    input: Option<PathBuf>,
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics and pretty output: auto|always|never"
    )]
    color: ColorMode,
    #[arg(long, help = "Reject documents nested deeper than this many levels")]
    max_depth: Option<usize>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(code) => code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<i32, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                return Ok(0);
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Try `jsonparser --help`."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    parse_and_print(&cli).map_err(|err| (err, color_mode))?;
    Ok(0)
}

fn parse_and_print(cli: &Cli) -> Result<(), Error> {
    let (text, context) = match &cli.input {
        None => (SAMPLE_DOCUMENT.to_string(), "sample".to_string()),
        Some(path) if path.as_os_str() == "-" => (read_stdin()?, "stdin".to_string()),
        Some(path) => (read_file(path)?, path.display().to_string()),
    };

    let mut options = ParseOptions::new();
    if let Some(max_depth) = cli.max_depth {
        options = options.with_max_depth(max_depth);
    }

    let mut parser = Parser::with_options(&text, options);
    let value = parser.parse().map_err(|err| {
        let hint = hint_for_error(&err, &context);
        let err = err.with_hint(hint);
        match &cli.input {
            Some(path) if path.as_os_str() != "-" => err.with_path(path),
            _ => err,
        }
    })?;

    let trailing = parser.remaining().trim_start();
    if !trailing.is_empty() {
        tracing::warn!(
            input = %context,
            offset = parser.offset(),
            trailing_bytes = trailing.len(),
            "ignoring trailing input after the first value"
        );
    }

    let use_color = cli.color.use_color(io::stdout().is_terminal());
    println!("{}", colorize_json(&value, use_color));
    Ok(())
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read input file")
            .with_path(path)
            .with_source(err)
    })
}

fn read_stdin() -> Result<String, Error> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read stdin")
            .with_source(err)
    })?;
    Ok(text)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
        kind => format!("{} error ({kind:?})", categorize_error(err).label()),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> JsonValue {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if err.kind().is_parse() {
        inner.insert(
            "category".to_string(),
            json!(categorize_error(err).label()),
        );
    }
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    if let Some(offset) = err.offset() {
        inner.insert("offset".to_string(), json!(offset));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), JsonValue::Object(inner));
    JsonValue::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("path:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }
    if let Some(offset) = err.offset() {
        lines.push(format!(
            "{} {offset}",
            colorize_label("offset:", use_color, AnsiColor::Yellow)
        ));
    }

    let causes = error_causes(err);
    if let Some(cause) = causes.first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}
