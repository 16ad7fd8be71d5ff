//! Command-line interface for inspecting WKT geometries.
//!
//! `traveltime-wkt print` parses WKT from `--wkt`, `--input <path>` or stdin
//! and writes the indented rendering (or JSON) to stdout.
#![forbid(unsafe_code)]

mod error;
mod input;

use std::io::{self, Read, Write};
use std::path::PathBuf;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use traveltime_wkt_core::{Geometry, PrettyPrint, parse_wkt};

pub use error::CliError;
use input::{InputSource, STDIN_PATH};

const ARG_WKT: &str = "wkt";
const ARG_INPUT: &str = "input";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// input cannot be read or parsed, or the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Print(args) => {
            let config = args.into_config()?;
            let mut stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            run_print(&config, &mut stdin, &mut stdout)
        }
    }
}

fn run_print(
    config: &PrintConfig,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let text = config.source.read(stdin)?;
    let geometry = parse_wkt(text.trim()).map_err(|source| CliError::ParseWkt { source })?;
    let rendered = render(&geometry, config.format, config.indent)?;
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::WriteOutput)
}

fn render(geometry: &Geometry, format: OutputFormat, indent: usize) -> Result<String, CliError> {
    match format {
        OutputFormat::Pretty => Ok(geometry.pretty_print(indent)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(geometry).map_err(CliError::SerialiseGeometry)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "traveltime-wkt",
    about = "Inspect WKT geometries returned by the travel-time API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse WKT and print the geometry.
    Print(PrintArgs),
}

/// Rendering used for the parsed geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OutputFormat {
    /// Indented text, one nesting level per tab.
    #[default]
    Pretty,
    /// The geometry model as pretty JSON.
    Json,
}

/// CLI arguments for the `print` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Parse a WKT geometry and print it. The text can come from \
                 --wkt, from a file given with --input, or from stdin when \
                 neither is set (or --input is '-'). Options can also be set \
                 in configuration files or environment variables.",
    about = "Parse a WKT geometry and print it"
)]
#[ortho_config(prefix = "TRAVELTIME_WKT")]
struct PrintArgs {
    /// WKT text to parse.
    #[arg(long = ARG_WKT, value_name = "text")]
    #[serde(default)]
    wkt: Option<String>,
    /// File containing the WKT text; `-` reads stdin.
    #[arg(long = ARG_INPUT, value_name = "path")]
    #[serde(default)]
    input: Option<PathBuf>,
    /// Output rendering.
    #[arg(long, value_enum)]
    #[serde(default)]
    format: Option<OutputFormat>,
    /// Indent level of the outermost line in pretty output.
    #[arg(long, value_name = "levels")]
    #[serde(default)]
    indent: Option<usize>,
}

impl PrintArgs {
    fn into_config(self) -> Result<PrintConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PrintConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PrintConfig {
    source: InputSource,
    format: OutputFormat,
    indent: usize,
}

impl TryFrom<PrintArgs> for PrintConfig {
    type Error = CliError;

    fn try_from(args: PrintArgs) -> Result<Self, Self::Error> {
        let source = match (args.wkt, args.input) {
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingSources {
                    wkt: ARG_WKT,
                    input: ARG_INPUT,
                });
            }
            (Some(text), None) => InputSource::Inline(text),
            (None, Some(path)) if path.as_os_str() == STDIN_PATH => InputSource::Stdin,
            (None, Some(path)) => {
                let utf8 = Utf8PathBuf::from_path_buf(path).map_err(|path| {
                    CliError::NonUtf8Path {
                        field: ARG_INPUT,
                        path,
                    }
                })?;
                InputSource::File(utf8)
            }
            (None, None) => InputSource::Stdin,
        };
        Ok(Self {
            source,
            format: args.format.unwrap_or_default(),
            indent: args.indent.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests;
