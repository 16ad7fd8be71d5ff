//! Error types emitted by the `traveltime-wkt` CLI.

use std::path::PathBuf;
use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use traveltime_wkt_core::ParseError;

/// Errors emitted by the `traveltime-wkt` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Both an inline WKT string and an input file were supplied.
    #[error("pass either --{wkt} or --{input}, not both")]
    ConflictingSources {
        /// Flag carrying inline WKT.
        wkt: &'static str,
        /// Flag carrying the input path.
        input: &'static str,
    },
    /// The input path is not valid UTF-8.
    #[error("{field} path {path:?} is not valid UTF-8")]
    NonUtf8Path {
        /// Flag the path was given through.
        field: &'static str,
        /// The rejected path.
        path: PathBuf,
    },
    /// Reading the input file failed.
    #[error("failed to read WKT from {path:?}: {source}")]
    ReadInput {
        /// File that could not be read.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading standard input failed.
    #[error("failed to read WKT from stdin: {0}")]
    ReadStdin(#[source] std::io::Error),
    /// The input text was rejected by the WKT parser.
    #[error("failed to parse WKT: {source}")]
    ParseWkt {
        /// Parser failure.
        #[source]
        source: ParseError,
    },
    /// Serialising the geometry as JSON failed.
    #[error("failed to serialise geometry: {0}")]
    SerialiseGeometry(#[source] serde_json::Error),
    /// Writing the rendered geometry failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
