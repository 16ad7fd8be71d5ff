//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use traveltime_wkt_cli::CliError;

fn main() {
    match traveltime_wkt_cli::run() {
        Ok(()) => {}
        // Help and version requests surface as Clap errors with their own
        // exit codes.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("traveltime-wkt: {err}");
            std::process::exit(1);
        }
    }
}
