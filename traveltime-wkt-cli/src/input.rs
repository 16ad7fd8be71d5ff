//! Resolve where the WKT text comes from and read it.

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

use crate::CliError;

/// Path value that selects standard input.
pub(crate) const STDIN_PATH: &str = "-";

/// Where the WKT text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputSource {
    /// Text given directly on the command line or in configuration.
    Inline(String),
    /// A UTF-8 file path.
    File(Utf8PathBuf),
    /// Standard input.
    Stdin,
}

impl InputSource {
    /// Read the WKT text, taking stdin from `stdin`.
    pub(crate) fn read(&self, stdin: &mut impl Read) -> Result<String, CliError> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::File(path) => read_file(path).map_err(|source| CliError::ReadInput {
                path: path.clone(),
                source,
            }),
            Self::Stdin => {
                let mut text = String::new();
                stdin
                    .read_to_string(&mut text)
                    .map_err(CliError::ReadStdin)?;
                Ok(text)
            }
        }
    }
}

fn read_file(path: &Utf8Path) -> io::Result<String> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}
