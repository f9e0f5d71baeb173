//! Command handlers for the `tok` CLI.
//!
//! Option types and the shared `read_file` helper live here; each
//! submodule implements one command.

use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

mod lex;

pub use lex::{lex_file, lex_source, render};

/// Which refine function drives tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One token per byte.
    #[default]
    Base,
    /// Consecutive letters merged into words.
    Words,
    /// `@name` elements, words, and structural characters.
    Element,
}

impl Mode {
    /// Parse from command line string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "base" => Some(Self::Base),
            "words" => Some(Self::Words),
            "element" => Some(Self::Element),
            _ => None,
        }
    }
}

/// How the token stream is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One `<Type> = "value"` line per token.
    #[default]
    Text,
    /// A JSON array of `{"type", "value"}` objects.
    Json,
    /// `<token type="...">` elements inside a `<tokens>` root.
    Markup,
}

impl Format {
    /// Parse from command line string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "markup" | "xml" => Some(Self::Markup),
            _ => None,
        }
    }
}

/// Options for `tok lex`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexOptions {
    pub path: Option<PathBuf>,
    pub mode: Mode,
    pub format: Format,
    /// Drop `Space` tokens from the output.
    pub skip_spaces: bool,
}

/// Parse `tok lex` arguments (everything after the command name).
///
/// The first non-flag argument is the input path.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions> {
    let mut options = LexOptions::default();

    for arg in args {
        if let Some(mode) = arg.strip_prefix("--mode=") {
            options.mode = Mode::from_str(mode).ok_or_else(|| CliError::UnknownMode(mode.to_string()))?;
        } else if let Some(format) = arg.strip_prefix("--format=") {
            options.format =
                Format::from_str(format).ok_or_else(|| CliError::UnknownFormat(format.to_string()))?;
        } else if arg == "--skip-spaces" || arg == "-s" {
            options.skip_spaces = true;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if options.path.is_none() {
            options.path = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }

    Ok(options)
}

/// Read a file from disk as raw bytes.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
