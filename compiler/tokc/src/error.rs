//! Errors reported by the `tok` CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the input file failed.
    #[error("{}", describe_read_error(.path, .source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unknown mode '{0}', options: base, words, element")]
    UnknownMode(String),

    #[error("unknown format '{0}', options: text, json, markup")]
    UnknownFormat(String),

    #[error("missing file path")]
    MissingPath,

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_read_error(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {err}"),
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
