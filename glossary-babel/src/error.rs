//! Error types for site generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering pages
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("term '{term}' cannot be used as a file name")]
    InvalidFileName { term: String },

    #[error("the page for term '{term}' would overwrite '{file}'")]
    FileNameCollision { term: String, file: String },

    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Errors raised while writing a site to disk
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("output directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
