//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a tree walk.
///
/// The walk is fail-fast: the first error stops traversal and nothing below
/// the failing directory is emitted.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cannot read directory '{}': {source}", path.display())]
    UnreadableDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a directory: '{}'", .0.display())]
    NotADirectory(PathBuf),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

impl TreeError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::UnreadableDir {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
