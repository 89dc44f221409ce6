//! Error types for loading the checker's inputs.
//!
//! The checking engine itself cannot fail: empty inputs, unknown characters and
//! missing dictionary entries are all reported as data. Only reading the word
//! list and the text to check from disk is fallible.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Dictionary,
    Text,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Dictionary => write!(f, "dictionary"),
            InputKind::Text => write!(f, "input"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SpellscanError {
    /// The file does not exist.
    #[error("{kind} file not found: {}", .path.display())]
    NotFound { kind: InputKind, path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("failed to read {kind} file {}", .path.display())]
    Read {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SpellscanError>;

/// Read a whole input file, distinguishing a missing file from an unreadable one.
pub fn read_to_string(kind: InputKind, path: &std::path::Path) -> Result<String> {
    if !path.exists() {
        return Err(SpellscanError::NotFound {
            kind,
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|source| SpellscanError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })
}
