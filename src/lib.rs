pub mod checker;
pub mod cli;
pub mod config;
pub mod error;

pub use checker::dictionary::Dictionary;
pub use checker::{check, SpellChecker};
pub use config::Config;
pub use error::{Result, SpellscanError};

use serde::Serialize;

/// One misspelled word occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Misspelling {
    /// The word as looked up (lowercased).
    pub word: String,
    /// Dictionary entries within the edit distance limit, closest first.
    pub suggestions: Vec<String>,
    /// Surrounding words from the same line.
    pub context: String,
    /// 1-based line number.
    pub line_number: usize,
    /// 1-based column, counted in characters.
    pub column_number: usize,
}
