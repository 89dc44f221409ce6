use crate::error::{self, InputKind, Result};
use std::collections::HashSet;
use std::path::Path;

/// The reference word list.
///
/// Entries keep their original order, which decides ties between equally close
/// suggestions. Membership goes through a hashed index built alongside.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from entries taken as-is (no normalization).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// Parse a newline-separated word list: entries are trimmed and lowercased,
    /// blank lines are dropped.
    pub fn from_word_list(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_lowercase),
        )
    }

    /// Load a word list file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = error::read_to_string(InputKind::Dictionary, path)?;
        let dictionary = Self::from_word_list(&content);

        log::info!(
            "Loaded {} dictionary entries from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Prepend words that must always be accepted, skipping ones already present.
    pub fn with_known_words<I, S>(mut self, known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prefix = Vec::new();
        for word in known {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && self.index.insert(word.clone()) {
                prefix.push(word);
            }
        }

        if !prefix.is_empty() {
            log::debug!("Injected always-known words: {:?}", prefix);
            prefix.append(&mut self.words);
            self.words = prefix;
        }

        self
    }

    /// Exact membership test; callers pass the lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Entries in their original order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
