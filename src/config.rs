use crate::checker::context::DEFAULT_CONTEXT_WORDS;
use crate::checker::suggestions::DEFAULT_EDIT_DISTANCE_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest edit distance at which a dictionary entry is still suggested.
    pub edit_distance_limit: usize,

    /// Words shown on each side of a misspelling in its context excerpt.
    pub context_words: usize,

    /// Words injected into every dictionary before checking.
    pub known_words: Vec<String>,
}

fn default_edit_distance_limit() -> usize {
    DEFAULT_EDIT_DISTANCE_LIMIT
}

fn default_context_words() -> usize {
    DEFAULT_CONTEXT_WORDS
}

// Stock English word lists commonly leave out the article "a".
fn default_known_words() -> Vec<String> {
    vec!["a".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edit_distance_limit: default_edit_distance_limit(),
            context_words: default_context_words(),
            known_words: default_known_words(),
        }
    }
}

impl Config {
    /// Apply command-line overrides on top of the defaults.
    ///
    /// `known_words` replaces the default list when non-empty; `no_known_words`
    /// clears it entirely.
    pub fn load(
        edit_distance_limit: usize,
        context_words: usize,
        known_words: Vec<String>,
        no_known_words: bool,
    ) -> Self {
        let mut config = Self {
            edit_distance_limit,
            context_words,
            ..Self::default()
        };

        if no_known_words {
            config.known_words.clear();
        } else if !known_words.is_empty() {
            config.known_words = known_words;
        }

        config
    }
}
