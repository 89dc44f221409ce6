pub mod classifier;
pub mod context;
pub mod dictionary;
pub mod suggestions;
pub mod tokenizer;

use crate::{Config, Misspelling};
use classifier::Verdict;
use dictionary::Dictionary;

/// Report every misspelled word occurrence in `content`.
///
/// Results follow the scan order: line by line, left to right within a line.
/// The same word misspelled twice yields two results.
pub fn check(
    content: &str,
    dictionary: &Dictionary,
    edit_distance_limit: usize,
) -> Vec<Misspelling> {
    let config = Config {
        edit_distance_limit,
        ..Config::default()
    };
    SpellChecker::new(dictionary, &config).check(content)
}

/// Checks text against a borrowed dictionary with fixed ranking settings.
pub struct SpellChecker<'d> {
    dictionary: &'d Dictionary,
    edit_distance_limit: usize,
    context_words: usize,
}

impl<'d> SpellChecker<'d> {
    pub fn new(dictionary: &'d Dictionary, config: &Config) -> Self {
        if dictionary.is_empty() {
            log::warn!("Dictionary is empty; every checked word will be reported");
        }

        Self {
            dictionary,
            edit_distance_limit: config.edit_distance_limit,
            context_words: config.context_words,
        }
    }

    pub fn check(&self, content: &str) -> Vec<Misspelling> {
        let mut errors = Vec::new();
        let mut skipped = 0;

        for (line_index, line) in content.lines().enumerate() {
            for token in tokenizer::tokenize(line) {
                if let Verdict::Skip(reason) = classifier::classify(&token, line) {
                    log::trace!("Skipping {:?} ({:?})", token.text, reason);
                    skipped += 1;
                    continue;
                }

                let word_lower = token.text.to_lowercase();
                if self.dictionary.contains(&word_lower) {
                    continue;
                }

                let suggestions =
                    suggestions::rank(&word_lower, self.dictionary, self.edit_distance_limit);

                errors.push(Misspelling {
                    word: word_lower,
                    suggestions,
                    context: context::extract(line, token.text, self.context_words),
                    line_number: line_index + 1,
                    column_number: token.offset + 1,
                });
            }
        }

        log::debug!(
            "Checked text against {} entries: {} misspellings, {} tokens skipped",
            self.dictionary.len(),
            errors.len(),
            skipped
        );

        errors
    }
}
