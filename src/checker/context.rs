use crate::checker::tokenizer::tokenize;

/// Default number of words shown on each side of a misspelling.
pub const DEFAULT_CONTEXT_WORDS: usize = 2;

/// Short excerpt around `word` for human review.
///
/// The line is re-tokenized and the window is centered on the first token whose
/// text equals `word` exactly (case-sensitive). When the same word occurs more
/// than once on a line, every occurrence gets the first one's context. Returns
/// an empty string if `word` is not one of the line's tokens.
pub fn extract(line: &str, word: &str, words_each_side: usize) -> String {
    let words: Vec<&str> = tokenize(line).map(|token| token.text).collect();

    let Some(position) = words.iter().position(|w| *w == word) else {
        return String::new();
    };

    let start = position.saturating_sub(words_each_side);
    let end = position
        .saturating_add(words_each_side)
        .saturating_add(1)
        .min(words.len());

    words[start..end].join(" ")
}
