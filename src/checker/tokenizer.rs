use lazy_static::lazy_static;
use regex::{Matches, Regex};

lazy_static! {
    /// A maximal run of word characters (letters, digits, underscore).
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

/// A word-like substring of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the first character within the line.
    pub byte_offset: usize,
    /// Character (codepoint) offset of the first character within the line.
    pub offset: usize,
}

/// Lazily yields the tokens of one line, left to right.
///
/// Calling [`tokenize`] again on the same line restarts the scan.
pub struct Tokens<'a> {
    line: &'a str,
    matches: Matches<'static, 'a>,
    // Character count up to `last_byte`, so offsets are computed incrementally.
    last_byte: usize,
    last_offset: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matches.next()?;

        self.last_offset += self.line[self.last_byte..m.start()].chars().count();
        self.last_byte = m.start();

        Some(Token {
            text: m.as_str(),
            byte_offset: m.start(),
            offset: self.last_offset,
        })
    }
}

pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens {
        line,
        matches: WORD.find_iter(line),
        last_byte: 0,
        last_offset: 0,
    }
}
