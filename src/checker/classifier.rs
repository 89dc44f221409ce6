use crate::checker::tokenizer::Token;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Decimal digits in any script, the same set the tokenizer treats as word characters.
    static ref ONLY_DIGITS: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Why a token was left out of the dictionary lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Digits,
    ProperNoun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Skip(SkipReason),
    Check,
}

/// What sits immediately to the left of a token, ignoring whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preceding {
    LineStart,
    Period,
    Other,
}

pub fn classify(token: &Token<'_>, line: &str) -> Verdict {
    if is_only_digits(token.text) {
        return Verdict::Skip(SkipReason::Digits);
    }

    if is_proper_noun(token.text, line, token.byte_offset) {
        return Verdict::Skip(SkipReason::ProperNoun);
    }

    Verdict::Check
}

fn is_only_digits(word: &str) -> bool {
    ONLY_DIGITS.is_match(word)
}

/// Capitalized words are assumed to be proper nouns unless they start a line
/// or follow a period. A proper noun that opens a sentence is therefore still
/// checked against the dictionary.
fn is_proper_noun(word: &str, line: &str, byte_offset: usize) -> bool {
    if !word.starts_with(|c: char| c.is_ascii_uppercase()) {
        return false;
    }

    match preceding(line, byte_offset) {
        Preceding::LineStart => false,
        Preceding::Period => false,
        Preceding::Other => true,
    }
}

fn preceding(line: &str, byte_offset: usize) -> Preceding {
    match line[..byte_offset].chars().rev().find(|c| !c.is_whitespace()) {
        None => Preceding::LineStart,
        Some('.') => Preceding::Period,
        Some(_) => Preceding::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::tokenizer::tokenize;

    fn verdicts(line: &str) -> Vec<(&str, Verdict)> {
        tokenize(line).map(|t| (t.text, classify(&t, line))).collect()
    }

    #[test]
    fn test_digits_are_skipped() {
        assert_eq!(
            verdicts("in 1984 and 2x"),
            vec![
                ("in", Verdict::Check),
                ("1984", Verdict::Skip(SkipReason::Digits)),
                ("and", Verdict::Check),
                ("2x", Verdict::Check),
            ]
        );
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        assert_eq!(
            verdicts("in ١٢٣ and ２０２４"),
            vec![
                ("in", Verdict::Check),
                ("١٢٣", Verdict::Skip(SkipReason::Digits)),
                ("and", Verdict::Check),
                ("２０２４", Verdict::Skip(SkipReason::Digits)),
            ]
        );
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper_noun() {
        let v = verdicts("we met Alice, then Bob");
        assert_eq!(v[2], ("Alice", Verdict::Skip(SkipReason::ProperNoun)));
        assert_eq!(v[4], ("Bob", Verdict::Skip(SkipReason::ProperNoun)));
    }

    #[test]
    fn test_sentence_start_is_checked() {
        assert_eq!(verdicts("Cxt")[0], ("Cxt", Verdict::Check));
        assert_eq!(verdicts("   Indented")[0], ("Indented", Verdict::Check));
        let v = verdicts("It ended.  Then more");
        assert_eq!(v[0], ("It", Verdict::Check));
        assert_eq!(v[2], ("Then", Verdict::Check));
    }

    #[test]
    fn test_sentence_initial_proper_noun_is_checked() {
        // Accepted limitation of the heuristic.
        assert_eq!(verdicts("Paris is big.")[0], ("Paris", Verdict::Check));
    }

    #[test]
    fn test_lowercase_is_always_checked() {
        assert_eq!(verdicts("a, b")[1], ("b", Verdict::Check));
    }

    #[test]
    fn test_preceding_three_way() {
        assert_eq!(preceding("Word", 0), Preceding::LineStart);
        assert_eq!(preceding("end. Word", 5), Preceding::Period);
        assert_eq!(preceding("end, Word", 5), Preceding::Other);
    }
}
