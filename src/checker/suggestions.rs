use crate::checker::dictionary::Dictionary;
use rayon::prelude::*;

/// Default maximum edit distance for a dictionary entry to count as a suggestion.
pub const DEFAULT_EDIT_DISTANCE_LIMIT: usize = 2;

/// Rank dictionary entries within `limit` edits of `word`, closest first.
///
/// Distances are computed in parallel, but the collected candidates keep
/// dictionary order and the sort is stable, so entries at the same distance
/// come out in the order the dictionary lists them.
pub fn rank(word: &str, dictionary: &Dictionary, limit: usize) -> Vec<String> {
    let mut candidates: Vec<(usize, &String)> = dictionary
        .words()
        .par_iter()
        .filter_map(|entry| {
            let distance = edit_distance(word, entry);
            (distance <= limit).then_some((distance, entry))
        })
        .collect();

    candidates.sort_by_key(|(distance, _)| *distance);

    candidates
        .into_iter()
        .map(|(_, entry)| entry.clone())
        .collect()
}

/// Calculate Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, item) in matrix[0].iter_mut().enumerate() {
        *item = j;
    }

    for (i, a_char) in a_chars.iter().enumerate() {
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };

            matrix[i + 1][j + 1] = std::cmp::min(
                std::cmp::min(
                    matrix[i][j + 1] + 1, // deletion
                    matrix[i + 1][j] + 1, // insertion
                ),
                matrix[i][j] + cost, // substitution
            );
        }
    }

    matrix[a_len][b_len]
}
