use crate::core::dictionary::Dictionary;
use crate::domain::model::Score;

/// English-likeness of `text`: dictionary hits over whitespace-separated tokens.
/// Text with no tokens scores 0.0.
pub fn score(text: &str, dictionary: &Dictionary) -> Score {
    let mut tokens = 0;
    let mut hits = 0;

    for word in text.split_whitespace() {
        tokens += 1;
        if dictionary.contains(word) {
            hits += 1;
        }
    }

    Score::from_hits(hits, tokens)
}
