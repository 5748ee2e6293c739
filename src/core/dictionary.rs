use once_cell::sync::Lazy;
use std::collections::HashSet;

// The 100 most common English words
// (https://www.englishclub.com/vocabulary/common-words-100.htm).
const COMMON_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "person", "into", "year", "your",
    "good", "some", "could", "them", "see", "other", "than", "then", "now", "look", "only",
    "come", "its", "over", "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these", "give", "day",
    "most", "us",
];

static COMMON_ENGLISH: Lazy<Dictionary> = Lazy::new(|| Dictionary {
    words: COMMON_WORDS.iter().copied().collect(),
});

/// Read-only set of lowercase English words.
#[derive(Debug)]
pub struct Dictionary {
    words: HashSet<&'static str>,
}

impl Dictionary {
    pub fn common_english() -> &'static Dictionary {
        &COMMON_ENGLISH
    }

    /// Case-sensitive; the caller lowercases.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
