//! Brute-force Caesar solver.
//!
//! Every one of the 26 rotations of the (lowercased) cipher text is scored
//! against the common-English dictionary and the best one wins. The scan runs
//! in ascending shift order and only a strictly greater score replaces the
//! current best, so among equal scores the lowest shift is kept.

use crate::core::dictionary::Dictionary;
use crate::core::scorer::score;
use crate::core::shift::shift_by;
use crate::domain::model::{Candidate, Score, ShiftAmount};
use crate::domain::ports::Decoder;

/// All 26 rotations of `cipher_text`, lowercased first, in ascending shift order.
pub fn candidates(cipher_text: &str, dictionary: &Dictionary) -> Vec<Candidate> {
    let lowered = cipher_text.to_ascii_lowercase();

    ShiftAmount::all()
        .map(|amount| {
            let text = shift_by(&lowered, amount);
            let score = score(&text, dictionary);
            Candidate {
                shift: amount,
                text,
                score,
            }
        })
        .collect()
}

pub fn best_candidate(cipher_text: &str, dictionary: &Dictionary) -> Candidate {
    let mut best_score = Score::LOWEST;
    let mut best: Option<Candidate> = None;

    for candidate in candidates(cipher_text, dictionary) {
        if candidate.score > best_score {
            best_score = candidate.score;
            best = Some(candidate);
        }
    }

    // 分數不可能低於 LOWEST，位移 0 一定會被選上一次
    best.unwrap_or_else(|| Candidate {
        shift: ShiftAmount::default(),
        text: cipher_text.to_ascii_lowercase(),
        score: Score::ZERO,
    })
}

/// Most English-looking rotation of `cipher_text`.
pub fn solve(cipher_text: &str) -> String {
    CaesarSolver::new().decode(cipher_text)
}

#[derive(Debug, Clone, Copy)]
pub struct CaesarSolver {
    dictionary: &'static Dictionary,
}

impl CaesarSolver {
    pub fn new() -> Self {
        Self {
            dictionary: Dictionary::common_english(),
        }
    }

    pub fn best_candidate(&self, cipher_text: &str) -> Candidate {
        best_candidate(cipher_text, self.dictionary)
    }
}

impl Default for CaesarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for CaesarSolver {
    fn name(&self) -> &'static str {
        "caesar"
    }

    fn decode(&self, input: &str) -> String {
        let best = self.best_candidate(input);
        tracing::debug!(
            "Best shift {} scored {:.2} for '{}'",
            best.shift.value(),
            best.score.value(),
            input
        );
        best.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shift::shift;

    #[test]
    fn test_recovers_shifted_sentence() {
        let cipher = shift("the cat sat on the mat", 3);
        assert_eq!(cipher, "wkh fdw vdw rq wkh pdw");
        assert_eq!(solve(&cipher), "the cat sat on the mat");
    }

    #[test]
    fn test_winner_beats_most_other_candidates() {
        let dictionary = Dictionary::common_english();
        let all = candidates("wkh fdw vdw rq wkh pdw", dictionary);
        assert_eq!(all.len(), 26);

        let best = best_candidate("wkh fdw vdw rq wkh pdw", dictionary);
        assert_eq!(best.shift.value(), 23);
        let beaten = all.iter().filter(|c| c.score < best.score).count();
        assert!(beaten >= 20, "only beat {} candidates", beaten);
    }

    #[test]
    fn test_plain_english_passes_through() {
        assert_eq!(solve("the cat sat"), "the cat sat");
    }

    #[test]
    fn test_input_is_lowercased_before_shifting() {
        assert_eq!(solve("Wkh Fdw"), "the cat");
    }

    #[test]
    fn test_only_ascii_is_case_folded() {
        // 開爾文符號 U+212A 不可變成 'k' 再被位移
        assert_eq!(solve("\u{212A}"), "\u{212A}");
        assert_eq!(solve("\u{212A} WKH"), "\u{212A} the");
    }

    #[test]
    fn test_ties_keep_lowest_shift() {
        // 沒有任何字典字，所有分數都是 0，保留位移 0
        let best = CaesarSolver::new().best_candidate("fdw");
        assert_eq!(best.shift.value(), 0);
        assert_eq!(best.text, "fdw");
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let best = CaesarSolver::new().best_candidate("");
        assert_eq!(best.shift.value(), 0);
        assert_eq!(best.text, "");
        assert_eq!(best.score, Score::ZERO);
    }

    #[test]
    fn test_candidates_follow_shift_order() {
        let all = candidates("abc", Dictionary::common_english());
        assert_eq!(all[0].text, "abc");
        assert_eq!(all[1].text, "bcd");
        assert_eq!(all[25].text, "zab");
    }
}
