use serde::{Deserialize, Serialize};

/// 字母表長度
pub const ALPHABET_LENGTH: u8 = 26;

/// Rotation offset, always kept in `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ShiftAmount(u8);

impl ShiftAmount {
    pub fn new(amount: i64) -> Self {
        Self(amount.rem_euclid(ALPHABET_LENGTH as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 0
    }

    /// Every amount from 0 to 25 in ascending order.
    pub fn all() -> impl Iterator<Item = ShiftAmount> {
        (0..ALPHABET_LENGTH).map(ShiftAmount)
    }
}

/// Fraction of tokens found in the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    /// Below every real score; the selector starts from here.
    pub const LOWEST: Score = Score(f64::MIN);
    pub const ZERO: Score = Score(0.0);

    pub fn from_hits(hits: usize, tokens: usize) -> Self {
        if tokens == 0 {
            return Self::ZERO;
        }
        Self(hits as f64 / tokens as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub shift: ShiftAmount,
    pub text: String,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodeResult {
    pub original: String,
    pub decoded: String,
    /// Output of the first stage when decoders are chained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<String>,
}

impl DecodeResult {
    pub fn new(original: impl Into<String>, decoded: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            decoded: decoded.into(),
            intermediate: None,
        }
    }

    pub fn with_intermediate(mut self, intermediate: impl Into<String>) -> Self {
        self.intermediate = Some(intermediate.into());
        self
    }
}

/// Everything a file run produced once all line tasks were joined.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    pub results: Vec<DecodeResult>,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SolveFile(String),
    SolveString(String),
    Undefined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_amount_is_reduced_mod_26() {
        assert_eq!(ShiftAmount::new(0).value(), 0);
        assert_eq!(ShiftAmount::new(26).value(), 0);
        assert_eq!(ShiftAmount::new(29).value(), 3);
        assert_eq!(ShiftAmount::new(-1).value(), 25);
        assert_eq!(ShiftAmount::new(-27).value(), 25);
    }

    #[test]
    fn test_all_amounts_ascending() {
        let amounts: Vec<u8> = ShiftAmount::all().map(ShiftAmount::value).collect();
        assert_eq!(amounts, (0..26).collect::<Vec<u8>>());
    }

    #[test]
    fn test_score_from_hits() {
        assert_eq!(Score::from_hits(3, 4).value(), 0.75);
        assert_eq!(Score::from_hits(0, 0), Score::ZERO);
        assert!(Score::LOWEST < Score::ZERO);
    }
}
