use crate::domain::model::{ShiftAmount, ALPHABET_LENGTH};

/// Rotates every `a`..=`z` in `text` forward by `amount` (mod 26).
///
/// Anything outside the lowercase ASCII alphabet, uppercase included, is left
/// where it is. Callers that want case-insensitive rotation lowercase first.
pub fn shift(text: &str, amount: i64) -> String {
    shift_by(text, ShiftAmount::new(amount))
}

pub fn shift_by(text: &str, amount: ShiftAmount) -> String {
    // 位移 0 直接回傳
    if amount.is_identity() {
        return text.to_string();
    }

    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                let offset = (c as u8 - b'a' + amount.value()) % ALPHABET_LENGTH;
                (b'a' + offset) as char
            } else {
                c
            }
        })
        .collect()
}
