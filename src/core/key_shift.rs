use crate::domain::model::ALPHABET_LENGTH;
use crate::utils::error::{Result, SolverError};

/// Undoes a repeating-key additive shift.
///
/// The input is lowercased. Each `a`..=`z` is shifted back by the key byte at
/// its position among the letters seen so far; whitespace and punctuation are
/// copied through and do not consume key characters.
pub fn decrypt(encrypted: &str, key: &str) -> Result<String> {
    let key = key.as_bytes();
    if key.is_empty() {
        return Err(SolverError::InvalidKey {
            reason: "key is empty".to_string(),
        });
    }

    let mut letters_seen = 0usize;
    let decrypted = encrypted
        .to_ascii_lowercase()
        .chars()
        .map(|c| {
            if !c.is_ascii_lowercase() {
                return c;
            }
            let k = key[letters_seen % key.len()];
            letters_seen += 1;
            let offset = (i32::from(c as u8) - i32::from(k)).rem_euclid(i32::from(ALPHABET_LENGTH));
            (b'a' + offset as u8) as char
        })
        .collect();

    Ok(decrypted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_of_a_is_identity() {
        assert_eq!(decrypt("hello world", "a").unwrap(), "hello world");
    }

    #[test]
    fn test_repeating_key() {
        // 以 "ab" 為鑰匙交替位移 0 與 1
        assert_eq!(decrypt("aaaa", "ab").unwrap(), "azaz");
        assert_eq!(decrypt("lxfopv", "lemon").unwrap(), "attack");
    }

    #[test]
    fn test_non_letters_do_not_advance_key() {
        assert_eq!(decrypt("a a", "ab").unwrap(), "a z");
        assert_eq!(decrypt("b, c!", "b").unwrap(), "a, b!");
    }

    #[test]
    fn test_input_is_lowercased() {
        assert_eq!(decrypt("HELLO", "a").unwrap(), "hello");
    }

    #[test]
    fn test_non_ascii_is_not_folded_into_letters() {
        assert_eq!(decrypt("\u{212A}b", "b").unwrap(), "\u{212A}a");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = decrypt("abc", "").unwrap_err();
        assert!(matches!(err, SolverError::InvalidKey { .. }));
    }
}
