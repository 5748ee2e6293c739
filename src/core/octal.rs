use crate::domain::ports::Decoder;
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[, \r\n]+").unwrap());

/// Value of one octal token, truncated to a byte.
///
/// Digits are read right to left; only `1`..=`7` add to the value, but every
/// character, valid or not, takes up a position.
pub fn octal_to_char(token: &str) -> char {
    let mut value: u32 = 0;
    let mut weight: u32 = 1;

    for byte in token.bytes().rev() {
        let digit = byte.wrapping_sub(b'0');
        if (1..8).contains(&digit) {
            value = value.wrapping_add(u32::from(digit).wrapping_mul(weight));
        }
        weight = weight.wrapping_mul(8);
    }

    char::from(value as u8)
}

pub fn decode_octal(message: &str) -> String {
    TOKEN_SEPARATORS
        .split(message)
        .filter(|token| !token.is_empty())
        .map(octal_to_char)
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OctalDecoder;

impl Decoder for OctalDecoder {
    fn name(&self) -> &'static str {
        "octal"
    }

    fn decode(&self, input: &str) -> String {
        decode_octal(input)
    }
}
