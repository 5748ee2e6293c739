use crate::domain::ports::Decoder;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Emitted for any sequence the table does not know.
pub const UNKNOWN: char = '*';

static MORSE_TABLE: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    HashMap::from([
        (".-", 'a'),
        ("-...", 'b'),
        ("-.-.", 'c'),
        ("-..", 'd'),
        (".", 'e'),
        ("..-.", 'f'),
        ("--.", 'g'),
        ("....", 'h'),
        ("..", 'i'),
        (".---", 'j'),
        ("-.-", 'k'),
        (".-..", 'l'),
        ("--", 'm'),
        ("-.", 'n'),
        ("---", 'o'),
        (".--.", 'p'),
        ("--.-", 'q'),
        (".-.", 'r'),
        ("...", 's'),
        ("-", 't'),
        ("..-", 'u'),
        ("...-", 'v'),
        (".--", 'w'),
        ("-..-", 'x'),
        ("-.--", 'y'),
        ("--..", 'z'),
        ("-----", '0'),
        (".----", '1'),
        ("..---", '2'),
        ("...--", '3'),
        ("....-", '4'),
        (".....", '5'),
        ("-....", '6'),
        ("--...", '7'),
        ("---..", '8'),
        ("----.", '9'),
        (".-.-.-", '.'),
        ("--..--", ','),
        ("..--..", '?'),
        (".----.", '\''),
        ("-.-.--", '!'),
        ("-..-.", '/'),
        ("-.--.", '('),
        ("-.--.-", ')'),
        (".-...", '&'),
        ("---...", ':'),
        ("-.-.-.", ';'),
        ("-...-", '='),
        (".-.-.", '+'),
        ("-....-", '-'),
        ("..--.-", '_'),
        (".-..-.", '"'),
        ("...-..-", '$'),
        (".--.-.", '@'),
    ])
});

pub fn lookup(sequence: &str) -> char {
    MORSE_TABLE.get(sequence).copied().unwrap_or(UNKNOWN)
}

/// Decodes digit-encoded Morse: `0` is a dash, `1` a dot, `-` ends a letter
/// and a space ends a word.
pub fn decode_morse(message: &str) -> String {
    let mut output = String::with_capacity(message.len() / 2);
    let mut buffer = String::new();

    for c in message.chars() {
        match c {
            '0' => buffer.push('-'),
            '1' => buffer.push('.'),
            ' ' => {
                if !buffer.is_empty() {
                    output.push(lookup(&buffer));
                }
                buffer.clear();
                output.push(' ');
            }
            // 分隔符即使緩衝區為空也要解碼（得到 '*'）
            '-' => {
                output.push(lookup(&buffer));
                buffer.clear();
            }
            other => {
                tracing::trace!("Unknown Morse character '{}'", other);
                buffer.clear();
                output.push(UNKNOWN);
            }
        }
    }

    if !buffer.is_empty() {
        output.push(lookup(&buffer));
    }

    output
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MorseDecoder;

impl Decoder for MorseDecoder {
    fn name(&self) -> &'static str {
        "morse"
    }

    fn decode(&self, input: &str) -> String {
        decode_morse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_words() {
        // s-o-s
        assert_eq!(decode_morse("111-000-111"), "sos");
        // h-i i-t
        assert_eq!(decode_morse("1111-11 11-0"), "hi it");
    }

    #[test]
    fn test_trailing_buffer_is_flushed() {
        assert_eq!(decode_morse("10"), "a");
        assert_eq!(decode_morse("10-"), "a");
    }

    #[test]
    fn test_empty_separator_yields_unknown() {
        assert_eq!(decode_morse("10--0"), "a*t");
    }

    #[test]
    fn test_unknown_sequences_and_characters() {
        assert_eq!(decode_morse("11111111"), "*");
        assert_eq!(decode_morse("1x0"), "*t");
    }

    #[test]
    fn test_space_flushes_and_is_kept() {
        assert_eq!(decode_morse("1 1"), "e e");
        assert_eq!(decode_morse("  "), "  ");
    }

    #[test]
    fn test_lookup_covers_digits_and_punctuation() {
        assert_eq!(lookup("-----"), '0');
        assert_eq!(lookup(".--.-."), '@');
        assert_eq!(lookup(""), UNKNOWN);
    }
}
