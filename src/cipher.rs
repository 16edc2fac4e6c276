//! Substitution engine: Caesar and Vigenère transforms
//!
//! Both ciphers are the same per-letter shift. Caesar uses one fixed shift,
//! Vigenère draws the shift for each alphabetic character from a repeating
//! key stream. Non-alphabetic characters are copied through untouched and
//! never advance the key stream, so punctuation cannot desynchronize decryption.

use crate::alphabet::{letter_index, normalize_shift, shift_letter};
use crate::error::{CipherError, Result};
use std::fmt;
use std::str::FromStr;

/// Direction of a Vigenère transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Sign applied to key-stream shifts (+1 or -1)
    pub fn sign(self) -> i64 {
        match self {
            Mode::Encrypt => 1,
            Mode::Decrypt => -1,
        }
    }
}

/// Supported cipher families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Caesar,
    Vigenere,
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => Ok(CipherKind::Caesar),
            "vigenere" => Ok(CipherKind::Vigenere),
            _ => Err(CipherError::UnsupportedCipher(s.to_string())),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Caesar => write!(f, "caesar"),
            CipherKind::Vigenere => write!(f, "vigenere"),
        }
    }
}

/// Repeating sequence of shifts derived from a Vigenère key
///
/// One shift per alphabetic key character, case-insensitive ('a' and 'A' are 0).
/// Non-alphabetic key characters are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStream {
    shifts: Vec<u8>,
}

impl KeyStream {
    /// Build a key stream, failing with `InvalidKey` when the key has no letters
    pub fn new(key: &str) -> Result<Self> {
        let shifts: Vec<u8> = key
            .chars()
            .filter_map(letter_index)
            .map(|(index, _)| index)
            .collect();

        if shifts.is_empty() {
            return Err(CipherError::InvalidKey(format!(
                "vigenere key {:?} contains no alphabetic characters",
                key
            )));
        }

        Ok(Self { shifts })
    }

    /// Shifts in key order
    pub fn shifts(&self) -> &[u8] {
        &self.shifts
    }

    /// Period of the stream
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always false; an empty stream cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

/// Shift every letter of `text` by the same amount
pub fn caesar(text: &str, shift: i64) -> String {
    let shift = normalize_shift(shift) as i64;
    text.chars().map(|c| shift_letter(c, shift)).collect()
}

/// Apply a Vigenère transform with the given key and direction
pub fn vigenere(text: &str, key: &str, mode: Mode) -> Result<String> {
    let stream = KeyStream::new(key)?;
    Ok(vigenere_with_stream(text, &stream, mode))
}

/// Vigenère transform over an already validated key stream
pub fn vigenere_with_stream(text: &str, stream: &KeyStream, mode: Mode) -> String {
    let shifts = stream.shifts();
    let mut cursor = 0;
    let mut output = String::with_capacity(text.len());

    for c in text.chars() {
        if letter_index(c).is_some() {
            let shift = mode.sign() * shifts[cursor] as i64;
            output.push(shift_letter(c, shift));
            cursor = (cursor + 1) % shifts.len();
        } else {
            output.push(c);
        }
    }

    output
}

fn parse_caesar_shift(key: &str) -> Result<i64> {
    key.trim().parse::<i64>().map_err(|_| {
        CipherError::InvalidKey(format!("caesar key {:?} is not an integer", key))
    })
}

fn transform(cipher: &str, key: &str, text: &str, mode: Mode) -> Result<String> {
    let kind = cipher.parse::<CipherKind>()?;
    tracing::debug!(cipher = %kind, ?mode, chars = text.len(), "applying cipher");

    match kind {
        CipherKind::Caesar => {
            let shift = parse_caesar_shift(key)?;
            Ok(caesar(text, mode.sign() * normalize_shift(shift) as i64))
        }
        CipherKind::Vigenere => vigenere(text, key, mode),
    }
}

/// Encrypt `text` with the named cipher
///
/// `key` is an integer shift for caesar and a letter key for vigenere.
///
/// # Errors
/// `UnsupportedCipher` for an unknown cipher name, `InvalidKey` for a key the
/// cipher cannot use.
pub fn encode(cipher: &str, key: &str, text: &str) -> Result<String> {
    transform(cipher, key, text, Mode::Encrypt)
}

/// Decrypt `text` with the named cipher; inverse of [`encode`]
pub fn decode(cipher: &str, key: &str, text: &str) -> Result<String> {
    transform(cipher, key, text, Mode::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_known_scenario() {
        assert_eq!(caesar("Attack at Dawn!", 3), "Dwwdfn dw Gdzq!");
    }

    #[test]
    fn test_caesar_zero_is_identity() {
        let text = "Hello, World! 123";
        assert_eq!(caesar(text, 0), text);
        assert_eq!(caesar(text, 26), text);
    }

    #[test]
    fn test_caesar_round_trip_negative_and_large() {
        let text = "The quick brown fox, jumps over the lazy dog.";
        for k in [-100, -27, -1, 1, 13, 25, 52, 1_000_003] {
            assert_eq!(caesar(&caesar(text, k), -k), text);
        }
    }

    #[test]
    fn test_caesar_preserves_char_count() {
        let text = "naïve café — ok";
        assert_eq!(caesar(text, 5).chars().count(), text.chars().count());
    }

    #[test]
    fn test_vigenere_round_trip_hello() {
        let encrypted = vigenere("HELLO", "key", Mode::Encrypt).unwrap();
        assert_eq!(encrypted, "RIJVS");
        let decrypted = vigenere(&encrypted, "key", Mode::Decrypt).unwrap();
        assert_eq!(decrypted, "HELLO");
    }

    #[test]
    fn test_vigenere_classic_vector() {
        let encrypted = vigenere("ATTACKATDAWN", "LEMON", Mode::Encrypt).unwrap();
        assert_eq!(encrypted, "LXFOPVEFRNHR");
    }

    #[test]
    fn test_vigenere_punctuation_does_not_advance_cursor() {
        let plain = vigenere("ab", "bc", Mode::Encrypt).unwrap();
        let spaced = vigenere("a, b", "bc", Mode::Encrypt).unwrap();
        assert_eq!(plain, "bd");
        assert_eq!(spaced, "b, d");
    }

    #[test]
    fn test_vigenere_key_is_case_insensitive() {
        let lower = vigenere("Hello World", "key", Mode::Encrypt).unwrap();
        let upper = vigenere("Hello World", "KEY", Mode::Encrypt).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_vigenere_key_skips_non_letters() {
        let a = vigenere("attack", "k-e y", Mode::Encrypt).unwrap();
        let b = vigenere("attack", "key", Mode::Encrypt).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_vigenere_empty_key_fails() {
        let err = vigenere("HELLO", "", Mode::Encrypt).unwrap_err();
        assert!(matches!(err, CipherError::InvalidKey(_)));
    }

    #[test]
    fn test_vigenere_non_alphabetic_key_fails() {
        let err = vigenere("HELLO", "123 !", Mode::Decrypt).unwrap_err();
        assert!(matches!(err, CipherError::InvalidKey(_)));
    }

    #[test]
    fn test_single_letter_key_matches_caesar() {
        let text = "Meet me at the usual place.";
        assert_eq!(vigenere(text, "d", Mode::Encrypt).unwrap(), caesar(text, 3));
    }

    #[test]
    fn test_cipher_kind_parse() {
        assert_eq!("caesar".parse::<CipherKind>().unwrap(), CipherKind::Caesar);
        assert_eq!("Vigenere".parse::<CipherKind>().unwrap(), CipherKind::Vigenere);
        assert!(matches!(
            "playfair".parse::<CipherKind>(),
            Err(CipherError::UnsupportedCipher(_))
        ));
    }

    #[test]
    fn test_cipher_kind_display_round_trip() {
        for kind in [CipherKind::Caesar, CipherKind::Vigenere] {
            assert_eq!(kind.to_string().parse::<CipherKind>().unwrap(), kind);
        }
        assert_eq!(CipherKind::Vigenere.to_string(), "vigenere");
    }

    #[test]
    fn test_key_stream_shifts() {
        let stream = KeyStream::new("Le-Mon").unwrap();
        assert_eq!(stream.shifts(), &[11, 4, 12, 14, 13]);
        assert_eq!(stream.len(), 5);
        assert_eq!(
            vigenere_with_stream("ATTACKATDAWN", &stream, Mode::Encrypt),
            "LXFOPVEFRNHR"
        );
    }

    #[test]
    fn test_encode_decode_caesar() {
        let encoded = encode("caesar", "3", "Attack at Dawn!").unwrap();
        assert_eq!(encoded, "Dwwdfn dw Gdzq!");
        assert_eq!(decode("caesar", "3", &encoded).unwrap(), "Attack at Dawn!");
    }

    #[test]
    fn test_encode_caesar_negative_key() {
        assert_eq!(encode("caesar", "-1", "abc").unwrap(), "zab");
    }

    #[test]
    fn test_encode_caesar_non_integer_key() {
        let err = encode("caesar", "three", "abc").unwrap_err();
        assert!(matches!(err, CipherError::InvalidKey(_)));
    }

    #[test]
    fn test_encode_decode_vigenere() {
        let encoded = encode("vigenere", "lemon", "Attack at dawn").unwrap();
        assert_eq!(encoded, "Lxfopv ef rnhr");
        assert_eq!(decode("vigenere", "lemon", &encoded).unwrap(), "Attack at dawn");
    }

    #[test]
    fn test_encode_unsupported_cipher() {
        let err = encode("enigma", "1", "abc").unwrap_err();
        assert_eq!(err, CipherError::UnsupportedCipher("enigma".to_string()));
    }
}
