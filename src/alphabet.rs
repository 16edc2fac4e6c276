//! Latin alphabet helpers shared by the cipher engine and the analyzer
//!
//! A single case-insensitive index / case-preserving restore pair. Only the
//! ASCII letters A-Z and a-z are alphabetic; everything else passes through.

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Letter case, remembered so a shifted letter can be restored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Upper,
    Lower,
}

impl Case {
    fn base(self) -> u8 {
        match self {
            Case::Upper => b'A',
            Case::Lower => b'a',
        }
    }
}

/// Position of `c` in the alphabet (0-25) together with its case,
/// or `None` for non-alphabetic characters
pub fn letter_index(c: char) -> Option<(u8, Case)> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A', Case::Upper))
    } else if c.is_ascii_lowercase() {
        Some((c as u8 - b'a', Case::Lower))
    } else {
        None
    }
}

/// Inverse of [`letter_index`]; `index` must be below 26
pub fn restore_letter(index: u8, case: Case) -> char {
    debug_assert!((index as usize) < ALPHABET_LEN);
    (case.base() + index) as char
}

/// Map any integer shift into `0..26`
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Shift one letter, preserving case; non-alphabetic characters are returned unchanged
pub fn shift_letter(c: char, shift: i64) -> char {
    match letter_index(c) {
        Some((index, case)) => {
            let shifted = (index + normalize_shift(shift)) % ALPHABET_LEN as u8;
            restore_letter(shifted, case)
        }
        None => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_classifies() {
        assert_eq!(letter_index('A'), Some((0, Case::Upper)));
        assert_eq!(letter_index('z'), Some((25, Case::Lower)));
        assert_eq!(letter_index('!'), None);
        assert_eq!(letter_index('é'), None);
        assert_eq!(letter_index('5'), None);
    }

    #[test]
    fn test_restore_inverts_index() {
        for c in ('A'..='Z').chain('a'..='z') {
            let (index, case) = letter_index(c).unwrap();
            assert_eq!(restore_letter(index, case), c);
        }
    }

    #[test]
    fn test_normalize_shift() {
        assert_eq!(normalize_shift(0), 0);
        assert_eq!(normalize_shift(26), 0);
        assert_eq!(normalize_shift(-1), 25);
        assert_eq!(normalize_shift(-27), 25);
        assert_eq!(normalize_shift(53), 1);
        assert_eq!(normalize_shift(i64::MIN), normalize_shift(i64::MIN % 26));
    }

    #[test]
    fn test_shift_letter_wraps_and_keeps_case() {
        assert_eq!(shift_letter('z', 1), 'a');
        assert_eq!(shift_letter('Z', 1), 'A');
        assert_eq!(shift_letter('a', -1), 'z');
        assert_eq!(shift_letter('M', 13), 'Z');
    }

    #[test]
    fn test_shift_letter_passthrough() {
        for c in [' ', '!', '7', '\n', 'ß', '日'] {
            assert_eq!(shift_letter(c, 11), c);
            assert_eq!(shift_letter(c, -4), c);
        }
    }
}
