// src/generators/charset.rs
use serde::{Deserialize, Serialize};

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

// Glyphs that are easy to misread; stripped from every alphabet when
// ambiguous exclusion is requested, symbols included.
const AMBIGUOUS: &[u8] = b"loIO01|";

/// The four character classes the generator and the entropy math know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    /// Alphabet used for sampling, with ambiguous glyphs optionally removed.
    pub fn chars(self, exclude_ambiguous: bool) -> Vec<u8> {
        let mut chars = self.alphabet().to_vec();
        if exclude_ambiguous {
            chars.retain(|c| !AMBIGUOUS.contains(c));
        }
        chars
    }

    /// Pool-size constant for theoretical entropy. Independent of the
    /// ambiguous-exclusion variant: 26/26/10/32.
    pub fn pool_size(self) -> u32 {
        match self {
            CharacterClass::Lower => 26,
            CharacterClass::Upper => 26,
            CharacterClass::Digit => 10,
            CharacterClass::Symbol => 32,
        }
    }

    /// Membership predicate used by the analyzer to decide which pools a
    /// password draws from.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharacterClass::Lower => c.is_ascii_lowercase(),
            CharacterClass::Upper => c.is_ascii_uppercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Symbol => !c.is_ascii_alphanumeric(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lower => "lowercase letters",
            CharacterClass::Upper => "uppercase letters",
            CharacterClass::Digit => "numbers",
            CharacterClass::Symbol => "symbols",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_exclusion_strips_every_alphabet() {
        for class in CharacterClass::ALL {
            let chars = class.chars(true);
            assert!(!chars.is_empty());
            for c in AMBIGUOUS {
                assert!(!chars.contains(c), "{:?} kept ambiguous {}", class, *c as char);
            }
        }
        // The pipe is a symbol and must be gone too.
        assert!(CharacterClass::Symbol.chars(false).contains(&b'|'));
        assert!(!CharacterClass::Symbol.chars(true).contains(&b'|'));
    }

    #[test]
    fn pool_sizes_ignore_exclusion() {
        assert_eq!(CharacterClass::Lower.pool_size(), 26);
        assert_eq!(CharacterClass::Upper.pool_size(), 26);
        assert_eq!(CharacterClass::Digit.pool_size(), 10);
        assert_eq!(CharacterClass::Symbol.pool_size(), 32);
    }
}
