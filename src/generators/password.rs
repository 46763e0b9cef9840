// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::GenerationConfig;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate(&self, config: &GenerationConfig) -> Result<String> {
        generate(config)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a password with guaranteed class coverage.
///
/// One character is drawn from every selected class up front, the rest come
/// uniformly from the union of the selected alphabets, and the whole sequence
/// is then shuffled so the guaranteed characters do not sit in fixed leading
/// positions. All draws and the shuffle use the OS CSPRNG.
pub fn generate(config: &GenerationConfig) -> Result<String> {
    let classes = config.selected_classes();
    if classes.is_empty() {
        return Err(GeneratorError::InvalidConfig(
            "at least one character class must be selected".to_string(),
        ));
    }
    if config.length < classes.len() {
        return Err(GeneratorError::InvalidConfig(format!(
            "length {} cannot cover {} selected character classes",
            config.length,
            classes.len()
        )));
    }

    let mut rng = OsRng;
    let mut pool: Vec<u8> = Vec::new();
    let mut password: Vec<u8> = Vec::with_capacity(config.length);

    // One guaranteed character per selected class; the union alphabet
    // accumulates for the remaining draws.
    for class in &classes {
        let alphabet = class.chars(config.exclude_ambiguous);
        password.push(alphabet[rng.gen_range(0..alphabet.len())]);
        pool.extend_from_slice(&alphabet);
    }

    for _ in 0..config.length - classes.len() {
        password.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Uniform Fisher-Yates; removes the positional bias the guaranteed
    // draws would otherwise introduce.
    password.shuffle(&mut rng);

    Ok(password.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::CharacterClass;

    fn all_classes(length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn covers_every_selected_class() {
        let config = all_classes(16);
        for _ in 0..50 {
            let password = generate(&config).unwrap();
            assert_eq!(password.chars().count(), 16);
            for class in CharacterClass::ALL {
                assert!(
                    password.chars().any(|c| class.matches(c)),
                    "missing {:?} in {:?}",
                    class,
                    password
                );
            }
        }
    }

    #[test]
    fn lowercase_only_stays_in_range() {
        let config = GenerationConfig {
            length: 8,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
            ..GenerationConfig::default()
        };
        let password = generate(&config).unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn no_class_selected_is_invalid() {
        let config = GenerationConfig {
            length: 16,
            include_lowercase: false,
            include_uppercase: false,
            include_digits: false,
            include_symbols: false,
            exclude_ambiguous: false,
        };
        assert!(matches!(
            generate(&config),
            Err(GeneratorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn length_below_class_count_is_invalid() {
        let config = all_classes(3);
        assert!(matches!(
            generate(&config),
            Err(GeneratorError::InvalidConfig(_))
        ));
        // Exactly one slot per class is still valid.
        let password = generate(&all_classes(4)).unwrap();
        assert_eq!(password.len(), 4);
    }

    #[test]
    fn exclude_ambiguous_never_emits_ambiguous_glyphs() {
        let config = GenerationConfig {
            length: 32,
            exclude_ambiguous: true,
            ..GenerationConfig::default()
        };
        for _ in 0..20 {
            let password = generate(&config).unwrap();
            for c in "loIO01|".chars() {
                assert!(!password.contains(c), "ambiguous {} in {:?}", c, password);
            }
        }
    }

    #[test]
    fn shuffle_removes_positional_bias() {
        // Without the shuffle the guaranteed characters would occupy fixed
        // leading slots (lower, upper, digit, symbol in order). Over enough
        // samples every position must therefore see every class.
        let config = all_classes(8);
        let mut seen = vec![[false; 4]; 8];
        for _ in 0..400 {
            let password = generate(&config).unwrap();
            for (i, c) in password.chars().enumerate() {
                for (k, class) in CharacterClass::ALL.iter().enumerate() {
                    if class.matches(c) {
                        seen[i][k] = true;
                    }
                }
            }
        }
        for (i, classes) in seen.iter().enumerate() {
            assert!(
                classes.iter().all(|&s| s),
                "position {} never saw all classes: {:?}",
                i,
                classes
            );
        }
    }
}
