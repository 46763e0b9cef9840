// src/generators/passphrase.rs
use rand::rngs::OsRng;
use rand::Rng;

use crate::generators::password::{GeneratorError, Result};
use crate::models::PassphraseConfig;

/// Exclusive upper bound for the optional appended number.
pub const APPEND_NUMBER_BOUND: u32 = 10_000;

// Fixed word list; 256 words keeps the math clean at 8 bits per word.
const WORDS: &[&str] = &[
    "apple", "banana", "orange", "grape", "melon", "house", "garden",
    "beach", "mountain", "river", "coffee", "pizza", "burger", "pasta",
    "salad", "cloud", "tiger", "eagle", "horse", "dragon", "castle",
    "guitar", "piano", "ocean", "planet", "rocket", "camera", "pencil",
    "happy", "sunny", "cloudy", "windy", "rainy", "bright", "dark", "fast",
    "slow", "cold", "hot", "tall", "short", "round", "square", "loud",
    "quiet", "fresh", "sweet", "sour", "clean", "dirty", "soft", "hard",
    "smooth", "rough", "light", "heavy", "early", "late", "new", "old",
    "young", "rich", "poor", "busy", "calm", "brave", "wise", "anchor",
    "autumn", "bridge", "candle", "canyon", "cedar", "cherry", "copper",
    "coral", "cotton", "cricket", "crystal", "desert", "diamond", "ember",
    "engine", "falcon", "feather", "fiddle", "forest", "fossil", "frost",
    "galaxy", "garnet", "ginger", "glacier", "granite", "harbor", "hazel",
    "helmet", "hollow", "honey", "island", "ivory", "jacket", "jungle",
    "kettle", "lagoon", "lantern", "laurel", "lemon", "lily", "lobster",
    "locket", "lumber", "magnet", "maple", "marble", "meadow", "meteor",
    "mirror", "monsoon", "morning", "mosaic", "moss", "nectar", "needle",
    "nickel", "north", "nutmeg", "oasis", "olive", "onion", "opal",
    "orbit", "orchard", "otter", "oyster", "paddle", "panda", "paper",
    "pebble", "penguin", "pepper", "petal", "pigeon", "pillow", "pine",
    "pocket", "pond", "poplar", "prairie", "prism", "pumpkin", "quartz",
    "quill", "rabbit", "raven", "reef", "ribbon", "ridge", "ripple",
    "roast", "robin", "rust", "saddle", "sage", "sail", "salmon", "sand",
    "sapphire", "satchel", "seed", "shadow", "shell", "silver", "sky",
    "slate", "snow", "sparrow", "spice", "spiral", "spring", "spruce",
    "stone", "storm", "summer", "sunset", "swan", "tangent", "thistle",
    "thunder", "timber", "topaz", "torch", "trail", "tulip", "tunnel",
    "turtle", "valley", "velvet", "violet", "wagon", "walnut", "water",
    "whale", "wheat", "willow", "winter", "wolf", "wonder", "yarn",
    "zephyr", "zebra", "acorn", "almond", "amber", "apron", "arrow",
    "aspen", "badge", "bamboo", "barley", "basil", "basket", "beacon",
    "beetle", "bell", "berry", "birch", "bison", "blanket", "blossom",
    "bluff", "boulder", "branch", "breeze", "brick", "brook", "bucket",
    "butter", "button", "cabin", "cactus", "canoe", "canvas", "caramel",
    "carrot", "cavern", "chalk", "chestnut", "chimney", "cinder", "circle",
    "clover", "cobalt", "comet", "compass", "cove"
];

pub fn wordlist_size() -> usize {
    WORDS.len()
}

/// Generate a separator-joined passphrase.
///
/// Words are drawn uniformly with replacement, so repeats are possible and
/// the entropy math stays exact. Draws use the OS CSPRNG.
pub fn generate_passphrase(config: &PassphraseConfig) -> Result<String> {
    if config.word_count == 0 {
        return Err(GeneratorError::InvalidConfig(
            "word count must be positive".to_string(),
        ));
    }

    let mut rng = OsRng;
    let mut words = Vec::with_capacity(config.word_count);
    for _ in 0..config.word_count {
        let word = WORDS[rng.gen_range(0..WORDS.len())];
        if config.capitalize {
            let mut capitalized = String::with_capacity(word.len());
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                capitalized.extend(first.to_uppercase());
                capitalized.push_str(chars.as_str());
            }
            words.push(capitalized);
        } else {
            words.push(word.to_string());
        }
    }

    let mut passphrase = words.join(&config.separator);
    if config.append_number {
        passphrase.push_str(&config.separator);
        passphrase.push_str(&rng.gen_range(0..APPEND_NUMBER_BOUND).to_string());
    }

    Ok(passphrase)
}

/// Theoretical entropy of a passphrase drawn with this configuration:
/// `word_count * log2(W)`, plus `log2(bound)` when a number is appended.
pub fn passphrase_entropy_bits(config: &PassphraseConfig) -> f64 {
    let mut bits = config.word_count as f64 * (WORDS.len() as f64).log2();
    if config.append_number {
        bits += f64::from(APPEND_NUMBER_BOUND).log2();
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordlist_has_fixed_size() {
        assert_eq!(wordlist_size(), 256);
        assert!(WORDS.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn joins_requested_number_of_words() {
        let config = PassphraseConfig {
            word_count: 5,
            separator: ".".to_string(),
            capitalize: false,
            append_number: false,
        };
        let passphrase = generate_passphrase(&config).unwrap();
        let parts: Vec<&str> = passphrase.split('.').collect();
        assert_eq!(parts.len(), 5);
        for part in parts {
            assert!(WORDS.contains(&part), "unknown word {:?}", part);
        }
    }

    #[test]
    fn capitalize_uppercases_each_word() {
        let config = PassphraseConfig {
            word_count: 4,
            capitalize: true,
            ..PassphraseConfig::default()
        };
        let passphrase = generate_passphrase(&config).unwrap();
        for part in passphrase.split('-') {
            assert!(part.chars().next().unwrap().is_ascii_uppercase());
        }
    }

    #[test]
    fn appended_number_stays_below_bound() {
        let config = PassphraseConfig {
            word_count: 3,
            append_number: true,
            ..PassphraseConfig::default()
        };
        for _ in 0..20 {
            let passphrase = generate_passphrase(&config).unwrap();
            let last = passphrase.rsplit('-').next().unwrap();
            let value: u32 = last.parse().expect("last segment should be numeric");
            assert!(value < APPEND_NUMBER_BOUND);
        }
    }

    #[test]
    fn zero_words_is_invalid() {
        let config = PassphraseConfig {
            word_count: 0,
            ..PassphraseConfig::default()
        };
        assert!(matches!(
            generate_passphrase(&config),
            Err(GeneratorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn entropy_formula_matches_wordlist() {
        let config = PassphraseConfig {
            word_count: 4,
            ..PassphraseConfig::default()
        };
        // 256 words -> exactly 8 bits per word.
        assert!((passphrase_entropy_bits(&config) - 32.0).abs() < 1e-9);

        let with_number = PassphraseConfig {
            append_number: true,
            ..config
        };
        let expected = 32.0 + f64::from(APPEND_NUMBER_BOUND).log2();
        assert!((passphrase_entropy_bits(&with_number) - expected).abs() < 1e-9);
    }
}
