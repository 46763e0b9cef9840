// src/analysis/suggestions.rs
use std::collections::HashSet;

use crate::analysis::patterns::detect_patterns;
use crate::generators::charset::CharacterClass;

const MIN_RECOMMENDED_LENGTH: usize = 12;
const MIN_UNIQUE_RATIO: f64 = 0.6;

/// Derive improvement hints from a password. Rules run in a fixed order so
/// the output is stable and reproducible for identical input.
pub fn suggest(password: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let length = password.chars().count();

    if length < MIN_RECOMMENDED_LENGTH {
        suggestions.push(format!(
            "Increase password length to at least {} characters",
            MIN_RECOMMENDED_LENGTH
        ));
    }

    for class in CharacterClass::ALL {
        if !password.chars().any(|c| class.matches(c)) {
            suggestions.push(format!("Add {} for better security", class.label()));
        }
    }

    if !detect_patterns(password).is_empty() {
        suggestions.push(
            "Avoid common patterns like '123', 'abc' or keyboard rows".to_string(),
        );
    }

    if length > 0 {
        let unique: HashSet<char> = password.chars().collect();
        if (unique.len() as f64) / (length as f64) < MIN_UNIQUE_RATIO {
            suggestions.push("Use more unique characters".to_string());
        }
    }

    if suggestions.is_empty() {
        suggestions.push("Great password! No obvious weaknesses found".to_string());
    }

    suggestions
}
