// src/models.rs
use serde::{Deserialize, Serialize};

use crate::analysis::patterns::Pattern;
use crate::generators::charset::CharacterClass;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_lowercase: true,
            include_uppercase: true,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationConfig {
    /// Selected classes in the fixed lower/upper/digit/symbol order.
    pub fn selected_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::new();
        if self.include_lowercase {
            classes.push(CharacterClass::Lower);
        }
        if self.include_uppercase {
            classes.push(CharacterClass::Upper);
        }
        if self.include_digits {
            classes.push(CharacterClass::Digit);
        }
        if self.include_symbols {
            classes.push(CharacterClass::Symbol);
        }
        classes
    }
}

// Passphrase generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassphraseConfig {
    pub word_count: usize,
    pub separator: String,
    pub capitalize: bool,
    pub append_number: bool,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: false,
            append_number: false,
        }
    }
}

/// Discrete strength band derived from pool entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    Critical,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
    Exceptional,
}

impl StrengthLevel {
    /// Threshold table over pool entropy in bits. Boundaries are half-open
    /// on the lower bound: a value exactly at a threshold belongs to the
    /// higher band.
    pub fn from_bits(bits: f64) -> Self {
        if bits < 28.0 {
            StrengthLevel::Critical
        } else if bits < 36.0 {
            StrengthLevel::VeryWeak
        } else if bits < 50.0 {
            StrengthLevel::Weak
        } else if bits < 65.0 {
            StrengthLevel::Fair
        } else if bits < 80.0 {
            StrengthLevel::Good
        } else if bits < 100.0 {
            StrengthLevel::Strong
        } else if bits < 120.0 {
            StrengthLevel::VeryStrong
        } else {
            StrengthLevel::Exceptional
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Critical => "Critical",
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
            StrengthLevel::Exceptional => "Exceptional",
        }
    }

    /// Reference color hint for presentation layers.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLevel::Critical => "#c0392b",
            StrengthLevel::VeryWeak => "#e74c3c",
            StrengthLevel::Weak => "#f39c12",
            StrengthLevel::Fair => "#f1c40f",
            StrengthLevel::Good => "#27ae60",
            StrengthLevel::Strong => "#2ecc71",
            StrengthLevel::VeryStrong => "#1abc9c",
            StrengthLevel::Exceptional => "#16a085",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Full analysis of a single password. Recomputed on every call and never
/// cached across inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntropyReport {
    pub pool_entropy_bits: f64,
    pub shannon_entropy_bits: f64,
    pub strength: StrengthLevel,
    pub crack_time: String,
    pub patterns: Vec<Pattern>,
    pub suggestions: Vec<String>,
}
