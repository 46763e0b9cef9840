// src/analysis/entropy.rs
use std::collections::HashMap;

use crate::analysis::patterns::detect_patterns;
use crate::analysis::suggestions::suggest;
use crate::generators::charset::CharacterClass;
use crate::models::{EntropyReport, StrengthLevel};

/// Reference attacker throughput for crack-time estimates.
pub const GUESSES_PER_SECOND: f64 = 1e11;

/// Worst-case-attacker entropy: the attacker knows which character classes
/// are in play but not their frequencies. `length * log2(sum of pool sizes)`,
/// rounded to two decimals; 0.0 for an empty password.
pub fn pool_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut pool_size = 0u32;
    for class in CharacterClass::ALL {
        if password.chars().any(|c| class.matches(c)) {
            pool_size += class.pool_size();
        }
    }
    if pool_size == 0 {
        return 0.0;
    }

    let bits = password.chars().count() as f64 * f64::from(pool_size).log2();
    round2(bits)
}

/// Empirical entropy: total information content under the password's own
/// character-frequency distribution. Always <= pool entropy when characters
/// repeat; 0.0 for empty or single-symbol input.
pub fn shannon_entropy(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in password.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let length = password.chars().count() as f64;
    let per_symbol: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / length;
            -p * p.log2()
        })
        .sum();

    round2(per_symbol * length)
}

/// Estimated wall-clock time to exhaust the entropy-implied search space at
/// the reference guess rate, in the coarsest unit that keeps the value >= 1.
pub fn crack_time(entropy_bits: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3600.0;
    const DAY: f64 = 86_400.0;
    const YEAR: f64 = 365.0 * DAY;

    let seconds = entropy_bits.exp2() / GUESSES_PER_SECOND;

    if seconds < 1.0 {
        "less than a second".to_string()
    } else if seconds < MINUTE {
        format!("{:.0} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.0} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.0} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.0} days", seconds / DAY)
    } else if seconds < 1_000.0 * YEAR {
        format!("{:.0} years", seconds / YEAR)
    } else if seconds < 1_000_000.0 * YEAR {
        format!("{:.0} thousand years", seconds / (1_000.0 * YEAR))
    } else {
        "millions of years+".to_string()
    }
}

/// Run the full analysis. Pure and deterministic: identical input yields a
/// bit-identical report.
pub fn analyze(password: &str) -> EntropyReport {
    let pool_bits = pool_entropy(password);
    EntropyReport {
        pool_entropy_bits: pool_bits,
        shannon_entropy_bits: shannon_entropy(password),
        strength: StrengthLevel::from_bits(pool_bits),
        crack_time: crack_time(pool_bits),
        patterns: detect_patterns(password),
        suggestions: suggest(password),
    }
}

fn round2(bits: f64) -> f64 {
    (bits * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_has_zero_entropy() {
        assert_eq!(pool_entropy(""), 0.0);
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn pool_entropy_of_lowercase_repeats() {
        // 8 * log2(26) = 37.6035..., rounded to two decimals.
        assert_eq!(pool_entropy("aaaaaaaa"), 37.60);
    }

    #[test]
    fn pool_entropy_counts_all_four_classes() {
        // lower + upper + digit + symbol = 94; 9 * log2(94) = 58.99 bits.
        let bits = pool_entropy("Passw0rd!");
        assert_eq!(bits, 58.99);
        assert_eq!(StrengthLevel::from_bits(bits), StrengthLevel::Weak);
    }

    #[test]
    fn shannon_entropy_of_single_symbol_is_zero() {
        assert_eq!(shannon_entropy("aaaa"), 0.0);
    }

    #[test]
    fn shannon_never_exceeds_pool_on_repeats() {
        for password in ["aabbccdd", "Passw0rd!", "zzzzzz9"] {
            assert!(shannon_entropy(password) <= pool_entropy(password));
        }
    }

    #[test]
    fn crack_time_unit_ladder() {
        assert_eq!(crack_time(0.0), "less than a second");
        // 2^40 / 1e11 = ~11 seconds.
        assert_eq!(crack_time(40.0), "11 seconds");
        // 2^50 / 1e11 = ~11259 seconds = ~3 hours.
        assert_eq!(crack_time(50.0), "3 hours");
        // Astronomically large entropy hits the open-ended sentinel.
        assert_eq!(crack_time(256.0), "millions of years+");
        assert_eq!(crack_time(4096.0), "millions of years+");
    }

    #[test]
    fn analysis_is_idempotent() {
        let first = analyze("Tr0ub4dor&3");
        let second = analyze("Tr0ub4dor&3");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_password_report_is_neutral() {
        let report = analyze("");
        assert_eq!(report.pool_entropy_bits, 0.0);
        assert_eq!(report.shannon_entropy_bits, 0.0);
        assert_eq!(report.strength, StrengthLevel::Critical);
        assert!(report.patterns.is_empty());
    }
}
