// src/analysis/patterns.rs
use serde::{Deserialize, Serialize};

/// Identifier for a known weak structure found in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// The same character repeated three or more times.
    RepeatedCharacters,
    /// Four or more digits in a row.
    DigitRun,
    /// Five or more letters of a single case in a row.
    SameCaseRun,
    /// The literal substring "123".
    Sequence123,
    /// The literal substring "abc".
    SequenceAbc,
    /// A qwerty-family keyboard row.
    KeyboardWalk,
    /// A literal common word such as "password" or "admin".
    CommonWord,
}

impl Pattern {
    pub fn id(self) -> &'static str {
        match self {
            Pattern::RepeatedCharacters => "repeated_characters",
            Pattern::DigitRun => "digit_run",
            Pattern::SameCaseRun => "same_case_run",
            Pattern::Sequence123 => "sequence_123",
            Pattern::SequenceAbc => "sequence_abc",
            Pattern::KeyboardWalk => "keyboard_walk",
            Pattern::CommonWord => "common_word",
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

const KEYBOARD_ROWS: &[&str] = &["qwerty", "qwertz", "azerty", "asdf", "zxcv"];
const COMMON_WORDS: &[&str] = &["password", "admin"];

/// Match a password against the fixed list of weak-structure detectors.
/// All matchers are case-insensitive; the returned vec is duplicate-free
/// and in fixed matcher order, so it behaves as a reproducible set.
pub fn detect_patterns(password: &str) -> Vec<Pattern> {
    let lower = password.to_lowercase();
    let chars: Vec<char> = password.chars().collect();
    let folded: Vec<char> = lower.chars().collect();

    let mut found = Vec::new();

    if longest_run(&folded, |a, b| a == b) >= 3 {
        found.push(Pattern::RepeatedCharacters);
    }
    if longest_run(&chars, |a, b| a.is_ascii_digit() && b.is_ascii_digit()) >= 4 {
        found.push(Pattern::DigitRun);
    }
    let same_case = longest_run(&chars, |a, b| {
        (a.is_ascii_lowercase() && b.is_ascii_lowercase())
            || (a.is_ascii_uppercase() && b.is_ascii_uppercase())
    });
    if same_case >= 5 {
        found.push(Pattern::SameCaseRun);
    }
    if lower.contains("123") {
        found.push(Pattern::Sequence123);
    }
    if lower.contains("abc") {
        found.push(Pattern::SequenceAbc);
    }
    if KEYBOARD_ROWS.iter().any(|row| lower.contains(row)) {
        found.push(Pattern::KeyboardWalk);
    }
    if COMMON_WORDS.iter().any(|word| lower.contains(word)) {
        found.push(Pattern::CommonWord);
    }

    found
}

// Length of the longest run of adjacent characters related by `related`.
fn longest_run(chars: &[char], related: impl Fn(char, char) -> bool) -> usize {
    let mut longest = usize::from(!chars.is_empty());
    let mut current = longest;
    for pair in chars.windows(2) {
        if related(pair[0], pair[1]) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_characters_ignore_case() {
        assert_eq!(detect_patterns("xAaAx"), vec![Pattern::RepeatedCharacters]);
        assert!(detect_patterns("xaax").is_empty());
    }

    #[test]
    fn digit_runs_need_four_digits() {
        assert_eq!(detect_patterns("pw1984x"), vec![Pattern::DigitRun]);
        assert!(detect_patterns("pw198x").is_empty());
    }

    #[test]
    fn same_case_runs_need_five_letters() {
        let found = detect_patterns("WXYZQ9!");
        assert!(found.contains(&Pattern::SameCaseRun));
        assert!(detect_patterns("WXYZ9!").is_empty());
    }

    #[test]
    fn literal_sequences_and_words() {
        assert!(detect_patterns("x123x").contains(&Pattern::Sequence123));
        assert!(detect_patterns("xAbCx").contains(&Pattern::SequenceAbc));
        assert!(detect_patterns("QwErTy7!").contains(&Pattern::KeyboardWalk));
        assert!(detect_patterns("myPASSWORDis").contains(&Pattern::CommonWord));
        assert!(detect_patterns("admin").contains(&Pattern::CommonWord));
    }

    #[test]
    fn matches_come_back_in_fixed_order() {
        let found = detect_patterns("password123");
        assert_eq!(
            found,
            vec![
                Pattern::SameCaseRun,
                Pattern::Sequence123,
                Pattern::CommonWord
            ]
        );
    }

    #[test]
    fn clean_password_matches_nothing() {
        assert!(detect_patterns("Zx9!Qm2$").is_empty());
        assert!(detect_patterns("").is_empty());
    }
}
