// src/generators/strength.rs
use crate::models::{StrengthLevel, StrengthReport};

pub const FEEDBACK_TOO_SHORT: &str = "Password is too short";
pub const FEEDBACK_NO_LOWERCASE: &str = "Add lowercase letters";
pub const FEEDBACK_NO_UPPERCASE: &str = "Add uppercase letters";
pub const FEEDBACK_NO_NUMBERS: &str = "Add numbers";
pub const FEEDBACK_NO_SYMBOLS: &str = "Add symbols";
pub const FEEDBACK_SECURE: &str = "Password is secure!";

/// Score a password from 0 to 7.
///
/// Three points come from length (8, 12 and 16 characters) and one from each
/// character class present. Only the 8-character threshold produces feedback.
pub fn check_password_strength(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let score = [
        length >= 8,
        length >= 12,
        length >= 16,
        has_lower,
        has_upper,
        has_digit,
        has_symbol,
    ]
    .iter()
    .filter(|passed| **passed)
    .count() as u8;

    let mut feedback: Vec<String> = [
        (length >= 8, FEEDBACK_TOO_SHORT),
        (has_lower, FEEDBACK_NO_LOWERCASE),
        (has_upper, FEEDBACK_NO_UPPERCASE),
        (has_digit, FEEDBACK_NO_NUMBERS),
        (has_symbol, FEEDBACK_NO_SYMBOLS),
    ]
    .iter()
    .filter(|(passed, _)| !passed)
    .map(|(_, remark)| remark.to_string())
    .collect();

    if feedback.is_empty() {
        feedback.push(FEEDBACK_SECURE.to_string());
    }

    StrengthReport {
        score,
        level: StrengthLevel::from_score(score),
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_fails_every_check() {
        let report = check_password_strength("");
        assert_eq!(report.score, 0);
        assert_eq!(report.level, StrengthLevel::Weak);
        assert_eq!(
            report.feedback,
            vec![
                FEEDBACK_TOO_SHORT,
                FEEDBACK_NO_LOWERCASE,
                FEEDBACK_NO_UPPERCASE,
                FEEDBACK_NO_NUMBERS,
                FEEDBACK_NO_SYMBOLS,
            ]
        );
    }

    #[test]
    fn ten_chars_all_classes_is_medium() {
        let report = check_password_strength("Abcdefgh1!");
        assert_eq!(report.score, 5);
        assert_eq!(report.level, StrengthLevel::Medium);
        assert_eq!(report.feedback, vec![FEEDBACK_SECURE]);
    }

    #[test]
    fn long_lowercase_only() {
        let report = check_password_strength("aaaaaaaaaaaaaaaa");
        assert_eq!(report.score, 4);
        assert_eq!(report.level, StrengthLevel::Medium);
        assert_eq!(
            report.feedback,
            vec![FEEDBACK_NO_UPPERCASE, FEEDBACK_NO_NUMBERS, FEEDBACK_NO_SYMBOLS]
        );
    }

    #[test]
    fn twelve_chars_all_classes_is_strong() {
        let report = check_password_strength("Abcdefghij1!");
        assert_eq!(report.score, 6);
        assert_eq!(report.level, StrengthLevel::Strong);
    }

    #[test]
    fn sixteen_chars_all_classes_is_very_strong() {
        let report = check_password_strength("Abcdefghijklmn1!");
        assert_eq!(report.score, 7);
        assert_eq!(report.level, StrengthLevel::VeryStrong);
        assert_eq!(report.feedback, vec![FEEDBACK_SECURE]);
    }

    #[test]
    fn short_password_only_flags_length() {
        let report = check_password_strength("aB3$");
        assert_eq!(report.score, 4);
        assert_eq!(report.feedback, vec![FEEDBACK_TOO_SHORT]);
    }

    #[test]
    fn whitespace_and_non_ascii_count_as_symbols() {
        assert_eq!(check_password_strength(" ").score, 1);
        let report = check_password_strength("ñ");
        assert_eq!(report.score, 1);
        assert!(!report.feedback.contains(&FEEDBACK_NO_SYMBOLS.to_string()));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // eight two-byte characters
        let report = check_password_strength("éééééééé");
        assert_eq!(report.score, 2);
        assert!(!report.feedback.contains(&FEEDBACK_TOO_SHORT.to_string()));
    }
}
