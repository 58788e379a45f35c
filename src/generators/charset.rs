// src/generators/charset.rs
use crate::models::PasswordGenerationOptions;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs that are easy to confuse visually.
pub const AMBIGUOUS: &str = "il1Lo0O";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Fixed order used for charset assembly and guaranteed picks.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn is_enabled(self, options: &PasswordGenerationOptions) -> bool {
        match self {
            CharacterClass::Lowercase => options.include_lowercase,
            CharacterClass::Uppercase => options.include_uppercase,
            CharacterClass::Numbers => options.include_numbers,
            CharacterClass::Symbols => options.include_symbols,
        }
    }

    /// The class alphabet, minus ambiguous glyphs when requested.
    pub fn filtered(self, exclude_ambiguous: bool) -> Vec<char> {
        self.alphabet()
            .chars()
            .filter(|c| !exclude_ambiguous || !is_ambiguous(*c))
            .collect()
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

/// Filtered alphabets of the enabled classes, in fixed order.
/// Classes left empty by filtering are dropped.
pub fn enabled_alphabets(options: &PasswordGenerationOptions) -> Vec<(CharacterClass, Vec<char>)> {
    CharacterClass::ALL
        .iter()
        .copied()
        .filter(|class| class.is_enabled(options))
        .map(|class| (class, class.filtered(options.exclude_ambiguous)))
        .filter(|(_, alphabet)| !alphabet.is_empty())
        .collect()
}

/// The full active charset: concatenation of the enabled filtered alphabets.
pub fn build(options: &PasswordGenerationOptions) -> Vec<char> {
    enabled_alphabets(options)
        .into_iter()
        .flat_map(|(_, alphabet)| alphabet)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharacterClass) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            include_lowercase: class == CharacterClass::Lowercase,
            include_uppercase: class == CharacterClass::Uppercase,
            include_numbers: class == CharacterClass::Numbers,
            include_symbols: class == CharacterClass::Symbols,
            ..Default::default()
        }
    }

    #[test]
    fn full_charset_follows_fixed_order() {
        let chars: String = build(&PasswordGenerationOptions::default()).into_iter().collect();
        assert_eq!(chars, format!("{}{}{}{}", LOWERCASE, UPPERCASE, NUMBERS, SYMBOLS));
    }

    #[test]
    fn ambiguous_glyphs_are_filtered_from_every_class() {
        let options = PasswordGenerationOptions {
            exclude_ambiguous: true,
            ..Default::default()
        };
        let chars = build(&options);
        assert!(chars.iter().all(|c| !is_ambiguous(*c)));
        // 26 + 26 + 10 + 26 minus the seven ambiguous glyphs
        assert_eq!(chars.len(), 88 - 7);
    }

    #[test]
    fn numbers_lose_zero_and_one() {
        let digits: String = CharacterClass::Numbers.filtered(true).into_iter().collect();
        assert_eq!(digits, "23456789");
    }

    #[test]
    fn symbols_are_untouched_by_filtering() {
        assert_eq!(CharacterClass::Symbols.filtered(true).len(), SYMBOLS.len());
    }

    #[test]
    fn single_class_charset() {
        let chars: String = build(&only(CharacterClass::Uppercase)).into_iter().collect();
        assert_eq!(chars, UPPERCASE);
    }

    #[test]
    fn nothing_enabled_gives_empty_charset() {
        let options = PasswordGenerationOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..Default::default()
        };
        assert!(build(&options).is_empty());
        assert!(enabled_alphabets(&options).is_empty());
    }
}
