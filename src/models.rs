// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use std::fmt;

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 128;

// Password generation options, with every default already applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn has_any_class(&self) -> bool {
        self.include_lowercase || self.include_uppercase || self.include_numbers || self.include_symbols
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a 0-7 score onto a level.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => StrengthLevel::Weak,
            4..=5 => StrengthLevel::Medium,
            6 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Medium => write!(f, "Medium"),
            StrengthLevel::Strong => write!(f, "Strong"),
            StrengthLevel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Heuristic score (0-7)
    pub score: u8,
    /// Level derived from the score
    pub level: StrengthLevel,
    /// Remarks on what the password is missing
    pub feedback: Vec<String>,
}
