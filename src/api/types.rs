// src/api/types.rs
use serde::{Serialize, Deserialize};
use thiserror::Error;
use utoipa::ToSchema;
use std::collections::BTreeMap;
use crate::generators::GeneratorError;
use crate::models::{
    PasswordGenerationOptions, StrengthReport, DEFAULT_PASSWORD_LENGTH,
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};

pub const DEFAULT_BULK_COUNT: i64 = 5;
pub const MAX_BULK_COUNT: i64 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password length must be between {} and {} characters", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)]
    InvalidLength,

    #[error("You can generate between 1 and {} passwords at a time", MAX_BULK_COUNT)]
    InvalidCount,

    #[error("No password provided")]
    MissingInput,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Policy(#[from] GeneratorError),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

// Generator requests and responses
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordGenerationRequest {
    /// Password length, 4 to 128 (default: 12)
    pub length: Option<i64>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Leave out i, l, 1, L, o, 0 and O (default: false)
    pub exclude_ambiguous: Option<bool>,
}

impl PasswordGenerationRequest {
    /// Apply defaults and check the length range.
    ///
    /// Include-flags are only disabled when explicitly `false`.
    pub fn resolve(&self) -> Result<PasswordGenerationOptions> {
        let length = match self.length {
            None => DEFAULT_PASSWORD_LENGTH,
            Some(len) => usize::try_from(len)
                .ok()
                .filter(|len| (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(len))
                .ok_or(ValidationError::InvalidLength)?,
        };

        let options = PasswordGenerationOptions {
            length,
            include_uppercase: self.include_uppercase.unwrap_or(true),
            include_lowercase: self.include_lowercase.unwrap_or(true),
            include_numbers: self.include_numbers.unwrap_or(true),
            include_symbols: self.include_symbols.unwrap_or(true),
            exclude_ambiguous: self.exclude_ambiguous.unwrap_or(false),
        };

        if !options.has_any_class() {
            return Err(GeneratorError::InvalidPolicy.into());
        }

        Ok(options)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: String,
    /// Length of the generated password
    pub length: usize,
    /// Options the password was generated with (omitted for quick generation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PasswordGenerationOptions>,
    /// Strength analysis of the generated password
    pub strength: StrengthReport,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkGenerationRequest {
    /// Number of passwords, 1 to 20 (default: 5)
    pub count: Option<i64>,
    /// Options shared by every password
    #[serde(flatten)]
    pub options: PasswordGenerationRequest,
}

impl BulkGenerationRequest {
    pub fn resolve_count(&self) -> Result<usize> {
        let count = self.count.unwrap_or(DEFAULT_BULK_COUNT);
        if !(1..=MAX_BULK_COUNT).contains(&count) {
            return Err(ValidationError::InvalidCount);
        }
        Ok(count as usize)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPassword {
    /// Generated password
    pub password: String,
    /// Strength analysis of the password
    pub strength: StrengthReport,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Number of passwords generated
    pub count: usize,
    /// Generated passwords
    pub passwords: Vec<GeneratedPassword>,
}

// Strength check
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrengthCheckRequest {
    /// Password to analyze
    pub password: Option<String>,
}

impl StrengthCheckRequest {
    pub fn password(&self) -> Result<&str> {
        match self.password.as_deref() {
            Some(p) if !p.is_empty() => Ok(p),
            _ => Err(ValidationError::MissingInput),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthCheckResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The analyzed password
    pub password: String,
    /// Length of the password in characters
    pub length: usize,
    /// Strength analysis
    pub strength: StrengthReport,
}

// Shared
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfoResponse {
    /// Service name
    pub message: String,
    /// Service version
    pub version: String,
    /// Available endpoints and what they do
    pub endpoints: BTreeMap<String, String>,
}
