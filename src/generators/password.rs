use crate::crypto;
use crate::models::{PasswordGenerationOptions, StrengthReport};
use super::{charset, strength, GeneratorError, Result};

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password for already-resolved options.
    ///
    /// One character from every enabled class is placed first, the rest is
    /// filled from the whole charset, then the result is shuffled. If
    /// `options.length` is below the number of enabled classes the password
    /// comes out longer than requested so that no class goes missing.
    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        let chars = charset::build(options);
        if chars.is_empty() {
            return Err(GeneratorError::InvalidPolicy);
        }

        let alphabets = charset::enabled_alphabets(options);
        let mut password: Vec<char> = Vec::with_capacity(options.length.max(alphabets.len()));

        for (_, alphabet) in &alphabets {
            password.push(alphabet[crypto::random_index(alphabet.len())]);
        }

        while password.len() < options.length {
            password.push(chars[crypto::random_index(chars.len())]);
        }

        crypto::secure_shuffle(&mut password);

        Ok(password.into_iter().collect())
    }

    pub fn analyze_password_strength(&self, password: &str) -> StrengthReport {
        strength::check_password_strength(password)
    }

    /// Generate `count` independent passwords, each with its strength report.
    pub fn generate_many(
        &self,
        options: &PasswordGenerationOptions,
        count: usize,
    ) -> Result<Vec<(String, StrengthReport)>> {
        (0..count)
            .map(|_| {
                let password = self.generate_password(options)?;
                let report = self.analyze_password_strength(&password);
                Ok((password, report))
            })
            .collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
