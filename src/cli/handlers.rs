// src/cli/handlers.rs
use crate::api::types::{Result, ValidationError};
use crate::generators::PasswordGenerator;
use crate::models::StrengthReport;
use super::commands::GenerateArgs;

// Handlers for CLI commands
pub fn handle_generate(args: &GenerateArgs) -> Result<Vec<(String, StrengthReport)>> {
    let request = args.to_request();
    let count = request.resolve_count()?;
    let options = request.options.resolve()?;
    Ok(PasswordGenerator::new().generate_many(&options, count)?)
}

pub fn handle_check(password: &str) -> Result<StrengthReport> {
    if password.is_empty() {
        return Err(ValidationError::MissingInput);
    }
    Ok(PasswordGenerator::new().analyze_password_strength(password))
}

pub fn print_report(report: &StrengthReport) {
    println!("Strength: {} ({}/7)", report.level, report.score);
    for remark in &report.feedback {
        println!("  • {}", remark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;

    #[test]
    fn generate_defaults_to_a_single_password() {
        let results = handle_generate(&GenerateArgs::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.chars().count(), 12);
    }

    #[test]
    fn generate_validates_like_the_api() {
        let too_many = GenerateArgs { count: Some(21), ..Default::default() };
        assert_eq!(handle_generate(&too_many).unwrap_err(), ValidationError::InvalidCount);

        let too_short = GenerateArgs { length: Some(2), ..Default::default() };
        assert_eq!(handle_generate(&too_short).unwrap_err(), ValidationError::InvalidLength);

        let nothing = GenerateArgs {
            no_uppercase: true,
            no_lowercase: true,
            no_numbers: true,
            no_symbols: true,
            ..Default::default()
        };
        assert_eq!(
            handle_generate(&nothing).unwrap_err(),
            ValidationError::Policy(GeneratorError::InvalidPolicy)
        );
    }

    #[test]
    fn check_rejects_empty_password() {
        assert_eq!(handle_check("").unwrap_err(), ValidationError::MissingInput);
        assert_eq!(handle_check("Abcdefgh1!").unwrap().score, 5);
    }
}
