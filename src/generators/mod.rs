// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod password;
pub mod strength;

pub use password::PasswordGenerator;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be selected")]
    InvalidPolicy,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
