// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand};
use crate::api::types::{BulkGenerationRequest, PasswordGenerationRequest};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API server (default)
    Serve,

    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Check the strength of a password
    Check {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },
}

#[derive(ClapArgs, Debug, Default)]
pub struct GenerateArgs {
    /// Password length (4-128, default: 12)
    #[arg(long, short)]
    pub length: Option<i64>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out i, l, 1, L, o, 0 and O
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Number of passwords to generate (1-20)
    #[arg(long, short)]
    pub count: Option<i64>,
}

impl GenerateArgs {
    /// Same request shape the HTTP bulk endpoint takes, so both share validation.
    pub fn to_request(&self) -> BulkGenerationRequest {
        let disabled = |flag: bool| if flag { Some(false) } else { None };
        BulkGenerationRequest {
            count: Some(self.count.unwrap_or(1)),
            options: PasswordGenerationRequest {
                length: self.length,
                include_uppercase: disabled(self.no_uppercase),
                include_lowercase: disabled(self.no_lowercase),
                include_numbers: disabled(self.no_numbers),
                include_symbols: disabled(self.no_symbols),
                exclude_ambiguous: Some(self.exclude_ambiguous),
            },
        }
    }
}
