//! Configuration management for the adder
//!
//! Centralizes the options gathered from the command line.

use crate::cli::Args;

/// Name shown in the usage line when the program name is unavailable
pub const DEFAULT_PROGRAM: &str = "adder";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Report missing operands as an error instead of printing usage
    pub strict_usage: bool,
    /// Program name as invoked, used in the usage line
    pub program: String,
    /// Raw operand tokens, excluding the program name
    pub operands: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            strict_usage: false,
            program: DEFAULT_PROGRAM.to_string(),
            operands: Vec::new(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        let program = if args.program.is_empty() {
            DEFAULT_PROGRAM.to_string()
        } else {
            args.program.clone()
        };

        Self {
            debug: args.debug,
            strict_usage: args.strict_usage,
            program,
            operands: args.operands.clone(),
        }
    }
}
