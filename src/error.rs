//! Error types for the adder
//!
//! Provides structured error handling with context and proper error chains.

use crate::core::operands::Position;
use num::bigint::ParseBigIntError;
use thiserror::Error;

/// Main error type for the adder
#[derive(Error, Debug)]
pub enum AdderError {
    /// An operand token is not a base-10 integer
    #[error("Parse error: {position} operand '{token}' is not a valid integer")]
    Parse {
        position: Position,
        token: String,
        #[source]
        source: ParseBigIntError,
    },

    /// Too few operands while running in strict usage mode
    #[error("Usage error: expected two operands. Usage: {program} <num1> <num2>")]
    Usage { program: String },
}

impl AdderError {
    /// Create a new parse error
    pub fn parse(position: Position, token: impl Into<String>, source: ParseBigIntError) -> Self {
        Self::Parse {
            position,
            token: token.into(),
            source,
        }
    }

    /// Create a new usage error
    pub fn usage(program: impl Into<String>) -> Self {
        Self::Usage {
            program: program.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AdderError>;
