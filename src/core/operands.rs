//! Operand parsing
//!
//! Converts argument tokens into arbitrary-precision integers using base-10
//! conversion. An optional leading sign and `_` digit separators are
//! accepted; whitespace and other radixes are not.

use crate::error::{AdderError, Result};
use num::BigInt;
use std::fmt;
use tracing::{debug, instrument};

/// Which operand a token is parsed into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Second,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// The two integers being summed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operands {
    pub a: BigInt,
    pub b: BigInt,
}

impl Operands {
    /// Parse both operands, first token first
    #[instrument]
    pub fn from_tokens(a: &str, b: &str) -> Result<Self> {
        let a = parse_operand(a, Position::First)?;
        let b = parse_operand(b, Position::Second)?;

        debug!("Parsed operands: a={}, b={}", a, b);
        Ok(Self { a, b })
    }
}

/// Parse a single operand token as a base-10 integer
pub fn parse_operand(token: &str, position: Position) -> Result<BigInt> {
    token
        .parse::<BigInt>()
        .map_err(|e| AdderError::parse(position, token, e))
}
