//! The adder itself
//!
//! Classifies the invocation, parses operands and computes the sum.

use crate::{
    config::Config,
    core::operands::Operands,
    error::{AdderError, Result},
};
use num::BigInt;
use std::fmt;
use tracing::{debug, info, instrument};

/// How the raw operand list is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation<'a> {
    /// Fewer than two operands were supplied
    Usage,
    /// Add the first two operand tokens
    Add { a: &'a str, b: &'a str },
}

impl<'a> Invocation<'a> {
    /// Classify the operand tokens; tokens past the second are ignored
    pub fn classify(operands: &'a [String]) -> Self {
        match operands {
            [a, b, rest @ ..] => {
                if !rest.is_empty() {
                    debug!("Ignoring {} extra argument(s): {:?}", rest.len(), rest);
                }
                Self::Add {
                    a: a.as_str(),
                    b: b.as_str(),
                }
            }
            _ => Self::Usage,
        }
    }
}

/// What a successful run prints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The usage line
    Usage(String),
    /// The computed sum
    Sum(BigInt),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(line) => f.write_str(line),
            Self::Sum(sum) => write!(f, "Sum: {sum}"),
        }
    }
}

/// Build the usage line for `program`
pub fn usage_line(program: &str) -> String {
    format!("Usage: {program} <num1> <num2>")
}

/// Add two operands; there is no overflow boundary
pub fn add(a: &BigInt, b: &BigInt) -> BigInt {
    a + b
}

/// Runs a single invocation of the adder
#[derive(Debug)]
pub struct Adder {
    config: Config,
}

impl Adder {
    /// Create a new adder
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Classify, parse and add
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<Outcome> {
        match Invocation::classify(&self.config.operands) {
            Invocation::Usage => {
                debug!(
                    "Only {} operand(s) supplied, printing usage",
                    self.config.operands.len()
                );
                if self.config.strict_usage {
                    return Err(AdderError::usage(&self.config.program));
                }
                Ok(Outcome::Usage(usage_line(&self.config.program)))
            }
            Invocation::Add { a, b } => {
                let operands = Operands::from_tokens(a, b)?;
                let sum = add(&operands.a, &operands.b);
                info!("{} + {} = {}", operands.a, operands.b, sum);
                Ok(Outcome::Sum(sum))
            }
        }
    }
}
