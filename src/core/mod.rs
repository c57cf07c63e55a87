//! Core functionality for the adder
//!
//! Contains operand parsing and the addition itself.

pub mod adder;
pub mod operands;

pub use adder::{add, usage_line, Adder, Invocation, Outcome};
pub use operands::{Operands, Position};
