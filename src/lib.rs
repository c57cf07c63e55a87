//! # Command-Line Adder
//!
//! Reads two integer arguments and prints their sum.
//!
//! ## Behavior
//!
//! - `adder 5 7` prints `Sum: 12`
//! - fewer than two operands prints `Usage: <program> <num1> <num2>` and exits successfully
//! - a non-integer operand is reported on stderr with a non-zero exit status
//!
//! ## Example
//!
//! ```
//! use cli_adder::{config::Config, core::{Adder, Outcome}};
//!
//! let config = Config {
//!     operands: vec!["5".to_string(), "7".to_string()],
//!     ..Config::default()
//! };
//! let outcome = Adder::new(config).run()?;
//! assert_eq!(outcome, Outcome::Sum(12.into()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs are written to stderr so stdout only carries the result line.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
