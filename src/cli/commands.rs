//! Command implementation for the CLI

use crate::{config::Config, core::Adder};
use anyhow::Context;
use std::io::Write;
use tracing::instrument;

/// Run the adder and write its result line to `out`
#[instrument(skip(out))]
pub fn execute_command<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    let adder = Adder::new(config.clone());
    let outcome = adder.run().context("Failed to add operands")?;

    writeln!(out, "{outcome}").context("Failed to write result")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
