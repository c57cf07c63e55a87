//! Command-line argument parsing

use clap::Parser;
use std::ffi::OsString;

/// Adder - prints the sum of two integers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "adder")]
pub struct Args {
    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Fail with a non-zero exit status when operands are missing
    #[arg(long)]
    pub strict_usage: bool,

    /// Integers to add; only the first two are used
    #[arg(value_name = "NUM", allow_negative_numbers = true)]
    pub operands: Vec<String>,

    /// Program name as invoked
    #[arg(skip)]
    pub program: String,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    let mut args = Args::parse();
    args.program = program_name(std::env::args_os());
    args
}

/// First element of `argv`, or an empty string if there is none
pub fn program_name(mut argv: impl Iterator<Item = OsString>) -> String {
    argv.next()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
