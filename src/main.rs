#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use cli_adder::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize configuration
    let config = Config::from_args(&args);

    // Add the operands and print the result line
    cli::execute_command(&config, &mut std::io::stdout().lock())
}
