use clap::Parser;
use qovery_cli::{cli::Cli, run_command, CliError};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    let code = match run_command(cli.command) {
        Ok(code) => code,
        Err(CliError::Cancelled) => {
            println!("Wizard cancelled.");
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(code);
}
