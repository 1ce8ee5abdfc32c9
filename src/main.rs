//! DNS Controller
//!
//! Entry point for the dns-controller application.

use dns_controller::config::{Cli, Command, Env, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&e),
    };

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    setup_tracing(cli.verbose);

    let stdout = std::io::stdout();
    match run::execute(&cli, &Env::real(), &mut stdout.lock()) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
    }
}

/// Prints a clap error; `--help` and `--version` are successes.
fn handle_parse_error(error: &clap::Error) -> ExitCode {
    if let Err(e) = error.print() {
        eprintln!("Error: {e}");
    }

    if error.use_stderr() {
        exit_code::CONFIG_ERROR
    } else {
        exit_code::SUCCESS
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}
