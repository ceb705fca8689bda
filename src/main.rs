//! lasrun CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the batch
//! conversion, and exit with status 1 if anything failed.
//! For programmatic use, prefer the library API (`lasrun::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
