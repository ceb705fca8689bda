//! Command Line Interface (CLI) layer for the `lasrun` batch converter.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves presets and flags
//! into `BatchParams` and hands them to `lasrun::convert_directory`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
