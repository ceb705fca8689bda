//! Core building blocks: input discovery, output path derivation, the
//! structured command builder, installation checks and process execution.
//! These are consumed by the high-level `api` module.
pub mod boundary;
pub mod command;
pub mod convert;
pub mod discovery;
pub mod install;
pub mod params;
pub mod paths;
pub mod process;
