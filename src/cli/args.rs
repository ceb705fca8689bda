use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lasrun",
    version,
    about = "Batch-convert LiDAR files by driving a LAStools converter through its stdin prompt"
)]
pub struct CliArgs {
    /// JSON preset with batch parameters; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory scanned recursively for input files [default: data]
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Directory the output tree is mirrored into [default: result_data]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Input file extension [default: las]
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Extension of the converted files [default: txt]
    #[arg(long)]
    pub output_extension: Option<String>,

    /// Converter executable [default: lastools/bin/las2txt.exe]
    #[arg(short, long)]
    pub converter: Option<PathBuf>,

    /// Stop at the first failed conversion
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Skip inputs whose output file already exists
    #[arg(long, default_value_t = false)]
    pub skip_existing: bool,

    /// List the planned conversions without running the converter
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Write a JSON report of the run to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
