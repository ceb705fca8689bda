use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{ClassFilter, host_flag, host_optional};

/// Concavity `lasboundary` uses when none is given (meters), as the host sends it.
pub const DEFAULT_CONCAVITY: &str = "50";

/// Number of positional arguments the GIS toolbox passes to the boundary adapter.
pub const BOUNDARY_HOST_ARGS: usize = 11;

/// Batch conversion parameters suitable for config files (JSON presets)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchParams {
    /// Root scanned recursively for inputs
    pub input_dir: PathBuf,
    /// Root the output tree is mirrored into
    pub output_dir: PathBuf,
    /// Input extension, without the dot
    pub extension: String,
    /// Extension given to derived outputs
    pub output_extension: String,
    /// Converter executable driven through its stdin prompt
    pub converter: PathBuf,
    /// Record failures and keep going instead of stopping at the first one
    pub continue_on_error: bool,
    /// Leave inputs alone whose output already exists
    pub skip_existing: bool,
    /// Plan and log jobs without running the converter
    pub dry_run: bool,
}

impl Default for BatchParams {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("result_data"),
            extension: "las".to_string(),
            output_extension: "txt".to_string(),
            converter: PathBuf::from("lastools/bin/las2txt.exe"),
            continue_on_error: true,
            skip_existing: false,
            dry_run: false,
        }
    }
}

impl BatchParams {
    /// Load a preset; fields missing from the file keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Parameters of one `lasboundary` run as chosen in the GIS host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryParams {
    pub input: PathBuf,
    /// Host text with a decimal comma turned into a point; None keeps the tool default
    pub concavity: Option<String>,
    pub class_filter: ClassFilter,
    pub disjoint: bool,
    pub holes: bool,
    /// Vector format token appended to `-o`, e.g. "shp" for `-oshp`
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub output_appendix: Option<String>,
    pub extra_options: Vec<String>,
    pub verbose: bool,
}

impl BoundaryParams {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            concavity: None,
            class_filter: ClassFilter::AllPoints,
            disjoint: false,
            holes: false,
            output_format: None,
            output_file: None,
            output_dir: None,
            output_appendix: None,
            extra_options: Vec::new(),
            verbose: false,
        }
    }

    /// Decode the toolbox's positional arguments (program name excluded):
    /// input, concavity, class filter, disjoint, holes, output format,
    /// output file, output directory, output appendix, extra options, verbose.
    /// The verbose flag is always read from the last argument.
    pub fn from_host_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        const NAMES: [&str; BOUNDARY_HOST_ARGS] = [
            "input",
            "concavity",
            "class filter",
            "disjoint",
            "holes",
            "output format",
            "output file",
            "output directory",
            "output appendix",
            "additional options",
            "verbose",
        ];
        if args.len() < BOUNDARY_HOST_ARGS {
            return Err(Error::MissingArgument {
                arg: NAMES[args.len()].to_string(),
            });
        }
        let arg = |i: usize| args[i].as_ref();

        let input = host_optional(arg(0)).ok_or_else(|| Error::MissingArgument {
            arg: NAMES[0].to_string(),
        })?;

        let mut params = Self::new(input);
        params.concavity = parse_concavity(arg(1));
        params.class_filter = ClassFilter::from_label(arg(2));
        params.disjoint = host_flag(arg(3));
        params.holes = host_flag(arg(4));
        params.output_format = host_optional(arg(5));
        params.output_file = host_optional(arg(6)).map(PathBuf::from);
        params.output_dir = host_optional(arg(7)).map(PathBuf::from);
        params.output_appendix = host_optional(arg(8));
        params.extra_options = host_optional(arg(9))
            .map(|s| split_extra_options(&s))
            .unwrap_or_default();
        params.verbose = host_flag(args[args.len() - 1].as_ref());
        Ok(params)
    }
}

/// Concavity as typed in the host with ',' replaced by '.'. The text is
/// otherwise passed through untouched; `None` for "50" or an unset field.
pub fn parse_concavity(value: &str) -> Option<String> {
    let normalized = host_optional(value)?.replace(',', ".");
    if normalized == DEFAULT_CONCAVITY {
        None
    } else {
        Some(normalized)
    }
}

/// Split free-form extra options on whitespace. Tokens are passed to the tool
/// verbatim as separate arguments; no shell or quote interpretation happens.
pub fn split_extra_options(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
