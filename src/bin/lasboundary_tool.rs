//! GIS toolbox adapter for `lasboundary`.
//!
//! The host calls this binary with eleven positional parameters (see
//! `BoundaryParams::from_host_args`) and reads the relayed messages from
//! stdout. Exit status is 0 on success and 1 for any validation or tool failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use lasrun::core::install::root_from_tool_location;
use lasrun::{BoundaryParams, ConsoleMessenger, HostMessenger, LASTOOLS_HOME_ENV, boundary_from_host};

#[derive(Parser, Debug)]
#[command(
    name = "lasboundary_tool",
    version,
    about = "Compute a boundary polygon with lasboundary from GIS toolbox parameters"
)]
struct ToolArgs {
    /// LAStools installation root [default: three levels above this executable]
    #[arg(long, env = LASTOOLS_HOME_ENV)]
    lastools: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, default_value_t = false)]
    log: bool,

    /// input, concavity, class filter, disjoint, holes, output format,
    /// output file, output directory, output appendix, additional options, verbose
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    host_args: Vec<String>,
}

fn installation_root(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        std::env::current_exe()
            .ok()
            .and_then(|exe| root_from_tool_location(&exe))
    })
}

fn run(args: ToolArgs, messenger: &mut dyn HostMessenger) -> lasrun::Result<()> {
    let params = BoundaryParams::from_host_args(&args.host_args).inspect_err(|e| {
        messenger.add_error(&format!("Error. {e}"));
    })?;

    let Some(root) = installation_root(args.lastools) else {
        let err = lasrun::Error::MissingArgument {
            arg: "--lastools".to_string(),
        };
        messenger.add_error("Cannot determine the LAStools installation; pass --lastools.");
        return Err(err);
    };

    boundary_from_host(&root, &params, messenger).map(|_| ())
}

fn main() -> ExitCode {
    let args = ToolArgs::parse();
    lasrun::logging::init(args.log, "warn");

    let mut messenger = ConsoleMessenger::stdout();
    match run(args, &mut messenger) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("lasboundary_tool failed: {e}");
            ExitCode::from(1)
        }
    }
}
