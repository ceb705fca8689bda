#![doc = r#"
lasrun: drive the LAStools LiDAR executables from Rust.

This crate does not read point clouds. It finds input files, turns parameters
into command lines for the closed-source LAStools executables, runs one of
them at a time and relays what they print and how they exit. It powers two
binaries:

- `lasrun`: batch conversion of a directory tree through a converter that
  reads its file names from stdin (e.g. `las2txt`).
- `lasboundary_tool`: a GIS toolbox adapter that maps the host's positional
  parameters onto a `lasboundary` command line.

Batch conversion
----------------
```rust,no_run
use std::path::PathBuf;
use lasrun::{convert_directory, BatchParams};

fn main() -> lasrun::Result<()> {
    let params = BatchParams {
        input_dir: PathBuf::from("data"),
        output_dir: PathBuf::from("result_data"),
        converter: PathBuf::from("C:/lastools/bin/las2txt.exe"),
        ..BatchParams::default()
    };

    let report = convert_directory(&params)?;
    println!("processed={} failed={}", report.processed, report.failed);
    Ok(())
}
```

Building a boundary command
---------------------------
```rust
use std::path::Path;
use lasrun::{build_boundary_command, BoundaryParams, ClassFilter};

let mut params = BoundaryParams::new("tile.laz");
params.class_filter = ClassFilter::Vegetation;
params.holes = true;

let cmd = build_boundary_command(Path::new("lasboundary.exe"), &params);
assert_eq!(
    cmd.args_lossy(),
    vec!["-i", "tile.laz", "-keep_class", "3", "4", "5", "-holes"]
);
```

Error handling
--------------
All public functions return `lasrun::Result<T>`. A converter or tool that
exits non-zero surfaces as `Error::ToolFailed`; installation problems are
`Error::PathContainsSpaces`, `Error::BinDirNotFound` and
`Error::ExecutableNotFound`.

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: discovery, path derivation, command builder, process execution.
- [`io`]: messages relayed to the GIS host.
- [`types`]: `ClassFilter` and host value helpers.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod types;

// Curated public API surface
pub use crate::core::command::CommandLine;
pub use crate::core::convert::ConversionJob;
pub use crate::core::install::{Installation, LASTOOLS_HOME_ENV};
pub use crate::core::params::{BatchParams, BoundaryParams};
pub use crate::core::process::ProcessOutcome;
pub use error::{Error, Result};
pub use io::host::{ConsoleMessenger, HostMessenger, RecordingMessenger};
pub use types::ClassFilter;

pub use api::{
    BatchReport, FailedJob, boundary_from_host, convert_directory, convert_file,
    locate_boundary_tool, plan_jobs, run_boundary,
};
pub use crate::core::boundary::build_boundary_command;
pub use crate::core::discovery::discover_files;
pub use crate::core::paths::derive_output_path;
