//! High-level library API: batch conversion of a directory tree through a
//! stdin-driven converter, and the `lasboundary` toolbox flow
//! (validate, build, execute, report). Prefer these entrypoints over the
//! low-level `core` modules when integrating lasrun.
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::boundary::{LASBOUNDARY, build_boundary_command};
use crate::core::convert::{ConversionJob, converter_command};
use crate::core::discovery::discover_files;
use crate::core::install::{Installation, find_executable, locate_bin_dir};
use crate::core::params::{BatchParams, BoundaryParams};
use crate::core::paths::derive_output_path;
use crate::core::process::{ProcessOutcome, run_captured, run_with_stdin};
use crate::error::{Error, Result};
use crate::io::host::HostMessenger;

/// A conversion that did not produce a successful exit.
#[derive(Debug, Clone, Serialize)]
pub struct FailedJob {
    pub job: ConversionJob,
    pub error: String,
}

/// Batch processing report
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub started_at: DateTime<Local>,
    pub finished_at: Option<DateTime<Local>>,
    pub discovered: usize,
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub dry_run: bool,
    pub failures: Vec<FailedJob>,
}

impl BatchReport {
    fn start(dry_run: bool) -> Self {
        Self {
            started_at: Local::now(),
            finished_at: None,
            discovered: 0,
            processed: 0,
            skipped: 0,
            failed: 0,
            dry_run,
            failures: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Discover inputs and pair each with its mirrored output path.
pub fn plan_jobs(params: &BatchParams) -> Result<Vec<ConversionJob>> {
    discover_files(&params.input_dir, &params.extension)?
        .into_iter()
        .map(|input| -> Result<ConversionJob> {
            let output = derive_output_path(
                &input,
                &params.input_dir,
                &params.output_dir,
                &params.output_extension,
            )?;
            Ok(ConversionJob::new(input, output))
        })
        .collect()
}

/// Run the converter for one job and wait for it. Any non-zero exit is an error.
pub fn convert_file(converter: &Path, job: &ConversionJob) -> Result<ProcessOutcome> {
    if let Some(parent) = job.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let outcome = run_with_stdin(&converter_command(converter), &job.prompt_payload())?;
    if !outcome.stdout.trim().is_empty() {
        debug!("{} output:\n{}", outcome.tool, outcome.stdout.trim_end());
    }
    outcome.into_result()
}

/// Convert every matching file below `params.input_dir`, strictly one at a time.
/// Failures are recorded in the report. With `continue_on_error` the loop
/// continues; otherwise it stops after the first failure and the partial
/// report is still returned.
pub fn convert_directory(params: &BatchParams) -> Result<BatchReport> {
    let mut report = BatchReport::start(params.dry_run);

    info!("Starting batch conversion from directory: {:?}", params.input_dir);
    info!("Output directory: {:?}", params.output_dir);

    let jobs = plan_jobs(params)?;
    report.discovered = jobs.len();

    for job in jobs {
        if params.skip_existing && job.output.exists() {
            info!("Skipping existing output: {:?}", job.output);
            report.skipped += 1;
            continue;
        }

        if params.dry_run {
            info!("Would convert: {:?} -> {:?}", job.input, job.output);
            report.skipped += 1;
            continue;
        }

        info!("Converting: {:?} -> {:?}", job.input, job.output);
        match convert_file(&params.converter, &job) {
            Ok(_) => {
                info!("Finished: {:?}", job.output);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Error converting {:?}: {}", job.input, e);
                report.failed += 1;
                report.failures.push(FailedJob {
                    job,
                    error: e.to_string(),
                });
                if !params.continue_on_error {
                    warn!("Stopping after the first failure");
                    break;
                }
            }
        }
    }

    report.finished_at = Some(Local::now());
    info!("Batch conversion complete!");
    info!("Discovered: {}", report.discovered);
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Failed: {}", report.failed);
    Ok(report)
}

/// Validate the installation for `lasboundary`, reporting each step to the host.
/// The `bin` directory is announced as soon as it is found, before the
/// executable is looked up.
pub fn locate_boundary_tool(root: &Path, messenger: &mut dyn HostMessenger) -> Result<Installation> {
    let located = locate_bin_dir(root).and_then(|bin_dir| {
        messenger.add_message(&format!("Found {} ...", bin_dir.display()));
        let executable = find_executable(&bin_dir, LASBOUNDARY)?;
        messenger.add_message(&format!("Found {} ...", executable.display()));
        Ok(Installation::from_parts(root, bin_dir, LASBOUNDARY, executable))
    });

    if let Err(e) = &located {
        match e {
            Error::PathContainsSpaces(path) => {
                messenger.add_error("Error. Path to .\\lastools installation contains spaces.");
                messenger.add_error(&format!("This does not work: {}", path.display()));
                messenger.add_error("This would work:    C:\\software\\lastools");
            }
            Error::BinDirNotFound(path) => {
                messenger.add_error(&format!("Cannot find .\\lastools\\bin at {}", path.display()));
            }
            Error::ExecutableNotFound { tool, path } => {
                messenger.add_error(&format!("Cannot find {} at {}", tool, path.display()));
            }
            other => messenger.add_error(&other.to_string()),
        }
    }
    located
}

/// Build and run `lasboundary`, relaying the command line, the tool's output
/// and the verdict to the host.
pub fn run_boundary(
    install: &Installation,
    params: &BoundaryParams,
    messenger: &mut dyn HostMessenger,
) -> Result<ProcessOutcome> {
    let command = build_boundary_command(&install.executable, params);
    messenger.add_message("LAStools command line:");
    messenger.add_message(&command.to_string());

    let outcome = match run_captured(&command) {
        Ok(outcome) => outcome,
        Err(e) => {
            messenger.add_error(&e.to_string());
            messenger.add_error("Error. lasboundary failed.");
            return Err(e);
        }
    };

    let output = outcome.combined_output();
    if !output.is_empty() {
        messenger.add_message(&output);
    }

    if outcome.success() {
        messenger.add_message("Success. lasboundary done.");
        Ok(outcome)
    } else {
        messenger.add_error("Error. lasboundary failed.");
        outcome.into_result()
    }
}

/// The whole toolbox flow: locate the tool under `root`, then run it.
pub fn boundary_from_host(
    root: &Path,
    params: &BoundaryParams,
    messenger: &mut dyn HostMessenger,
) -> Result<ProcessOutcome> {
    messenger.add_message("Starting lasboundary ...");
    let install = locate_boundary_tool(root, messenger)?;
    run_boundary(&install, params, messenger)
}
