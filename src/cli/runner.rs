use tracing::{error, info};

use lasrun::{BatchParams, convert_directory};

use super::args::CliArgs;
use super::errors::AppError;

/// Preset (or defaults) with every flag given on the command line applied on top.
pub fn resolve_params(args: &CliArgs) -> Result<BatchParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading preset from: {:?}", path);
            BatchParams::from_json_file(path)?
        }
        None => BatchParams::default(),
    };

    if let Some(dir) = &args.input_dir {
        params.input_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        params.output_dir = dir.clone();
    }
    if let Some(ext) = &args.extension {
        params.extension = ext.clone();
    }
    if let Some(ext) = &args.output_extension {
        params.output_extension = ext.clone();
    }
    if let Some(converter) = &args.converter {
        params.converter = converter.clone();
    }
    if args.fail_fast {
        params.continue_on_error = false;
    }
    params.skip_existing |= args.skip_existing;
    params.dry_run |= args.dry_run;

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    lasrun::logging::init(args.log, "info");

    let params = resolve_params(&args)?;
    let report = convert_directory(&params)?;

    if let Some(path) = &args.report {
        report.write_json(path)?;
        info!("Report written to: {:?}", path);
    }

    for failure in &report.failures {
        error!("{:?}: {}", failure.job.input, failure.error);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(AppError::BatchFailed {
            failed: report.failed,
            discovered: report.discovered,
        })
    }
}
