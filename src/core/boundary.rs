//! Argument vector for `lasboundary`.
use std::path::Path;

use super::command::CommandLine;
use super::params::BoundaryParams;

pub const LASBOUNDARY: &str = "lasboundary";

/// Build the `lasboundary` invocation. Pure: equal parameters always give an
/// identical vector, in the order the tool documents its flags.
pub fn build_boundary_command(executable: &Path, params: &BoundaryParams) -> CommandLine {
    let mut cmd = CommandLine::new(executable);

    cmd.flag_if("-v", params.verbose)
        .option("-i", Some(params.input.as_os_str()))
        .option("-concavity", params.concavity.as_deref());

    let codes = params.class_filter.codes();
    if !codes.is_empty() {
        cmd.arg("-keep_class")
            .args(codes.iter().map(|c| c.to_string()));
    }

    cmd.flag_if("-disjoint", params.disjoint)
        .flag_if("-holes", params.holes);

    if let Some(format) = &params.output_format {
        cmd.arg(format!("-o{format}"));
    }

    cmd.option("-o", params.output_file.as_deref().map(Path::as_os_str))
        .option("-odir", params.output_dir.as_deref().map(Path::as_os_str))
        .option("-odix", params.output_appendix.as_deref())
        .args(&params.extra_options);

    cmd
}
