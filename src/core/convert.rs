//! The interactive prompt protocol of the LAStools converters (`las2txt` and
//! friends run without arguments read the input and output names from stdin).
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::command::CommandLine;

/// One input file and the output it converts into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Text written to the converter's stdin: `"<input>\n<output> "`.
    /// The trailing space after the output name is part of the protocol.
    pub fn prompt_payload(&self) -> String {
        format!("{}\n{} ", self.input.display(), self.output.display())
    }
}

/// The converter is started without arguments; everything goes through stdin.
pub fn converter_command(converter: &Path) -> CommandLine {
    CommandLine::new(converter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_keeps_trailing_space() {
        let job = ConversionJob::new("data/a/tile.las", "result_data/a/tile.txt");
        assert_eq!(job.prompt_payload(), "data/a/tile.las\nresult_data/a/tile.txt ");
    }

    #[test]
    fn converter_takes_no_arguments() {
        let cmd = converter_command(Path::new("lastools/bin/las2txt.exe"));
        assert!(cmd.get_args().is_empty());
        assert_eq!(cmd.tool_name(), "las2txt");
    }
}
