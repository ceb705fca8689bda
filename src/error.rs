//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Covers file discovery, installation checks, argument translation and the
//! outcome of every external tool invocation.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input directory not found: {0}")]
    InputDirNotFound(PathBuf),

    #[error("Input {input} is not located under {root}")]
    OutsideInputRoot { input: PathBuf, root: PathBuf },

    #[error("Path to LAStools installation contains spaces: {0}")]
    PathContainsSpaces(PathBuf),

    #[error("Cannot find LAStools bin directory at {0}")]
    BinDirNotFound(PathBuf),

    #[error("Cannot find {tool} at {path}")]
    ExecutableNotFound { tool: String, path: PathBuf },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed with {}", describe_exit(.code))]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_mentions_exit_code() {
        let err = Error::ToolFailed {
            tool: "las2txt".to_string(),
            code: Some(3),
            output: String::new(),
        };
        assert_eq!(err.to_string(), "las2txt failed with exit code 3");

        let killed = Error::ToolFailed {
            tool: "las2txt".to_string(),
            code: None,
            output: String::new(),
        };
        assert!(killed.to_string().contains("terminated by signal"));
    }
}
