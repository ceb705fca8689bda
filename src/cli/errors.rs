use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{failed} of {discovered} conversions failed")]
    BatchFailed { failed: usize, discovered: usize },

    #[error(transparent)]
    Lasrun(#[from] lasrun::Error),
}
