//! AI service error types.

use thiserror::Error;

/// Errors from AI capability providers.
#[derive(Error, Debug)]
pub enum AiError {
    /// The input was empty or unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backing service failed.
    #[error("AI backend error: {0}")]
    Backend(String),
}
