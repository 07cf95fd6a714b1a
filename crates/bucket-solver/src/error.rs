//! Errors reported at the request boundary.

use thiserror::Error;

use crate::solver::SearchOutcome;

/// Errors raised while turning a solve request into a response
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Bucket must be greater than 0 and integers.")]
    InvalidCapacity { bucket_x: i64, bucket_y: i64 },

    #[error("Bucket capacity {0} is too large")]
    CapacityOutOfRange(i64),

    #[error("No solution.")]
    NoSolution {
        outcome: SearchOutcome,
        states_explored: usize,
    },

    #[error("Invalid request JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read request: {0}")]
    Io(#[from] std::io::Error),
}

impl RequestError {
    /// Process exit code reported by the CLI for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RequestError::NoSolution { .. } => 1,
            RequestError::InvalidCapacity { .. }
            | RequestError::CapacityOutOfRange(_)
            | RequestError::Parse(_) => 2,
            RequestError::Io(_) => 3,
        }
    }
}
