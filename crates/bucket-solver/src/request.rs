//! Request validation in front of the solver.
//!
//! The solver assumes positive capacities. This module is where that is
//! enforced for JSON and command-line input.

use serde::Deserialize;
use tracing::{info, warn};

use crate::bucket::Capacities;
use crate::error::RequestError;
use crate::solver::{search, SolverConfig, SolverResult};

/// A request to measure `amount_wanted_z` with two buckets
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub bucket_x: i64,
    pub bucket_y: i64,
    pub amount_wanted_z: i64,
}

impl SolveRequest {
    pub fn new(bucket_x: i64, bucket_y: i64, amount_wanted_z: i64) -> Self {
        Self {
            bucket_x,
            bucket_y,
            amount_wanted_z,
        }
    }

    /// Parse a request from its JSON body
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check both capacities are positive and convert them
    pub fn capacities(&self) -> Result<Capacities, RequestError> {
        if self.bucket_x <= 0 || self.bucket_y <= 0 {
            return Err(RequestError::InvalidCapacity {
                bucket_x: self.bucket_x,
                bucket_y: self.bucket_y,
            });
        }

        let x = u32::try_from(self.bucket_x)
            .map_err(|_| RequestError::CapacityOutOfRange(self.bucket_x))?;
        let y = u32::try_from(self.bucket_y)
            .map_err(|_| RequestError::CapacityOutOfRange(self.bucket_y))?;
        Ok(Capacities::new(x, y))
    }
}

/// Validate `request` and search for a solution.
///
/// An empty result becomes `RequestError::NoSolution`, so `Ok` always
/// carries a solved, non-empty path.
pub fn handle(request: &SolveRequest, config: &SolverConfig) -> Result<SolverResult, RequestError> {
    let caps = request.capacities().inspect_err(|err| {
        warn!(
            bucket_x = request.bucket_x,
            bucket_y = request.bucket_y,
            "rejected request: {err}"
        );
    })?;

    let result = search(caps, request.amount_wanted_z, config);
    info!(
        bucket_x = caps.x,
        bucket_y = caps.y,
        target = request.amount_wanted_z,
        outcome = ?result.outcome,
        states_explored = result.states_explored,
        "request handled"
    );

    if result.path.is_empty() {
        return Err(RequestError::NoSolution {
            outcome: result.outcome,
            states_explored: result.states_explored,
        });
    }
    Ok(result)
}
