//! Algorithm enum for selecting the step implementation.

use super::{Grid, step, step_parallel};

/// Available generation-step strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Single thread, row-major traversal
    #[default]
    Serial,
    /// Rows split across the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI and benchmark tables
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short explanation for the panel readout
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Single thread, row by row",
            Algorithm::Parallel => "Rows split across cores",
        }
    }

    /// Advance `previous` by one generation with this strategy
    pub fn step(self, previous: &Grid) -> Grid {
        match self {
            Algorithm::Serial => step(previous),
            Algorithm::Parallel => step_parallel(previous),
        }
    }
}
