//! Errors raised by the graph types.

use super::dfs::Cycle;

/// Errors that can occur while building or mutating an
/// [`AcyclicGraph`](super::AcyclicGraph).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The candidate graph contains a cycle; the live graph was not changed.
    #[error("cyclic input rejected: {0}")]
    CyclicInput(Cycle),
}

impl GraphError {
    /// Returns the cycle that caused the rejection.
    pub fn cycle(&self) -> &Cycle {
        match self {
            Self::CyclicInput(cycle) => cycle,
        }
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
