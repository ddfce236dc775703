//! Error types for dependency graph operations.
//!
//! The graph has exactly one failure mode: a null node identifier. Unknown
//! nodes, empty neighbor sets, duplicate inserts and removals of absent edges
//! are all ordinary outcomes and never produce an error.

use thiserror::Error;

/// Result type alias using `GraphError`.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Error returned by [`DependencyGraph`](crate::DependencyGraph) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A null node identifier was passed to an operation.
    ///
    /// The graph is left untouched when this is returned.
    #[error("InvalidArgument: `{parameter}` passed to `{operation}` is null")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// Which argument was null (`s`, `t`, or an element of a replacement sequence).
        parameter: &'static str,
    },
}

impl GraphError {
    pub(crate) fn null(operation: &'static str, parameter: &'static str) -> Self {
        tracing::warn!(operation, parameter, "rejected null node identifier");
        Self::InvalidArgument {
            operation,
            parameter,
        }
    }

    /// True if this error was caused by a null node identifier.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
