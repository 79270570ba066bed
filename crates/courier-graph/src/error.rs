//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `courier-graph`.
///
/// Note that "no path exists" is *not* an error: routing over a disconnected
/// map is a normal outcome, reported as an empty path or a `None` distance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("location {0:?} does not exist; add it before adding a route")]
    UnknownLocation(String),

    #[error("depot location {0:?} is missing from the route map")]
    MissingDepot(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
