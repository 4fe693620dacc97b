//! Error types for trifan

use thiserror::Error;

/// Main error type for trifan operations
///
/// The set of kinds is closed: the transport boundary matches over every
/// variant without a wildcard arm, so no failure mode can reach the wire
/// without a defined outcome. Adding a variant is an API change.
#[derive(Error, Debug)]
pub enum Error {
    /// The upstream manager holds no point set under the requested id.
    #[error("Point set not found")]
    PointSetNotFound,

    /// The point set id is not a canonical UUID.
    #[error("Invalid point set id: {0}")]
    InvalidPointSetId(String),

    /// The upstream manager cannot be reached, timed out, answered with an
    /// unexpected status, or was never configured.
    #[error("Point set manager unavailable: {0}")]
    PointSetManagerUnavailable(String),

    /// Binary data is malformed, truncated, or fails the wire contract.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The points are not suitable for triangulation.
    #[error("Invalid point set: {0}")]
    InvalidPointSet(String),

    /// The algorithm failed for internal reasons.
    #[error("Triangulation error: {0}")]
    Triangulation(String),
}

/// Result type alias for trifan operations
pub type Result<T> = std::result::Result<T, Error>;
