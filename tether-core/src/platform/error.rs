//! Error types for the platform boundary.

use thiserror::Error;

/// A security-policy refusal of a check the caller nominally had
/// permission to make. Resolvers treat this the same as expected absence.
#[derive(Debug, Clone, Error)]
#[error("security policy refused the check: {0}")]
pub struct PolicyDenied(pub String);

/// Failure while querying the third-party attribution provider.
#[derive(Debug, Error)]
pub enum AttributionError {
    #[error("attribution query failed: {0}")]
    QueryFailed(String),
}

/// Failure while reading our own package from the package registry.
///
/// Unlike the other boundary errors this one is fatal to the resolution:
/// our own package must exist for this code to be running.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("own package is missing from the package registry")]
    OwnPackageMissing,
}
