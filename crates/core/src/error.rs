//! Domain error taxonomy shared by the `db` and `api` crates.

use crate::types::DbId;

/// Errors produced by domain-level checks (ownership, publish gating,
/// purchase conflicts). The `api` crate maps these onto HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested row does not exist (or is not visible to the caller,
    /// e.g. an unpublished course on the student surface).
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain rule, e.g. publish-eligibility or a reorder
    /// request referencing chapters outside the course.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness rule was violated, e.g. purchasing a course twice.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The bearer token is missing, malformed, or expired.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but does not own the resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
