//! Repository port for assignment persistence and lookup.

use crate::tracking::domain::{Assignment, AssignmentId, EmployeeId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for assignment repository operations.
pub type AssignmentRepositoryResult<T> = Result<T, AssignmentRepositoryError>;

/// Assignment persistence contract.
///
/// The repository is the authoritative record of assignment status across
/// the network boundary; services re-read before every transition instead
/// of trusting a local copy.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Stores a newly dispatched assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::Duplicate`] when the assignment
    /// ID already exists.
    async fn store(&self, assignment: &Assignment) -> AssignmentRepositoryResult<()>;

    /// Persists status and timestamp changes to an existing assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentRepositoryError::NotFound`] when the assignment
    /// does not exist.
    async fn update(&self, assignment: &Assignment) -> AssignmentRepositoryResult<()>;

    /// Finds an assignment by identifier.
    ///
    /// Returns `None` when the assignment does not exist.
    async fn find_by_id(&self, id: AssignmentId)
    -> AssignmentRepositoryResult<Option<Assignment>>;

    /// Returns all assignments dispatched to the given employee, ascending
    /// by creation time.
    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AssignmentRepositoryResult<Vec<Assignment>>;
}

/// Errors returned by assignment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AssignmentRepositoryError {
    /// An assignment with the same identifier already exists.
    #[error("duplicate assignment: {0}")]
    Duplicate(AssignmentId),

    /// The assignment was not found.
    #[error("assignment not found: {0}")]
    NotFound(AssignmentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssignmentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
