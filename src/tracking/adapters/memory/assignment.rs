//! In-memory assignment repository for tracking tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::tracking::{
    domain::{Assignment, AssignmentId, EmployeeId},
    ports::{AssignmentRepository, AssignmentRepositoryError, AssignmentRepositoryResult},
};

/// Thread-safe in-memory assignment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssignmentRepository {
    state: Arc<RwLock<InMemoryAssignmentState>>,
}

#[derive(Debug, Default)]
struct InMemoryAssignmentState {
    assignments: HashMap<AssignmentId, Assignment>,
    employee_index: HashMap<EmployeeId, Vec<AssignmentId>>,
}

impl InMemoryAssignmentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn store(&self, assignment: &Assignment) -> AssignmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AssignmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.assignments.contains_key(&assignment.id()) {
            return Err(AssignmentRepositoryError::Duplicate(assignment.id()));
        }

        state
            .employee_index
            .entry(assignment.employee_id())
            .or_default()
            .push(assignment.id());
        state.assignments.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn update(&self, assignment: &Assignment) -> AssignmentRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            AssignmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.assignments.contains_key(&assignment.id()) {
            return Err(AssignmentRepositoryError::NotFound(assignment.id()));
        }

        // Appointment and employee references never change after dispatch,
        // so the employee index needs no rebuild.
        state.assignments.insert(assignment.id(), assignment.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: AssignmentId,
    ) -> AssignmentRepositoryResult<Option<Assignment>> {
        let state = self.state.read().map_err(|err| {
            AssignmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.assignments.get(&id).cloned())
    }

    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AssignmentRepositoryResult<Vec<Assignment>> {
        let state = self.state.read().map_err(|err| {
            AssignmentRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut assignments: Vec<Assignment> = state
            .employee_index
            .get(&employee_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.assignments.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        assignments.sort_by_key(Assignment::created_at);
        Ok(assignments)
    }
}
