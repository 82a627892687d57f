//! In-memory work log store for tracking tests.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::tracking::{
    domain::{AssignmentId, WorkLog, WorkLogId},
    ports::{WorkLogStore, WorkLogStoreError, WorkLogStoreResult},
};

/// Thread-safe in-memory work log store.
///
/// Enforces the one-open-log-per-assignment constraint under a single write
/// lock and assigns every timestamp from its own clock, mirroring the
/// atomicity the production store contract requires.
#[derive(Debug, Clone)]
pub struct InMemoryWorkLogStore<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryWorkLogState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryWorkLogState {
    logs: HashMap<WorkLogId, WorkLog>,
    by_assignment: HashMap<AssignmentId, Vec<WorkLogId>>,
    open_index: HashMap<AssignmentId, WorkLogId>,
}

impl<C> InMemoryWorkLogStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store stamping timestamps from `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryWorkLogState::default())),
            clock,
        }
    }
}

#[async_trait]
impl<C> WorkLogStore for InMemoryWorkLogStore<C>
where
    C: Clock + Send + Sync,
{
    async fn open(
        &self,
        assignment_id: AssignmentId,
        note: Option<String>,
    ) -> WorkLogStoreResult<WorkLog> {
        let mut state = self.state.write().map_err(|err| {
            WorkLogStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.open_index.contains_key(&assignment_id) {
            return Err(WorkLogStoreError::OpenLogExists(assignment_id));
        }

        let log = WorkLog::open(assignment_id, note, &*self.clock);
        state.open_index.insert(assignment_id, log.id);
        state
            .by_assignment
            .entry(assignment_id)
            .or_default()
            .push(log.id);
        state.logs.insert(log.id, log.clone());
        Ok(log)
    }

    async fn close(&self, work_log_id: WorkLogId) -> WorkLogStoreResult<WorkLog> {
        let mut state = self.state.write().map_err(|err| {
            WorkLogStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        // Stamp before borrowing the log mutably.
        let now = self.clock.utc();
        let log = state
            .logs
            .get_mut(&work_log_id)
            .ok_or(WorkLogStoreError::NotFound(work_log_id))?;
        if !log.is_open() {
            return Err(WorkLogStoreError::AlreadyClosed(work_log_id));
        }

        // The store owns both timestamps; a clock stepping backwards must
        // not produce a negative interval.
        let ended_at = now.max(log.started_at);
        log.close(ended_at)
            .map_err(WorkLogStoreError::persistence)?;
        let closed = log.clone();
        state.open_index.remove(&closed.assignment_id);
        Ok(closed)
    }

    async fn list_for_assignment(
        &self,
        assignment_id: AssignmentId,
    ) -> WorkLogStoreResult<Vec<WorkLog>> {
        let state = self.state.read().map_err(|err| {
            WorkLogStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut logs: Vec<WorkLog> = state
            .by_assignment
            .get(&assignment_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.logs.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        logs.sort_by_key(|log| log.started_at);
        Ok(logs)
    }

    async fn find_open(
        &self,
        assignment_id: AssignmentId,
    ) -> WorkLogStoreResult<Option<WorkLog>> {
        let state = self.state.read().map_err(|err| {
            WorkLogStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let log = state
            .open_index
            .get(&assignment_id)
            .and_then(|log_id| state.logs.get(log_id))
            .cloned();
        Ok(log)
    }
}
