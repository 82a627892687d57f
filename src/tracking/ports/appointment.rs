//! Resolver port for appointment display metadata.

use crate::tracking::domain::{AppointmentDetails, AppointmentId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for appointment resolver operations.
pub type AppointmentResolverResult<T> = Result<T, AppointmentResolverError>;

/// Lookup contract for the external booking system.
///
/// Used purely to decorate assignments for schedule views; tracking logic
/// never depends on the resolved contents.
#[async_trait]
pub trait AppointmentResolver: Send + Sync {
    /// Resolves display metadata for an appointment.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentResolverError::NotFound`] when the booking
    /// system has no such appointment.
    async fn details(
        &self,
        appointment_id: AppointmentId,
    ) -> AppointmentResolverResult<AppointmentDetails>;
}

/// Errors returned by appointment resolver implementations.
#[derive(Debug, Clone, Error)]
pub enum AppointmentResolverError {
    /// The appointment was not found.
    #[error("appointment not found: {0}")]
    NotFound(AppointmentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AppointmentResolverError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
