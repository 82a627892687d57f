//! In-memory appointment resolver for schedule decoration tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::tracking::{
    domain::{AppointmentDetails, AppointmentId},
    ports::{AppointmentResolver, AppointmentResolverError, AppointmentResolverResult},
};

/// Thread-safe in-memory appointment resolver.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointmentResolver {
    appointments: Arc<RwLock<HashMap<AppointmentId, AppointmentDetails>>>,
}

impl InMemoryAppointmentResolver {
    /// Creates an empty in-memory resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds display metadata for an appointment.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the backing lock is poisoned.
    pub fn insert(
        &self,
        appointment_id: AppointmentId,
        details: AppointmentDetails,
    ) -> AppointmentResolverResult<()> {
        let mut appointments = self.appointments.write().map_err(|err| {
            AppointmentResolverError::persistence(std::io::Error::other(err.to_string()))
        })?;
        appointments.insert(appointment_id, details);
        Ok(())
    }
}

#[async_trait]
impl AppointmentResolver for InMemoryAppointmentResolver {
    async fn details(
        &self,
        appointment_id: AppointmentId,
    ) -> AppointmentResolverResult<AppointmentDetails> {
        let appointments = self.appointments.read().map_err(|err| {
            AppointmentResolverError::persistence(std::io::Error::other(err.to_string()))
        })?;
        appointments
            .get(&appointment_id)
            .cloned()
            .ok_or(AppointmentResolverError::NotFound(appointment_id))
    }
}
