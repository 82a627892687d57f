//! Overhaul: workshop assignment time-tracking core.
//!
//! This crate provides the state-bearing heart of a vehicle-service
//! workshop dashboard: the assignment lifecycle, the work log intervals
//! each transition opens and closes, duration aggregation derived from
//! those intervals, and the weekly schedule projection.
//!
//! # Architecture
//!
//! Overhaul follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory for tests)
//!
//! The external stores stay authoritative across the network boundary:
//! services re-read state instead of trusting local copies, and elapsed
//! time is recomputed on demand from the interval set rather than stored.
//!
//! # Modules
//!
//! - [`tracking`]: Assignment lifecycle, work logs, and duration rollups
//! - [`schedule`]: Weekly schedule projection for display

pub mod schedule;
pub mod tracking;
