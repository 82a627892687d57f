//! Unit tests for the schedule context.
