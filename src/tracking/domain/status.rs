//! Assignment lifecycle status and the legal-transition table.

use super::ParseAssignmentStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a workshop assignment.
///
/// This is the single canonical status vocabulary of the core. External
/// systems that speak display labels ("Scheduled", "In Progress") must
/// translate at the boundary via [`AssignmentStatus::as_str`] and
/// [`TryFrom<&str>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Dispatched to an employee; work has not started.
    Assigned,
    /// Work is actively running with an open work log.
    InProgress,
    /// Work is interrupted; every work log is closed.
    Paused,
    /// Work finished normally.
    Completed,
    /// Assignment was abandoned before completion.
    Cancelled,
}

impl AssignmentStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns `true` if this status admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns `true` if the move from `self` to `to` is a legal lifecycle
    /// transition.
    ///
    /// Cancellation is reachable from every non-terminal status. Completing
    /// requires actively running work: `Paused` must pass through
    /// `InProgress` first.
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Assigned, Self::InProgress)
                | (Self::InProgress, Self::Paused)
                | (Self::InProgress, Self::Completed)
                | (Self::Paused, Self::InProgress)
                | (Self::Assigned | Self::InProgress | Self::Paused, Self::Cancelled)
        )
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for AssignmentStatus {
    type Error = ParseAssignmentStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "assigned" => Ok(Self::Assigned),
            "in_progress" => Ok(Self::InProgress),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseAssignmentStatusError(value.to_owned())),
        }
    }
}
