//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Display urgency tier for a care task, derived from days-until-due
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    /// Due today or tomorrow (overdue tasks fold in here)
    Critical,
    /// Due within a week
    Soon,
    /// Due in more than a week
    Later,
}

impl std::fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrgencyTier::Critical => write!(f, "Critical"),
            UrgencyTier::Soon => write!(f, "Soon"),
            UrgencyTier::Later => write!(f, "Later"),
        }
    }
}
