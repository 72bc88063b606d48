//! Checklist task model.
//!
//! # Invariants
//! - `id` and `title` are never blank.
//! - `due_date` is a civil (zone-less) date; comparisons are day-granular.

use super::ids::{ElementId, EntityKind, EventId, TaskId};
use super::validation::ValidationError;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Task bucket used to group the checklist.
///
/// Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    ToPurchase,
    ToConfirm,
    ToPrepare,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 3] = [Self::ToPurchase, Self::ToConfirm, Self::ToPrepare];

    /// Human-readable group heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::ToPurchase => "To Purchase",
            Self::ToConfirm => "To Confirm",
            Self::ToPrepare => "To Prepare",
        }
    }
}

impl Display for TaskCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ToPurchase => "to-purchase",
            Self::ToConfirm => "to-confirm",
            Self::ToPrepare => "to-prepare",
        })
    }
}

/// Party preparation task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub due_date: Date,
    pub priority: TaskPriority,
    pub category: TaskCategory,
    #[serde(default)]
    pub related_elements: Vec<ElementId>,
    #[serde(default)]
    pub related_timeline_events: Vec<EventId>,
}

impl Task {
    /// Checks that id and title are not blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::BlankId(EntityKind::Task));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle(EntityKind::Task));
        }
        Ok(())
    }

    /// Returns whether the task is still open after its due date.
    pub fn is_past_due(&self, today: Date) -> bool {
        !self.completed && self.due_date < today
    }
}
