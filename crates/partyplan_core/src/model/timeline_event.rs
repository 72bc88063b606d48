//! Timeline event model.
//!
//! # Responsibility
//! - Describe one scheduled block of the party (start/end time of day).
//! - Carry the event's inline checklist and reference links.
//!
//! # Invariants
//! - `start < end`; checked on construction and on deserialization so the
//!   layout engine never sees a reversed window.
//! - `id` and `title` are never blank.

use super::ids::{ElementId, EntityKind, EventId, TaskId};
use super::time::TimeOfDay;
use super::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// One inline checklist row shown on an event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub done: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        Self {
            text: text.into(),
            done,
        }
    }
}

/// Labelled link to supporting material for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementLink {
    pub label: String,
    pub url: String,
}

impl ElementLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Scheduled party activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimelineEventRecord")]
pub struct TimelineEvent {
    pub id: EventId,
    pub title: String,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub description: String,
    /// Inline checklist, in display order.
    pub tasks: Vec<ChecklistItem>,
    /// Reference links, in display order.
    pub elements: Vec<ElementLink>,
    /// Checklist tasks tracked in the party task list.
    pub related_tasks: Vec<TaskId>,
    /// Inventory elements used by this event.
    pub related_elements: Vec<ElementId>,
}

impl TimelineEvent {
    /// Creates an event with empty description and no attachments.
    ///
    /// # Errors
    /// - Returns `ValidationError` when `id`/`title` are blank or
    ///   `start >= end`.
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Self, ValidationError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            description: String::new(),
            tasks: Vec::new(),
            elements: Vec::new(),
            related_tasks: Vec::new(),
            related_elements: Vec::new(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Checks id, title and `start < end`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::BlankId(EntityKind::TimelineEvent));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle(EntityKind::TimelineEvent));
        }
        if self.start >= self.end {
            return Err(ValidationError::InvalidEventWindow {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Event length in minutes; always positive for a validated event.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Counts `(done, total)` inline checklist rows.
    pub fn checklist_progress(&self) -> (usize, usize) {
        let done = self.tasks.iter().filter(|item| item.done).count();
        (done, self.tasks.len())
    }
}

#[derive(Deserialize)]
struct TimelineEventRecord {
    id: EventId,
    title: String,
    start: TimeOfDay,
    end: TimeOfDay,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tasks: Vec<ChecklistItem>,
    #[serde(default)]
    elements: Vec<ElementLink>,
    #[serde(default)]
    related_tasks: Vec<TaskId>,
    #[serde(default)]
    related_elements: Vec<ElementId>,
}

impl TryFrom<TimelineEventRecord> for TimelineEvent {
    type Error = ValidationError;

    fn try_from(record: TimelineEventRecord) -> Result<Self, Self::Error> {
        let event = Self {
            id: record.id,
            title: record.title,
            start: record.start,
            end: record.end,
            description: record.description,
            tasks: record.tasks,
            elements: record.elements,
            related_tasks: record.related_tasks,
            related_elements: record.related_elements,
        };
        event.validate()?;
        Ok(event)
    }
}
