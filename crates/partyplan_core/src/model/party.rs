//! Party metadata and the canonical dataset shape.

use super::element::Element;
use super::task::Task;
use super::time::TimeOfDay;
use super::timeline_event::TimelineEvent;
use super::validation::ValidationError;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Header-level facts about the party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyDetails {
    pub title: String,
    pub date: Date,
    pub time: TimeOfDay,
    pub location: String,
    pub expected_guests: u32,
}

impl PartyDetails {
    /// Checks that the party title is not blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankPartyTitle);
        }
        Ok(())
    }

    /// Whole days from `today` until the party, never negative.
    pub fn days_until(&self, today: Date) -> i64 {
        // Civil days are always 24 hours long.
        let days = today.duration_until(self.date).as_hours() / 24;
        days.max(0)
    }
}

/// Object-of-collections dataset: everything the store is seeded with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyData {
    pub party_details: PartyDetails,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub timeline_events: Vec<TimelineEvent>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl PartyData {
    /// Validates every record in the dataset.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.party_details.validate()?;
        for task in &self.tasks {
            task.validate()?;
        }
        for event in &self.timeline_events {
            event.validate()?;
        }
        for element in &self.elements {
            element.validate()?;
        }
        Ok(())
    }
}
