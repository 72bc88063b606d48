//! Party-level use-case service.
//!
//! # Responsibility
//! - Read and edit the party header (title, date, time, location, guests).
//! - Assemble the overview summary shown on the landing page.

use crate::model::element::MaterialProgress;
use crate::model::party::PartyDetails;
use crate::model::task::Task;
use crate::model::timeline_event::TimelineEvent;
use crate::repo::party_repo::{PartyRepository, RepoResult};
use crate::repo::patch::PartyDetailsPatch;
use crate::service::element_service::overall_material_progress;
use crate::service::task_service::{completion_rate, upcoming_tasks, CompletionRate};
use crate::service::timeline_service::first_event;
use jiff::civil::Date;

/// Number of pending tasks surfaced on the overview.
pub const OVERVIEW_UPCOMING_TASKS: usize = 3;

/// Landing-page summary of the whole party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyOverview {
    pub details: PartyDetails,
    pub days_until_party: i64,
    pub tasks: CompletionRate,
    pub materials: MaterialProgress,
    pub upcoming_tasks: Vec<Task>,
    pub next_event: Option<TimelineEvent>,
}

/// Use-case service for the party header and overview.
pub struct PartyService<R: PartyRepository> {
    repo: R,
}

impl<R: PartyRepository> PartyService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Current party header.
    pub fn details(&self) -> PartyDetails {
        self.repo.party_details()
    }

    /// Applies `patch` to the party header; a blank title is rejected.
    pub fn update_details(&mut self, patch: &PartyDetailsPatch) -> RepoResult<PartyDetails> {
        self.repo.update_party_details(patch)
    }

    /// Whole days from `today` until the party date, clamped at zero.
    pub fn days_until_party(&self, today: Date) -> i64 {
        self.repo.party_details().days_until(today)
    }

    /// Countdown, task and material progress, upcoming tasks, first event.
    pub fn overview(&self, today: Date) -> PartyOverview {
        let details = self.repo.party_details();
        let tasks = self.repo.list_tasks();
        let materials = overall_material_progress(&self.repo.list_elements());
        let next_event = first_event(&self.repo.list_timeline_events()).cloned();

        PartyOverview {
            days_until_party: details.days_until(today),
            details,
            tasks: completion_rate(&tasks),
            materials,
            upcoming_tasks: upcoming_tasks(&tasks, OVERVIEW_UPCOMING_TASKS),
            next_event,
        }
    }
}
