//! Timeline use-case service.
//!
//! # Responsibility
//! - Resolve a selected event id against the store and hand the result to
//!   the layout engine.
//! - Provide schedule-ordered listings and event relations.
//!
//! # Invariants
//! - An unknown selection is reported as `EventNotFound`; no fallback event
//!   is substituted.
//! - Schedule order is by start time, ties kept in store order.

use crate::layout::engine::{find_overlapping, TimelineView};
use crate::layout::window::TimelineLayout;
use crate::model::element::Element;
use crate::model::ids::{EntityKind, EventId};
use crate::model::task::Task;
use crate::model::timeline_event::TimelineEvent;
use crate::repo::party_repo::{PartyRepository, RepoError};
use crate::repo::patch::TimelineEventPatch;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for timeline use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineServiceError {
    /// Selected or targeted event does not exist.
    EventNotFound(EventId),
    /// Store-level failure.
    Repo(RepoError),
}

impl Display for TimelineServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventNotFound(id) => write!(f, "timeline event not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TimelineServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::EventNotFound(_) => None,
        }
    }
}

impl From<RepoError> for TimelineServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound {
                kind: EntityKind::TimelineEvent,
                id,
            } => Self::EventNotFound(EventId::from(id)),
            other => Self::Repo(other),
        }
    }
}

/// Records linked from one timeline event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRelations {
    pub event: TimelineEvent,
    pub tasks: Vec<Task>,
    pub elements: Vec<Element>,
}

impl EventRelations {
    /// `true` when the event links to no known task or element.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.elements.is_empty()
    }

    /// Number of resolved linked records.
    pub fn len(&self) -> usize {
        self.tasks.len() + self.elements.len()
    }
}

/// Earliest event by start time; ties keep input order.
pub fn first_event(events: &[TimelineEvent]) -> Option<&TimelineEvent> {
    events.iter().min_by_key(|event| event.start)
}

/// Use-case service for the party schedule.
pub struct TimelineService<R: PartyRepository> {
    repo: R,
    layout: TimelineLayout,
}

impl<R: PartyRepository> TimelineService<R> {
    /// Creates a service over `repo` that renders with `layout`.
    pub fn new(repo: R, layout: TimelineLayout) -> Self {
        Self { repo, layout }
    }

    /// Layout used by [`Self::timeline_view`].
    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    /// All events ordered by start time.
    pub fn sorted_events(&self) -> Vec<TimelineEvent> {
        let mut events = self.repo.list_timeline_events();
        events.sort_by_key(|event| event.start);
        events
    }

    /// Earliest event of the day, if any.
    pub fn next_event(&self) -> Option<TimelineEvent> {
        first_event(&self.repo.list_timeline_events()).cloned()
    }

    /// Computes the render model for the event with `selected_id`.
    pub fn timeline_view(&self, selected_id: &EventId) -> Result<TimelineView, TimelineServiceError> {
        let events = self.repo.list_timeline_events();
        let Some(selected) = events.iter().find(|event| &event.id == selected_id) else {
            warn!(
                "event=timeline_view module=service status=error error_code=not_found id={selected_id}"
            );
            return Err(TimelineServiceError::EventNotFound(selected_id.clone()));
        };

        let view = self.layout.render(selected, &events);
        debug!(
            "event=timeline_view module=service status=ok id={} overlaps={}",
            selected_id,
            view.overlapping.len()
        );
        Ok(view)
    }

    /// Events overlapping `selected_id`, in store order.
    pub fn overlapping_events(
        &self,
        selected_id: &EventId,
    ) -> Result<Vec<TimelineEvent>, TimelineServiceError> {
        let events = self.repo.list_timeline_events();
        let selected = events
            .iter()
            .find(|event| &event.id == selected_id)
            .ok_or_else(|| TimelineServiceError::EventNotFound(selected_id.clone()))?;

        Ok(find_overlapping(selected, &events)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Resolves linked tasks and elements; dangling ids are skipped.
    pub fn relations(&self, id: &EventId) -> Result<EventRelations, TimelineServiceError> {
        let event = self
            .repo
            .get_timeline_event(id)
            .ok_or_else(|| TimelineServiceError::EventNotFound(id.clone()))?;
        let tasks = self
            .repo
            .list_tasks()
            .into_iter()
            .filter(|task| event.related_tasks.contains(&task.id))
            .collect();
        let elements = self
            .repo
            .list_elements()
            .into_iter()
            .filter(|element| event.related_elements.contains(&element.id))
            .collect();

        Ok(EventRelations {
            event,
            tasks,
            elements,
        })
    }

    /// Applies `patch` to one event; an unknown id is `EventNotFound`.
    pub fn update_event(
        &mut self,
        id: &EventId,
        patch: &TimelineEventPatch,
    ) -> Result<TimelineEvent, TimelineServiceError> {
        Ok(self.repo.update_timeline_event(id, patch)?)
    }
}
