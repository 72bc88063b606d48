//! Party repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide read and partial-update APIs over the party collections.
//! - Hand out immutable snapshots so readers never observe a half-applied
//!   write.
//!
//! # Invariants
//! - Write paths validate the patched record before it replaces the stored
//!   one; a rejected write leaves the store unchanged.
//! - Every successful write publishes a new snapshot with `revision + 1`.
//! - Collection order is seed/insertion order and never changes on update.

use super::patch::{
    ElementPatch, Entity, EntityPatch, PartyDetailsPatch, TaskPatch, TimelineEventPatch,
};
use crate::model::element::Element;
use crate::model::ids::{ElementId, EntityKind, EventId, TaskId};
use crate::model::party::{PartyData, PartyDetails};
use crate::model::task::Task;
use crate::model::timeline_event::TimelineEvent;
use crate::model::validation::ValidationError;
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for party store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound { kind: EntityKind, id: String },
    DuplicateId { kind: EntityKind, id: String },
}

impl RepoError {
    fn not_found(kind: EntityKind, id: impl Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::DuplicateId { kind, id } => write!(f, "duplicate {kind} id: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } | Self::DuplicateId { .. } => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for the party data store.
pub trait PartyRepository {
    fn party_details(&self) -> PartyDetails;
    fn list_tasks(&self) -> Vec<Task>;
    fn list_elements(&self) -> Vec<Element>;
    fn list_timeline_events(&self) -> Vec<TimelineEvent>;
    fn get_task(&self, id: &TaskId) -> Option<Task>;
    fn get_element(&self, id: &ElementId) -> Option<Element>;
    fn get_timeline_event(&self, id: &EventId) -> Option<TimelineEvent>;

    fn update_party_details(&mut self, patch: &PartyDetailsPatch) -> RepoResult<PartyDetails>;
    fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) -> RepoResult<Task>;
    fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> RepoResult<Element>;
    fn update_timeline_event(
        &mut self,
        id: &EventId,
        patch: &TimelineEventPatch,
    ) -> RepoResult<TimelineEvent>;
    fn add_element(&mut self, element: Element) -> RepoResult<ElementId>;

    /// Lists one collection as kind-erased entities.
    fn list(&self, kind: EntityKind) -> Vec<Entity> {
        match kind {
            EntityKind::Task => self.list_tasks().into_iter().map(Entity::Task).collect(),
            EntityKind::Element => self
                .list_elements()
                .into_iter()
                .map(Entity::Element)
                .collect(),
            EntityKind::TimelineEvent => self
                .list_timeline_events()
                .into_iter()
                .map(Entity::TimelineEvent)
                .collect(),
        }
    }

    /// Applies a kind-tagged patch to the record with `id`.
    fn update(&mut self, id: &str, patch: &EntityPatch) -> RepoResult<Entity> {
        match patch {
            EntityPatch::Task(patch) => self.update_task(&TaskId::from(id), patch).map(Entity::Task),
            EntityPatch::Element(patch) => self
                .update_element(&ElementId::from(id), patch)
                .map(Entity::Element),
            EntityPatch::TimelineEvent(patch) => self
                .update_timeline_event(&EventId::from(id), patch)
                .map(Entity::TimelineEvent),
        }
    }
}

impl<R: PartyRepository + ?Sized> PartyRepository for &mut R {
    fn party_details(&self) -> PartyDetails {
        (**self).party_details()
    }

    fn list_tasks(&self) -> Vec<Task> {
        (**self).list_tasks()
    }

    fn list_elements(&self) -> Vec<Element> {
        (**self).list_elements()
    }

    fn list_timeline_events(&self) -> Vec<TimelineEvent> {
        (**self).list_timeline_events()
    }

    fn get_task(&self, id: &TaskId) -> Option<Task> {
        (**self).get_task(id)
    }

    fn get_element(&self, id: &ElementId) -> Option<Element> {
        (**self).get_element(id)
    }

    fn get_timeline_event(&self, id: &EventId) -> Option<TimelineEvent> {
        (**self).get_timeline_event(id)
    }

    fn update_party_details(&mut self, patch: &PartyDetailsPatch) -> RepoResult<PartyDetails> {
        (**self).update_party_details(patch)
    }

    fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        (**self).update_task(id, patch)
    }

    fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> RepoResult<Element> {
        (**self).update_element(id, patch)
    }

    fn update_timeline_event(
        &mut self,
        id: &EventId,
        patch: &TimelineEventPatch,
    ) -> RepoResult<TimelineEvent> {
        (**self).update_timeline_event(id, patch)
    }

    fn add_element(&mut self, element: Element) -> RepoResult<ElementId> {
        (**self).add_element(element)
    }
}

/// Immutable view of the store at one revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartySnapshot {
    pub revision: u64,
    pub data: PartyData,
}

/// Process-memory party store.
#[derive(Debug, Clone)]
pub struct InMemoryPartyRepository {
    current: Arc<PartySnapshot>,
}

impl InMemoryPartyRepository {
    /// Creates a store from a dataset after validating every record.
    ///
    /// # Errors
    /// - `Validation` when any record violates its invariants.
    /// - `DuplicateId` when two records of one collection share an id.
    pub fn new(data: PartyData) -> RepoResult<Self> {
        data.validate()?;
        ensure_unique(EntityKind::Task, data.tasks.iter().map(|t| t.id.as_str()))?;
        ensure_unique(
            EntityKind::Element,
            data.elements.iter().map(|e| e.id.as_str()),
        )?;
        ensure_unique(
            EntityKind::TimelineEvent,
            data.timeline_events.iter().map(|e| e.id.as_str()),
        )?;

        info!(
            "event=store_init module=repo status=ok tasks={} elements={} timeline_events={}",
            data.tasks.len(),
            data.elements.len(),
            data.timeline_events.len()
        );

        Ok(Self {
            current: Arc::new(PartySnapshot { revision: 0, data }),
        })
    }

    /// Returns the current snapshot; later writes do not affect it.
    pub fn snapshot(&self) -> Arc<PartySnapshot> {
        Arc::clone(&self.current)
    }

    pub fn revision(&self) -> u64 {
        self.current.revision
    }

    fn data(&self) -> &PartyData {
        &self.current.data
    }

    /// Publishes a new revision after `mutate` has run on a private copy.
    fn commit(&mut self, mutate: impl FnOnce(&mut PartyData)) -> u64 {
        let snapshot = Arc::make_mut(&mut self.current);
        mutate(&mut snapshot.data);
        snapshot.revision += 1;
        snapshot.revision
    }
}

impl PartyRepository for InMemoryPartyRepository {
    fn party_details(&self) -> PartyDetails {
        self.data().party_details.clone()
    }

    fn list_tasks(&self) -> Vec<Task> {
        self.data().tasks.clone()
    }

    fn list_elements(&self) -> Vec<Element> {
        self.data().elements.clone()
    }

    fn list_timeline_events(&self) -> Vec<TimelineEvent> {
        self.data().timeline_events.clone()
    }

    fn get_task(&self, id: &TaskId) -> Option<Task> {
        self.data().tasks.iter().find(|t| &t.id == id).cloned()
    }

    fn get_element(&self, id: &ElementId) -> Option<Element> {
        self.data().elements.iter().find(|e| &e.id == id).cloned()
    }

    fn get_timeline_event(&self, id: &EventId) -> Option<TimelineEvent> {
        self.data()
            .timeline_events
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }

    fn update_party_details(&mut self, patch: &PartyDetailsPatch) -> RepoResult<PartyDetails> {
        let mut details = self.data().party_details.clone();
        patch.apply_to(&mut details);
        details.validate()?;

        let updated = details.clone();
        let revision = self.commit(|data| data.party_details = details);
        info!("event=party_update module=repo status=ok revision={revision}");
        Ok(updated)
    }

    fn update_task(&mut self, id: &TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        let Some(index) = self.data().tasks.iter().position(|t| &t.id == id) else {
            warn!("event=task_update module=repo status=error error_code=not_found id={id}");
            return Err(RepoError::not_found(EntityKind::Task, id));
        };

        let mut task = self.data().tasks[index].clone();
        patch.apply_to(&mut task);
        task.validate()?;

        let updated = task.clone();
        let revision = self.commit(|data| data.tasks[index] = task);
        info!("event=task_update module=repo status=ok id={id} revision={revision}");
        Ok(updated)
    }

    fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> RepoResult<Element> {
        let Some(index) = self.data().elements.iter().position(|e| &e.id == id) else {
            warn!("event=element_update module=repo status=error error_code=not_found id={id}");
            return Err(RepoError::not_found(EntityKind::Element, id));
        };

        let mut element = self.data().elements[index].clone();
        patch.apply_to(&mut element);
        element.validate()?;

        let updated = element.clone();
        let revision = self.commit(|data| data.elements[index] = element);
        info!("event=element_update module=repo status=ok id={id} revision={revision}");
        Ok(updated)
    }

    fn update_timeline_event(
        &mut self,
        id: &EventId,
        patch: &TimelineEventPatch,
    ) -> RepoResult<TimelineEvent> {
        let Some(index) = self
            .data()
            .timeline_events
            .iter()
            .position(|e| &e.id == id)
        else {
            warn!("event=timeline_update module=repo status=error error_code=not_found id={id}");
            return Err(RepoError::not_found(EntityKind::TimelineEvent, id));
        };

        let mut event = self.data().timeline_events[index].clone();
        patch.apply_to(&mut event);
        event.validate()?;

        let updated = event.clone();
        let revision = self.commit(|data| data.timeline_events[index] = event);
        info!("event=timeline_update module=repo status=ok id={id} revision={revision}");
        Ok(updated)
    }

    fn add_element(&mut self, element: Element) -> RepoResult<ElementId> {
        element.validate()?;
        if self.data().elements.iter().any(|e| e.id == element.id) {
            return Err(RepoError::DuplicateId {
                kind: EntityKind::Element,
                id: element.id.to_string(),
            });
        }

        let id = element.id.clone();
        let revision = self.commit(|data| data.elements.push(element));
        info!("event=element_add module=repo status=ok id={id} revision={revision}");
        Ok(id)
    }
}

fn ensure_unique<'a>(kind: EntityKind, ids: impl Iterator<Item = &'a str>) -> RepoResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RepoError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
