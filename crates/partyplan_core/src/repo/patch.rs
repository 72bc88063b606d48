//! Partial-update payloads for store writes.
//!
//! Every field is optional; `None` leaves the stored value untouched. Fields
//! that are themselves optional on the record (`Element::image`,
//! `Element::materials`) use a nested `Option` so callers can clear them.

use crate::model::element::{Element, ElementCategory, Material};
use crate::model::ids::{ElementId, EntityKind, EventId, TaskId};
use crate::model::party::PartyDetails;
use crate::model::task::{Task, TaskCategory, TaskPriority};
use crate::model::time::TimeOfDay;
use crate::model::timeline_event::{ChecklistItem, ElementLink, TimelineEvent};
use jiff::civil::Date;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyDetailsPatch {
    pub title: Option<String>,
    pub date: Option<Date>,
    pub time: Option<TimeOfDay>,
    pub location: Option<String>,
    pub expected_guests: Option<u32>,
}

impl PartyDetailsPatch {
    pub fn apply_to(&self, details: &mut PartyDetails) {
        if let Some(title) = &self.title {
            details.title = title.clone();
        }
        if let Some(date) = self.date {
            details.date = date;
        }
        if let Some(time) = self.time {
            details.time = time;
        }
        if let Some(location) = &self.location {
            details.location = location.clone();
        }
        if let Some(expected_guests) = self.expected_guests {
            details.expected_guests = expected_guests;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<Date>,
    pub priority: Option<TaskPriority>,
    pub category: Option<TaskCategory>,
    pub related_elements: Option<Vec<ElementId>>,
    pub related_timeline_events: Option<Vec<EventId>>,
}

impl TaskPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(related) = &self.related_elements {
            task.related_elements = related.clone();
        }
        if let Some(related) = &self.related_timeline_events {
            task.related_timeline_events = related.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub category: Option<ElementCategory>,
    pub materials: Option<Option<Vec<Material>>>,
    pub related_tasks: Option<Vec<TaskId>>,
    pub related_timeline_events: Option<Vec<EventId>>,
}

impl ElementPatch {
    pub fn materials(materials: Vec<Material>) -> Self {
        Self {
            materials: Some(Some(materials)),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, element: &mut Element) {
        if let Some(title) = &self.title {
            element.title = title.clone();
        }
        if let Some(description) = &self.description {
            element.description = description.clone();
        }
        if let Some(image) = &self.image {
            element.image = image.clone();
        }
        if let Some(category) = self.category {
            element.category = category;
        }
        if let Some(materials) = &self.materials {
            element.materials = materials.clone();
        }
        if let Some(related) = &self.related_tasks {
            element.related_tasks = related.clone();
        }
        if let Some(related) = &self.related_timeline_events {
            element.related_timeline_events = related.clone();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineEventPatch {
    pub title: Option<String>,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub description: Option<String>,
    pub tasks: Option<Vec<ChecklistItem>>,
    pub elements: Option<Vec<ElementLink>>,
    pub related_tasks: Option<Vec<TaskId>>,
    pub related_elements: Option<Vec<ElementId>>,
}

impl TimelineEventPatch {
    pub fn reschedule(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, event: &mut TimelineEvent) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(tasks) = &self.tasks {
            event.tasks = tasks.clone();
        }
        if let Some(elements) = &self.elements {
            event.elements = elements.clone();
        }
        if let Some(related) = &self.related_tasks {
            event.related_tasks = related.clone();
        }
        if let Some(related) = &self.related_elements {
            event.related_elements = related.clone();
        }
    }
}

/// Patch addressed to one of the entity collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityPatch {
    Task(TaskPatch),
    Element(ElementPatch),
    TimelineEvent(TimelineEventPatch),
}

impl EntityPatch {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Task(_) => EntityKind::Task,
            Self::Element(_) => EntityKind::Element,
            Self::TimelineEvent(_) => EntityKind::TimelineEvent,
        }
    }
}

/// Record from any entity collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Task(Task),
    Element(Element),
    TimelineEvent(TimelineEvent),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Task(_) => EntityKind::Task,
            Self::Element(_) => EntityKind::Element,
            Self::TimelineEvent(_) => EntityKind::TimelineEvent,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Task(task) => task.id.as_str(),
            Self::Element(element) => element.id.as_str(),
            Self::TimelineEvent(event) => event.id.as_str(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Task(task) => &task.title,
            Self::Element(element) => &element.title,
            Self::TimelineEvent(event) => &event.title,
        }
    }
}
