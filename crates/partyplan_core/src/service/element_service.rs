//! Element use-case service.
//!
//! # Responsibility
//! - Browse the decor/supply inventory by category.
//! - Track material purchases per element and across the party.
//! - Add new elements with generated ids.

use crate::model::element::{Element, ElementCategory, MaterialProgress};
use crate::model::ids::{ElementId, EntityKind};
use crate::model::task::Task;
use crate::model::timeline_event::TimelineEvent;
use crate::repo::party_repo::{PartyRepository, RepoError, RepoResult};
use crate::repo::patch::ElementPatch;
use crate::seed::suggested_elements;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for element use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementServiceError {
    /// Target element does not exist.
    ElementNotFound(ElementId),
    /// Material index is past the end of the element's material list.
    MaterialIndexOutOfRange {
        element: ElementId,
        index: usize,
        len: usize,
    },
    /// Suggestion index is past the end of the preset catalog.
    SuggestionOutOfRange { index: usize, len: usize },
    /// Store-level failure.
    Repo(RepoError),
}

impl Display for ElementServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ElementNotFound(id) => write!(f, "element not found: {id}"),
            Self::MaterialIndexOutOfRange {
                element,
                index,
                len,
            } => write!(
                f,
                "material index {index} out of range for element {element} with {len} materials"
            ),
            Self::SuggestionOutOfRange { index, len } => {
                write!(f, "suggestion {index} out of range; {len} presets available")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ElementServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ElementServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound {
                kind: EntityKind::Element,
                id,
            } => Self::ElementNotFound(ElementId::from(id)),
            other => Self::Repo(other),
        }
    }
}

/// Input for creating an element from the "add element" flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewElement {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: ElementCategory,
}

/// Records linked from one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRelations {
    pub element: Element,
    pub tasks: Vec<Task>,
    pub timeline_events: Vec<TimelineEvent>,
}

/// Purchased/total materials summed over `elements`.
pub fn overall_material_progress(elements: &[Element]) -> MaterialProgress {
    elements
        .iter()
        .map(Element::material_progress)
        .fold(MaterialProgress::default(), MaterialProgress::merge)
}

/// Use-case service for the party inventory.
pub struct ElementService<R: PartyRepository> {
    repo: R,
}

impl<R: PartyRepository> ElementService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists elements, optionally restricted to one category.
    pub fn list_elements(&self, category: Option<ElementCategory>) -> Vec<Element> {
        self.repo
            .list_elements()
            .into_iter()
            .filter(|element| category.map_or(true, |c| element.category == c))
            .collect()
    }

    /// Returns one element by id.
    pub fn get_element(&self, id: &ElementId) -> Option<Element> {
        self.repo.get_element(id)
    }

    /// Purchased/total materials summed over every element.
    pub fn overall_material_progress(&self) -> MaterialProgress {
        overall_material_progress(&self.repo.list_elements())
    }

    /// Flips the `purchased` flag of material `index` on one element.
    pub fn toggle_material_purchased(
        &mut self,
        id: &ElementId,
        index: usize,
    ) -> Result<Element, ElementServiceError> {
        let element = self
            .repo
            .get_element(id)
            .ok_or_else(|| ElementServiceError::ElementNotFound(id.clone()))?;

        let mut materials = element.materials.unwrap_or_default();
        let len = materials.len();
        let material =
            materials
                .get_mut(index)
                .ok_or_else(|| ElementServiceError::MaterialIndexOutOfRange {
                    element: id.clone(),
                    index,
                    len,
                })?;
        material.purchased = !material.purchased;

        Ok(self
            .repo
            .update_element(id, &ElementPatch::materials(materials))?)
    }

    /// Applies `patch` to one element.
    pub fn update_element(
        &mut self,
        id: &ElementId,
        patch: &ElementPatch,
    ) -> Result<Element, ElementServiceError> {
        Ok(self.repo.update_element(id, patch)?)
    }

    /// Creates an element with a generated id and no materials.
    pub fn add_element(&mut self, input: NewElement) -> RepoResult<Element> {
        let mut element = Element::new(ElementId::generate(), input.title, input.category);
        element.description = input.description;
        element.image = input.image;

        let id = self.repo.add_element(element.clone())?;
        info!("event=element_create module=service status=ok id={id}");
        Ok(element)
    }

    /// Adds a copy of preset `index` from the suggestion catalog.
    ///
    /// # Errors
    /// - `SuggestionOutOfRange` when `index` is past the catalog end.
    pub fn add_suggested(&mut self, index: usize) -> Result<Element, ElementServiceError> {
        let mut presets = suggested_elements();
        let len = presets.len();
        if index >= len {
            return Err(ElementServiceError::SuggestionOutOfRange { index, len });
        }
        Ok(self.add_element(presets.swap_remove(index))?)
    }

    /// Resolves linked tasks and events; dangling ids are skipped.
    pub fn relations(&self, id: &ElementId) -> Result<ElementRelations, ElementServiceError> {
        let element = self
            .repo
            .get_element(id)
            .ok_or_else(|| ElementServiceError::ElementNotFound(id.clone()))?;
        let tasks = self
            .repo
            .list_tasks()
            .into_iter()
            .filter(|task| element.related_tasks.contains(&task.id))
            .collect();
        let timeline_events = self
            .repo
            .list_timeline_events()
            .into_iter()
            .filter(|event| element.related_timeline_events.contains(&event.id))
            .collect();

        Ok(ElementRelations {
            element,
            tasks,
            timeline_events,
        })
    }
}
