//! Decor/supply element model.
//!
//! # Invariants
//! - `image` and `materials` are optional; absence is not the same as an
//!   empty list and is preserved through serialization.

use super::ids::{ElementId, EntityKind, EventId, TaskId};
use super::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Decoration,
    Food,
    Activity,
    Other,
}

impl ElementCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Decoration => "Decorations",
            Self::Food => "Food & Treats",
            Self::Activity => "Activities",
            Self::Other => "Other",
        }
    }
}

impl Display for ElementCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Decoration => "decoration",
            Self::Food => "food",
            Self::Activity => "activity",
            Self::Other => "other",
        })
    }
}

/// One supply line of an element's shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    /// Free-form quantity (`"24"`, `"1 set"`).
    pub quantity: String,
    #[serde(default)]
    pub purchased: bool,
}

impl Material {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, purchased: bool) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            purchased,
        }
    }
}

/// `(purchased, total)` material counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialProgress {
    pub purchased: usize,
    pub total: usize,
}

impl MaterialProgress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.purchased == self.total
    }

    pub fn merge(self, other: MaterialProgress) -> MaterialProgress {
        MaterialProgress {
            purchased: self.purchased + other.purchased,
            total: self.total + other.total,
        }
    }
}

/// Party decoration, food station or activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: ElementCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<Material>>,
    #[serde(default)]
    pub related_tasks: Vec<TaskId>,
    #[serde(default)]
    pub related_timeline_events: Vec<EventId>,
}

impl Element {
    /// Creates an element with no image, materials or relations.
    pub fn new(
        id: impl Into<ElementId>,
        title: impl Into<String>,
        category: ElementCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: None,
            category,
            materials: None,
            related_tasks: Vec::new(),
            related_timeline_events: Vec::new(),
        }
    }

    /// Checks that id and title are not blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_blank() {
            return Err(ValidationError::BlankId(EntityKind::Element));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankTitle(EntityKind::Element));
        }
        Ok(())
    }

    /// Purchased/total over this element's materials; `0/0` without a list.
    pub fn material_progress(&self) -> MaterialProgress {
        let materials = self.materials.as_deref().unwrap_or_default();
        MaterialProgress {
            purchased: materials.iter().filter(|m| m.purchased).count(),
            total: materials.len(),
        }
    }
}
