//! Stable identifiers for party entities.
//!
//! Identifiers are opaque strings (`task-1`, `element-3`, `event-2`) so seed
//! data and imported JSON keep their human-readable keys.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Collection an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Task,
    Element,
    TimelineEvent,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Element => "element",
            Self::TimelineEvent => "timeline_event",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a checklist task.
    TaskId
);
string_id!(
    /// Identifier of a decor/supply element.
    ElementId
);
string_id!(
    /// Identifier of a timeline event.
    EventId
);

impl ElementId {
    /// Generates a fresh identifier for elements created at runtime.
    pub fn generate() -> Self {
        Self(format!("element-{}", Uuid::new_v4()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementId, EventId};

    #[test]
    fn generated_element_ids_are_unique_and_prefixed() {
        let a = ElementId::generate();
        let b = ElementId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("element-"));
    }

    #[test]
    fn blank_ids_are_detected() {
        assert!(EventId::new("  ").is_blank());
        assert!(!EventId::new("event-1").is_blank());
    }
}
