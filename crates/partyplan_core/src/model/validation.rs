//! Validation errors shared by all party records.

use super::ids::EntityKind;
use super::time::TimeOfDay;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invariant violation detected when a record enters the data model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Identifier is empty or whitespace only.
    BlankId(EntityKind),
    /// Title is empty or whitespace only.
    BlankTitle(EntityKind),
    /// Timeline event does not end strictly after it starts.
    InvalidEventWindow { start: TimeOfDay, end: TimeOfDay },
    /// Party title is empty or whitespace only.
    BlankPartyTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId(kind) => write!(f, "{kind} id cannot be blank"),
            Self::BlankTitle(kind) => write!(f, "{kind} title cannot be blank"),
            Self::InvalidEventWindow { start, end } => {
                write!(f, "event end ({end}) must be after event start ({start})")
            }
            Self::BlankPartyTitle => f.write_str("party title cannot be blank"),
        }
    }
}

impl Error for ValidationError {}
