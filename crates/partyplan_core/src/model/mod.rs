//! Party domain model.
//!
//! # Responsibility
//! - Define typed records for party details, tasks, elements and timeline
//!   events.
//! - Provide the time-of-day conversions every schedule computation uses.
//!
//! # Invariants
//! - Records are validated when they enter the data model (construction,
//!   deserialization, store writes), never lazily by readers.
//! - Optional fields (`image`, `materials`) are `Option`, not sentinel values.

pub mod element;
pub mod ids;
pub mod party;
pub mod task;
pub mod time;
pub mod timeline_event;
pub mod validation;
