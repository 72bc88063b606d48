//! Core domain logic for the party planner.
//! This crate is the single source of truth for schedule, checklist and
//! inventory invariants.

pub mod layout;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use layout::engine::{
    compute_tick_marks, compute_vertical_position, find_overlapping, PositionedEvent, TickMark,
    TimelineView, VerticalSpan,
};
pub use layout::window::{TimelineLayout, TimelineWindow, WindowError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::element::{Element, ElementCategory, Material, MaterialProgress};
pub use model::ids::{ElementId, EntityKind, EventId, TaskId};
pub use model::party::{PartyData, PartyDetails};
pub use model::task::{Task, TaskCategory, TaskPriority};
pub use model::time::{format_minutes, parse_time_of_day, TimeFormatError, TimeOfDay};
pub use model::timeline_event::{ChecklistItem, ElementLink, TimelineEvent};
pub use model::validation::ValidationError;
pub use repo::party_repo::{
    InMemoryPartyRepository, PartyRepository, PartySnapshot, RepoError, RepoResult,
};
pub use repo::patch::{
    ElementPatch, Entity, EntityPatch, PartyDetailsPatch, TaskPatch, TimelineEventPatch,
};
pub use service::element_service::{
    ElementRelations, ElementService, ElementServiceError, NewElement,
};
pub use service::party_service::{PartyOverview, PartyService};
pub use service::task_service::{
    CompletionFilter, CompletionRate, TaskFilter, TaskGroup, TaskRelations, TaskService,
};
pub use service::timeline_service::{EventRelations, TimelineService, TimelineServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Opens a store seeded with the built-in party dataset.
pub fn seeded_store() -> RepoResult<InMemoryPartyRepository> {
    InMemoryPartyRepository::new(seed::party_data())
}
