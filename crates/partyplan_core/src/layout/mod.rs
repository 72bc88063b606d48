//! Timeline layout engine.
//!
//! # Responsibility
//! - Turn timeline events plus a fixed window into renderable geometry.
//! - Group the events that overlap a selected event.
//!
//! # Invariants
//! - Side-effect free; safe to recompute on every selection change.
//! - Never performs store lookups; callers resolve the selected event.

pub mod engine;
pub mod window;
