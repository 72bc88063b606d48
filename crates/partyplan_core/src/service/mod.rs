//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep presentation callers decoupled from store details.

pub mod element_service;
pub mod party_service;
pub mod task_service;
pub mod timeline_service;
