//! Repository layer abstractions and the in-memory party store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep snapshot/revision bookkeeping away from service orchestration.
//!
//! # Invariants
//! - Repository writes must validate records before they replace stored ones.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`) in
//!   addition to validation errors.

pub mod party_repo;
pub mod patch;
