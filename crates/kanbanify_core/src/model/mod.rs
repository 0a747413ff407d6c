//! Domain model for board entities and drag interaction state.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one stable id space (`EntityId`) shared by columns and tasks.
//!
//! # Invariants
//! - Every domain object is identified by a stable `EntityId`.
//! - Display order is list order; entities carry no position field.

pub mod board;
pub mod drag;
