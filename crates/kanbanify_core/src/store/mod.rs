//! Entity store layer.
//!
//! # Responsibility
//! - Own the ordered column and task lists for one board session.
//! - Provide the list-reorder primitives consumed by drag reconciliation.
//!
//! # Invariants
//! - Every effective mutation swaps in a fresh `Arc`-wrapped list; no-ops
//!   leave the current list untouched (observers compare by `Arc::ptr_eq`).
//! - Unmatched ids degrade to silent no-ops, never errors.

pub mod board_store;
pub mod reorder;
