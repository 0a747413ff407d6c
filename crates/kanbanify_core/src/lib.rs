//! Core domain logic for Kanbanify.
//! This crate is the single source of truth for board state and the
//! drag-and-drop reorder rules; rendering and toasts live elsewhere.

pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::board::{Column, EntityId, Task};
pub use model::drag::{DragKind, DragSession, OverTarget};
pub use notify::{LogNotifier, Notification, Notifier, Severity, TASK_PREVIEW_MAX_CHARS};
pub use service::board_service::BoardService;
pub use store::board_store::{BoardStore, Reassignment};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
