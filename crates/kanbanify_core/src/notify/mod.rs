//! Fire-and-forget user notifications.
//!
//! # Responsibility
//! - Describe successful board mutations as typed, human-readable events
//!   for a toast-style notification layer.
//! - Keep the core decoupled from how notifications are displayed.
//!
//! # Invariants
//! - Only successful mutations are reported; silent no-ops never notify.
//! - Nothing in core depends on a notifier's outcome.

use log::info;
use std::fmt::{Display, Formatter};

/// Longest task-content prefix quoted in a deletion notice.
pub const TASK_PREVIEW_MAX_CHARS: usize = 15;

/// Display weight hint for the notification layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A new entity came into being.
    Success,
    /// Something changed or went away.
    Info,
}

/// A user-visible board event. `Display` renders the message shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    ColumnCreated,
    ColumnDeleted { title: String },
    TaskAdded,
    TaskDeleted { preview: String },
    TaskMoved { column_title: String },
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Self::ColumnCreated | Self::TaskAdded => Severity::Success,
            Self::ColumnDeleted { .. } | Self::TaskDeleted { .. } | Self::TaskMoved { .. } => {
                Severity::Info
            }
        }
    }

    /// Builds the deletion notice for a task, quoting a truncated prefix
    /// of its former content.
    pub fn task_deleted(content: &str) -> Self {
        Self::TaskDeleted {
            preview: truncate_preview(content),
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ColumnCreated => write!(f, "Column created successfully!"),
            Self::ColumnDeleted { title } => write!(f, "Column \"{title}\" deleted"),
            Self::TaskAdded => write!(f, "Task added successfully!"),
            Self::TaskDeleted { preview } => write!(f, "Task \"{preview}...\" deleted"),
            Self::TaskMoved { column_title } => write!(f, "Task moved to \"{column_title}\""),
        }
    }
}

/// Sink for board notifications. Purely observational: no return value,
/// no effect on core state.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

/// Default notifier routing messages through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: &Notification) {
        info!(
            "event=notification module=notify severity={:?} message={notification}",
            notification.severity()
        );
    }
}

/// First `TASK_PREVIEW_MAX_CHARS` characters of `content`, char-boundary
/// safe for content of any length.
fn truncate_preview(content: &str) -> String {
    content.chars().take(TASK_PREVIEW_MAX_CHARS).collect()
}
