//! Drag session tracker.
//!
//! # Responsibility
//! - Record which entity is currently being dragged, if any.
//! - Enforce the legal session transitions: `Idle -> dragging -> Idle`.
//!
//! # Invariants
//! - The session holds a snapshot taken at drag-start, never a live
//!   reference into the store.
//! - Clearing the session is unconditional and always legal.

use crate::model::board::{Column, EntityId, Task};
use log::warn;
use serde::{Deserialize, Serialize};

/// Closed type tag the view layer attaches to every drag target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Column,
    Task,
}

/// Whatever is directly under the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverTarget {
    pub id: EntityId,
    pub kind: DragKind,
}

impl OverTarget {
    pub fn new(id: EntityId, kind: DragKind) -> Self {
        Self { id, kind }
    }
}

/// Transient drag state. Exists only between drag-start and
/// drag-end/cancel; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    /// No active drag.
    #[default]
    Idle,
    /// A column drag is in flight; payload is a drag-start snapshot.
    Column(Column),
    /// A task drag is in flight; payload is a drag-start snapshot.
    Task(Task),
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Kind of the active payload, `None` while idle.
    pub fn kind(&self) -> Option<DragKind> {
        match self {
            Self::Idle => None,
            Self::Column(_) => Some(DragKind::Column),
            Self::Task(_) => Some(DragKind::Task),
        }
    }

    /// Id of the active payload, `None` while idle.
    pub fn dragged_id(&self) -> Option<EntityId> {
        match self {
            Self::Idle => None,
            Self::Column(column) => Some(column.id),
            Self::Task(task) => Some(task.id),
        }
    }

    /// Enters a column drag.
    ///
    /// A start while another drag is active means the previous drag-end
    /// event was lost; the stale session is replaced.
    pub fn begin_column(&mut self, column: Column) {
        self.warn_if_active("column");
        *self = Self::Column(column);
    }

    /// Enters a task drag. Same lost-drag-end handling as `begin_column`.
    pub fn begin_task(&mut self, task: Task) {
        self.warn_if_active("task");
        *self = Self::Task(task);
    }

    /// Returns to `Idle`, yielding the payload that was in flight.
    pub fn clear(&mut self) -> Self {
        std::mem::take(self)
    }

    fn warn_if_active(&self, next_kind: &str) {
        if let Some(id) = self.dragged_id() {
            warn!(
                "event=drag_start_while_active module=drag status=replaced \
                 stale_id={id} next_kind={next_kind}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DragKind, DragSession};
    use crate::model::board::{Column, Task};

    #[test]
    fn default_session_is_idle() {
        let session = DragSession::default();
        assert!(session.is_idle());
        assert_eq!(session.kind(), None);
        assert_eq!(session.dragged_id(), None);
    }

    #[test]
    fn begin_and_clear_roundtrip() {
        let column = Column::new("Backlog");
        let mut session = DragSession::Idle;

        session.begin_column(column.clone());
        assert_eq!(session.kind(), Some(DragKind::Column));
        assert_eq!(session.dragged_id(), Some(column.id));

        let taken = session.clear();
        assert!(session.is_idle());
        assert_eq!(taken, DragSession::Column(column));
    }

    #[test]
    fn begin_replaces_stale_session() {
        let column = Column::new("Backlog");
        let task = Task::new(column.id, "write release notes");
        let mut session = DragSession::Idle;

        session.begin_column(column);
        session.begin_task(task.clone());

        assert_eq!(session.kind(), Some(DragKind::Task));
        assert_eq!(session.dragged_id(), Some(task.id));
    }
}
