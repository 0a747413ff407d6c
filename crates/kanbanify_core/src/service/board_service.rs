//! Board use-case service and drag-reorder reconciliation.
//!
//! # Responsibility
//! - Expose the mutation entry points (column/task CRUD) consumed by the
//!   view layer, wired to the notification sink.
//! - Reconcile drag events into reordered lists: tasks reorder live on
//!   every over event, columns reorder once at drop.
//!
//! # Invariants
//! - Drag-end and drag-cancel always return the session to idle, whether
//!   or not a reorder applied.
//! - Unmatched ids degrade to silent no-ops; nothing here panics or
//!   returns an error.
//! - Task reordering is a symmetric position swap; column reordering is
//!   a directional move. The shapes differ on purpose.

use crate::model::board::{Column, EntityId, Task};
use crate::model::drag::{DragKind, DragSession, OverTarget};
use crate::notify::{Notification, Notifier};
use crate::store::board_store::BoardStore;
use log::{debug, info};
use std::sync::Arc;

/// One board session: entity store, drag session tracker and the
/// notification sink, behind the entry points the view layer calls.
pub struct BoardService<N: Notifier> {
    store: BoardStore,
    session: DragSession,
    notifier: N,
}

impl<N: Notifier> BoardService<N> {
    /// Creates an empty board wired to the given notification sink.
    pub fn new(notifier: N) -> Self {
        Self {
            store: BoardStore::new(),
            session: DragSession::Idle,
            notifier,
        }
    }

    /// Column list snapshot; see `BoardStore::columns` for the
    /// change-detection contract.
    pub fn columns(&self) -> Arc<Vec<Column>> {
        self.store.columns()
    }

    /// Task list snapshot.
    pub fn tasks(&self) -> Arc<Vec<Task>> {
        self.store.tasks()
    }

    /// Current drag session state, for the view's drag overlay.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Appends a new column with a default title and returns it.
    pub fn create_column(&mut self) -> Column {
        let column = self.store.create_column();
        info!(
            "event=column_created module=service status=ok column_id={}",
            column.id
        );
        self.notifier.notify(&Notification::ColumnCreated);
        column
    }

    /// Deletes a column and every task it owns. Silent no-op on an
    /// unknown id.
    pub fn delete_column(&mut self, id: EntityId) {
        let Some(removed) = self.store.delete_column(id) else {
            return;
        };
        info!(
            "event=column_deleted module=service status=ok column_id={id}"
        );
        self.notifier
            .notify(&Notification::ColumnDeleted { title: removed.title });
    }

    /// Replaces a column title. Silent no-op on an unknown id.
    pub fn update_column(&mut self, id: EntityId, title: impl Into<String>) {
        if self.store.update_column(id, title) {
            debug!("event=column_updated module=service status=ok column_id={id}");
        }
    }

    /// Appends a new task to the named column and returns it. `None`
    /// when the column is unknown.
    pub fn create_task(&mut self, column_id: EntityId) -> Option<Task> {
        let task = self.store.create_task(column_id)?;
        info!(
            "event=task_created module=service status=ok task_id={} column_id={column_id}",
            task.id
        );
        self.notifier.notify(&Notification::TaskAdded);
        Some(task)
    }

    /// Deletes a task. Silent no-op on an unknown id.
    pub fn delete_task(&mut self, id: EntityId) {
        let Some(removed) = self.store.delete_task(id) else {
            return;
        };
        info!("event=task_deleted module=service status=ok task_id={id}");
        self.notifier
            .notify(&Notification::task_deleted(&removed.content));
    }

    /// Replaces a task's content. Silent no-op on an unknown id.
    pub fn update_task(&mut self, id: EntityId, content: impl Into<String>) {
        if self.store.update_task(id, content) {
            debug!("event=task_updated module=service status=ok task_id={id}");
        }
    }

    /// Begins a drag session for the named entity, snapshotting it from
    /// the store. An unknown id leaves the session idle.
    pub fn on_drag_start(&mut self, id: EntityId, kind: DragKind) {
        match kind {
            DragKind::Column => {
                if let Some(column) = self.store.column(id) {
                    self.session.begin_column(column.clone());
                }
            }
            DragKind::Task => {
                if let Some(task) = self.store.task(id) {
                    self.session.begin_task(task.clone());
                }
            }
        }
        debug!(
            "event=drag_start module=service kind={kind:?} id={id} active={}",
            !self.session.is_idle()
        );
    }

    /// Reconciles a pointer-over change during an active task drag.
    ///
    /// Tasks reorder live: ownership follows whatever column the pointer
    /// is over, and two task cards trade flat-list positions. Column
    /// drags ignore over events entirely (they reorder at drop), as does
    /// an idle session.
    pub fn on_drag_over(&mut self, over: Option<OverTarget>) {
        let DragSession::Task(dragged) = &self.session else {
            return;
        };
        let dragged_id = dragged.id;
        let Some(target) = over else {
            return;
        };
        if target.id == dragged_id {
            return;
        }

        let reassigned = match target.kind {
            DragKind::Task => {
                let outcome = self
                    .store
                    .reassign_task_to_task_column(dragged_id, target.id);
                self.store.swap_tasks(dragged_id, target.id);
                outcome
            }
            // Pointer is over empty column area: only ownership changes,
            // the task keeps its flat-list position.
            DragKind::Column => self.store.reassign_task_to_column(dragged_id, target.id),
        };

        let Some(reassigned) = reassigned else {
            return;
        };
        if reassigned.changed {
            info!(
                "event=task_reassigned module=service status=ok task_id={dragged_id} \
                 column_id={}",
                reassigned.column_id
            );
            if let Some(title) = self.store.column_title(reassigned.column_id) {
                let moved = Notification::TaskMoved {
                    column_title: title.to_string(),
                };
                self.notifier.notify(&moved);
            }
        }
    }

    /// Finishes a drag. The session returns to idle unconditionally;
    /// only a column drag released over a different column reorders the
    /// column list.
    pub fn on_drag_end(&mut self, over: Option<EntityId>) {
        let finished = self.session.clear();

        let DragSession::Column(dragged) = finished else {
            // Task drags were reconciled live by the over events.
            return;
        };
        let Some(over_id) = over else {
            // Released outside every drop target.
            return;
        };
        if over_id == dragged.id {
            return;
        }
        if self.store.move_column(dragged.id, over_id) {
            info!(
                "event=column_moved module=service status=ok column_id={} over_id={over_id}",
                dragged.id
            );
        }
    }

    /// Aborts a drag (escape key, lost pointer capture). Nothing pending
    /// is applied; live task reordering already in the lists stays.
    pub fn on_drag_cancel(&mut self) {
        let finished = self.session.clear();
        if !finished.is_idle() {
            debug!("event=drag_cancelled module=service status=ok");
        }
    }
}
