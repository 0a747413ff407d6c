//! Board entity store.
//!
//! # Responsibility
//! - Provide create/update/delete/reorder operations over the column and
//!   task lists for one board session.
//! - Expose `Arc` snapshots so a view layer can detect change without
//!   diffing list contents.
//!
//! # Invariants
//! - Deleting a column cascades to every task it owns; a task never
//!   outlives its column.
//! - Effective mutations produce a new `Arc`; no-ops keep the old one.
//! - Default titles are derived from the current entity count.

use crate::model::board::{Column, EntityId, Task};
use crate::store::reorder::{array_move, swap_positions};
use std::sync::Arc;

/// Outcome of a live task-ownership reassignment during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reassignment {
    /// Column that owns the task after the operation.
    pub column_id: EntityId,
    /// Whether the owning column actually changed.
    pub changed: bool,
}

/// In-memory store for one board session. Constructed once per session;
/// there is no teardown.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    columns: Arc<Vec<Column>>,
    tasks: Arc<Vec<Task>>,
}

impl BoardStore {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current column list snapshot. Successive snapshots compare equal
    /// by `Arc::ptr_eq` exactly when no effective mutation happened in
    /// between.
    pub fn columns(&self) -> Arc<Vec<Column>> {
        Arc::clone(&self.columns)
    }

    /// Current task list snapshot; same change-detection contract as
    /// `columns`.
    pub fn tasks(&self) -> Arc<Vec<Task>> {
        Arc::clone(&self.tasks)
    }

    pub fn column(&self, id: EntityId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn task(&self, id: EntityId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Title of the named column, for notification text.
    pub fn column_title(&self, id: EntityId) -> Option<&str> {
        self.column(id).map(|column| column.title.as_str())
    }

    /// Appends a column titled after the new column count and returns a
    /// clone of it.
    pub fn create_column(&mut self) -> Column {
        let column = Column::new(format!("Column {}", self.columns.len() + 1));
        let mut next = self.columns.as_ref().clone();
        next.push(column.clone());
        self.columns = Arc::new(next);
        column
    }

    /// Removes the named column and every task it owns. Returns the
    /// removed column, or `None` when the id is unknown.
    pub fn delete_column(&mut self, id: EntityId) -> Option<Column> {
        let index = self.column_index(id)?;

        let mut next_columns = self.columns.as_ref().clone();
        let removed = next_columns.remove(index);
        self.columns = Arc::new(next_columns);

        // Cascade: the task list is replaced even when the column was
        // empty, mirroring the wholesale-replace mutation contract.
        let next_tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.column_id != id)
            .cloned()
            .collect();
        self.tasks = Arc::new(next_tasks);

        Some(removed)
    }

    /// Replaces the title of the named column. Reports whether a column
    /// matched.
    pub fn update_column(&mut self, id: EntityId, title: impl Into<String>) -> bool {
        let Some(index) = self.column_index(id) else {
            return false;
        };
        let mut next = self.columns.as_ref().clone();
        next[index].title = title.into();
        self.columns = Arc::new(next);
        true
    }

    /// Appends a task owned by `column_id`, with content derived from the
    /// new task count. Refuses when the column is unknown, upholding the
    /// ownership invariant.
    pub fn create_task(&mut self, column_id: EntityId) -> Option<Task> {
        self.column(column_id)?;
        let task = Task::new(column_id, format!("Task {}", self.tasks.len() + 1));
        let mut next = self.tasks.as_ref().clone();
        next.push(task.clone());
        self.tasks = Arc::new(next);
        Some(task)
    }

    /// Removes the named task and returns it, or `None` when unknown.
    pub fn delete_task(&mut self, id: EntityId) -> Option<Task> {
        let index = self.task_index(id)?;
        let mut next = self.tasks.as_ref().clone();
        let removed = next.remove(index);
        self.tasks = Arc::new(next);
        Some(removed)
    }

    /// Replaces the content of the named task. Reports whether a task
    /// matched.
    pub fn update_task(&mut self, id: EntityId, content: impl Into<String>) -> bool {
        let Some(index) = self.task_index(id) else {
            return false;
        };
        let mut next = self.tasks.as_ref().clone();
        next[index].content = content.into();
        self.tasks = Arc::new(next);
        true
    }

    /// Reassigns `task_id` to the column owning `target_task_id`.
    /// `None` when either task is unknown.
    pub fn reassign_task_to_task_column(
        &mut self,
        task_id: EntityId,
        target_task_id: EntityId,
    ) -> Option<Reassignment> {
        let column_id = self.task(target_task_id)?.column_id;
        self.reassign(task_id, column_id)
    }

    /// Reassigns `task_id` directly to `column_id`. `None` when the task
    /// or the column is unknown.
    pub fn reassign_task_to_column(
        &mut self,
        task_id: EntityId,
        column_id: EntityId,
    ) -> Option<Reassignment> {
        self.column(column_id)?;
        self.reassign(task_id, column_id)
    }

    /// Trades the flat-list positions of two tasks. Reports whether both
    /// ids matched.
    pub fn swap_tasks(&mut self, a: EntityId, b: EntityId) -> bool {
        let (Some(index_a), Some(index_b)) = (self.task_index(a), self.task_index(b)) else {
            return false;
        };
        if index_a == index_b {
            return true;
        }
        let mut next = self.tasks.as_ref().clone();
        let swapped = swap_positions(&mut next, index_a, index_b);
        if swapped {
            self.tasks = Arc::new(next);
        }
        swapped
    }

    /// Removes the column `from_id` from its slot and reinserts it at the
    /// slot of `to_id`. Reports whether both ids matched.
    pub fn move_column(&mut self, from_id: EntityId, to_id: EntityId) -> bool {
        let (Some(from), Some(to)) = (self.column_index(from_id), self.column_index(to_id)) else {
            return false;
        };
        if from == to {
            return true;
        }
        let mut next = self.columns.as_ref().clone();
        let moved = array_move(&mut next, from, to);
        if moved {
            self.columns = Arc::new(next);
        }
        moved
    }

    fn reassign(&mut self, task_id: EntityId, column_id: EntityId) -> Option<Reassignment> {
        let index = self.task_index(task_id)?;
        let changed = self.tasks[index].column_id != column_id;
        if changed {
            let mut next = self.tasks.as_ref().clone();
            next[index].column_id = column_id;
            self.tasks = Arc::new(next);
        }
        Some(Reassignment { column_id, changed })
    }

    fn column_index(&self, id: EntityId) -> Option<usize> {
        self.columns.iter().position(|column| column.id == id)
    }

    fn task_index(&self, id: EntityId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}
