//! Board entity model.
//!
//! # Responsibility
//! - Define the `Column` and `Task` records rendered by the view layer.
//! - Keep wire field names aligned with the external view schema.
//!
//! # Invariants
//! - `id` is stable and never reused for another entity in a session.
//! - `Task.column_id` must reference a column present in the store.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier shared by columns and tasks.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// A vertical lane on the board. List order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable id used for drag targeting and task ownership.
    pub id: EntityId,
    /// User-editable heading, mutated via inline edit.
    pub title: String,
}

impl Column {
    /// Creates a column with a generated stable id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
        }
    }
}

/// A card owned by exactly one column. List order within the flat task
/// list is display order; ownership is `column_id`, nothing positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable id used for drag targeting.
    pub id: EntityId,
    /// Owning column. Reassigned live while the task is dragged across
    /// column boundaries.
    pub column_id: EntityId,
    /// User-editable body, mutated via inline edit.
    pub content: String,
}

impl Task {
    /// Creates a task owned by `column_id` with a generated stable id.
    pub fn new(column_id: EntityId, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            column_id,
            content: content.into(),
        }
    }
}
