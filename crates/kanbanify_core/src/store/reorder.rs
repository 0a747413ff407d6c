//! Pure list-reorder primitives.
//!
//! # Responsibility
//! - Implement the two reorder shapes used on the board: the symmetric
//!   position swap applied to tasks and the directional element move
//!   applied to columns.
//!
//! # Invariants
//! - Out-of-range indices are rejected up front; the list is never left
//!   partially reordered.
//! - The two primitives are intentionally not unified: they produce
//!   different orderings for non-adjacent indices.

/// Trades the elements at `a` and `b`. No-op when either index is out of
/// range or the indices are equal.
pub fn swap_positions<T>(items: &mut Vec<T>, a: usize, b: usize) -> bool {
    if a == b || a >= items.len() || b >= items.len() {
        return false;
    }
    items.swap(a, b);
    true
}

/// Removes the element at `from` and reinserts it at `to`, shifting the
/// elements in between. No-op when either index is out of range.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from == to {
        return true;
    }
    let item = items.remove(from);
    // `to` stays in range after the removal because both indices were
    // valid against the original length.
    items.insert(to, item);
    true
}
