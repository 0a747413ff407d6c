//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `kanbanify_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use kanbanify_core::{BoardService, LogNotifier};

fn main() {
    println!("kanbanify_core ping={}", kanbanify_core::ping());
    println!("kanbanify_core version={}", kanbanify_core::core_version());

    let mut board = BoardService::new(LogNotifier);
    let column = board.create_column();
    board.create_task(column.id);
    println!(
        "kanbanify_core smoke columns={} tasks={}",
        board.columns().len(),
        board.tasks().len()
    );
}
