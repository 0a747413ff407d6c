use kanbanify_core::{BoardService, DragKind, DragSession, LogNotifier, OverTarget};
use uuid::Uuid;

fn board_with_one_column() -> BoardService<LogNotifier> {
    let mut board = BoardService::new(LogNotifier);
    board.create_column();
    board
}

#[test]
fn session_starts_idle() {
    let board = BoardService::new(LogNotifier);
    assert!(board.session().is_idle());
}

#[test]
fn drag_start_snapshots_the_entity() {
    let mut board = board_with_one_column();
    let column_id = board.columns()[0].id;

    board.on_drag_start(column_id, DragKind::Column);

    match board.session() {
        DragSession::Column(snapshot) => assert_eq!(snapshot.id, column_id),
        other => panic!("expected a column session, got {other:?}"),
    }
}

#[test]
fn drag_start_with_unknown_id_stays_idle() {
    let mut board = board_with_one_column();

    board.on_drag_start(Uuid::new_v4(), DragKind::Task);

    assert!(board.session().is_idle());
}

#[test]
fn drag_end_resets_session_even_without_a_target() {
    let mut board = board_with_one_column();
    let column_id = board.columns()[0].id;

    board.on_drag_start(column_id, DragKind::Column);
    board.on_drag_end(None);

    assert!(board.session().is_idle());
}

#[test]
fn drag_cancel_resets_session() {
    let mut board = board_with_one_column();
    let column_id = board.columns()[0].id;
    let task_id = board.create_task(column_id).unwrap().id;

    board.on_drag_start(task_id, DragKind::Task);
    assert!(!board.session().is_idle());

    board.on_drag_cancel();
    assert!(board.session().is_idle());
}

#[test]
fn drag_over_while_idle_is_a_noop() {
    let mut board = board_with_one_column();
    let column_id = board.columns()[0].id;
    let task_id = board.create_task(column_id).unwrap().id;
    let before = board.tasks();

    board.on_drag_over(Some(OverTarget::new(task_id, DragKind::Task)));

    assert!(board.session().is_idle());
    assert_eq!(*before, *board.tasks());
}
