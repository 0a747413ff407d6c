use kanbanify_core::{BoardService, DragKind, Notification, Notifier, OverTarget};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Records everything the board reports, standing in for the toast layer.
#[derive(Debug, Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Notification>>>);

impl Recorder {
    fn messages(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .map(Notification::to_string)
            .collect()
    }

    fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl Notifier for Recorder {
    fn notify(&mut self, notification: &Notification) {
        self.0.borrow_mut().push(notification.clone());
    }
}

fn recording_board() -> (BoardService<Recorder>, Recorder) {
    let recorder = Recorder::default();
    (BoardService::new(recorder.clone()), recorder)
}

#[test]
fn column_lifecycle_reports_create_and_delete() {
    let (mut board, recorder) = recording_board();

    let column = board.create_column();
    board.update_column(column.id, "Doing");
    board.delete_column(column.id);

    assert_eq!(
        recorder.messages(),
        vec![
            "Column created successfully!".to_string(),
            "Column \"Doing\" deleted".to_string(),
        ]
    );
}

#[test]
fn task_deletion_quotes_a_truncated_preview() {
    let (mut board, recorder) = recording_board();
    let column = board.create_column();
    let task = board.create_task(column.id).unwrap();
    board.update_task(task.id, "migrate the notification pipeline");
    recorder.clear();

    board.delete_task(task.id);

    assert_eq!(
        recorder.messages(),
        vec!["Task \"migrate the not...\" deleted".to_string()]
    );
}

#[test]
fn deleting_a_task_with_short_content_does_not_panic() {
    let (mut board, recorder) = recording_board();
    let column = board.create_column();
    let task = board.create_task(column.id).unwrap();
    recorder.clear();

    // Default content "Task 1" is shorter than the preview length.
    board.delete_task(task.id);

    assert_eq!(
        recorder.messages(),
        vec!["Task \"Task 1...\" deleted".to_string()]
    );
}

#[test]
fn task_moved_fires_only_on_ownership_change() {
    let (mut board, recorder) = recording_board();
    let left = board.create_column();
    let right = board.create_column();
    board.update_column(right.id, "Done");
    let dragged = board.create_task(left.id).unwrap();
    let neighbour = board.create_task(left.id).unwrap();
    recorder.clear();

    // Same-column reorder: no move notification.
    board.on_drag_start(dragged.id, DragKind::Task);
    board.on_drag_over(Some(OverTarget::new(neighbour.id, DragKind::Task)));
    assert!(recorder.messages().is_empty());

    // Crossing into the other column reports the destination title once.
    board.on_drag_over(Some(OverTarget::new(right.id, DragKind::Column)));
    board.on_drag_over(Some(OverTarget::new(right.id, DragKind::Column)));
    board.on_drag_end(Some(right.id));

    assert_eq!(
        recorder.messages(),
        vec!["Task moved to \"Done\"".to_string()]
    );
}

#[test]
fn failed_mutations_never_notify() {
    let (mut board, recorder) = recording_board();
    board.create_column();
    recorder.clear();

    let ghost = Uuid::new_v4();
    board.delete_column(ghost);
    board.delete_task(ghost);
    assert!(board.create_task(ghost).is_none());

    assert!(recorder.messages().is_empty());
}
