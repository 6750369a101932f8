#![forbid(unsafe_code)]

mod support;

use ld_app::{AppError, TODO_KEY, TodoBoard};
use ld_core::gate::{CLEAR_MATCHING, Decision, FixedAnswer, REMOVE_TASK};
use ld_core::view::Selector;
use ld_storage::{KvStore, MemoryKv, SqliteKv};
use serde_json::json;
use support::*;

#[test]
fn buy_milk_on_an_empty_board() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    assert!(board.tasks().is_empty());

    board.add("  Buy milk ").expect("add");

    let stored = slot(&kv, TODO_KEY).expect("persisted");
    assert_eq!(
        stored,
        json!([{
            "id": 1,
            "text": "Buy milk",
            "completed": false,
            "createdAt": "2026-10-16T09:30:00Z"
        }])
    );
    let frame = board.frame();
    assert_eq!(frame.rows.len(), 1);
    assert_eq!(frame.progress.percent(), 0.0);
    assert_eq!(frame.rows[0].toggle_label(), "Mark as Completed");

    let reloaded = TodoBoard::open(boxed(&kv), clock());
    assert_eq!(reloaded.tasks(), board.tasks());
}

#[test]
fn blank_text_is_rejected_without_a_write() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    let renders = board.renders();

    let err = board.add("   ").expect_err("blank must be rejected");
    assert!(matches!(err, AppError::Validation(_)));
    assert!(slot(&kv, TODO_KEY).is_none());
    assert_eq!(board.renders(), renders);
}

#[test]
fn one_of_two_completed_is_half_done() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    let first = board.add("one").expect("add");
    board.add("two").expect("add");
    assert!(board.toggle(first));

    let frame = board.frame();
    assert_eq!(frame.progress.percent(), 50.0);
    assert_eq!(frame.progress.width_style(), "50%");
    assert_eq!(frame.counts(), "1 pending, 1 completed, 2 total");
}

#[test]
fn declined_removal_changes_nothing() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    let id = board.add("keep me").expect("add");
    let before = kv.get(TODO_KEY).expect("read");
    let renders = board.renders();

    assert!(!board.remove(id, &mut FixedAnswer(false)).expect("remove"));
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(kv.get(TODO_KEY).expect("read"), before);
    assert_eq!(board.renders(), renders);

    assert!(board.remove(id, &mut FixedAnswer(true)).expect("remove"));
    assert!(board.tasks().is_empty());
}

#[test]
fn removal_waits_for_an_answer() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    let id = board.add("a").expect("add");

    assert!(board.request_remove(id).expect("request"));
    assert_eq!(board.pending_confirmation(), Some(REMOVE_TASK));
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.answer(Decision::Confirm).expect("answer"), 1);
    assert!(board.tasks().is_empty());
    assert_eq!(board.pending_confirmation(), None);
}

#[test]
fn unknown_ids_are_ignored() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    board.add("a").expect("add");
    let missing = ld_core::ids::ItemId::new(42);

    assert!(!board.toggle(missing));
    assert!(!board.edit(missing, Some("b")));
    assert!(!board.request_remove(missing).expect("request"));
    assert_eq!(board.pending_confirmation(), None);
}

#[test]
fn prompt_edit_ignores_dismissal_and_blank_answers() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    let id = board.add("old").expect("add");

    assert!(!board.edit(id, None));
    assert!(!board.edit(id, Some("   ")));
    assert!(board.edit(id, Some("  new  ")));
    assert_eq!(board.tasks()[0].text, "new");
    assert_eq!(board.tasks()[0].id, id);
}

#[test]
fn status_filter_and_clear_completed() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    let a = board.add("a").expect("add");
    board.add("b").expect("add");
    let c = board.add("c").expect("add");
    board.toggle(a);
    board.toggle(c);

    board.set_filter(Selector::Pending);
    let texts = board
        .frame()
        .rows
        .iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["b"]);

    board.set_filter(Selector::Completed);
    assert_eq!(board.frame().rows.len(), 2);

    assert_eq!(board.clear_completed(&mut FixedAnswer(false)).expect("clear"), 0);
    assert_eq!(board.tasks().len(), 3);
    assert_eq!(board.clear_completed(&mut FixedAnswer(true)).expect("clear"), 2);
    assert!(board.frame().rows.is_empty());
    assert_eq!(board.frame().counts(), "1 pending, 0 completed, 1 total");
}

#[test]
fn clear_matching_removes_only_after_confirmation() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    board.add("call mum").expect("add");
    board.add("buy milk").expect("add");
    board.add("call bank").expect("add");

    let mut asked = Vec::new();
    let mut decline = |message: &str| {
        asked.push(message.to_string());
        false
    };
    let removed = board
        .clear_matching(|task| task.text.starts_with("call"), &mut decline)
        .expect("clear");
    assert_eq!(removed, 0);
    assert_eq!(asked, vec![CLEAR_MATCHING.to_string()]);
    assert_eq!(board.tasks().len(), 3);
    assert_eq!(board.pending_confirmation(), None);

    let removed = board
        .clear_matching(|task| task.text.starts_with("call"), &mut FixedAnswer(true))
        .expect("clear");
    assert_eq!(removed, 2);
    let texts = board
        .tasks()
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["buy milk"]);
    assert_eq!(slot(&kv, TODO_KEY).expect("persisted").as_array().map(Vec::len), Some(1));
}

#[test]
fn parked_bulk_removal_waits_for_the_answer() {
    let kv = MemoryKv::new();
    let mut board = TodoBoard::open(boxed(&kv), clock());
    board.add("short").expect("add");
    board.add("a much longer task").expect("add");

    board
        .request_clear_matching("Drop long tasks?", |task| task.text.len() > 10)
        .expect("request");
    assert_eq!(board.pending_confirmation(), Some("Drop long tasks?"));
    assert_eq!(board.tasks().len(), 2);

    assert_eq!(board.answer(Decision::Confirm).expect("answer"), 1);
    assert_eq!(board.tasks()[0].text, "short");
}

#[test]
fn failed_save_is_reported_in_the_next_frame() {
    let kv = MemoryKv::with_quota(16);
    let mut board = TodoBoard::open(boxed(&kv), clock());

    board.add("does not fit").expect("add");
    assert_eq!(board.tasks().len(), 1);
    let notices = &board.frame().notices;
    assert_eq!(notices.len(), 1);
    assert!(notices[0].starts_with("Could not save changes"));

    board.toggle(board.tasks()[0].id);
    assert_eq!(board.frame().notices.len(), 1);
}

#[test]
fn sqlite_backed_board_survives_restart() {
    let dir = temp_dir("sqlite_backed_board_survives_restart");
    {
        let kv = SqliteKv::open(&dir).expect("open");
        let mut board = TodoBoard::open(Box::new(kv), clock());
        let id = board.add("persist me").expect("add");
        board.toggle(id);
    }
    let kv = SqliteKv::open(&dir).expect("reopen");
    let board = TodoBoard::open(Box::new(kv), clock());
    assert_eq!(board.tasks().len(), 1);
    assert!(board.tasks()[0].completed);
    assert_eq!(board.frame().progress.percent(), 100.0);
}
