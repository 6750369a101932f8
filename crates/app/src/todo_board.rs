#![forbid(unsafe_code)]

use crate::AppError;
use ld_core::clock::{Clock, to_rfc3339};
use ld_core::gate::{self, ConfirmationGate, Confirmer, Decision};
use ld_core::ids::ItemId;
use ld_core::model::TodoTask;
use ld_core::progress::Progress;
use ld_core::text;
use ld_core::view::{Selector, ViewQuery, project};
use ld_storage::{KvStore, ListStore};

pub const TODO_KEY: &str = "tasks";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoRow {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl TodoRow {
    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "Mark as Pending"
        } else {
            "Mark as Completed"
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoFrame {
    pub rows: Vec<TodoRow>,
    pub filter: Selector,
    pub progress: Progress,
    pub notices: Vec<String>,
}

impl TodoFrame {
    pub fn counts(&self) -> String {
        self.progress.summary()
    }
}

type TaskPredicate = Box<dyn Fn(&TodoTask) -> bool>;

enum BoardAction {
    Remove(ItemId),
    ClearMatching(TaskPredicate),
}

/// The checklist with status filter, counts, prompt-style edits and
/// confirmed removals.
pub struct TodoBoard {
    store: ListStore<TodoTask>,
    filter: Selector,
    gate: ConfirmationGate<BoardAction>,
    clock: Box<dyn Clock>,
    frame: TodoFrame,
    renders: u64,
}

impl TodoBoard {
    pub fn open(backend: Box<dyn KvStore>, clock: Box<dyn Clock>) -> Self {
        let mut board = Self {
            store: ListStore::load(backend, TODO_KEY),
            filter: Selector::All,
            gate: ConfirmationGate::new(),
            clock,
            frame: TodoFrame::default(),
            renders: 0,
        };
        board.render();
        board
    }

    pub fn tasks(&self) -> &[TodoTask] {
        self.store.items()
    }

    pub fn store(&self) -> &ListStore<TodoTask> {
        &self.store
    }

    pub fn frame(&self) -> &TodoFrame {
        &self.frame
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn add(&mut self, raw: &str) -> Result<ItemId, AppError> {
        let text = text::required(raw)?;
        let id = self.store.push(TodoTask {
            id: ItemId::default(),
            text,
            completed: false,
            created_at: to_rfc3339(self.clock.now()),
        });
        self.render();
        Ok(id)
    }

    /// Prompt-style edit: `None` (dismissed) or blank input leaves the task alone.
    pub fn edit(&mut self, id: ItemId, answer: Option<&str>) -> bool {
        let Some(new_text) = answer.and_then(|raw| text::required(raw).ok()) else {
            return false;
        };
        let changed = self.store.update(id, |task| task.text = new_text);
        if changed {
            self.render();
        }
        changed
    }

    pub fn toggle(&mut self, id: ItemId) -> bool {
        let changed = self
            .store
            .update(id, |task| task.completed = !task.completed);
        if changed {
            self.render();
        }
        changed
    }

    pub fn set_filter(&mut self, filter: Selector) {
        self.filter = filter;
        self.render();
    }

    pub fn pending_confirmation(&self) -> Option<&str> {
        self.gate.pending_message()
    }

    /// Parks a removal behind the confirmation gate. Unknown ids are ignored.
    pub fn request_remove(&mut self, id: ItemId) -> Result<bool, AppError> {
        if !self.store.contains(id) {
            return Ok(false);
        }
        self.gate.request(gate::REMOVE_TASK, BoardAction::Remove(id))?;
        Ok(true)
    }

    /// Parks a bulk removal of every task `matches` accepts.
    pub fn request_clear_matching(
        &mut self,
        message: impl Into<String>,
        matches: impl Fn(&TodoTask) -> bool + 'static,
    ) -> Result<(), AppError> {
        self.gate
            .request(message, BoardAction::ClearMatching(Box::new(matches)))?;
        Ok(())
    }

    pub fn request_clear_completed(&mut self) -> Result<(), AppError> {
        self.request_clear_matching(gate::CLEAR_COMPLETED, |task| task.completed)
    }

    /// Settles the pending confirmation; returns how many tasks were removed.
    pub fn answer(&mut self, decision: Decision) -> Result<usize, AppError> {
        let removed = match self.gate.resolve(decision)? {
            Some(BoardAction::Remove(id)) => usize::from(self.store.remove(id).is_some()),
            Some(BoardAction::ClearMatching(matches)) => self.store.retain(|task| !matches(task)),
            None => 0,
        };
        if removed > 0 {
            self.render();
        }
        Ok(removed)
    }

    pub fn remove(&mut self, id: ItemId, confirmer: &mut dyn Confirmer) -> Result<bool, AppError> {
        if !self.request_remove(id)? {
            return Ok(false);
        }
        Ok(self.settle(confirmer)? > 0)
    }

    pub fn clear_matching(
        &mut self,
        matches: impl Fn(&TodoTask) -> bool + 'static,
        confirmer: &mut dyn Confirmer,
    ) -> Result<usize, AppError> {
        self.request_clear_matching(gate::CLEAR_MATCHING, matches)?;
        self.settle(confirmer)
    }

    pub fn clear_completed(&mut self, confirmer: &mut dyn Confirmer) -> Result<usize, AppError> {
        self.request_clear_completed()?;
        self.settle(confirmer)
    }

    fn settle(&mut self, confirmer: &mut dyn Confirmer) -> Result<usize, AppError> {
        let decision = self.gate.consult(confirmer)?;
        self.answer(decision)
    }

    fn render(&mut self) {
        let query = ViewQuery {
            selector: self.filter.clone(),
            ..ViewQuery::default()
        };
        let rows = project(self.store.items(), &query)
            .into_iter()
            .map(|task| TodoRow {
                id: task.id,
                text: task.text.clone(),
                completed: task.completed,
            })
            .collect();
        self.frame = TodoFrame {
            rows,
            filter: self.filter.clone(),
            progress: Progress::tally(self.store.items().iter().map(|t| t.completed)),
            notices: self
                .store
                .take_notices()
                .into_iter()
                .map(|n| n.message)
                .collect(),
        };
        self.renders += 1;
    }
}
