#![forbid(unsafe_code)]

use crate::{AppError, ImportError};
use ld_core::clock::Clock;
use ld_core::gate::{self, ConfirmationGate, Confirmer, Decision};
use ld_core::ids::ItemId;
use ld_core::model::{PlannerTask, parse_day};
use ld_core::progress::Progress;
use ld_core::text;
use ld_core::view::{Selector, ViewQuery, project};
use ld_storage::{KvStore, ListStore};

pub const PLANNER_KEY: &str = "planner_tasks";
pub const EXPORT_FILE_NAME: &str = "tasks.json";
pub const IMPORT_OK: &str = "Tasks imported successfully!";
const DEFAULT_CATEGORY: &str = "general";

/// Contents of the input row: new task, or the task being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlannerDraft {
    pub text: String,
    pub category: String,
    pub due_date: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submitted {
    Added(ItemId),
    Updated(ItemId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerRow {
    pub id: ItemId,
    pub text: String,
    pub category: String,
    pub due_date: Option<String>,
    pub completed: bool,
    pub overdue: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlannerFrame {
    pub rows: Vec<PlannerRow>,
    pub submit_label: &'static str,
    pub progress: Progress,
    pub notices: Vec<String>,
}

/// Categorised task list with due dates, edit mode and JSON import/export.
pub struct Planner {
    store: ListStore<PlannerTask>,
    query: ViewQuery,
    editing: Option<ItemId>,
    gate: ConfirmationGate<ItemId>,
    clock: Box<dyn Clock>,
    frame: PlannerFrame,
    renders: u64,
}

impl Planner {
    pub fn open(backend: Box<dyn KvStore>, clock: Box<dyn Clock>) -> Self {
        let mut planner = Self {
            store: ListStore::load(backend, PLANNER_KEY),
            query: ViewQuery::default(),
            editing: None,
            gate: ConfirmationGate::new(),
            clock,
            frame: PlannerFrame::default(),
            renders: 0,
        };
        planner.render();
        planner
    }

    pub fn tasks(&self) -> &[PlannerTask] {
        self.store.items()
    }

    pub fn frame(&self) -> &PlannerFrame {
        &self.frame
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }

    /// Loads a task into the draft and switches the submit button to "Update".
    pub fn begin_edit(&mut self, id: ItemId) -> Option<PlannerDraft> {
        let task = self.store.get(id)?;
        let draft = PlannerDraft {
            text: task.text.clone(),
            category: task.category.clone(),
            due_date: task.due_date.clone(),
        };
        self.editing = Some(id);
        self.render();
        Some(draft)
    }

    pub fn cancel_edit(&mut self) {
        if self.editing.take().is_some() {
            self.render();
        }
    }

    /// Adds the draft, or writes it over the task in edit mode.
    pub fn submit(&mut self, draft: PlannerDraft) -> Result<Submitted, AppError> {
        let text = text::required(&draft.text)?;
        let due_date = match draft.due_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                parse_day(raw).ok_or_else(|| AppError::InvalidDueDate(raw.to_string()))?;
                Some(raw.to_string())
            }
        };
        let category = match draft.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            other => other.to_string(),
        };

        let editing = self.editing.take();
        let outcome = match editing {
            Some(id)
                if self.store.update(id, |task| {
                    task.text = text.clone();
                    task.category = category.clone();
                    task.due_date = due_date.clone();
                }) =>
            {
                Submitted::Updated(id)
            }
            _ => Submitted::Added(self.store.push(PlannerTask {
                id: ItemId::default(),
                text,
                category,
                due_date,
                completed: false,
            })),
        };
        self.render();
        Ok(outcome)
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

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.render();
    }

    pub fn set_category(&mut self, selector: Selector) {
        self.query.selector = selector;
        self.render();
    }

    pub fn pending_confirmation(&self) -> Option<&str> {
        self.gate.pending_message()
    }

    pub fn request_remove(&mut self, id: ItemId) -> Result<bool, AppError> {
        if !self.store.contains(id) {
            return Ok(false);
        }
        self.gate.request(gate::REMOVE_TASK, id)?;
        Ok(true)
    }

    pub fn answer(&mut self, decision: Decision) -> Result<bool, AppError> {
        let Some(id) = self.gate.resolve(decision)? else {
            return Ok(false);
        };
        let removed = self.store.remove(id).is_some();
        if removed {
            if self.editing == Some(id) {
                self.editing = None;
            }
            self.render();
        }
        Ok(removed)
    }

    pub fn remove(&mut self, id: ItemId, confirmer: &mut dyn Confirmer) -> Result<bool, AppError> {
        if !self.request_remove(id)? {
            return Ok(false);
        }
        let decision = self.gate.consult(confirmer)?;
        self.answer(decision)
    }

    /// Full task list as 2-space indented JSON.
    pub fn export_json(&self) -> Result<String, AppError> {
        Ok(self.store.to_json_pretty()?)
    }

    /// Appends every task found in `payload`; nothing changes when it does not parse.
    pub fn import_json(&mut self, payload: &str) -> Result<usize, AppError> {
        let imported = serde_json::from_str::<Vec<PlannerTask>>(payload)
            .map_err(ImportError::InvalidFormat)?;
        let added = self.store.extend(imported);
        tracing::info!(added, "planner tasks imported");
        self.render();
        Ok(added)
    }

    fn render(&mut self) {
        let today = self.clock.today();
        let rows = project(self.store.items(), &self.query)
            .into_iter()
            .map(|task| PlannerRow {
                id: task.id,
                text: task.text.clone(),
                category: task.category.clone(),
                due_date: task.due_date.clone(),
                completed: task.completed,
                overdue: task.is_overdue(today),
            })
            .collect();
        self.frame = PlannerFrame {
            rows,
            submit_label: if self.editing.is_some() { "Update" } else { "Add" },
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
