#![forbid(unsafe_code)]

use ld_core::portfolio::{ProjectCard, ProjectModal, THEME_KEY, Theme};
use ld_storage::KvStore;

/// Theme toggle and project modal of the portfolio page.
pub struct Portfolio {
    backend: Box<dyn KvStore>,
    theme: Theme,
    modal: ProjectModal,
    notices: Vec<String>,
}

impl Portfolio {
    pub fn open(backend: Box<dyn KvStore>) -> Self {
        let mut notices = Vec::new();
        let stored = match backend.get(THEME_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(error = %err, "could not read theme");
                notices.push(format!("Could not load saved data: {err}"));
                None
            }
        };
        Self {
            theme: Theme::from_stored(stored.as_deref()),
            backend,
            modal: ProjectModal::default(),
            notices,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.backend.set(THEME_KEY, self.theme.as_stored()) {
            tracing::warn!(error = %err, "theme not persisted");
            self.notices.push(format!("Could not save changes: {err}"));
        }
        self.theme
    }

    pub fn modal(&self) -> &ProjectModal {
        &self.modal
    }

    pub fn open_project(&mut self, card: ProjectCard) {
        self.modal.open(card);
    }

    pub fn close_project(&mut self) -> bool {
        self.modal.close()
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        self.modal.on_key(key)
    }

    pub fn on_click(&mut self, on_backdrop: bool) -> bool {
        self.modal.on_click(on_backdrop)
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}
