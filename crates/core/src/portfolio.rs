#![forbid(unsafe_code)]

pub const THEME_KEY: &str = "darkMode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the literal `"true"` selects dark mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Clone, Debug, Default)]
pub struct ProjectModal {
    open: Option<ProjectCard>,
}

impl ProjectModal {
    pub fn open(&mut self, card: ProjectCard) {
        self.open = Some(card);
    }

    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn showing(&self) -> Option<&ProjectCard> {
        self.open.as_ref()
    }

    /// Escape closes an open modal; every other key is ignored.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Clicks on the backdrop close; clicks inside the dialog do not.
    pub fn on_click(&mut self, on_backdrop: bool) -> bool {
        on_backdrop && self.close()
    }
}
