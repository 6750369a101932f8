#![forbid(unsafe_code)]

/// Completion tally derived from a store on every change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
}

impl Progress {
    pub fn tally(flags: impl IntoIterator<Item = bool>) -> Self {
        let mut progress = Self::default();
        for completed in flags {
            progress.total += 1;
            if completed {
                progress.completed += 1;
            }
        }
        progress
    }

    pub fn pending(&self) -> usize {
        self.total - self.completed
    }

    /// Share of completed items in percent; an empty store reports 0.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f64 / self.total as f64) * 100.0
    }

    pub fn width_style(&self) -> String {
        format!("{}%", self.percent())
    }

    pub fn summary(&self) -> String {
        format!(
            "{} pending, {} completed, {} total",
            self.pending(),
            self.completed,
            self.total
        )
    }
}
