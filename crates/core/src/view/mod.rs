#![forbid(unsafe_code)]

//! Pure derivation from a store plus transient UI state to the page on screen.

mod page;
mod query;
mod state;

pub use page::*;
pub use query::*;
pub use state::*;

use crate::model::{CartLine, PlannerTask, Product, TodoTask};

/// Fields the projector can filter and sort on. Absent fields never match a
/// selector that needs them and compare as equal when sorting.
pub trait Projectable {
    fn search_text(&self) -> &str;

    fn category(&self) -> Option<&str> {
        None
    }

    fn completed(&self) -> Option<bool> {
        None
    }

    fn price(&self) -> Option<u32> {
        None
    }

    fn rating(&self) -> Option<f32> {
        None
    }
}

impl<T: Projectable + ?Sized> Projectable for &T {
    fn search_text(&self) -> &str {
        (**self).search_text()
    }

    fn category(&self) -> Option<&str> {
        (**self).category()
    }

    fn completed(&self) -> Option<bool> {
        (**self).completed()
    }

    fn price(&self) -> Option<u32> {
        (**self).price()
    }

    fn rating(&self) -> Option<f32> {
        (**self).rating()
    }
}

impl Projectable for TodoTask {
    fn search_text(&self) -> &str {
        &self.text
    }

    fn completed(&self) -> Option<bool> {
        Some(self.completed)
    }
}

impl Projectable for PlannerTask {
    fn search_text(&self) -> &str {
        &self.text
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn completed(&self) -> Option<bool> {
        Some(self.completed)
    }
}

impl Projectable for Product {
    fn search_text(&self) -> &str {
        self.name
    }

    fn category(&self) -> Option<&str> {
        Some(self.category)
    }

    fn price(&self) -> Option<u32> {
        Some(self.price)
    }

    fn rating(&self) -> Option<f32> {
        Some(self.rating)
    }
}

impl Projectable for CartLine {
    fn search_text(&self) -> &str {
        &self.name
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn price(&self) -> Option<u32> {
        Some(self.price)
    }

    fn rating(&self) -> Option<f32> {
        Some(self.rating)
    }
}
