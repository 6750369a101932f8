#![forbid(unsafe_code)]

use super::Projectable;
use crate::text::contains_ignore_case;
use std::cmp::Ordering;

pub const ALL: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    All,
    Pending,
    Completed,
    Category(String),
}

impl Selector {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value {
            "" | ALL => Self::All,
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            other => Self::Category(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Category(category) => category,
        }
    }

    pub fn matches<T: Projectable + ?Sized>(&self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::Pending => item.completed() == Some(false),
            Self::Completed => item.completed() == Some(true),
            Self::Category(category) => item.category() == Some(category.as_str()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Insertion,
    Name,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0} (expected default, name, price-asc, price-desc or rating)")]
pub struct UnknownSortKey(pub String);

impl SortKey {
    pub fn parse(value: &str) -> Result<Self, UnknownSortKey> {
        match value.trim() {
            "" | "default" => Ok(Self::Insertion),
            "name" => Ok(Self::Name),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::RatingDesc),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insertion => "default",
            Self::Name => "name",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::RatingDesc => "rating",
        }
    }

    pub fn compare<T: Projectable + ?Sized>(self, a: &T, b: &T) -> Ordering {
        match self {
            Self::Insertion => Ordering::Equal,
            Self::Name => compare_names(a.search_text(), b.search_text()),
            Self::PriceAsc => compare_present(a.price(), b.price(), |x, y| x.cmp(&y)),
            Self::PriceDesc => compare_present(a.price(), b.price(), |x, y| y.cmp(&x)),
            Self::RatingDesc => compare_present(a.rating(), b.rating(), |x, y| y.total_cmp(&x)),
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_present<V>(a: Option<V>, b: Option<V>, cmp: impl Fn(V, V) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => Ordering::Equal,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub selector: Selector,
    pub sort: SortKey,
}

impl ViewQuery {
    pub fn accepts<T: Projectable + ?Sized>(&self, item: &T) -> bool {
        contains_ignore_case(item.search_text(), self.search.trim()) && self.selector.matches(item)
    }
}

/// Search, select, then stable-sort. The input slice is never reordered.
pub fn project<'a, T: Projectable>(items: &'a [T], query: &ViewQuery) -> Vec<&'a T> {
    let mut out = items
        .iter()
        .filter(|item| query.accepts(*item))
        .collect::<Vec<_>>();
    if query.sort != SortKey::Insertion {
        out.sort_by(|a, b| query.sort.compare(*a, *b));
    }
    out
}
