#![forbid(unsafe_code)]

pub mod catalog;
pub mod clock;
pub mod form;
pub mod gate;
pub mod joke;
pub mod model;
pub mod portfolio;
pub mod progress;
pub mod quiz;
pub mod view;

pub mod ids {
    use serde::{Deserialize, Serialize};

    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
    )]
    #[serde(transparent)]
    pub struct ItemId(u64);

    impl ItemId {
        pub const fn new(value: u64) -> Self {
            Self(value)
        }

        pub fn get(self) -> u64 {
            self.0
        }

        pub fn parse(value: &str) -> Result<Self, ItemIdError> {
            let value = value.trim();
            if value.is_empty() {
                return Err(ItemIdError::Empty);
            }
            let raw = value.strip_prefix('#').unwrap_or(value);
            raw.parse::<u64>()
                .map(Self)
                .map_err(|_| ItemIdError::NotANumber)
        }
    }

    impl std::fmt::Display for ItemId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
    pub enum ItemIdError {
        #[error("item id must not be empty")]
        Empty,
        #[error("item id must be a positive integer")]
        NotANumber,
    }

    /// Monotonic id source for one store.
    ///
    /// Seeded past every id already present so reloaded stores never hand out
    /// a duplicate, however quickly ids are requested. Runs dry once `u64::MAX`
    /// has been handed out or seen; callers then pick a free id themselves.
    #[derive(Clone, Debug)]
    pub struct IdAllocator {
        next: Option<u64>,
    }

    impl IdAllocator {
        pub fn starting_after(existing: impl IntoIterator<Item = ItemId>) -> Self {
            let max = existing.into_iter().map(ItemId::get).max().unwrap_or(0);
            Self {
                next: max.checked_add(1),
            }
        }

        pub fn allocate(&mut self) -> Option<ItemId> {
            let id = self.next?;
            self.next = id.checked_add(1);
            Some(ItemId(id))
        }
    }

    impl Default for IdAllocator {
        fn default() -> Self {
            Self { next: Some(1) }
        }
    }
}

pub mod text {
    #[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
    pub enum TextError {
        #[error("text must not be empty")]
        Empty,
        #[error("text must be at least {min} characters (got {actual})")]
        TooShort { min: usize, actual: usize },
    }

    /// Trims `raw` and rejects it when nothing is left.
    pub fn required(raw: &str) -> Result<String, TextError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(trimmed.to_string())
    }

    pub fn required_min(raw: &str, min: usize) -> Result<String, TextError> {
        let value = required(raw)?;
        let actual = value.chars().count();
        if actual < min {
            return Err(TextError::TooShort { min, actual });
        }
        Ok(value)
    }

    pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::ids::{IdAllocator, ItemId, ItemIdError};
    use super::text::{self, TextError};

    #[test]
    fn allocator_skips_existing_ids() {
        let mut ids = IdAllocator::starting_after([ItemId::new(4), ItemId::new(9)]);
        assert_eq!(ids.allocate(), Some(ItemId::new(10)));
        assert_eq!(ids.allocate(), Some(ItemId::new(11)));

        let mut fresh = IdAllocator::starting_after(Vec::new());
        assert_eq!(fresh.allocate(), Some(ItemId::new(1)));
    }

    #[test]
    fn allocator_runs_dry_at_the_top_of_the_range() {
        let mut near = IdAllocator::starting_after([ItemId::new(u64::MAX - 1)]);
        assert_eq!(near.allocate(), Some(ItemId::new(u64::MAX)));
        assert_eq!(near.allocate(), None);

        let mut full = IdAllocator::starting_after([ItemId::new(u64::MAX)]);
        assert_eq!(full.allocate(), None);
    }

    #[test]
    fn item_id_parse() {
        assert_eq!(ItemId::parse(" 42 ").unwrap(), ItemId::new(42));
        assert_eq!(ItemId::parse("#7").unwrap(), ItemId::new(7));
        assert_eq!(ItemId::parse("").unwrap_err(), ItemIdError::Empty);
        assert_eq!(ItemId::parse("abc").unwrap_err(), ItemIdError::NotANumber);
    }

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(text::required("  Buy milk ").unwrap(), "Buy milk");
        assert_eq!(text::required(" \t ").unwrap_err(), TextError::Empty);
        assert_eq!(
            text::required_min(" ab ", 3).unwrap_err(),
            TextError::TooShort { min: 3, actual: 2 }
        );
    }

    #[test]
    fn contains_ignore_case_matches_substrings() {
        assert!(text::contains_ignore_case("Garden Hose", "HOSE"));
        assert!(text::contains_ignore_case("anything", ""));
        assert!(!text::contains_ignore_case("Lamp", "lamps"));
    }
}
