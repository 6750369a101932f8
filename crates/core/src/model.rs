#![forbid(unsafe_code)]

use crate::ids::ItemId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use time::Date;
use time::macros::format_description;

/// A record that can live in a persisted list.
pub trait Record: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> ItemId;

    fn set_id(&mut self, id: ItemId);
}

/// Checklist entry of the to-do board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoTask {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub created_at: String,
}

impl Record for TodoTask {
    fn id(&self) -> ItemId {
        self.id
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }
}

/// Planner entry: categorised, optionally due on a calendar day.
///
/// Exported files written before ids existed carry no `id`; those records
/// are renumbered when imported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerTask {
    #[serde(default)]
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub category: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl PlannerTask {
    pub fn due(&self) -> Option<Date> {
        self.due_date.as_deref().and_then(parse_day)
    }

    pub fn is_overdue(&self, today: Date) -> bool {
        !self.completed && self.due().is_some_and(|due| due < today)
    }
}

impl Record for PlannerTask {
    fn id(&self) -> ItemId {
        self.id
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }
}

/// Read-only catalog entry. Prices are whole rupees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub id: ItemId,
    pub name: &'static str,
    pub category: &'static str,
    pub price: u32,
    pub rating: f32,
    pub image: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ItemId,
    pub product_id: ItemId,
    pub name: String,
    pub category: String,
    pub price: u32,
    pub rating: f32,
    pub quantity: u32,
}

impl CartLine {
    pub fn for_product(id: ItemId, product: &Product) -> Self {
        Self {
            id,
            product_id: product.id,
            name: product.name.to_string(),
            category: product.category.to_string(),
            price: product.price,
            rating: product.rating,
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }
}

impl Record for CartLine {
    fn id(&self) -> ItemId {
        self.id
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }
}

/// Parses a `YYYY-MM-DD` calendar day.
pub fn parse_day(value: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).ok()
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}
