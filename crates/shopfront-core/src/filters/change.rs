use serde::{Deserialize, Serialize};

use super::state::{FilterType, PriceRange, Rating};

/// A single-dimension update, as delivered to the product query layer.
///
/// Serializes as `{ "type": "<dimension>", "value": <new value> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FilterChange {
    Search(String),
    Category(String),
    Price(PriceRange),
    Stock(bool),
    Rating(Option<Rating>),
}

impl FilterChange {
    pub fn kind(&self) -> FilterType {
        match self {
            FilterChange::Search(_) => FilterType::Search,
            FilterChange::Category(_) => FilterType::Category,
            FilterChange::Price(_) => FilterType::Price,
            FilterChange::Stock(_) => FilterType::Stock,
            FilterChange::Rating(_) => FilterType::Rating,
        }
    }

    /// The change that puts `kind` back to its default value.
    pub fn reset(kind: FilterType) -> Self {
        match kind {
            FilterType::Search => FilterChange::Search(String::new()),
            FilterType::Category => FilterChange::Category(String::new()),
            FilterType::Price => FilterChange::Price(PriceRange::default()),
            FilterType::Stock => FilterChange::Stock(false),
            FilterType::Rating => FilterChange::Rating(None),
        }
    }
}

/// Receiver of filter changes (re-queries the product list).
///
/// Each call carries the changes of one user action: a single entry for a
/// setter or a clear, every dimension for a reset.
pub trait FilterSink {
    fn apply(&mut self, changes: &[FilterChange]);
}

impl<F> FilterSink for F
where
    F: FnMut(&[FilterChange]),
{
    fn apply(&mut self, changes: &[FilterChange]) {
        self(changes)
    }
}
