use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::change::FilterChange;
use super::FilterError;

/// Filter dimensions, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Search,
    Category,
    Price,
    Stock,
    Rating,
}

impl FilterType {
    pub const ALL: [FilterType; 5] = [
        FilterType::Search,
        FilterType::Category,
        FilterType::Price,
        FilterType::Stock,
        FilterType::Rating,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterType::Search => "search",
            FilterType::Category => "category",
            FilterType::Price => "price",
            FilterType::Stock => "stock",
            FilterType::Rating => "rating",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::UnknownType(s.to_string()))
    }
}

/// Minimum star rating, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Result<Self, FilterError> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(FilterError::RatingOutOfRange(stars))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = FilterError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> u8 {
        r.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price bounds as typed into the sidebar; either side may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRange {
    pub min: String,
    pub max: String,
}

impl PriceRange {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

/// Current value of every filter dimension. `Default` is "no filters".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub search: String,
    /// Category id; empty (or `null` on the wire) means "all categories".
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    pub price_range: PriceRange,
    pub in_stock: bool,
    pub rating: Option<Rating>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True when `kind` differs from its default value.
    pub fn is_active(&self, kind: FilterType) -> bool {
        match kind {
            FilterType::Search => !self.search.is_empty(),
            FilterType::Category => !self.category.is_empty(),
            FilterType::Price => !self.price_range.is_empty(),
            FilterType::Stock => self.in_stock,
            FilterType::Rating => self.rating.is_some(),
        }
    }

    /// Overwrite the one dimension `change` targets.
    pub fn apply(&mut self, change: &FilterChange) {
        match change {
            FilterChange::Search(v) => self.search = v.clone(),
            FilterChange::Category(v) => self.category = v.clone(),
            FilterChange::Price(v) => self.price_range = v.clone(),
            FilterChange::Stock(v) => self.in_stock = *v,
            FilterChange::Rating(v) => self.rating = *v,
        }
    }

    /// Non-default dimensions as query parameters for the product listing endpoint.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if !self.category.is_empty() {
            pairs.push(("category", self.category.clone()));
        }
        if !self.price_range.min.is_empty() {
            pairs.push(("minPrice", self.price_range.min.clone()));
        }
        if !self.price_range.max.is_empty() {
            pairs.push(("maxPrice", self.price_range.max.clone()));
        }
        if self.in_stock {
            pairs.push(("inStock", "true".to_string()));
        }
        if let Some(r) = self.rating {
            pairs.push(("rating", r.to_string()));
        }
        pairs
    }
}
