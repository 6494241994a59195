use serde::Serialize;

use super::change::FilterSink;
use super::reconciler::FilterReconciler;
use super::state::{FilterState, FilterType};
use crate::catalog::Category;

pub const CURRENCY_SYMBOL: &str = "₹";

/// One applied filter as shown in the "active filters" bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    #[serde(rename = "type")]
    pub kind: FilterType,
    pub label: String,
}

impl FilterDescriptor {
    /// Retract this filter only, notifying the reconciler's sink.
    pub fn clear<S: FilterSink>(&self, reconciler: &mut FilterReconciler<S>) {
        reconciler.clear(self.kind);
    }
}

/// Summarize the non-default dimensions of `state`, in [`FilterType::ALL`] order.
///
/// `categories` resolves the category id to its display name. An unknown id,
/// or an empty list while categories are still loading, shows the raw id.
pub fn derive_active_filters(state: &FilterState, categories: &[Category]) -> Vec<FilterDescriptor> {
    FilterType::ALL
        .into_iter()
        .filter(|&kind| state.is_active(kind))
        .map(|kind| FilterDescriptor {
            kind,
            label: label_for(kind, state, categories),
        })
        .collect()
}

fn label_for(kind: FilterType, state: &FilterState, categories: &[Category]) -> String {
    match kind {
        FilterType::Search => format!("Search: {}", state.search),
        FilterType::Category => format!("Category: {}", category_name(&state.category, categories)),
        FilterType::Price => price_label(&state.price_range.min, &state.price_range.max),
        FilterType::Stock => "In Stock Only".to_string(),
        FilterType::Rating => match state.rating {
            Some(r) => format!("{r}★ & Up"),
            None => String::new(),
        },
    }
}

fn category_name<'a>(id: &'a str, categories: &'a [Category]) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == id && !c.name.is_empty())
        .map_or(id, |c| c.name.as_str())
}

fn price_label(min: &str, max: &str) -> String {
    let mut bounds = Vec::with_capacity(2);
    if !min.is_empty() {
        bounds.push(format!("Min: {CURRENCY_SYMBOL}{min}"));
    }
    if !max.is_empty() {
        bounds.push(format!("Max: {CURRENCY_SYMBOL}{max}"));
    }
    format!("Price ({})", bounds.join(", "))
}
