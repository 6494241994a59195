use super::change::{FilterChange, FilterSink};
use super::derive::{derive_active_filters, FilterDescriptor};
use super::state::{FilterState, FilterType, PriceRange, Rating};
use crate::catalog::Category;

/// Owns the sidebar's filter state and forwards every change to a sink.
///
/// Setters touch exactly one dimension. The active-filter list is derived
/// on demand from the current state, so it can never drift out of sync.
pub struct FilterReconciler<S> {
    state: FilterState,
    categories: Vec<Category>,
    sink: S,
}

impl<S: FilterSink> FilterReconciler<S> {
    pub fn new(sink: S) -> Self {
        Self::with_state(FilterState::default(), sink)
    }

    /// Start from an existing state (e.g. restored from a URL query) without notifying.
    pub fn with_state(state: FilterState, sink: S) -> Self {
        Self {
            state,
            categories: Vec::new(),
            sink,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Replace the category lookup table. Labels pick it up on the next derivation.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn active_filters(&self) -> Vec<FilterDescriptor> {
        derive_active_filters(&self.state, &self.categories)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.commit(vec![FilterChange::Search(text.into())]);
    }

    /// `None` selects all categories.
    pub fn set_category(&mut self, id: Option<&str>) {
        self.commit(vec![FilterChange::Category(id.unwrap_or_default().to_string())]);
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.commit(vec![FilterChange::Price(range)]);
    }

    pub fn set_min_price(&mut self, min: impl Into<String>) {
        let range = PriceRange {
            min: min.into(),
            max: self.state.price_range.max.clone(),
        };
        self.set_price_range(range);
    }

    pub fn set_max_price(&mut self, max: impl Into<String>) {
        let range = PriceRange {
            min: self.state.price_range.min.clone(),
            max: max.into(),
        };
        self.set_price_range(range);
    }

    pub fn set_in_stock(&mut self, in_stock: bool) {
        self.commit(vec![FilterChange::Stock(in_stock)]);
    }

    pub fn set_rating(&mut self, rating: Option<Rating>) {
        self.commit(vec![FilterChange::Rating(rating)]);
    }

    /// Reset one dimension to its default; other dimensions are untouched.
    pub fn clear(&mut self, kind: FilterType) {
        self.commit(vec![FilterChange::reset(kind)]);
    }

    /// Reset every dimension, delivered to the sink as one batch after the
    /// whole state is back to default.
    pub fn reset_all(&mut self) {
        self.commit(FilterType::ALL.into_iter().map(FilterChange::reset).collect());
    }

    fn commit(&mut self, changes: Vec<FilterChange>) {
        for change in &changes {
            self.state.apply(change);
        }
        tracing::debug!(
            changes = ?changes.iter().map(FilterChange::kind).collect::<Vec<_>>(),
            "filter state updated"
        );
        self.sink.apply(&changes);
    }
}
