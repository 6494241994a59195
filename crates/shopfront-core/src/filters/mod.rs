//! Product filter state and the "active filters" summary shown above listings.
//!
//! [`FilterState`] holds one value per dimension. [`derive_active_filters`]
//! turns it into at most one [`FilterDescriptor`] per non-default dimension,
//! always in [`FilterType::ALL`] order. [`FilterReconciler`] owns the state,
//! applies one dimension change at a time and forwards every change to a
//! [`FilterSink`] (the product query layer).

mod change;
mod derive;
mod reconciler;
mod state;

pub use change::{FilterChange, FilterSink};
pub use derive::{derive_active_filters, FilterDescriptor, CURRENCY_SYMBOL};
pub use reconciler::FilterReconciler;
pub use state::{FilterState, FilterType, PriceRange, Rating};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
    #[error("unknown filter type: {0}")]
    UnknownType(String),
}
