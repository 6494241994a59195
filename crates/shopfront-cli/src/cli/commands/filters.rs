//! `shopfront filters` – apply filters and print the active-filter summary.

use anyhow::Result;
use shopfront_core::catalog;
use shopfront_core::filters::{FilterChange, FilterDescriptor, FilterReconciler, FilterState, Rating};

use crate::cli::FilterArgs;

pub fn run_filters(args: &FilterArgs) -> Result<()> {
    let (state, active) = apply_args(args)?;

    if args.query {
        for (key, value) in state.query_pairs() {
            println!("{key}={value}");
        }
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&active)?);
    } else if active.is_empty() {
        println!("No active filters.");
    } else {
        println!("{:<10} {}", "TYPE", "LABEL");
        for d in active {
            println!("{:<10} {}", d.kind, d.label);
        }
    }
    Ok(())
}

/// Replays the arguments as sidebar actions and returns the resulting state and summary.
pub(crate) fn apply_args(args: &FilterArgs) -> Result<(FilterState, Vec<FilterDescriptor>)> {
    let mut reconciler = FilterReconciler::new(|changes: &[FilterChange]| {
        tracing::debug!(?changes, "apply filters");
    });

    if let Some(path) = &args.categories {
        reconciler.set_categories(catalog::load_categories(path)?);
    }
    if let Some(search) = &args.search {
        reconciler.set_search(search.as_str());
    }
    if let Some(category) = &args.category {
        reconciler.set_category(Some(category.as_str()));
    }
    if let Some(min) = &args.min_price {
        reconciler.set_min_price(min.as_str());
    }
    if let Some(max) = &args.max_price {
        reconciler.set_max_price(max.as_str());
    }
    if args.in_stock {
        reconciler.set_in_stock(true);
    }
    if let Some(stars) = args.rating {
        reconciler.set_rating(Some(Rating::new(stars)?));
    }
    for &kind in &args.clear {
        reconciler.clear(kind);
    }

    Ok((reconciler.state().clone(), reconciler.active_filters()))
}
