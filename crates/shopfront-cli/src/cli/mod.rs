//! CLI for the Shopfront image and filter helpers.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use shopfront_core::config;
use shopfront_core::filters::FilterType;
use std::path::PathBuf;

use commands::{run_config, run_filters, run_image};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "shopfront")]
#[command(about = "Shopfront: storefront image URL and product filter helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize image references against the API base URL.
    Image {
        /// Image references as they appear in API records.
        #[arg(required = true)]
        refs: Vec<String>,

        /// Override the configured API base URL.
        #[arg(long, value_name = "URL")]
        base: Option<String>,

        /// Treat each reference as a JSON value (null, string or object).
        #[arg(long)]
        json: bool,
    },

    /// Show the active-filter summary for a set of product filters.
    Filters(FilterArgs),

    /// Show the config file path and effective settings.
    Config,
}

/// Filter values, applied one dimension at a time in the order listed.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Search text.
    #[arg(long)]
    pub search: Option<String>,

    /// Category id.
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum price.
    #[arg(long, value_name = "AMOUNT")]
    pub min_price: Option<String>,

    /// Maximum price.
    #[arg(long, value_name = "AMOUNT")]
    pub max_price: Option<String>,

    /// Only products in stock.
    #[arg(long)]
    pub in_stock: bool,

    /// Minimum star rating (1-5).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,

    /// Category listing (JSON array or API envelope) used to resolve category names.
    #[arg(long, value_name = "FILE")]
    pub categories: Option<PathBuf>,

    /// Clear a filter after applying the others (search, category, price, stock, rating).
    #[arg(long = "clear", value_name = "TYPE")]
    pub clear: Vec<FilterType>,

    /// Print product query parameters instead of labels.
    #[arg(long, conflicts_with = "json")]
    pub query: bool,

    /// Print the active filters as JSON.
    #[arg(long)]
    pub json: bool,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Image { refs, base, json } => {
                run_image(&cfg, base.as_deref(), json, &refs)?
            }
            CliCommand::Filters(args) => run_filters(&args)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
