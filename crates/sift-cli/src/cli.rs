use clap::{Args, Parser, Subcommand};
use sift_core::SortKey;

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Filter, sort and page a product catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query against the bundled catalog and print a page
    List(ListArgs),

    /// Drive the live engine from stdin (debounced edits, persistence)
    Interactive,

    /// Inspect or clear the persisted filter state
    #[command(subcommand)]
    Filters(FiltersCommands),
}

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive brand substring
    #[arg(long, default_value = "")]
    pub brand: String,

    /// Category, matched exactly (case-insensitive)
    #[arg(long, default_value = "")]
    pub category: String,

    /// Upper price bound (empty = unconstrained)
    #[arg(long, default_value = "")]
    pub max_price: String,

    /// Upper rating bound (empty = unconstrained)
    #[arg(long, default_value = "")]
    pub max_rating: String,

    /// Sort key: none, price-asc, price-desc, rating-asc, rating-desc
    #[arg(long, default_value = "none")]
    pub sort: SortKey,

    /// Page to display (1-based)
    #[arg(long, default_value = "1")]
    pub page: usize,
}

#[derive(Subcommand)]
pub enum FiltersCommands {
    /// Print the persisted filter query
    Show,

    /// Remove the persisted filter query
    Clear,
}
