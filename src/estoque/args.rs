use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "estoque", version)]
#[command(about = "File-backed inventory tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file (defaults to the configured data file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Quantity below which a product counts as low stock
    #[arg(short, long, global = true)]
    pub threshold: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    #[command(alias = "n")]
    Add {
        /// Product name
        name: String,

        /// Category (created if it does not exist yet)
        #[arg(short, long)]
        category: String,

        /// Product description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Initial quantity
        #[arg(short, long, default_value_t = 0)]
        quantity: u64,

        /// Unit price (accepts 29.90 or 29,90)
        #[arg(short, long, value_parser = parse_price)]
        price: f64,
    },

    /// List products, sorted by name
    #[command(alias = "ls")]
    List {
        /// Only products below the low-stock threshold
        #[arg(long)]
        low: bool,
    },

    /// Show every field of a product
    #[command(alias = "v")]
    View { id: u64 },

    /// Change a product's name, category or description
    #[command(alias = "e")]
    Edit {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a product
    #[command(alias = "rm")]
    Remove { id: u64 },

    /// Register stock entering
    In { id: u64, quantity: u64 },

    /// Register stock leaving
    Out { id: u64, quantity: u64 },

    /// Search by id, name or category
    #[command(alias = "s")]
    Search { term: String },

    /// Show inventory totals
    Stats,

    /// List categories, or add one
    Categories {
        /// Category to add
        #[arg(long)]
        add: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, low-stock-threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Parse a non-negative price, accepting a comma as decimal separator.
pub fn parse_price(s: &str) -> Result<f64, String> {
    let price: f64 = s
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| format!("'{}' is not a valid price (e.g. 29.90)", s))?;
    if !price.is_finite() || price < 0.0 {
        return Err(format!("price must be zero or positive, got {}", s));
    }
    Ok(price)
}
