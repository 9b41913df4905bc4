use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use estoque::api::Inventory;
use estoque::commands::ProductUpdate;
use estoque::config::{EstoqueConfig, CONFIG_KEYS};
use estoque::error::{EstoqueError, Result};
use estoque::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    inventory: Inventory<FileStore>,
    config: EstoqueConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            category,
            description,
            quantity,
            price,
        }) => handle_add(&mut ctx, name, category, description, quantity, price),
        Some(Commands::List { low }) => handle_list(&ctx, low),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Edit {
            id,
            name,
            category,
            description,
        }) => handle_edit(&mut ctx, id, ProductUpdate::new(name, category, description)),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::In { id, quantity }) => handle_movement(&mut ctx, id, quantity, true),
        Some(Commands::Out { id, quantity }) => handle_movement(&mut ctx, id, quantity, false),
        Some(Commands::Search { term }) => handle_search(&ctx, &term),
        Some(Commands::Stats) | None => handle_stats(&ctx),
        Some(Commands::Categories { add }) => handle_categories(&mut ctx, add),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("ESTOQUE_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "estoque", "estoque").ok_or_else(|| {
        EstoqueError::Config("Could not determine a data directory; set ESTOQUE_HOME".into())
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = EstoqueConfig::load(&data_dir)?;

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_path(&data_dir));
    let threshold = cli.threshold.unwrap_or(config.low_stock_threshold);
    tracing::debug!(file = %data_file.display(), threshold, "opening inventory");

    Ok(AppContext {
        inventory: Inventory::open(data_file, threshold),
        config,
        data_dir,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    category: String,
    description: String,
    quantity: u64,
    price: f64,
) -> Result<()> {
    let category = category.trim();
    if category.is_empty() {
        return Err(EstoqueError::Validation(
            "Category name cannot be empty".to_string(),
        ));
    }
    let is_new_category = !ctx.inventory.list_categories().iter().any(|c| c == category);

    let product = ctx
        .inventory
        .add_product(name.trim(), category, description.trim(), quantity, price)?;
    if is_new_category {
        let created = ctx.inventory.add_category(category)?;
        print::info(&format!("Category '{}' created.", created));
    }
    print::success(&format!(
        "Product '{}' (ID: {}) added.",
        product.name, product.id
    ));
    Ok(())
}

fn handle_list(ctx: &AppContext, low: bool) -> Result<()> {
    let threshold = ctx.inventory.low_stock_threshold();
    if low {
        let products = ctx.inventory.low_stock_products();
        if products.is_empty() {
            print::success(&format!("No products below {} units.", threshold));
        } else {
            print::print_products(&products, threshold);
        }
    } else {
        let products: Vec<_> = ctx.inventory.products().values().collect();
        print::print_products(&products, threshold);
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, id: u64) -> Result<()> {
    let product = ctx
        .inventory
        .find_by_id(id)
        .ok_or(EstoqueError::ProductNotFound(id))?;
    print::print_product(product, ctx.inventory.low_stock_threshold());
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: u64, changes: ProductUpdate) -> Result<()> {
    if changes.is_empty() {
        print::warning("Nothing to change: pass --name, --category or --description.");
        return Ok(());
    }
    let product = ctx
        .inventory
        .update_product(id, &changes)?
        .ok_or(EstoqueError::ProductNotFound(id))?;
    print::success(&format!("Product '{}' updated.", product.name));
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: u64) -> Result<()> {
    let name = ctx
        .inventory
        .find_by_id(id)
        .map(|p| p.name.clone())
        .ok_or(EstoqueError::ProductNotFound(id))?;
    if ctx.inventory.remove_product(id)? {
        print::success(&format!("Product '{}' removed.", name));
    }
    Ok(())
}

fn handle_movement(ctx: &mut AppContext, id: u64, quantity: u64, incoming: bool) -> Result<()> {
    let amount = i64::try_from(quantity).map_err(|_| {
        EstoqueError::Validation(format!("Quantity {} is too large", quantity))
    })?;
    let delta = if incoming { amount } else { -amount };

    let product = ctx
        .inventory
        .move_stock(id, delta)?
        .ok_or(EstoqueError::ProductNotFound(id))?;

    let kind = if incoming { "Entry" } else { "Exit" };
    print::success(&format!(
        "{} registered: '{}' now has {} units.",
        kind, product.name, product.quantity
    ));
    if ctx.inventory.is_low_stock(&product) {
        print::warning(&format!(
            "'{}' is below the low-stock threshold of {}.",
            product.name,
            ctx.inventory.low_stock_threshold()
        ));
    }
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    let results = ctx.inventory.find_by_term(term);
    print::print_products(&results, ctx.inventory.low_stock_threshold());
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    print::print_statistics(
        &ctx.inventory.statistics(),
        ctx.inventory.low_stock_threshold(),
    );
    Ok(())
}

fn handle_categories(ctx: &mut AppContext, add: Option<String>) -> Result<()> {
    if let Some(name) = add {
        let name = ctx.inventory.add_category(&name)?;
        print::success(&format!("Category '{}' added.", name));
        return Ok(());
    }
    print::print_categories(&ctx.inventory.list_categories());
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in CONFIG_KEYS {
                println!("{} = {}", key, ctx.config.get(key)?);
            }
        }
        (Some(key), None) => println!("{} = {}", key, ctx.config.get(&key)?),
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            print::success(&format!("{} set to {}", key, ctx.config.get(&key)?));
        }
    }
    Ok(())
}
