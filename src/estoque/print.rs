use colored::Colorize;
use estoque::model::{Product, Statistics};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 18;
const QTY_WIDTH: usize = 6;
const PRICE_WIDTH: usize = 12;
const LABEL_WIDTH: usize = 13;

pub(super) fn success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn info(message: &str) {
    println!("{}", message.dimmed());
}

pub(super) fn warning(message: &str) {
    println!("{}", message.yellow());
}

/// Print products as a table sorted by name, highlighting low stock.
pub(super) fn print_products(products: &[&Product], low_stock_threshold: u64) {
    if products.is_empty() {
        warning("No products found.");
        return;
    }

    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

    let header = format!(
        "{}{}{}{:>qty$}{:>price$}",
        pad_to_width("ID", ID_WIDTH),
        pad_to_width("Name", NAME_WIDTH),
        pad_to_width("Category", CATEGORY_WIDTH),
        "Qty",
        "Price",
        qty = QTY_WIDTH,
        price = PRICE_WIDTH,
    );
    let rule = "-".repeat(header.width());
    println!("{}", header.bold());
    println!("{}", rule);

    for product in sorted {
        let quantity = format!("{:>width$}", product.quantity, width = QTY_WIDTH);
        let quantity = if product.quantity < low_stock_threshold {
            quantity.yellow()
        } else {
            quantity.normal()
        };
        println!(
            "{}{}{}{}{:>width$.2}",
            pad_to_width(&product.id.to_string(), ID_WIDTH),
            pad_to_width(&product.name, NAME_WIDTH),
            pad_to_width(&product.category, CATEGORY_WIDTH),
            quantity,
            product.price,
            width = PRICE_WIDTH,
        );
    }
    println!("{}", rule);
}

pub(super) fn print_product(product: &Product, low_stock_threshold: u64) {
    let quantity = if product.quantity < low_stock_threshold {
        product.quantity.to_string().yellow()
    } else {
        product.quantity.to_string().normal()
    };

    println!("{}{}", pad_to_width("ID:", LABEL_WIDTH).bold(), product.id);
    println!("{}{}", pad_to_width("Name:", LABEL_WIDTH).bold(), product.name);
    println!(
        "{}{}",
        pad_to_width("Category:", LABEL_WIDTH).bold(),
        product.category
    );
    println!(
        "{}{}",
        pad_to_width("Description:", LABEL_WIDTH).bold(),
        product.description
    );
    println!("{}{}", pad_to_width("Quantity:", LABEL_WIDTH).bold(), quantity);
    println!(
        "{}{:.2}",
        pad_to_width("Price:", LABEL_WIDTH).bold(),
        product.price
    );
}

pub(super) fn print_statistics(stats: &Statistics, low_stock_threshold: u64) {
    println!("{}", "Inventory".bold());
    println!("  Products:     {}", stats.total_products.to_string().cyan());
    println!("  Items:        {}", stats.total_items);

    let low = format!(
        "{} (below {})",
        stats.low_stock_count, low_stock_threshold
    );
    if stats.low_stock_count > 0 {
        println!("  Low stock:    {}", low.red());
    } else {
        println!("  Low stock:    {}", low.green());
    }
    println!("  Total value:  {:.2}", stats.total_value);
}

pub(super) fn print_categories(categories: &[String]) {
    for category in categories {
        println!("{}", category);
    }
}

/// Truncate or pad `s` so it takes exactly `width` terminal columns,
/// leaving one column of separation.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let max_width = width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            result.pop();
            result.push('…');
            current_width = result.width();
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push_str(&" ".repeat(width.saturating_sub(current_width)));
    result
}
