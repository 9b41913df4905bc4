use crate::model::{InventoryState, Product, Statistics};

/// Aggregate figures over every product.
///
/// A product counts as low stock when its quantity is strictly below
/// `low_stock_threshold`.
pub fn statistics(state: &InventoryState, low_stock_threshold: u64) -> Statistics {
    if state.products.is_empty() {
        return Statistics::default();
    }

    let products = state.products.values();
    Statistics {
        total_products: state.products.len(),
        total_items: products.clone().map(|p| u128::from(p.quantity)).sum(),
        low_stock_count: products
            .clone()
            .filter(|p| p.quantity < low_stock_threshold)
            .count(),
        total_value: products.map(Product::value).sum(),
    }
}

/// Products below `low_stock_threshold`, in id order.
pub fn low_stock(state: &InventoryState, low_stock_threshold: u64) -> Vec<&Product> {
    state
        .products
        .values()
        .filter(|p| p.quantity < low_stock_threshold)
        .collect()
}
