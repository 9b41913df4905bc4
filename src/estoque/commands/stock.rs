use crate::error::{EstoqueError, Result};
use crate::model::{InventoryState, Product};

/// Apply a signed stock movement to a product.
///
/// Positive deltas are stock entering, negative deltas stock leaving. A
/// movement that would take the quantity below zero is refused with
/// [`EstoqueError::InsufficientStock`] and the product is left untouched.
/// Returns `Ok(None)` when no product has the given id.
pub fn move_stock(state: &mut InventoryState, id: u64, delta: i64) -> Result<Option<Product>> {
    let Some(product) = state.products.get_mut(&id) else {
        return Ok(None);
    };

    let amount = delta.unsigned_abs();
    let quantity = if delta >= 0 {
        product
            .quantity
            .checked_add(amount)
            .ok_or(EstoqueError::StockOverflow { id })?
    } else {
        product
            .quantity
            .checked_sub(amount)
            .ok_or(EstoqueError::InsufficientStock {
                id,
                available: product.quantity,
                requested: amount,
            })?
    };

    product.quantity = quantity;
    Ok(Some(product.clone()))
}
