use crate::error::{EstoqueError, Result};
use crate::model::{InventoryState, Product};

/// Field changes for an existing product.
///
/// `None` or blank values leave the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ProductUpdate {
    pub fn new(
        name: Option<String>,
        category: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            name,
            category,
            description,
        }
    }

    pub fn is_empty(&self) -> bool {
        [&self.name, &self.category, &self.description]
            .iter()
            .all(|field| provided(field).is_none())
    }
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

pub fn add(
    state: &mut InventoryState,
    name: &str,
    category: &str,
    description: &str,
    quantity: u64,
    price: f64,
) -> Result<Product> {
    if name.trim().is_empty() {
        return Err(EstoqueError::Validation(
            "Product name cannot be empty".to_string(),
        ));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(EstoqueError::Validation(format!(
            "Price must be zero or positive, got {}",
            price
        )));
    }

    let id = state.next_id;
    let next_id = id.checked_add(1).ok_or(EstoqueError::IdsExhausted)?;
    let product = Product::new(id, name, category, description, quantity, price);
    state.products.insert(id, product.clone());
    state.next_id = next_id;
    Ok(product)
}

pub fn find_by_id(state: &InventoryState, id: u64) -> Option<&Product> {
    state.products.get(&id)
}

/// Products whose id equals `term` exactly, or whose name or category contains
/// `term` ignoring case. Results keep the inventory's id order.
pub fn find_by_term<'a>(state: &'a InventoryState, term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    state
        .products
        .values()
        .filter(|p| {
            p.id.to_string() == term
                || p.name.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn update(state: &mut InventoryState, id: u64, changes: &ProductUpdate) -> Option<Product> {
    let product = state.products.get_mut(&id)?;

    if let Some(name) = provided(&changes.name) {
        product.name = name.to_string();
    }
    if let Some(category) = provided(&changes.category) {
        product.category = category.to_string();
    }
    if let Some(description) = provided(&changes.description) {
        product.description = description.to_string();
    }

    Some(product.clone())
}

pub fn remove(state: &mut InventoryState, id: u64) -> Option<Product> {
    state.products.remove(&id)
}
