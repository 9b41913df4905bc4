use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Categories available when no prior state exists.
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Carregador",
    "Smartphones",
    "iOS",
    "Cabos",
    "Capas",
    "Pendrive",
    "Fones de ouvido",
    "Suporte",
    "Películas",
];

/// Description given to stored records that predate the `descricao` field.
pub const MISSING_DESCRIPTION: &str = "Sem descrição";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descricao", default = "missing_description")]
    pub description: String,
    #[serde(rename = "quantidade")]
    pub quantity: u64,
    #[serde(rename = "preco")]
    pub price: f64,
}

fn missing_description() -> String {
    MISSING_DESCRIPTION.to_string()
}

impl Product {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        quantity: u64,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: description.into(),
            quantity,
            price,
        }
    }

    /// Stock value of this product (`quantity * price`).
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// The complete inventory snapshot, exactly as it is persisted.
///
/// Products are keyed by id in a `BTreeMap`; since ids are handed out from a
/// monotonic counter, key order is also insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryState {
    #[serde(rename = "proximo_id", default = "first_id")]
    pub next_id: u64,
    #[serde(rename = "categorias", default)]
    pub categories: BTreeSet<String>,
    #[serde(rename = "produtos", default)]
    pub products: BTreeMap<u64, Product>,
}

fn first_id() -> u64 {
    1
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            categories: default_categories(),
            products: BTreeMap::new(),
        }
    }
}

impl InventoryState {
    /// Largest id currently stored, if any.
    pub fn max_id(&self) -> Option<u64> {
        self.products.keys().next_back().copied()
    }
}

pub fn default_categories() -> BTreeSet<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Aggregate figures over the whole inventory.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    pub total_products: usize,
    pub total_items: u128,
    pub low_stock_count: usize,
    pub total_value: f64,
}
