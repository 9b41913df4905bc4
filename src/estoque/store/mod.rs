//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence boundary of the inventory. A store
//! deals in whole [`InventoryState`] snapshots: it is read once when the
//! manager is constructed and rewritten in full after every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single pretty-printed JSON file
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "proximo_id": 3,
//!     "categorias": ["Cabos", "Capas", ...],
//!     "produtos": {
//!         "1": {"id": 1, "nome": "...", "categoria": "...", "descricao": "...",
//!               "quantidade": 50, "preco": 9.9},
//!         ...
//!     }
//! }
//! ```
//!
//! Loading never fails: a missing file yields a fresh seeded state and an
//! unreadable one is logged and replaced by a fresh seeded state.

use crate::error::{EstoqueError, Result};
use crate::model::{default_categories, InventoryState};

pub mod fs;
pub mod memory;

/// Abstract interface for inventory persistence.
pub trait DataStore {
    /// Read the stored state, falling back to a fresh seeded state.
    fn load(&self) -> InventoryState;

    /// Replace the stored state with `state`.
    fn save(&mut self, state: &InventoryState) -> Result<()>;
}

/// Bring a freshly deserialized state back in line with the model invariants.
///
/// Fails when a stored product id leaves no room for a next id.
pub(crate) fn normalize(mut state: InventoryState) -> Result<InventoryState> {
    if state.categories.is_empty() {
        state.categories = default_categories();
    }

    for (key, product) in state.products.iter_mut() {
        if product.id != *key {
            tracing::warn!(key, id = product.id, "stored product id differs from its key");
            product.id = *key;
        }
    }

    if let Some(max_id) = state.max_id() {
        if state.next_id <= max_id {
            let repaired = max_id.checked_add(1).ok_or(EstoqueError::IdsExhausted)?;
            tracing::warn!(
                stored = state.next_id,
                repaired,
                "stored next id is not above the largest product id"
            );
            state.next_id = repaired;
        }
    }
    state.next_id = state.next_id.max(1);

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, DEFAULT_CATEGORIES};

    #[test]
    fn empty_categories_fall_back_to_seed_set() {
        let mut state = InventoryState::default();
        state.categories.clear();

        let state = normalize(state).unwrap();
        assert_eq!(state.categories.len(), DEFAULT_CATEGORIES.len());
    }

    #[test]
    fn next_id_is_raised_above_stored_ids() {
        let mut state = InventoryState::default();
        state
            .products
            .insert(5, Product::new(5, "Suporte veicular", "Suporte", "", 1, 30.0));
        state.next_id = 2;

        let state = normalize(state).unwrap();
        assert_eq!(state.next_id, 6);
    }

    #[test]
    fn key_wins_over_record_id() {
        let mut state = InventoryState::default();
        state
            .products
            .insert(4, Product::new(9, "Película 3D", "Películas", "", 1, 5.0));
        state.next_id = 10;

        let state = normalize(state).unwrap();
        assert_eq!(state.products[&4].id, 4);
        assert_eq!(state.next_id, 10);
    }

    #[test]
    fn product_at_max_id_is_rejected() {
        let mut state = InventoryState::default();
        state.products.insert(
            u64::MAX,
            Product::new(u64::MAX, "Capa", "Capas", "", 1, 1.0),
        );

        assert!(matches!(normalize(state), Err(EstoqueError::IdsExhausted)));
    }

    #[test]
    fn zero_next_id_becomes_one() {
        let mut state = InventoryState::default();
        state.next_id = 0;
        assert_eq!(normalize(state).unwrap().next_id, 1);
    }
}
