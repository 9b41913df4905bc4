//! # API Facade
//!
//! [`Inventory`] is the single entry point for every inventory operation,
//! regardless of the UI in front of it. It owns the in-memory
//! [`InventoryState`], dispatches to the pure functions in `commands/*.rs` and
//! keeps the store in sync.
//!
//! ## Save On Every Write
//!
//! Each mutating method persists the whole state before returning. There is no
//! commit step and no batching. When the save fails the in-memory state is
//! restored to what it was before the call and the error is returned, so memory
//! never runs ahead of disk.
//!
//! Calls that change nothing (an unknown id, a refused stock movement) do not
//! touch the store.
//!
//! ## Generic Over DataStore
//!
//! `Inventory<S: DataStore>` is generic over the storage backend:
//! - Production: `Inventory<FileStore>` (see [`Inventory::open`])
//! - Testing: `Inventory<InMemoryStore>`

use crate::commands::{self, ProductUpdate};
use crate::error::Result;
use crate::model::{InventoryState, Product, Statistics};
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Low-stock threshold used when none is configured.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 10;

pub struct Inventory<S: DataStore> {
    store: S,
    state: InventoryState,
    low_stock_threshold: u64,
}

impl Inventory<FileStore> {
    /// Open the inventory stored in the JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>, low_stock_threshold: u64) -> Self {
        Self::new(FileStore::new(path), low_stock_threshold)
    }
}

impl<S: DataStore> Inventory<S> {
    pub fn new(store: S, low_stock_threshold: u64) -> Self {
        let state = store.load();
        Self {
            store,
            state,
            low_stock_threshold,
        }
    }

    pub fn add_product(
        &mut self,
        name: &str,
        category: &str,
        description: &str,
        quantity: u64,
        price: f64,
    ) -> Result<Product> {
        let snapshot = self.state.clone();
        let product =
            commands::products::add(&mut self.state, name, category, description, quantity, price)?;
        self.persist(snapshot)?;
        Ok(product)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Product> {
        commands::products::find_by_id(&self.state, id)
    }

    pub fn find_by_term(&self, term: &str) -> Vec<&Product> {
        commands::products::find_by_term(&self.state, term)
    }

    pub fn update_product(&mut self, id: u64, changes: &ProductUpdate) -> Result<Option<Product>> {
        let snapshot = self.state.clone();
        let Some(product) = commands::products::update(&mut self.state, id, changes) else {
            return Ok(None);
        };
        self.persist(snapshot)?;
        Ok(Some(product))
    }

    pub fn remove_product(&mut self, id: u64) -> Result<bool> {
        let snapshot = self.state.clone();
        if commands::products::remove(&mut self.state, id).is_none() {
            return Ok(false);
        }
        self.persist(snapshot)?;
        Ok(true)
    }

    /// Move `delta` units in (positive) or out (negative) of a product's stock.
    pub fn move_stock(&mut self, id: u64, delta: i64) -> Result<Option<Product>> {
        let snapshot = self.state.clone();
        let Some(product) = commands::stock::move_stock(&mut self.state, id, delta)? else {
            return Ok(None);
        };
        self.persist(snapshot)?;
        Ok(Some(product))
    }

    pub fn statistics(&self) -> Statistics {
        commands::stats::statistics(&self.state, self.low_stock_threshold)
    }

    pub fn low_stock_products(&self) -> Vec<&Product> {
        commands::stats::low_stock(&self.state, self.low_stock_threshold)
    }

    pub fn list_categories(&self) -> Vec<String> {
        commands::categories::list(&self.state)
    }

    /// Register a category and persist, returning the trimmed name.
    pub fn add_category(&mut self, name: &str) -> Result<String> {
        let snapshot = self.state.clone();
        let name = commands::categories::add(&mut self.state, name)?;
        self.persist(snapshot)?;
        Ok(name)
    }

    /// Read-only view of every product, keyed and ordered by id.
    pub fn products(&self) -> &BTreeMap<u64, Product> {
        &self.state.products
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn low_stock_threshold(&self) -> u64 {
        self.low_stock_threshold
    }

    pub fn is_low_stock(&self, product: &Product) -> bool {
        product.quantity < self.low_stock_threshold
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, snapshot: InventoryState) -> Result<()> {
        if let Err(e) = self.store.save(&self.state) {
            tracing::error!(error = %e, "failed to save inventory, discarding change");
            self.state = snapshot;
            return Err(e);
        }
        Ok(())
    }
}
