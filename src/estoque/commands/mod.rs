//! # Commands
//!
//! Pure business logic over an [`InventoryState`](crate::model::InventoryState).
//!
//! Every function here takes the state by reference, applies or queries it and
//! returns plain Rust values. Nothing in this layer persists, prints or reads
//! the environment: persistence after a mutation is the job of
//! [`Inventory`](crate::api::Inventory), presentation is the job of the client.
//!
//! A command that fails leaves the state exactly as it found it.

pub mod categories;
pub mod products;
pub mod stats;
pub mod stock;

pub use products::ProductUpdate;
