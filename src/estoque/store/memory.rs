use super::DataStore;
use crate::error::{EstoqueError, Result};
use crate::model::InventoryState;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Option<InventoryState>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `state`, as if it had been saved earlier.
    pub fn with_state(state: InventoryState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail with an I/O error.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// The last saved state, if any.
    pub fn saved(&self) -> Option<&InventoryState> {
        self.state.as_ref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> InventoryState {
        self.state.clone().unwrap_or_default()
    }

    fn save(&mut self, state: &InventoryState) -> Result<()> {
        if self.fail_saves {
            return Err(EstoqueError::Io(io::Error::other("save disabled")));
        }
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }
}
