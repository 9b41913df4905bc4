use crate::error::{EstoqueError, Result};
use crate::model::InventoryState;

/// All categories, sorted alphabetically.
pub fn list(state: &InventoryState) -> Vec<String> {
    state.categories.iter().cloned().collect()
}

/// Register a category, trimming surrounding whitespace.
///
/// Returns the stored name. Adding a category that already exists is a no-op.
pub fn add(state: &mut InventoryState, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EstoqueError::Validation(
            "Category name cannot be empty".to_string(),
        ));
    }
    state.categories.insert(name.to_string());
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_CATEGORIES;

    #[test]
    fn added_category_is_trimmed_and_unique() {
        let mut state = InventoryState::default();
        assert_eq!(add(&mut state, "  Drones  ").unwrap(), "Drones");
        add(&mut state, "Drones").unwrap();

        let categories = list(&state);
        assert_eq!(categories.iter().filter(|c| *c == "Drones").count(), 1);
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len() + 1);
    }

    #[test]
    fn list_is_sorted() {
        let mut state = InventoryState::default();
        add(&mut state, "Acessórios").unwrap();

        let categories = list(&state);
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(categories[0], "Acessórios");
    }

    #[test]
    fn blank_category_is_rejected() {
        let mut state = InventoryState::default();
        assert!(matches!(
            add(&mut state, "   "),
            Err(EstoqueError::Validation(_))
        ));
        assert_eq!(list(&state).len(), DEFAULT_CATEGORIES.len());
    }
}
