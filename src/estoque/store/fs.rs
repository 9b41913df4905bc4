use super::{normalize, DataStore};
use crate::error::{EstoqueError, Result};
use crate::model::InventoryState;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Inventory storage backed by a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataStore for FileStore {
    fn load(&self) -> InventoryState {
        load(&self.path)
    }

    fn save(&mut self, state: &InventoryState) -> Result<()> {
        save(&self.path, state)
    }
}

/// Read the state stored at `path`.
///
/// Returns `Ok(None)` when the file does not exist. Unlike [`load`], I/O and
/// parse failures are reported to the caller.
pub fn read(path: &Path) -> Result<Option<InventoryState>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(EstoqueError::Io)?;
    let state: InventoryState =
        serde_json::from_str(&content).map_err(EstoqueError::Serialization)?;
    Ok(Some(normalize(state)?))
}

/// Load the state stored at `path`, never failing.
///
/// A missing file yields a fresh seeded state without creating the file. A file
/// that cannot be read or parsed is logged and replaced (in memory only) by a
/// fresh seeded state.
///
/// The file is accepted or rejected as a whole: a single bad record (for
/// example a negative `quantidade`, or a product id leaving no room for the
/// next one) discards every product in it, and the next save overwrites the
/// file with the fresh state.
pub fn load(path: &Path) -> InventoryState {
    match read(path) {
        Ok(Some(state)) => {
            tracing::debug!(
                path = %path.display(),
                products = state.products.len(),
                "inventory loaded"
            );
            state
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "no inventory file, starting fresh");
            InventoryState::default()
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "inventory file is corrupted, starting with an empty inventory"
            );
            InventoryState::default()
        }
    }
}

/// Replace the file at `path` with `state`.
///
/// The JSON is written to a temporary sibling file which is then renamed over
/// the target, so an interrupted write leaves the previous file intact.
pub fn save(path: &Path, state: &InventoryState) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(EstoqueError::Io)?;
    }

    let content = serde_json::to_string_pretty(state).map_err(EstoqueError::Serialization)?;

    let tmp_file = dir.join(format!(".estoque-{}.tmp", Uuid::new_v4()));
    fs::write(&tmp_file, content).map_err(EstoqueError::Io)?;
    if let Err(e) = fs::rename(&tmp_file, path) {
        let _ = fs::remove_file(&tmp_file);
        return Err(EstoqueError::Io(e));
    }

    tracing::debug!(
        path = %path.display(),
        products = state.products.len(),
        next_id = state.next_id,
        "inventory saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, DEFAULT_CATEGORIES, MISSING_DESCRIPTION};
    use tempfile::TempDir;

    fn sample_state() -> InventoryState {
        let mut state = InventoryState::default();
        state.products.insert(
            1,
            Product::new(1, "Cable-X", "Cables", "1m USB cable", 50, 9.90),
        );
        state.products.insert(
            3,
            Product::new(3, "Fone Bluetooth", "Fones de ouvido", "", 4, 129.5),
        );
        state.categories.insert("Cables".to_string());
        state.next_id = 4;
        state
    }

    #[test]
    fn missing_file_yields_seeded_state_without_creating_it() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");

        let state = load(&path);
        assert_eq!(state, InventoryState::default());
        assert!(!path.exists());
    }

    #[test]
    fn corrupted_file_yields_seeded_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        fs::write(&path, "{ this is not json").unwrap();

        let state = load(&path);
        assert!(state.products.is_empty());
        assert_eq!(state.next_id, 1);
        assert_eq!(state.categories.len(), DEFAULT_CATEGORIES.len());
        assert!(read(&path).is_err());
    }

    #[test]
    fn wrong_shape_counts_as_corrupted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        fs::write(&path, r#"{"proximo_id": "three", "produtos": []}"#).unwrap();

        assert_eq!(load(&path), InventoryState::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        let state = sample_state();

        save(&path, &state).unwrap();
        assert_eq!(load(&path), state);
    }

    #[test]
    fn empty_state_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");

        save(&path, &InventoryState::default()).unwrap();
        assert_eq!(load(&path), InventoryState::default());
    }

    #[test]
    fn saved_file_uses_documented_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        save(&path, &sample_state()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains('\n'), "output should be pretty-printed");

        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["proximo_id"], 4);
        assert_eq!(json["produtos"]["3"]["nome"], "Fone Bluetooth");

        let categories: Vec<&str> = json["categorias"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c.as_str().unwrap())
            .collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn legacy_records_get_placeholder_description() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        fs::write(
            &path,
            r#"{
                "proximo_id": 2,
                "categorias": ["Capas"],
                "produtos": {
                    "1": {"id": 1, "nome": "Capa iPhone", "categoria": "Capas",
                          "quantidade": 5, "preco": 39.9}
                }
            }"#,
        )
        .unwrap();

        let state = load(&path);
        assert_eq!(state.products[&1].description, MISSING_DESCRIPTION);
        assert_eq!(state.categories.len(), 1);
        assert_eq!(state.next_id, 2);
    }

    #[test]
    fn one_negative_quantity_discards_the_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        fs::write(
            &path,
            r#"{
                "proximo_id": 3,
                "produtos": {
                    "1": {"id": 1, "nome": "Capa", "categoria": "Capas",
                          "descricao": "", "quantidade": 5, "preco": 10},
                    "2": {"id": 2, "nome": "Cabo", "categoria": "Cabos",
                          "descricao": "", "quantidade": -1, "preco": 10}
                }
            }"#,
        )
        .unwrap();

        assert!(read(&path).is_err());
        assert_eq!(load(&path), InventoryState::default());
    }

    #[test]
    fn product_at_max_id_counts_as_corrupted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        fs::write(
            &path,
            r#"{
                "proximo_id": 1,
                "produtos": {
                    "18446744073709551615": {"id": 18446744073709551615, "nome": "Capa",
                        "categoria": "Capas", "descricao": "", "quantidade": 1, "preco": 1}
                }
            }"#,
        )
        .unwrap();

        assert!(matches!(read(&path), Err(EstoqueError::IdsExhausted)));
        assert_eq!(load(&path), InventoryState::default());
    }

    #[test]
    fn absent_fields_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(load(&path), InventoryState::default());
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("estoque.json");

        save(&path, &sample_state()).unwrap();
        save(&path, &InventoryState::default()).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
        assert_eq!(load(&path), InventoryState::default());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("estoque.json");

        let mut store = FileStore::new(&path);
        store.save(&sample_state()).unwrap();
        assert!(path.exists());
        assert_eq!(store.load(), sample_state());
    }
}
