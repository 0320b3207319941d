use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::Customer;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const INDEX_FILENAME: &str = "customers.json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| unavailable(&self.root, e))?;
        }
        Ok(())
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> RosterError {
    RosterError::StoreUnavailable(format!("{}: {}", path.display(), err))
}

impl StorageBackend for FsBackend {
    fn load_index(&self) -> Result<HashMap<Uuid, Customer>> {
        let data_file = self.index_path();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&data_file).map_err(|e| unavailable(&data_file, e))?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        let index: HashMap<Uuid, Customer> = serde_json::from_str(&content)?;
        Ok(index)
    }

    fn save_index(&self, index: &HashMap<Uuid, Customer>) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.index_path();
        let content = serde_json::to_string_pretty(index)?;

        // Write to a sibling temp file, then rename over the index
        let tmp_file = self.root.join(format!(".customers-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(|e| unavailable(&tmp_file, e))?;
        fs::rename(&tmp_file, &data_file).map_err(|e| unavailable(&data_file, e))?;

        Ok(())
    }
}
