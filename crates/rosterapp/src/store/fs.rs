use super::fs_backend::FsBackend;
use super::record_store::CustomerStore;
use std::path::PathBuf;

/// Production store: records kept as JSON under a data directory.
pub type FileStore = CustomerStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        CustomerStore::with_backend(FsBackend::new(root))
    }
}
