use std::path::Path;
use crate::core::library::LibraryResult;

pub trait Repository<Entity> {
    // writes every entity in order, replacing what was stored before
    fn store_all(&self, entities: &[Entity]) -> LibraryResult<usize>;

    // reads back every stored entity in order
    fn fetch_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    JsonFile,
    BinaryFile,
}

impl RepositoryStore {
    // .bin and .ser files hold the compact binary encoding, anything else is json
    pub fn from_path(path: &Path) -> RepositoryStore {
        let ext = path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "bin" | "ser" => RepositoryStore::BinaryFile,
            _ => RepositoryStore::JsonFile,
        }
    }
}
