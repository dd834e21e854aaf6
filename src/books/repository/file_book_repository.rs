use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bincode::Options;
use tracing::debug;

use crate::books::domain::model::BookEntity;
use crate::books::dto::CatalogDumpDto;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::{Repository, RepositoryStore};

#[derive(Debug)]
pub struct FileBookRepository {
    path: PathBuf,
    store: RepositoryStore,
}

impl FileBookRepository {
    pub fn new(path: &Path, store: RepositoryStore) -> Self {
        Self {
            path: path.to_path_buf(),
            store,
        }
    }
}

impl Repository<BookEntity> for FileBookRepository {
    fn store_all(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        write_dump(self.store, &mut writer, &CatalogDumpDto::new(entities))?;
        writer.flush()?;
        debug!("stored {} books to {}", entities.len(), self.path.display());
        Ok(entities.len())
    }

    fn fetch_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let bytes = fs::read(&self.path)?;
        decode_dump(self.store, &bytes)?.into_books()
    }
}

impl BookRepository for FileBookRepository {
    fn location(&self) -> &Path {
        self.path.as_path()
    }
}

pub(crate) fn write_dump<W: Write>(store: RepositoryStore, writer: W, dump: &CatalogDumpDto) -> LibraryResult<()> {
    match store {
        RepositoryStore::JsonFile => serde_json::to_writer_pretty(writer, dump)?,
        RepositoryStore::BinaryFile => bincode::serialize_into(writer, dump)?,
    }
    Ok(())
}

// Binary dumps are decoded with the same layout serialize_into writes, but
// no length prefix may claim more bytes than the file holds.
pub(crate) fn decode_dump(store: RepositoryStore, bytes: &[u8]) -> LibraryResult<CatalogDumpDto> {
    let dump: CatalogDumpDto = match store {
        RepositoryStore::JsonFile => serde_json::from_slice(bytes)?,
        RepositoryStore::BinaryFile => bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .allow_trailing_bytes()
            .with_limit(bytes.len() as u64)
            .deserialize(bytes)?,
    };
    Ok(dump)
}
