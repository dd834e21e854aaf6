use std::path::Path;
use crate::books::repository::BookRepository;
use crate::books::repository::file_book_repository::FileBookRepository;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(store: RepositoryStore, path: &Path) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::JsonFile => {
            Box::new(FileBookRepository::new(path, RepositoryStore::JsonFile))
        }
        RepositoryStore::BinaryFile => {
            Box::new(FileBookRepository::new(path, RepositoryStore::BinaryFile))
        }
    }
}

// picks the encoding from the file extension
pub fn create_book_repository_for(path: &Path) -> Box<dyn BookRepository> {
    create_book_repository(RepositoryStore::from_path(path), path)
}
