pub mod file_book_repository;

use std::path::Path;
use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;


pub trait BookRepository: Repository<BookEntity> {
    // where the books are kept, used in log lines and shell messages
    fn location(&self) -> &Path;
}
