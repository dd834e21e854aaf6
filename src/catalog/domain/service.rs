use tracing::{debug, info, warn};
use crate::books::domain::model::{normalize_isbn, BookEntity};
use crate::books::repository::BookRepository;
use crate::catalog::domain::{BookQuery, CatalogService, LoadSummary};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// Books are kept in insertion order and looked up with a linear scan on the
// normalized isbn. Every stored book has passed BookEntity::validate.
#[derive(Debug, Default)]
pub struct CatalogServiceImpl {
    books: Vec<BookEntity>,
}

impl CatalogServiceImpl {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.books.iter().position(|b| b.id() == key)
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookEntity) -> LibraryResult<BookEntity> {
        book.validate()?;
        let key = book.id();
        if self.position(&key).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("a book with isbn {} already exists", book.isbn).as_str()));
        }
        self.books.push(book.clone());
        debug!("added book {}", key);
        Ok(book.clone())
    }

    fn update_book(&mut self, old_isbn: &str, book: &BookEntity) -> LibraryResult<BookEntity> {
        let old_key = normalize_isbn(old_isbn);
        let old_pos = self.position(&old_key).ok_or_else(|| LibraryError::not_found(
            format!("no book with isbn {}", old_isbn).as_str()))?;
        book.validate()?;
        let new_key = book.id();
        if new_key != old_key && self.position(&new_key).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("new isbn {} already exists", book.isbn).as_str()));
        }
        // the edited book moves to the end, same as a fresh insert
        self.books.remove(old_pos);
        self.books.push(book.clone());
        debug!("updated book {} -> {}", old_key, new_key);
        Ok(book.clone())
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookEntity> {
        self.position(&normalize_isbn(isbn))
            .map(|pos| self.books[pos].clone())
            .ok_or_else(|| LibraryError::not_found(format!("no book with isbn {}", isbn).as_str()))
    }

    fn list_books(&self) -> Vec<BookEntity> {
        self.books.clone()
    }

    fn search_books(&self, query: &BookQuery) -> Vec<BookEntity> {
        self.books.iter().filter(|b| query.matches(b)).cloned().collect()
    }

    fn len(&self) -> usize {
        self.books.len()
    }

    fn save(&self, repository: &dyn BookRepository) -> LibraryResult<usize> {
        let saved = repository.store_all(&self.books)?;
        info!("saved {} books to {}", saved, repository.location().display());
        Ok(saved)
    }

    fn load(&mut self, repository: &dyn BookRepository) -> LibraryResult<LoadSummary> {
        let books = repository.fetch_all()?;
        let mut summary = LoadSummary::default();
        for book in &books {
            match self.add_book(book) {
                Ok(_) => summary.loaded += 1,
                Err(err) => {
                    warn!("skipping book {:?} from {}: {}", book.isbn, repository.location().display(), err);
                    summary.skipped += 1;
                }
            }
        }
        info!("loaded {} books from {}, skipped {}",
              summary.loaded, repository.location().display(), summary.skipped);
        Ok(summary)
    }
}
