pub mod service;

use crate::books::domain::model::{is_blank, BookEntity};
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;

pub trait CatalogService {
    fn add_book(&mut self, book: &BookEntity) -> LibraryResult<BookEntity>;
    // replaces the book stored under old_isbn, which may be re-keyed
    fn update_book(&mut self, old_isbn: &str, book: &BookEntity) -> LibraryResult<BookEntity>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookEntity>;
    fn list_books(&self) -> Vec<BookEntity>;
    fn search_books(&self, query: &BookQuery) -> Vec<BookEntity>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn save(&self, repository: &dyn BookRepository) -> LibraryResult<usize>;
    fn load(&mut self, repository: &dyn BookRepository) -> LibraryResult<LoadSummary>;
}

/// Conjunctive search filters. Blank strings are treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub isbn: Option<String>,
}

impl BookQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn genre(mut self, genre: &str) -> Self {
        self.genre = Some(genre.to_string());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn isbn(mut self, isbn: &str) -> Self {
        self.isbn = Some(isbn.to_string());
        self
    }

    pub fn matches(&self, book: &BookEntity) -> bool {
        contains_ignore_case(&book.title, self.title.as_deref())
            && contains_ignore_case(&book.author, self.author.as_deref())
            && contains_ignore_case(&book.genre, self.genre.as_deref())
            && self.year.map_or(true, |year| book.year == year)
            && active(self.isbn.as_deref()).map_or(true, |part| book.isbn.contains(part))
    }
}

fn active(filter: Option<&str>) -> Option<&str> {
    filter.filter(|s| !is_blank(s))
}

fn contains_ignore_case(field: &str, filter: Option<&str>) -> bool {
    match active(filter) {
        Some(part) => field.to_lowercase().contains(&part.to_lowercase()),
        None => true,
    }
}

// LoadSummary reports what a best-effort load kept and dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}
