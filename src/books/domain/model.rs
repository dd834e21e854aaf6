use std::fmt;
use std::fmt::{Display, Formatter};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, PublicationKind};

pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 3000;

lazy_static! {
    // ISBN-10 or ISBN-13, hyphens allowed anywhere; no checksum
    static ref ISBN_PATTERN: Regex = Regex::new(r"^[0-9-]{10,17}$").expect("valid isbn pattern");
}

// BookEntity abstracts a single catalog record. Books are keyed by their
// normalized isbn, so two records that differ only in hyphenation collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    pub kind: PublicationKind,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
    pub genre: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, year: i32, isbn: &str, genre: &str) -> Self {
        Self {
            kind: PublicationKind::Book,
            title: title.to_string(),
            author: author.to_string(),
            year,
            isbn: isbn.to_string(),
            genre: genre.to_string(),
        }
    }

    /// Checks every constrained field, failing on the first bad one.
    pub fn validate(&self) -> LibraryResult<()> {
        if is_blank(&self.title) {
            return Err(LibraryError::validation("title must not be blank", Some("title".to_string())));
        }
        if is_blank(&self.author) {
            return Err(LibraryError::validation("author must not be blank", Some("author".to_string())));
        }
        if self.year < MIN_YEAR || self.year > MAX_YEAR {
            return Err(LibraryError::validation(
                format!("year {} is outside {}..={}", self.year, MIN_YEAR, MAX_YEAR).as_str(),
                Some("year".to_string())));
        }
        if !ISBN_PATTERN.is_match(&self.isbn) {
            return Err(LibraryError::validation(
                format!("isbn '{}' must be 10 to 17 digits or hyphens", self.isbn).as_str(),
                Some("isbn".to_string())));
        }
        Ok(())
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        normalize_isbn(&self.isbn)
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{title='{}', author='{}', year={}, isbn='{}', genre='{}'}}",
               self.kind, self.title, self.author, self.year, self.isbn, self.genre)
    }
}

/// Strips every hyphen; this is the only canonicalization applied to keys.
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.replace('-', "")
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
