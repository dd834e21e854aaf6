use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult, PublicationKind};
use crate::utils::date::serializer;

pub const CATALOG_FORMAT_VERSION: u32 = 1;

// BookRecordDto is the persisted shape of a single record. Fields are copied
// as-is, validation happens when the record is added back to a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecordDto {
    pub kind: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
    pub genre: String,
}

// CatalogDumpDto is the versioned envelope written by a book repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDumpDto {
    pub format_version: u32,
    #[serde(with = "serializer")]
    pub saved_at: NaiveDateTime,
    pub books: Vec<BookRecordDto>,
}

impl CatalogDumpDto {
    pub fn new(books: &[BookEntity]) -> Self {
        Self {
            format_version: CATALOG_FORMAT_VERSION,
            saved_at: Utc::now().naive_utc(),
            books: books.iter().map(BookRecordDto::from).collect(),
        }
    }

    pub fn into_books(self) -> LibraryResult<Vec<BookEntity>> {
        if self.format_version != CATALOG_FORMAT_VERSION {
            return Err(LibraryError::serialization(
                format!("unsupported catalog format version {}, expected {}",
                        self.format_version, CATALOG_FORMAT_VERSION).as_str()));
        }
        Ok(self.books.iter().map(BookEntity::from).collect())
    }
}

impl From<&BookEntity> for BookRecordDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            kind: other.kind.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            isbn: other.isbn.to_string(),
            genre: other.genre.to_string(),
        }
    }
}

impl From<&BookRecordDto> for BookEntity {
    fn from(other: &BookRecordDto) -> Self {
        Self {
            kind: PublicationKind::from(other.kind.to_string()),
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.year,
            isbn: other.isbn.to_string(),
            genre: other.genre.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::{CatalogDumpDto, CATALOG_FORMAT_VERSION};
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_build_dump() {
        let books = vec![
            BookEntity::new("Three Comrades", "Erich Maria Remarque", 1936, "978-5-17-118366-3", "Novel"),
            BookEntity::new("Clean Code", "Robert C. Martin", 2008, "978-0-13-235088-4", "Programming"),
        ];
        let dump = CatalogDumpDto::new(&books);
        assert_eq!(CATALOG_FORMAT_VERSION, dump.format_version);
        assert_eq!("Book", dump.books[0].kind.as_str());
        assert_eq!(books, dump.into_books().expect("should convert"));
    }

    #[test]
    fn test_should_reject_unknown_version() {
        let mut dump = CatalogDumpDto::new(&[]);
        dump.format_version = 7;
        assert!(matches!(dump.into_books(), Err(LibraryError::Serialization { .. })));
    }

    #[test]
    fn test_should_keep_saved_at_through_json() {
        let dump = CatalogDumpDto::new(&[]);
        let json = serde_json::to_string(&dump).expect("should serialize");
        let parsed: CatalogDumpDto = serde_json::from_str(&json).expect("should parse");
        assert_eq!(dump.saved_at.and_utc().timestamp_millis(), parsed.saved_at.and_utc().timestamp_millis());
    }
}
