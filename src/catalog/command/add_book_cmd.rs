use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
    pub genre: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: i32, isbn: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            isbn: isbn.to_string(),
            genre: genre.to_string(),
        }
    }
    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.title.as_str(), self.author.as_str(), self.year, self.isbn.as_str(), self.genre.as_str())
    }
}


#[derive(Debug)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::{Command, CommandError};

    #[test]
    fn test_should_run_add_book() {
        let mut catalog = CatalogServiceImpl::new();
        let res = AddBookCommand::new(&mut catalog)
            .execute(AddBookCommandRequest::new("Three Comrades", "Remarque", 1936, "978-5-17-118366-3", "Novel"))
            .expect("should add book");
        assert_eq!("Three Comrades", res.book.title.as_str());
        assert_eq!(1, catalog.len());
    }

    #[test]
    fn test_should_report_validation_failure() {
        let mut catalog = CatalogServiceImpl::new();
        let res = AddBookCommand::new(&mut catalog)
            .execute(AddBookCommandRequest::new("Three Comrades", "Remarque", 1936, "abc", "Novel"));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
        assert!(catalog.is_empty());
    }
}
