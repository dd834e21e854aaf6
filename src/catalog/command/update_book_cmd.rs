use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> UpdateBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct UpdateBookCommandRequest {
    pub old_isbn: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub isbn: String,
    pub genre: String,
}

impl UpdateBookCommandRequest {
    pub fn new(old_isbn: &str, book: &BookEntity) -> Self {
        Self {
            old_isbn: old_isbn.to_string(),
            title: book.title.to_string(),
            author: book.author.to_string(),
            year: book.year,
            isbn: book.isbn.to_string(),
            genre: book.genre.to_string(),
        }
    }
    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.title.as_str(), self.author.as_str(), self.year, self.isbn.as_str(), self.genre.as_str())
    }
}


#[derive(Debug)]
pub struct UpdateBookCommandResponse {
    pub book: BookEntity,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand<'_> {
    fn execute(&mut self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(req.old_isbn.as_str(), &book)
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
