use crate::books::domain::model::BookEntity;
use crate::catalog::domain::{BookQuery, CatalogService};
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// An empty request lists the whole catalog.
#[derive(Debug, Default)]
pub struct SearchBooksCommandRequest {
    pub query: BookQuery,
}

impl SearchBooksCommandRequest {
    pub fn new(query: BookQuery) -> Self {
        Self {
            query,
        }
    }

    pub fn all() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books,
        }
    }
}

impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'_> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = if req.query == BookQuery::default() {
            self.catalog_service.list_books()
        } else {
            self.catalog_service.search_books(&req.query)
        };
        Ok(SearchBooksCommandResponse::new(books))
    }
}
