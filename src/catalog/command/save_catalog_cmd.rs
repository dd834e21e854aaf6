use std::path::{Path, PathBuf};
use crate::books::factory::create_book_repository_for;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SaveCatalogCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SaveCatalogCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct SaveCatalogCommandRequest {
    pub path: PathBuf,
}

impl SaveCatalogCommandRequest {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[derive(Debug)]
pub struct SaveCatalogCommandResponse {
    pub path: PathBuf,
    pub saved: usize,
}

impl Command<SaveCatalogCommandRequest, SaveCatalogCommandResponse> for SaveCatalogCommand<'_> {
    fn execute(&mut self, req: SaveCatalogCommandRequest) -> Result<SaveCatalogCommandResponse, CommandError> {
        let repository = create_book_repository_for(req.path.as_path());
        let saved = self.catalog_service.save(repository.as_ref())?;
        Ok(SaveCatalogCommandResponse { path: req.path, saved })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::save_catalog_cmd::{SaveCatalogCommand, SaveCatalogCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::{Command, CommandError};

    #[test]
    fn test_should_run_save_catalog() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("books.json");
        let mut catalog = CatalogServiceImpl::new();
        catalog.add_book(&BookEntity::new("Three Comrades", "Remarque", 1936, "978-5-17-118366-3", "Novel")).expect("should add book");

        let res = SaveCatalogCommand::new(&catalog)
            .execute(SaveCatalogCommandRequest::new(&path)).expect("should save");
        assert_eq!(1, res.saved);
        assert!(path.exists());
    }

    #[test]
    fn test_should_report_unwritable_path() {
        let dir = TempDir::new().expect("temp dir");
        let catalog = CatalogServiceImpl::new();
        let res = SaveCatalogCommand::new(&catalog)
            .execute(SaveCatalogCommandRequest::new(&dir.path().join("missing/books.json")));
        assert!(matches!(res, Err(CommandError::Io { .. })));
    }
}
