use std::path::{Path, PathBuf};
use crate::books::factory::create_book_repository_for;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct LoadCatalogCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> LoadCatalogCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub struct LoadCatalogCommandRequest {
    pub path: PathBuf,
}

impl LoadCatalogCommandRequest {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[derive(Debug)]
pub struct LoadCatalogCommandResponse {
    pub path: PathBuf,
    pub loaded: usize,
    pub skipped: usize,
}

impl Command<LoadCatalogCommandRequest, LoadCatalogCommandResponse> for LoadCatalogCommand<'_> {
    fn execute(&mut self, req: LoadCatalogCommandRequest) -> Result<LoadCatalogCommandResponse, CommandError> {
        let repository = create_book_repository_for(req.path.as_path());
        let summary = self.catalog_service.load(repository.as_ref())?;
        Ok(LoadCatalogCommandResponse { path: req.path, loaded: summary.loaded, skipped: summary.skipped })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::command::load_catalog_cmd::{LoadCatalogCommand, LoadCatalogCommandRequest};
    use crate::catalog::command::save_catalog_cmd::{SaveCatalogCommand, SaveCatalogCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::command::{Command, CommandError};

    #[test]
    fn test_should_run_load_catalog() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("books.bin");
        let mut source = CatalogServiceImpl::new();
        source.add_book(&BookEntity::new("Three Comrades", "Remarque", 1936, "978-5-17-118366-3", "Novel")).expect("should add book");
        SaveCatalogCommand::new(&source).execute(SaveCatalogCommandRequest::new(&path)).expect("should save");

        let mut target = CatalogServiceImpl::new();
        let res = LoadCatalogCommand::new(&mut target)
            .execute(LoadCatalogCommandRequest::new(&path)).expect("should load");
        assert_eq!(1, res.loaded);
        assert_eq!(0, res.skipped);
        assert_eq!(source.list_books(), target.list_books());
    }

    #[test]
    fn test_should_report_corrupt_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("books.json");
        fs::write(&path, "[]").expect("write");
        let mut catalog = CatalogServiceImpl::new();
        let res = LoadCatalogCommand::new(&mut catalog).execute(LoadCatalogCommandRequest::new(&path));
        assert!(matches!(res, Err(CommandError::Serialization { .. })));
    }
}
