use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use library_console::books::domain::model::BookEntity;
use library_console::books::factory::create_book_repository_for;
use library_console::catalog::domain::CatalogService;
use library_console::catalog::domain::service::CatalogServiceImpl;
use library_console::core::domain::{Configuration, DEFAULT_DATA_FILE};
use library_console::utils::logs::setup_tracing;

// Writes a small sample catalog to try the console with.
#[derive(Parser, Debug)]
#[command(name = "generate-books")]
struct CliArgs {
    #[arg(default_value = DEFAULT_DATA_FILE)]
    path: PathBuf,
}

fn sample_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new("Crime and Punishment", "F. M. Dostoevsky", 1866, "978-5-389-07478-7", "Novel"),
        BookEntity::new("The Master and Margarita", "M. A. Bulgakov", 1967, "978-5-389-07479-4", "Novel"),
        BookEntity::new("Clean Code", "Robert C. Martin", 2008, "978-0-13-235088-4", "Programming"),
        BookEntity::new("Introduction to Algorithms", "T. Cormen et al.", 2009, "978-5-907144-31-3", "Textbook"),
        BookEntity::new("Three Comrades", "Erich Maria Remarque", 1936, "978-5-17-118366-3", "Novel"),
    ]
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let config = Configuration::new(&cli_args.path);
    setup_tracing(config.tracing_level());

    let mut catalog = CatalogServiceImpl::new();
    for book in sample_books() {
        catalog.add_book(&book).with_context(|| format!("sample book {} rejected", book.isbn))?;
    }
    let repository = create_book_repository_for(&cli_args.path);
    catalog.save(repository.as_ref())
        .with_context(|| format!("could not write {}", cli_args.path.display()))?;
    println!("File created: {}", cli_args.path.display());
    Ok(())
}
