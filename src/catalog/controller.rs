use std::io;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use crate::books::domain::model::{is_blank, BookEntity};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::load_catalog_cmd::{LoadCatalogCommand, LoadCatalogCommandRequest};
use crate::catalog::command::save_catalog_cmd::{SaveCatalogCommand, SaveCatalogCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::{BookQuery, CatalogService};
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;

const MENU: &str = "\
=== Library ===
1) Add book
2) Edit book
3) List books
4) Search books
5) Save to file
6) Load from file
0) Exit
Choose an option: ";

enum ShellError {
    Command(CommandError),
    Io(io::Error),
    EndOfInput,
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::Io(err)
    }
}

type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// Numbered-menu console over any line reader and writer. Failures of a
/// single command are printed and the session goes on; only a broken output
/// stream ends `run` with an error.
pub struct ConsoleController<R: BufRead, W: Write> {
    config: Configuration,
    catalog_service: Box<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleController<R, W> {
    pub fn new(config: Configuration, catalog_service: Box<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            config,
            catalog_service,
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogService {
        self.catalog_service.as_ref()
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;
            let cmd = match self.read_line()? {
                Some(line) => line.trim().to_string(),
                None => break,
            };
            debug!("menu command {:?}", cmd);
            match self.dispatch(cmd.as_str()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ShellError::Command(err)) => writeln!(self.output, "Error: {}", err)?,
                Err(ShellError::Io(err)) => return Err(err),
                Err(ShellError::EndOfInput) => break,
            }
        }
        self.output.flush()
    }

    fn dispatch(&mut self, cmd: &str) -> ShellResult<Flow> {
        match cmd {
            "1" => self.add_book()?,
            "2" => self.edit_book()?,
            "3" => self.list_books()?,
            "4" => self.search_books()?,
            "5" => self.save_catalog()?,
            "6" => self.load_catalog()?,
            "0" => {
                writeln!(self.output, "Bye.")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(self.output, "Unknown command")?,
        }
        Ok(Flow::Continue)
    }

    fn add_book(&mut self) -> ShellResult<()> {
        let title = self.prompt("Title: ")?;
        let author = self.prompt("Author: ")?;
        let year = self.prompt("Year: ")?;
        let isbn = self.prompt("ISBN: ")?;
        let genre = self.prompt("Genre: ")?;

        let req = AddBookCommandRequest::new(&title, &author, parse_year(&year)?, &isbn, &genre);
        AddBookCommand::new(self.catalog_service.as_mut()).execute(req)?;
        writeln!(self.output, "Book added.")?;
        Ok(())
    }

    fn edit_book(&mut self) -> ShellResult<()> {
        let old_isbn = self.prompt("ISBN to edit: ")?;
        let old = GetBookCommand::new(self.catalog_service.as_ref())
            .execute(GetBookCommandRequest::new(&old_isbn))?.book;
        writeln!(self.output, "Current: {}", old)?;

        let title = self.prompt_or_default(&format!("Title ({}): ", old.title), &old.title)?;
        let author = self.prompt_or_default(&format!("Author ({}): ", old.author), &old.author)?;
        let year = self.prompt_or_default(&format!("Year ({}): ", old.year), &old.year.to_string())?;
        let isbn = self.prompt_or_default(&format!("ISBN ({}): ", old.isbn), &old.isbn)?;
        let genre = self.prompt_or_default(&format!("Genre ({}): ", old.genre), &old.genre)?;

        let book = BookEntity::new(&title, &author, parse_year(&year)?, &isbn, &genre);
        UpdateBookCommand::new(self.catalog_service.as_mut())
            .execute(UpdateBookCommandRequest::new(&old_isbn, &book))?;
        writeln!(self.output, "Book updated.")?;
        Ok(())
    }

    fn list_books(&mut self) -> ShellResult<()> {
        let res = SearchBooksCommand::new(self.catalog_service.as_ref())
            .execute(SearchBooksCommandRequest::all())?;
        self.print_books(&res.books, "No books.")
    }

    fn search_books(&mut self) -> ShellResult<()> {
        let title = self.prompt("Title contains: ")?;
        let author = self.prompt("Author contains: ")?;
        let genre = self.prompt("Genre contains: ")?;
        let year = self.prompt("Year (=): ")?;
        let isbn = self.prompt("ISBN contains: ")?;

        let query = BookQuery {
            title: Some(title),
            author: Some(author),
            genre: Some(genre),
            year: if is_blank(&year) { None } else { Some(parse_year(&year)?) },
            isbn: Some(isbn),
        };
        let res = SearchBooksCommand::new(self.catalog_service.as_ref())
            .execute(SearchBooksCommandRequest::new(query))?;
        self.print_books(&res.books, "Nothing found.")
    }

    fn save_catalog(&mut self) -> ShellResult<()> {
        let path = self.prompt_path()?;
        let res = SaveCatalogCommand::new(self.catalog_service.as_ref())
            .execute(SaveCatalogCommandRequest::new(&path))?;
        writeln!(self.output, "Saved {} books to {}.", res.saved, res.path.display())?;
        Ok(())
    }

    fn load_catalog(&mut self) -> ShellResult<()> {
        let path = self.prompt_path()?;
        let res = LoadCatalogCommand::new(self.catalog_service.as_mut())
            .execute(LoadCatalogCommandRequest::new(&path))?;
        writeln!(self.output, "Loaded {} books from {}, skipped {}.", res.loaded, res.path.display(), res.skipped)?;
        Ok(())
    }

    fn print_books(&mut self, books: &[BookEntity], empty_message: &str) -> ShellResult<()> {
        if books.is_empty() {
            writeln!(self.output, "{}", empty_message)?;
        }
        for book in books {
            writeln!(self.output, "{}", book)?;
        }
        Ok(())
    }

    fn prompt_path(&mut self) -> ShellResult<PathBuf> {
        let default = self.config.data_file.clone();
        let answer = self.prompt(&format!("File [{}]: ", default.display()))?;
        if is_blank(&answer) {
            Ok(default)
        } else {
            Ok(PathBuf::from(answer.trim()))
        }
    }

    fn prompt(&mut self, label: &str) -> ShellResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()?.ok_or(ShellError::EndOfInput)
    }

    // a blank answer keeps the current value
    fn prompt_or_default(&mut self, label: &str, default: &str) -> ShellResult<String> {
        let answer = self.prompt(label)?;
        if is_blank(&answer) {
            Ok(default.to_string())
        } else {
            Ok(answer.trim().to_string())
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

fn parse_year(s: &str) -> Result<i32, CommandError> {
    s.trim().parse::<i32>().map_err(|_| CommandError::validation(
        format!("year '{}' is not a whole number", s.trim()).as_str(), Some("year".to_string())))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;
    use crate::books::domain::model::BookEntity;
    use crate::catalog::controller::ConsoleController;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::domain::Configuration;

    fn run_script(config: Configuration, catalog: CatalogServiceImpl, script: &str) -> (String, Vec<BookEntity>) {
        let mut output = Vec::new();
        let books = {
            let mut controller = ConsoleController::new(config, Box::new(catalog), Cursor::new(script.to_string()), &mut output);
            controller.run().expect("session should end cleanly");
            controller.catalog().list_books()
        };
        (String::from_utf8(output).expect("utf8 output"), books)
    }

    fn config() -> Configuration {
        Configuration::new(Path::new("books.json"))
    }

    fn seeded() -> CatalogServiceImpl {
        let mut catalog = CatalogServiceImpl::new();
        catalog.add_book(&BookEntity::new("Crime and Punishment", "Dostoevsky", 1866, "978-5-389-07478-7", "Novel")).expect("should add book");
        catalog.add_book(&BookEntity::new("Clean Code", "Robert C. Martin", 2008, "978-0-13-235088-4", "Programming")).expect("should add book");
        catalog
    }

    #[test]
    fn test_should_add_book_and_exit() {
        let script = "1\nThree Comrades\nRemarque\n1936\n978-5-17-118366-3\nNovel\n0\n";
        let (out, books) = run_script(config(), CatalogServiceImpl::new(), script);
        assert!(out.contains("Book added."));
        assert!(out.ends_with("Bye.\n"));
        assert_eq!(vec![BookEntity::new("Three Comrades", "Remarque", 1936, "978-5-17-118366-3", "Novel")], books);
    }

    #[test]
    fn test_should_report_errors_and_keep_going() {
        let script = "1\nT\nA\nnineteen\n1234567890\n\n1\n\nA\n2000\n1234567890\n\n7\n3\n";
        let (out, books) = run_script(config(), CatalogServiceImpl::new(), script);
        assert!(out.contains("Error: invalid input: year 'nineteen' is not a whole number"));
        assert!(out.contains("Error: invalid input: title must not be blank"));
        assert!(out.contains("Unknown command"));
        assert!(out.contains("No books."));
        assert!(books.is_empty());
    }

    #[test]
    fn test_should_edit_book_keeping_blank_fields() {
        let script = "2\n9785389074787\n\n\n\n\nClassic\n3\n0\n";
        let (out, books) = run_script(config(), seeded(), script);
        assert!(out.contains("Current: Book{title='Crime and Punishment'"));
        assert!(out.contains("Book updated."));
        assert_eq!("Clean Code", books[0].title.as_str());
        assert_eq!(BookEntity::new("Crime and Punishment", "Dostoevsky", 1866, "978-5-389-07478-7", "Classic"), books[1]);
    }

    #[test]
    fn test_should_report_missing_book_on_edit() {
        let (out, books) = run_script(config(), seeded(), "2\n000-000-0000\n0\n");
        assert!(out.contains("Error: not found: no book with isbn 000-000-0000"));
        assert_eq!(2, books.len());
    }

    #[test]
    fn test_should_search_books() {
        let (out, _) = run_script(config(), seeded(), "4\n\ndost\n\n\n\n4\n\n\n\n1999\n\n0\n");
        assert!(out.contains("Book{title='Crime and Punishment', author='Dostoevsky'"));
        assert!(!out.contains("Book{title='Clean Code'"));
        assert!(out.contains("Nothing found."));
    }

    #[test]
    fn test_should_save_and_load_through_default_file() {
        let dir = TempDir::new().expect("temp dir");
        let config = Configuration::new(&dir.path().join("books.json"));

        let (out, _) = run_script(config.clone(), seeded(), "5\n\n0\n");
        assert!(out.contains("Saved 2 books to"));

        let (out, books) = run_script(config.clone(), CatalogServiceImpl::new(), "6\n\n6\n\n0\n");
        assert!(out.contains("Loaded 2 books from"));
        assert!(out.contains("skipped 2."));
        assert_eq!(seeded().list_books(), books);
    }

    #[test]
    fn test_should_report_load_of_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let script = format!("6\n{}\n0\n", dir.path().join("missing.json").display());
        let (out, _) = run_script(config(), CatalogServiceImpl::new(), script.as_str());
        assert!(out.contains("Error: file error:"));
        assert!(out.ends_with("Bye.\n"));
    }

    #[test]
    fn test_should_stop_at_end_of_input() {
        let (out, books) = run_script(config(), seeded(), "1\nHalf a book\n");
        assert!(!out.contains("Bye."));
        assert_eq!(2, books.len());
    }
}
