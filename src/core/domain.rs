use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "books.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const DATA_FILE_ENV: &str = "LIBRARY_DATA_FILE";
const LOG_LEVEL_ENV: &str = "LIBRARY_LOG";

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable {
    // catalog key of the record
    fn id(&self) -> String;
}


// Configuration abstracts config options for the library console
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub autoload: bool,
    pub log_level: String,
}

impl Configuration {
    pub fn new(data_file: &Path) -> Self {
        Configuration {
            data_file: data_file.to_path_buf(),
            autoload: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_vars(env::var(DATA_FILE_ENV).ok(), env::var(LOG_LEVEL_ENV).ok())
    }

    fn from_vars(data_file: Option<String>, log_level: Option<String>) -> Self {
        let data_file = data_file
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        let mut config = Configuration::new(Path::new(data_file.trim()));
        if let Some(level) = log_level.filter(|s| !s.trim().is_empty()) {
            config.log_level = level.trim().to_lowercase();
        }
        config
    }

    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::WARN)
    }
}
