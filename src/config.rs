use std::path::{Path, PathBuf};

/// Default location of the visitors document.
pub const DEFAULT_INPUT_PATH: &str = "data/books.json";

/// Author looked up by the author existence report.
pub const DEFAULT_TARGET_AUTHOR: &str = "Jane Austen";

/// Settings shared by the report job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    input_path: PathBuf,
    target_author: String,
    reader_capacity: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            target_author: DEFAULT_TARGET_AUTHOR.to_string(),
            reader_capacity: 8 * 1024,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path<P: AsRef<Path>>(mut self, input_path: P) -> Self {
        self.input_path = input_path.as_ref().to_path_buf();
        self
    }

    pub fn target_author(mut self, target_author: &str) -> Self {
        self.target_author = target_author.to_string();
        self
    }

    pub fn reader_capacity(mut self, reader_capacity: usize) -> Self {
        self.reader_capacity = reader_capacity;
        self
    }

    pub fn get_input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn get_target_author(&self) -> &str {
        &self.target_author
    }

    pub fn get_reader_capacity(&self) -> usize {
        self.reader_capacity
    }
}
