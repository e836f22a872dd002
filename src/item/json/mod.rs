/// JSON support for reading structured data.
///
/// `JsonItemReader` parses a JSON array from any source implementing
/// `Read` (or from a file path) with `serde_json`, then yields its elements
/// one at a time through the `ItemReader` trait.
///
/// # Examples
///
/// ```
/// use library_batch::item::json::json_reader::JsonItemReaderBuilder;
/// use library_batch::core::item::ItemReader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Debug, Deserialize)]
/// struct Book {
///     name: String,
///     author: String,
///     #[serde(rename = "publishingYear")]
///     publishing_year: i32,
/// }
///
/// let json_data = r#"[
///   { "name": "Emma", "author": "Jane Austen", "publishingYear": 1815 },
///   { "name": "Dune", "author": "Frank Herbert", "publishingYear": 1965 }
/// ]"#;
///
/// let reader = JsonItemReaderBuilder::<Book>::new()
///     .capacity(1024)
///     .from_reader(Cursor::new(json_data));
///
/// let mut books = Vec::new();
/// while let Some(book) = reader.read().unwrap() {
///     books.push(book);
/// }
///
/// assert_eq!(books.len(), 2);
/// assert_eq!(books[0].author, "Jane Austen");
/// assert_eq!(books[1].publishing_year, 1965);
/// ```
pub mod json_reader;

pub use json_reader::{JsonItemReader, JsonItemReaderBuilder};
