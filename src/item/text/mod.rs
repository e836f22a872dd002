/// Plain-text output, one item per line.
///
/// ```
/// use library_batch::core::item::ItemWriter;
/// use library_batch::item::text::TextItemWriterBuilder;
///
/// let writer = TextItemWriterBuilder::new().from_writer(Vec::new());
/// writer.write(&["Task 5: Maximum number of favorite books:", "Maximum number of favorite books: 3"]).unwrap();
///
/// let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
/// assert!(output.ends_with("books: 3\n"));
/// ```
pub mod text_writer;

pub use text_writer::{TextItemWriter, TextItemWriterBuilder};
