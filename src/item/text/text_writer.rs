use std::{
    cell::RefCell,
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    BatchError,
};

/// Writes each item on its own line.
///
/// Consecutive batches are separated by one blank line, emitted by
/// `update(false)` before every batch but the first.
pub struct TextItemWriter<W: Write> {
    stream: RefCell<BufWriter<W>>,
}

impl<W: Write> TextItemWriter<W> {
    fn new(wtr: W) -> Self {
        Self {
            stream: RefCell::new(BufWriter::new(wtr)),
        }
    }

    /// Flushes pending output and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, BatchError> {
        self.stream
            .into_inner()
            .into_inner()
            .map_err(|error| BatchError::ItemWriter(error.error().to_string()))
    }
}

impl<W: Write, T: Display> ItemWriter<T> for TextItemWriter<W> {
    fn write(&self, items: &[T]) -> ItemWriterResult {
        let mut stream = self.stream.borrow_mut();
        for item in items {
            writeln!(stream, "{item}").map_err(|error| BatchError::ItemWriter(error.to_string()))?;
        }
        Ok(())
    }

    fn flush(&self) -> ItemWriterResult {
        self.stream
            .borrow_mut()
            .flush()
            .map_err(|error| BatchError::ItemWriter(error.to_string()))
    }

    fn update(&self, is_first_item: bool) -> ItemWriterResult {
        if is_first_item {
            return Ok(());
        }
        writeln!(self.stream.borrow_mut()).map_err(|error| BatchError::ItemWriter(error.to_string()))
    }

    fn close(&self) -> ItemWriterResult {
        ItemWriter::<T>::flush(self)
    }
}

#[derive(Default)]
pub struct TextItemWriterBuilder {}

impl TextItemWriterBuilder {
    pub fn new() -> Self {
        Self {}
    }

    pub fn from_writer<W: Write>(self, wtr: W) -> TextItemWriter<W> {
        TextItemWriter::new(wtr)
    }

    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<TextItemWriter<File>, BatchError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|error| {
            BatchError::ItemWriter(format!("unable to create {}: {}", path.display(), error))
        })?;

        Ok(TextItemWriter::new(file))
    }
}
