use crate::error::BatchError;

/// Result of a single `ItemReader::read` call.
///
/// - `Ok(Some(item))`: an item was read
/// - `Ok(None)`: the source is exhausted
/// - `Err(BatchError)`: the source could not be read
pub type ItemReaderResult<I> = Result<Option<I>, BatchError>;

/// Result of an `ItemWriter` operation.
pub type ItemWriterResult = Result<(), BatchError>;

/// Retrieves input items one at a time.
pub trait ItemReader<I> {
    fn read(&self) -> ItemReaderResult<I>;
}

/// Writes a batch of items to some destination.
///
/// Only `write` is mandatory; the lifecycle hooks default to no-ops.
pub trait ItemWriter<O> {
    fn write(&self, items: &[O]) -> ItemWriterResult;

    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    /// Called before each batch so the writer can emit a separator.
    fn update(&self, _is_first_item: bool) -> ItemWriterResult {
        Ok(())
    }

    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}

/// Drains a reader into memory, stopping at the first error.
pub fn read_all<I>(reader: &dyn ItemReader<I>) -> Result<Vec<I>, BatchError> {
    let mut items = Vec::new();

    while let Some(item) = reader.read()? {
        items.push(item);
    }

    Ok(items)
}
