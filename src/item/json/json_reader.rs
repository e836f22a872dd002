use std::{
    cell::RefCell,
    collections::VecDeque,
    fs::File,
    io::{BufReader, Read},
    marker::PhantomData,
    path::Path,
};

use log::debug;
use serde::de::DeserializeOwned;

use crate::{
    core::item::{ItemReader, ItemReaderResult},
    BatchError,
};

/// Reads items from a JSON array document.
///
/// The document is parsed on the first call to `read`; the underlying
/// source is dropped right after, so a file handle is released whether
/// parsing succeeds or not. Items are then handed out in document order.
pub struct JsonItemReader<R, T> {
    source: RefCell<Option<BufReader<R>>>,
    items: RefCell<VecDeque<T>>,
}

impl<R: Read, T: DeserializeOwned> JsonItemReader<R, T> {
    fn new(rdr: R, capacity: usize) -> Self {
        Self {
            source: RefCell::new(Some(BufReader::with_capacity(capacity, rdr))),
            items: RefCell::new(VecDeque::new()),
        }
    }

    fn parse(&self, source: BufReader<R>) -> Result<(), BatchError> {
        let items: Vec<T> = serde_json::from_reader(source)
            .map_err(|error| BatchError::ItemReader(error.to_string()))?;

        debug!("Parsed JSON array of {} items", items.len());
        self.items.borrow_mut().extend(items);
        Ok(())
    }
}

impl<R: Read, T: DeserializeOwned> ItemReader<T> for JsonItemReader<R, T> {
    fn read(&self) -> ItemReaderResult<T> {
        // Take the source out so it is dropped once parsed
        let source = self.source.borrow_mut().take();
        if let Some(source) = source {
            self.parse(source)?;
        }

        Ok(self.items.borrow_mut().pop_front())
    }
}

pub struct JsonItemReaderBuilder<T> {
    _pd: PhantomData<T>,
    capacity: usize,
}

impl<T: DeserializeOwned> Default for JsonItemReaderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> JsonItemReaderBuilder<T> {
    pub fn new() -> JsonItemReaderBuilder<T> {
        Self {
            _pd: PhantomData,
            capacity: 8 * 1024,
        }
    }

    pub fn capacity(mut self, capacity: usize) -> JsonItemReaderBuilder<T> {
        self.capacity = capacity;
        self
    }

    pub fn from_reader<R: Read>(self, rdr: R) -> JsonItemReader<R, T> {
        JsonItemReader::new(rdr, self.capacity)
    }

    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<JsonItemReader<File, T>, BatchError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| {
            BatchError::ItemReader(format!("unable to open {}: {}", path.display(), error))
        })?;

        Ok(JsonItemReader::new(file, self.capacity))
    }
}
