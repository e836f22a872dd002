use std::fmt::Display;

use log::info;

use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    BatchError,
};

/// Mirrors every item into the log at `info` level.
#[derive(Default)]
pub struct LoggerWriter {}

impl LoggerWriter {
    pub fn new() -> Self {
        Self {}
    }
}

impl<T> ItemWriter<T> for LoggerWriter
where
    T: Display,
{
    fn write(&self, items: &[T]) -> Result<(), BatchError> {
        items.iter().for_each(|item| info!("Record: {}", item));
        Ok(())
    }

    fn update(&self, is_first_item: bool) -> ItemWriterResult {
        if !is_first_item {
            info!("----");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_never_fails() {
        let writer = LoggerWriter::new();

        assert!(writer.write(&["Total visitors: 2"]).is_ok());
        assert!(ItemWriter::<&str>::update(&writer, false).is_ok());
    }
}
