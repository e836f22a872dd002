use log::info;

use crate::{
    config::ReportConfig,
    core::item::read_all,
    item::json::JsonItemReaderBuilder,
    BatchError,
};

use super::model::Visitor;

/// Loads every visitor from the JSON document named by the config.
///
/// Any failure (missing file, invalid JSON, missing field) aborts the load;
/// no partial collection is returned.
pub fn load_visitors(config: &ReportConfig) -> Result<Vec<Visitor>, BatchError> {
    let reader = JsonItemReaderBuilder::<Visitor>::new()
        .capacity(config.get_reader_capacity())
        .from_path(config.get_input_path())?;

    let visitors = read_all::<Visitor>(&reader)?;

    info!(
        "Loaded {} visitors from {}",
        visitors.len(),
        config.get_input_path().display()
    );
    Ok(visitors)
}
