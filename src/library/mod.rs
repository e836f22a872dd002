//! Library visitors domain: the records loaded from JSON, the queries run
//! over them and the text sections printed by the report job.

pub mod model;

pub mod query;

pub mod section;

pub use model::{Book, SmsMessage, Visitor};
pub use query::Category;
pub use section::ReportSection;

#[cfg(feature = "json")]
mod loader;

#[cfg(feature = "json")]
pub use loader::load_visitors;
