#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Library visitors report

 Loads a JSON list of library visitors and prints six independent reports
 about them and their favorite books, run as a small batch job.

 ## Core Concepts

- **Job:** the entire report run, composed of one `Step` per report section.
- **Step:** an independent, sequential phase of a job. Report steps delegate to a `Tasklet`.
- **ItemReader:** retrieves input one item at a time (here: visitors from a JSON array).
- **ItemWriter:** receives a batch of output items (here: the lines of one report section).

 ## Reports

| **Section**    | **Content**                                                      |
|----------------|------------------------------------------------------------------|
| Roster         | every visitor's full name and the visitor count                   |
| UniqueBooks    | distinct favorite books and their count                           |
| BooksByYear    | every favorite book, repeats included, sorted by publishing year  |
| AuthorCheck    | whether anyone likes a book by the configured author              |
| MaxFavorites   | the longest favorites list                                        |
| SubscriberSms  | SMS messages for subscribers, grouped by reading category         |

 ## Features

| **Feature** | **Description**                                       |
|-------------|-------------------------------------------------------|
| json        | Enables the JSON `ItemReader` and the visitor loader  |
| logger      | Enables a logger `ItemWriter`                         |
| full        | Enables all available features                        |

 ## Getting Started

```rust
use library_batch::{
    config::ReportConfig,
    item::text::TextItemWriterBuilder,
    library::{Book, Visitor},
    report::run_report_job,
    BatchError,
};

fn main() -> Result<(), BatchError> {
    let visitors = vec![Visitor {
        name: "Elizabeth".to_string(),
        surname: "Bennet".to_string(),
        phone: "+44 7700 900000".to_string(),
        favorite_books: vec![Book {
            name: "Pride and Prejudice".to_string(),
            author: "Jane Austen".to_string(),
            publishing_year: 1813,
        }],
        subscribed: true,
    }];

    let writer = TextItemWriterBuilder::new().from_writer(Vec::new());
    let execution = run_report_job(&visitors, &writer, &ReportConfig::default())?;
    assert_eq!(execution.step_executions.len(), 6);

    let output = String::from_utf8(writer.into_inner()?).unwrap();
    assert!(output.contains("Does any visitor have a book by Jane Austen? true"));
    assert!(output.contains("Phone: +44 7700 900000, Message: fine"));

    Ok(())
}
```
 */

/// Report settings
pub mod config;

/// Core module for batch operations
pub mod core;

/// Error types for batch operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Set of item readers / writers
pub mod item;

/// Visitors, books and the report queries
pub mod library;

/// The report job
pub mod report;

/// Tasklet implementations
pub mod tasklet;
