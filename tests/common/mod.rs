#![allow(dead_code)]

pub mod mocks;

pub use mocks::MockOutput;

use std::path::PathBuf;

/// Absolute path of a file under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Report printed for `tests/data/visitors.json`.
pub const EXPECTED_REPORT: &str = r#"Task 1: Visitors and their count:
Ada Lovelace
Alan Turing
Grace Hopper
Total visitors: 3

Task 2: Unique books and their count:
"Emma" by Jane Austen (1815)
"Frankenstein" by Mary Shelley (1818)
"Moby-Dick" by Herman Melville (1851)
"Persuasion" by Jane Austen (1817)
"Dracula" by Bram Stoker (1897)
Total unique books: 5

Task 3: Sorted book list by publication year:
Emma (1815)
Persuasion (1817)
Frankenstein (1818)
Frankenstein (1818)
Moby-Dick (1851)
Dracula (1897)

Task 4: Checking if any visitor has a book by Jane Austen:
Does any visitor have a book by Jane Austen? true

Task 5: Maximum number of favorite books:
Maximum number of favorite books: 4

Task 6: SMS messages for newsletter subscribers:
Category: fine
Phone: +44 1, Message: fine
Category: read more
Phone: +44 2, Message: read more
"#;
