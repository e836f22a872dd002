//! # Tasklet Module
//!
//! Tasklets are single-task operations that don't follow the chunk-oriented
//! processing pattern. Each report section runs as one tasklet.

pub mod report;
