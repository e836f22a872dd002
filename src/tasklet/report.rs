//! # Report Tasklet
//!
//! Renders one section of the visitors report and hands its lines to an
//! `ItemWriter`. A report job is six of these tasklets, one per section,
//! all borrowing the same visitor collection.
//!
//! ```
//! use library_batch::config::ReportConfig;
//! use library_batch::core::step::{Step, StepBuilder, StepExecution};
//! use library_batch::item::text::TextItemWriterBuilder;
//! use library_batch::library::ReportSection;
//! use library_batch::tasklet::report::ReportTaskletBuilder;
//!
//! # fn example() -> Result<(), library_batch::BatchError> {
//! let writer = TextItemWriterBuilder::new().from_writer(Vec::new());
//! let config = ReportConfig::default();
//!
//! let tasklet = ReportTaskletBuilder::new()
//!     .visitors(&[])
//!     .section(ReportSection::MaxFavorites)
//!     .writer(&writer)
//!     .config(&config)
//!     .build()?;
//!
//! let step = StepBuilder::new("max-favorites").tasklet(&tasklet).build()?;
//! let mut step_execution = StepExecution::new("max-favorites");
//! step.execute(&mut step_execution)?;
//!
//! assert_eq!(step_execution.write_count, 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use log::debug;

use crate::{
    config::ReportConfig,
    core::{
        item::ItemWriter,
        step::{RepeatStatus, StepExecution, Tasklet},
    },
    library::{ReportSection, Visitor},
    BatchError,
};

pub struct ReportTasklet<'a> {
    visitors: &'a [Visitor],
    section: ReportSection,
    writer: &'a dyn ItemWriter<String>,
    config: &'a ReportConfig,
    is_first: bool,
}

impl ReportTasklet<'_> {
    pub fn section(&self) -> ReportSection {
        self.section
    }
}

impl Tasklet for ReportTasklet<'_> {
    fn execute(&self, step_execution: &mut StepExecution) -> Result<RepeatStatus, BatchError> {
        let lines = self.section.render(self.visitors, self.config);

        // The first section of the report gets no leading separator
        self.writer.update(self.is_first)?;
        self.writer.write(&lines)?;
        self.writer.flush()?;

        step_execution.write_count += lines.len();
        debug!(
            "Section {} wrote {} lines",
            self.section.step_name(),
            lines.len()
        );

        Ok(RepeatStatus::Finished)
    }
}

pub struct ReportTaskletBuilder<'a> {
    visitors: Option<&'a [Visitor]>,
    section: Option<ReportSection>,
    writer: Option<&'a dyn ItemWriter<String>>,
    config: Option<&'a ReportConfig>,
    is_first: bool,
}

impl Default for ReportTaskletBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ReportTaskletBuilder<'a> {
    pub fn new() -> Self {
        Self {
            visitors: None,
            section: None,
            writer: None,
            config: None,
            is_first: true,
        }
    }

    pub fn visitors(mut self, visitors: &'a [Visitor]) -> Self {
        self.visitors = Some(visitors);
        self
    }

    pub fn section(mut self, section: ReportSection) -> Self {
        self.section = Some(section);
        self
    }

    pub fn writer(mut self, writer: &'a dyn ItemWriter<String>) -> Self {
        self.writer = Some(writer);
        self
    }

    pub fn config(mut self, config: &'a ReportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether this section opens the report. Defaults to `true`.
    pub fn first(mut self, is_first: bool) -> Self {
        self.is_first = is_first;
        self
    }

    pub fn build(self) -> Result<ReportTasklet<'a>, BatchError> {
        let missing = |what: &str| BatchError::Configuration(format!("{what} is required"));

        Ok(ReportTasklet {
            visitors: self.visitors.ok_or_else(|| missing("visitors"))?,
            section: self.section.ok_or_else(|| missing("section"))?,
            writer: self.writer.ok_or_else(|| missing("writer"))?,
            config: self.config.ok_or_else(|| missing("config"))?,
            is_first: self.is_first,
        })
    }
}
