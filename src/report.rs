use log::{info, warn};

use crate::{
    config::ReportConfig,
    core::{
        item::ItemWriter,
        job::{Job, JobBuilder, JobExecution},
        step::{Step, StepBuilder, TaskletStep},
    },
    library::{ReportSection, Visitor},
    tasklet::report::{ReportTasklet, ReportTaskletBuilder},
    BatchError,
};

/// Name of the job printing the visitors report.
pub const REPORT_JOB_NAME: &str = "library-visitors-report";

/// Runs the six report sections, in order, as one job.
///
/// Every section reads the same `visitors` slice; `writer` receives each
/// section as one batch of lines. The writer is opened before the first
/// section and closed after the last one, even when a section fails.
pub fn run_report_job(
    visitors: &[Visitor],
    writer: &dyn ItemWriter<String>,
    config: &ReportConfig,
) -> Result<JobExecution, BatchError> {
    let tasklets = ReportSection::ALL
        .iter()
        .enumerate()
        .map(|(index, section)| {
            ReportTaskletBuilder::new()
                .visitors(visitors)
                .section(*section)
                .writer(writer)
                .config(config)
                .first(index == 0)
                .build()
        })
        .collect::<Result<Vec<ReportTasklet>, BatchError>>()?;

    let steps = tasklets
        .iter()
        .map(|tasklet| {
            StepBuilder::new(tasklet.section().step_name())
                .tasklet(tasklet)
                .build()
        })
        .collect::<Result<Vec<TaskletStep>, BatchError>>()?;

    let job = steps
        .iter()
        .fold(
            JobBuilder::new().name(REPORT_JOB_NAME.to_string()),
            |builder, step| builder.next(step as &dyn Step),
        )
        .build();

    info!("Reporting on {} visitors", visitors.len());
    writer.open()?;
    let result = job.run();

    if let Err(error) = writer.close() {
        warn!("Non-fatal error: {}", error);
    }

    result
}
