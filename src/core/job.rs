use std::time::{Duration, Instant};

use log::info;
use uuid::Uuid;

use crate::BatchError;

use super::{
    build_name,
    step::{Step, StepExecution},
};

/// Type alias for job execution results.
///
/// A `JobResult` is a `Result` that contains either:
/// - A successful `JobExecution` with execution details
/// - A `BatchError` indicating what went wrong
type JobResult<T> = Result<T, BatchError>;

/// Represents a job that can be executed.
///
/// A job is a container for a sequence of steps that are executed in order.
/// The first failing step aborts the job.
pub trait Job {
    /// Runs the job and returns the result of the job execution.
    ///
    /// # Returns
    /// - `Ok(JobExecution)` when every step succeeds
    /// - `Err(BatchError::Step)` naming the first step that failed
    fn run(&self) -> JobResult<JobExecution>;
}

/// Represents the execution of a job.
///
/// A `JobExecution` contains timing information about a job run and the
/// execution details of each step, in execution order.
#[derive(Debug)]
pub struct JobExecution {
    /// The time when the job started executing
    pub start: Instant,
    /// The time when the job finished executing
    pub end: Instant,
    /// The total duration of the job execution
    pub duration: Duration,
    /// One entry per executed step
    pub step_executions: Vec<StepExecution>,
}

/// Represents an instance of a job.
///
/// A job instance is created through the `JobBuilder` and executed by calling
/// the `run` method. The steps are executed in the order they were added.
pub struct JobInstance<'a> {
    /// Unique identifier for this job instance
    id: Uuid,
    /// Human-readable name for the job
    name: String,
    /// Collection of steps that make up this job, in execution order
    steps: Vec<&'a dyn Step>,
}

impl JobInstance<'_> {
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl Job for JobInstance<'_> {
    fn run(&self) -> JobResult<JobExecution> {
        let start = Instant::now();

        info!("Start of job: {}, id: {}", self.name, self.id);

        let mut step_executions = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let mut step_execution = StepExecution::new(step.get_name());

            // Abort on the first failing step
            if step.execute(&mut step_execution).is_err() {
                return Err(BatchError::Step(step.get_name().to_owned()));
            }

            step_executions.push(step_execution);
        }

        info!("End of job: {}, id: {}", self.name, self.id);

        Ok(JobExecution {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            step_executions,
        })
    }
}

/// Builder for creating a job instance.
///
/// ```
/// use library_batch::core::job::{Job, JobBuilder};
/// use library_batch::core::step::{RepeatStatus, StepBuilder, StepExecution, Tasklet};
/// use library_batch::BatchError;
///
/// struct Hello;
///
/// impl Tasklet for Hello {
///     fn execute(&self, _: &mut StepExecution) -> Result<RepeatStatus, BatchError> {
///         Ok(RepeatStatus::Finished)
///     }
/// }
///
/// let first = StepBuilder::new("first").tasklet(&Hello).build().unwrap();
/// let second = StepBuilder::new("second").tasklet(&Hello).build().unwrap();
///
/// let job = JobBuilder::new()
///     .name("greetings".to_string())
///     .start(&first)
///     .next(&second)
///     .build();
///
/// let execution = job.run().unwrap();
/// assert_eq!(execution.step_executions.len(), 2);
/// ```
#[derive(Default)]
pub struct JobBuilder<'a> {
    /// Optional name for the job (generated randomly if not specified)
    name: Option<String>,
    /// Collection of steps to be executed, in order
    steps: Vec<&'a dyn Step>,
}

impl<'a> JobBuilder<'a> {
    pub fn new() -> Self {
        Self {
            name: None,
            steps: Vec::new(),
        }
    }

    pub fn name(mut self, name: String) -> JobBuilder<'a> {
        self.name = Some(name);
        self
    }

    /// Sets the first step of the job.
    ///
    /// Same as `next()`, reads better for the initial step.
    pub fn start(mut self, step: &'a dyn Step) -> JobBuilder<'a> {
        self.steps.push(step);
        self
    }

    pub fn next(mut self, step: &'a dyn Step) -> JobBuilder<'a> {
        self.steps.push(step);
        self
    }

    pub fn build(self) -> JobInstance<'a> {
        JobInstance {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_else(build_name),
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::Result;

    use crate::core::step::{RepeatStatus, StepBuilder, StepStatus, Tasklet};

    use super::*;

    struct RecordingTasklet<'a> {
        label: &'static str,
        journal: &'a RefCell<Vec<&'static str>>,
        fail: bool,
    }

    impl Tasklet for RecordingTasklet<'_> {
        fn execute(&self, _step_execution: &mut StepExecution) -> Result<RepeatStatus, BatchError> {
            self.journal.borrow_mut().push(self.label);
            if self.fail {
                Err(BatchError::ItemWriter("closed".to_string()))
            } else {
                Ok(RepeatStatus::Finished)
            }
        }
    }

    #[test]
    fn steps_run_in_declaration_order() -> Result<()> {
        let journal = RefCell::new(Vec::new());
        let first = RecordingTasklet {
            label: "first",
            journal: &journal,
            fail: false,
        };
        let second = RecordingTasklet {
            label: "second",
            journal: &journal,
            fail: false,
        };

        let step1 = StepBuilder::new("step-1").tasklet(&first).build()?;
        let step2 = StepBuilder::new("step-2").tasklet(&second).build()?;

        let job = JobBuilder::new()
            .name("ordered".to_string())
            .start(&step1)
            .next(&step2)
            .build();

        let execution = job.run()?;

        assert_eq!(*journal.borrow(), vec!["first", "second"]);
        assert_eq!(execution.step_executions.len(), 2);
        assert_eq!(execution.step_executions[0].name, "step-1");
        assert!(
            execution
                .step_executions
                .iter()
                .all(|s| s.status == StepStatus::Success)
        );
        Ok(())
    }

    #[test]
    fn failing_step_aborts_the_job() -> Result<()> {
        let journal = RefCell::new(Vec::new());
        let broken = RecordingTasklet {
            label: "broken",
            journal: &journal,
            fail: true,
        };
        let never = RecordingTasklet {
            label: "never",
            journal: &journal,
            fail: false,
        };

        let step1 = StepBuilder::new("broken-step").tasklet(&broken).build()?;
        let step2 = StepBuilder::new("never-step").tasklet(&never).build()?;

        let job = JobBuilder::new().start(&step1).next(&step2).build();

        let result = job.run();

        assert!(matches!(result, Err(BatchError::Step(name)) if name == "broken-step"));
        assert_eq!(*journal.borrow(), vec!["broken"]);
        Ok(())
    }

    #[test]
    fn unnamed_job_gets_a_generated_name() {
        let job = JobBuilder::new().build();

        assert_eq!(job.get_name().len(), 8);
    }
}
