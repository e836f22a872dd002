use std::time::{Duration, Instant};

use log::{debug, info, warn};
use uuid::Uuid;

use crate::BatchError;

/// Status of a step execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The step has been created but not executed yet.
    Starting,
    /// The step is running.
    Started,
    /// The step finished without error.
    Success,
    /// The tasklet returned an error.
    Failed,
}

/// Runtime details of a single step.
#[derive(Debug)]
pub struct StepExecution {
    /// Unique identifier for this step execution
    pub id: Uuid,
    /// Human-readable name for the step
    pub name: String,
    /// Current status of the step execution
    pub status: StepStatus,
    pub start_time: Instant,
    pub end_time: Instant,
    pub duration: Duration,
    /// Number of output lines written by the step
    pub write_count: usize,
}

impl StepExecution {
    pub fn new(name: &str) -> Self {
        let now = Instant::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: StepStatus::Starting,
            start_time: now,
            end_time: now,
            duration: Duration::default(),
            write_count: 0,
        }
    }
}

/// Tells a tasklet step whether to call the tasklet again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatStatus {
    /// The tasklet can continue to execute.
    Continuable,
    /// The tasklet has finished executing.
    Finished,
}

/// A single unit of work that does not follow the read/process/write pattern.
pub trait Tasklet {
    fn execute(&self, step_execution: &mut StepExecution) -> Result<RepeatStatus, BatchError>;
}

/// An independent, sequential phase of a job.
pub trait Step {
    /// Executes the step.
    ///
    /// # Returns
    /// - `Ok(())`: the step completed successfully
    /// - `Err(BatchError::Step)`: the step failed
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), BatchError>;

    fn get_name(&self) -> &str;
}

/// A step that delegates its work to a `Tasklet`.
pub struct TaskletStep<'a> {
    name: String,
    tasklet: &'a dyn Tasklet,
}

impl Step for TaskletStep<'_> {
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), BatchError> {
        let start_time = Instant::now();
        step_execution.status = StepStatus::Started;

        info!(
            "Start of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        loop {
            match self.tasklet.execute(step_execution) {
                Ok(RepeatStatus::Continuable) => {
                    debug!("Tasklet of step {} is continuable", step_execution.name);
                }
                Ok(RepeatStatus::Finished) => {
                    step_execution.status = StepStatus::Success;
                    break;
                }
                Err(error) => {
                    warn!("Error in step {}: {}", step_execution.name, error);
                    step_execution.status = StepStatus::Failed;
                    break;
                }
            }
        }

        info!(
            "End of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        step_execution.start_time = start_time;
        step_execution.end_time = Instant::now();
        step_execution.duration = start_time.elapsed();

        if step_execution.status == StepStatus::Success {
            Ok(())
        } else {
            Err(BatchError::Step(step_execution.name.clone()))
        }
    }

    fn get_name(&self) -> &str {
        &self.name
    }
}

pub struct TaskletBuilder<'a> {
    name: String,
    tasklet: Option<&'a dyn Tasklet>,
}

impl<'a> TaskletBuilder<'a> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tasklet: None,
        }
    }

    pub fn tasklet(mut self, tasklet: &'a dyn Tasklet) -> Self {
        self.tasklet = Some(tasklet);
        self
    }

    pub fn build(self) -> Result<TaskletStep<'a>, BatchError> {
        let tasklet = self.tasklet.ok_or_else(|| {
            BatchError::Configuration(format!("tasklet is required for step {}", self.name))
        })?;

        Ok(TaskletStep {
            name: self.name,
            tasklet,
        })
    }
}

/// Entry point for building steps.
///
/// ```
/// use library_batch::core::step::{RepeatStatus, Step, StepBuilder, StepExecution, Tasklet};
/// use library_batch::BatchError;
///
/// struct Noop;
///
/// impl Tasklet for Noop {
///     fn execute(&self, _: &mut StepExecution) -> Result<RepeatStatus, BatchError> {
///         Ok(RepeatStatus::Finished)
///     }
/// }
///
/// let step = StepBuilder::new("noop").tasklet(&Noop).build().unwrap();
/// let mut execution = StepExecution::new(step.get_name());
/// assert!(step.execute(&mut execution).is_ok());
/// ```
pub struct StepBuilder {
    name: String,
}

impl StepBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn tasklet<'a>(self, tasklet: &'a dyn Tasklet) -> TaskletBuilder<'a> {
        TaskletBuilder::new(&self.name).tasklet(tasklet)
    }
}
