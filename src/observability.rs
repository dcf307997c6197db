//! Stage reporting for the demonstration pipeline.
//!
//! The sequence operations themselves never log. [`crate::demo::run`] reports one [`StageEvent`]
//! per composed call to an optional [`PipelineObserver`].

use std::fmt;
use std::sync::Arc;

/// A step of the demonstration pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Age filter over the full roster.
    Admit,
    /// Index-aware filter picking every n-th admitted person.
    Queue,
    /// Index-aware map producing numbered names.
    Name,
    /// Reduction summing all ages of the roster.
    TotalAge,
}

impl Stage {
    /// Short lowercase name used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admit => "admit",
            Self::Queue => "queue",
            Self::Name => "name",
            Self::TotalAge => "total_age",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cardinality of one pipeline stage.
///
/// For [`Stage::TotalAge`], `output_len` is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageEvent {
    pub stage: Stage,
    pub input_len: usize,
    pub output_len: usize,
}

/// Observer hook for pipeline stages.
pub trait PipelineObserver: Send + Sync {
    /// Called after a stage has produced its full output.
    fn on_stage(&self, _event: &StageEvent) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn PipelineObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn PipelineObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl PipelineObserver for CompositeObserver {
    fn on_stage(&self, event: &StageEvent) {
        for o in &self.observers {
            o.on_stage(event);
        }
    }
}

/// Logs stage events to stderr as plain lines.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl StdErrObserver {
    /// The line written for `event`, without the trailing newline.
    pub fn format_event(event: &StageEvent) -> String {
        format!(
            "[pipeline][{}] in={} out={}",
            event.stage, event.input_len, event.output_len
        )
    }
}

impl PipelineObserver for StdErrObserver {
    fn on_stage(&self, event: &StageEvent) {
        eprintln!("{}", Self::format_event(event));
    }
}

/// Emits stage events as structured `tracing` events at `INFO` level.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage(&self, event: &StageEvent) {
        tracing::info!(
            stage = event.stage.as_str(),
            input_len = event.input_len,
            output_len = event.output_len,
            "pipeline stage finished"
        );
    }
}
