//! Ordered execution of multi-call sequences.
//!
//! Cascading deletes and fan-out mappings are runs of dependent remote calls.
//! [`SequentialExecutor`] awaits them one at a time in the order they were
//! added. Completed steps are never undone.

use crate::core::domain::error::{SdpError, SdpResult};
use std::{future::Future, pin::Pin};
use tracing::{info, warn};

/// What to do when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure and report it; later steps never start.
    Abort,
    /// Log the failure and carry on with the next step.
    Continue,
}

type StepFuture<'a, T> = Pin<Box<dyn Future<Output = SdpResult<T>> + Send + 'a>>;

/// A labelled list of steps run strictly in sequence.
///
/// Steps are plain futures; nothing runs until [`run`](Self::run) awaits them.
pub struct SequentialExecutor<'a, T> {
    operation: String,
    policy: FailurePolicy,
    steps: Vec<(String, StepFuture<'a, T>)>,
}

impl<'a, T> SequentialExecutor<'a, T> {
    pub fn new(operation: impl Into<String>, policy: FailurePolicy) -> Self {
        Self {
            operation: operation.into(),
            policy,
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    pub fn step<F>(mut self, label: impl Into<String>, future: F) -> Self
    where
        F: Future<Output = SdpResult<T>> + Send + 'a,
    {
        self.push(label, future);
        self
    }

    /// Appends a step in place.
    pub fn push<F>(&mut self, label: impl Into<String>, future: F)
    where
        F: Future<Output = SdpResult<T>> + Send + 'a,
    {
        self.steps.push((label.into(), Box::pin(future)));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Awaits every step in order.
    ///
    /// Returns the outputs of the successful steps. Under
    /// [`FailurePolicy::Abort`] the first failure is returned as
    /// [`SdpError::StepFailed`].
    pub async fn run(self) -> SdpResult<Vec<T>> {
        let Self {
            operation,
            policy,
            steps,
        } = self;

        info!(%operation, steps = steps.len(), "starting sequence");
        let mut outputs = Vec::with_capacity(steps.len());
        for (step, future) in steps {
            match future.await {
                Ok(output) => outputs.push(output),
                Err(source) => match policy {
                    FailurePolicy::Abort => {
                        warn!(%operation, %step, error = %source, "step failed, aborting");
                        return Err(SdpError::StepFailed {
                            operation,
                            step,
                            source: Box::new(source),
                        });
                    }
                    FailurePolicy::Continue => {
                        warn!(%operation, %step, error = %source, "step failed, continuing");
                    }
                },
            }
        }
        info!(%operation, completed = outputs.len(), "sequence finished");
        Ok(outputs)
    }
}
