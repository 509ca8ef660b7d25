//! Batch executors for document conversion.
//!
//! An [`Executor`] applies one function to every item of a batch and hands
//! back the results in input order, once every item has finished. The
//! [`Executor::execute_all`] entry point isolates tasks from each other: an
//! error or a panic in one task becomes that task's result and never cancels
//! its siblings.
//!
//! - [`SyncExecutor`]: runs items one after another on the calling thread.
//! - [`RayonExecutor`]: rayon's work-stealing pool (feature: `rayon`).
//! - [`ExecutorImpl`]: picks one of the above at runtime.

mod sync;
#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;
pub use sync::SyncExecutor;

use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Why one task of a batch produced no value.
#[derive(Error, Debug)]
pub enum TaskError<E> {
    #[error("{0}")]
    Failed(E),
    #[error("task panicked: {0}")]
    Panicked(String),
}

pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item; results keep the order of `items`.
    fn map<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync;

    /// Number of tasks that can run at once.
    fn parallelism(&self) -> usize;

    fn name(&self) -> &'static str;

    /// Runs a fallible task per item, capturing failures and panics per task.
    fn execute_all<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, TaskError<E>>>
    where
        T: Send,
        R: Send,
        E: Send,
        F: Fn(T) -> Result<R, E> + Send + Sync,
    {
        log::debug!("{} running {} task(s)", self.name(), items.len());
        self.map(items, |item| isolate(|| f(item)))
    }
}

fn isolate<R, E>(task: impl FnOnce() -> Result<R, E>) -> Result<R, TaskError<E>> {
    match panic::catch_unwind(AssertUnwindSafe(task)) {
        Ok(result) => result.map_err(TaskError::Failed),
        Err(payload) => Err(TaskError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// An executor chosen at runtime.
///
/// `Executor` has generic methods and so cannot be a trait object; this enum
/// stands in for `dyn Executor`.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl Executor for ExecutorImpl {
    fn map<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.map(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.map(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            ExecutorImpl::Sync(SyncExecutor)
        }
    }
}
