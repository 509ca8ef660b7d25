use crate::Executor;
use rayon::prelude::*;

/// Spreads tasks over rayon's global work-stealing pool.
///
/// The pool size comes from rayon's global configuration (one thread per
/// core unless `RAYON_NUM_THREADS` or a `ThreadPoolBuilder` says otherwise).
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    num_threads: usize,
}

impl RayonExecutor {
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn map<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        items.into_par_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_results_keep_input_order() {
        let items: Vec<u32> = (0..200).collect();
        let results = RayonExecutor::new().map(items.clone(), |x| x * 3);
        assert_eq!(results, items.iter().map(|x| x * 3).collect::<Vec<_>>());
    }

    #[test]
    fn test_every_task_runs_once() {
        let counter = AtomicUsize::new(0);
        let _ = RayonExecutor::new().map((0..100).collect::<Vec<_>>(), |_: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(counter.load(Ordering::SeqCst), 100);
    }

    #[test]
    fn test_one_failing_task_leaves_the_rest() {
        let results = RayonExecutor::new().execute_all((0..20).collect::<Vec<i32>>(), |x| {
            if x == 7 { Err("seven") } else { Ok(x) }
        });
        let failures: Vec<_> = results.iter().filter(|r| r.is_err()).collect();
        assert_eq!(failures.len(), 1);
        assert!(matches!(results[7], Err(TaskError::Failed("seven"))));
    }

    #[test]
    fn test_parallelism_is_positive() {
        assert!(RayonExecutor::new().parallelism() > 0);
    }
}
