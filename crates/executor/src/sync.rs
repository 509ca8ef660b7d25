use crate::Executor;

/// Runs every task on the calling thread, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl Executor for SyncExecutor {
    fn map<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_runs_in_input_order() {
        let seen = Mutex::new(Vec::new());
        let results = SyncExecutor.map(vec!["a", "b", "c"], |s| {
            seen.lock().unwrap().push(s);
            s.to_uppercase()
        });
        assert_eq!(results, vec!["A", "B", "C"]);
        assert_eq!(seen.into_inner().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parallelism_is_one() {
        assert_eq!(SyncExecutor.parallelism(), 1);
    }
}
