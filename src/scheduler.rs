//! Cancelable deferred tasks keyed by target name.
//!
//! `/cycle` parts a channel and re-joins it a moment later. The re-join is
//! scheduled here under the channel's folded name so that a later `/join`
//! or `/part` of the same channel can supersede it.

use crate::casemap::irc_to_lower;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

type Pending = Arc<Mutex<HashMap<String, (u64, AbortHandle)>>>;

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Pending,
    next_id: AtomicU64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay`, replacing any task pending under `key`.
    ///
    /// Outside a tokio runtime there is nothing to wait on, so the task runs
    /// immediately.
    pub fn schedule<F>(&self, key: &str, delay: Duration, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let key = irc_to_lower(key);

        let Ok(handle) = Handle::try_current() else {
            warn!(key = %key, "no async runtime, running deferred task now");
            self.cancel(&key);
            task();
            return;
        };

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let pending = Arc::clone(&self.pending);
        let task_key = key.clone();

        // Hold the lock across spawn so the task cannot finish and clean up
        // before its own entry is recorded.
        let mut guard = self.pending.lock();
        let join = handle.spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut pending = pending.lock();
                if pending.get(&task_key).is_some_and(|(owner, _)| *owner == id) {
                    pending.remove(&task_key);
                }
            }
            debug!(key = %task_key, "running deferred task");
            task();
        });

        if let Some((_, previous)) = guard.insert(key.clone(), (id, join.abort_handle())) {
            debug!(key = %key, "superseding pending deferred task");
            previous.abort();
        }
    }

    /// Abort the task pending under `key`. Returns whether one existed.
    pub fn cancel(&self, key: &str) -> bool {
        match self.pending.lock().remove(&irc_to_lower(key)) {
            Some((_, handle)) => {
                debug!(key = %key, "cancelled deferred task");
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.pending.lock().contains_key(&irc_to_lower(key))
    }

    /// Number of tasks still waiting to run.
    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Box<dyn FnOnce() + Send>) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let make = move || {
            let c = Arc::clone(&c);
            Box::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
            }) as Box<dyn FnOnce() + Send>
        };
        (count, make)
    }

    #[test]
    fn runs_immediately_without_runtime() {
        let scheduler = Scheduler::new();
        let (count, make) = counter();
        scheduler.schedule("#a", Duration::from_secs(10), make());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn runs_after_delay() {
        let scheduler = Scheduler::new();
        let (count, make) = counter();
        scheduler.schedule("#a", Duration::from_secs(1), make());
        assert!(scheduler.is_pending("#A"));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_supersedes() {
        let scheduler = Scheduler::new();
        let (count, make) = counter();
        scheduler.schedule("#a", Duration::from_secs(1), make());
        scheduler.schedule("#A", Duration::from_secs(1), make());
        assert_eq!(scheduler.pending(), 1);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_run() {
        let scheduler = Scheduler::new();
        let (count, make) = counter();
        scheduler.schedule("#a", Duration::from_secs(1), make());
        assert!(scheduler.cancel("#a"));
        assert!(!scheduler.cancel("#a"));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
