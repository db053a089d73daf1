use crate::domain::ports::{Fired, Scheduler};
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Deferred actions backed by tokio timers.
///
/// Each action is a task that sleeps, then sends its message to the owning
/// view's channel. Dropping the scheduler aborts whatever is still pending.
/// Outside a tokio runtime nothing can be spawned, so `schedule` logs and
/// drops the action.
pub struct TokioScheduler<M: Send + 'static> {
    tx: UnboundedSender<Fired<M>>,
    tasks: HashMap<String, (u64, JoinHandle<()>)>,
    next_generation: u64,
}

impl<M: Send + 'static> TokioScheduler<M> {
    pub fn new(tx: UnboundedSender<Fired<M>>) -> Self {
        Self {
            tx,
            tasks: HashMap::new(),
            next_generation: 0,
        }
    }
}

impl<M: Send + 'static> Scheduler<M> for TokioScheduler<M> {
    fn schedule(&mut self, key: &str, delay: Duration, msg: M) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                tracing::warn!(key, error = %e, "no tokio runtime; deferred action dropped");
                return;
            }
        };

        self.next_generation += 1;
        let generation = self.next_generation;
        let tx = self.tx.clone();
        let fired = Fired {
            key: key.to_string(),
            generation,
            msg,
        };
        let task = handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the view was torn down.
            if let Err(e) = tx.send(fired) {
                tracing::trace!(key = %e.0.key, "deferred action dropped after teardown");
            }
        });

        if let Some((_, previous)) = self.tasks.insert(key.to_string(), (generation, task)) {
            previous.abort();
        }
        tracing::debug!(key, generation, delay_ms = delay.as_millis() as u64, "deferred action scheduled");
    }

    fn accept(&mut self, fired: Fired<M>) -> Option<M> {
        match self.tasks.get(&fired.key) {
            Some((generation, _)) if *generation == fired.generation => {
                self.tasks.remove(&fired.key);
                Some(fired.msg)
            }
            _ => {
                tracing::debug!(key = %fired.key, generation = fired.generation, "stale deferred action ignored");
                None
            }
        }
    }

    fn cancel_all(&mut self) {
        let cancelled = self.tasks.len();
        for (_, (_, task)) in self.tasks.drain() {
            task.abort();
        }
        if cancelled > 0 {
            tracing::debug!(cancelled, "pending deferred actions cancelled");
        }
    }

    fn pending(&self) -> usize {
        self.tasks.len()
    }
}

impl<M: Send + 'static> Drop for TokioScheduler<M> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
