//! Task dispatcher: in-process fire-and-forget unit-of-work dispatch.
//!
//! Callers hand over a labeled future and return immediately; the worker
//! drains the queue and runs each unit on its own task. A failed or panicked
//! unit is logged and dropped; it never reaches the caller, and there is no
//! retry. The queue is in-memory only: work still queued or in flight at
//! shutdown is lost.

use futures::future::BoxFuture;
use std::future::Future;
use tokio::sync::mpsc;

struct Job {
    label: &'static str,
    work: BoxFuture<'static, anyhow::Result<()>>,
}

/// Handle for dispatching background units of work.
#[derive(Clone)]
pub struct TaskDispatcher {
    tx: mpsc::UnboundedSender<Job>,
    shutdown_tx: mpsc::Sender<()>,
}

impl TaskDispatcher {
    /// Create a dispatcher and spawn its worker loop.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        tokio::spawn(Self::worker_loop(rx, shutdown_rx));

        Self { tx, shutdown_tx }
    }

    /// Queue a unit of work. Never blocks and never fails the caller: when
    /// the dispatcher is already shut down the unit is dropped with a log.
    pub fn dispatch<F>(&self, label: &'static str, work: F)
    where
        F: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let job = Job {
            label,
            work: Box::pin(work),
        };
        if self.tx.send(job).is_err() {
            tracing::warn!(task = label, "Dispatcher stopped, dropping background task");
        }
    }

    async fn worker_loop(mut rx: mpsc::UnboundedReceiver<Job>, mut shutdown_rx: mpsc::Receiver<()>) {
        tracing::debug!("Background dispatcher started");
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    tracing::info!("Background dispatcher shutting down");
                    break;
                }
                job = rx.recv() => {
                    let Some(job) = job else { break };
                    // Each unit runs on its own task so a slow one never
                    // holds up the queue; errors stay inside the unit.
                    tokio::spawn(async move {
                        if let Err(e) = job.work.await {
                            tracing::warn!(task = job.label, error = %e, "Background task failed");
                        }
                    });
                }
            }
        }
        tracing::debug!("Background dispatcher stopped");
    }

    /// Signal the worker loop to stop accepting queued work. Returns
    /// immediately; in-flight units keep running until they finish.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

impl Default for TaskDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    async fn wait_until(check: impl Fn() -> bool) -> bool {
        for _ in 0..100 {
            if check() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        check()
    }

    #[tokio::test]
    async fn dispatched_work_runs() {
        let dispatcher = TaskDispatcher::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let c = counter.clone();
        dispatcher.dispatch("test", async move {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert!(wait_until(|| counter.load(Ordering::SeqCst) == 1).await);
    }

    #[tokio::test]
    async fn failed_work_does_not_poison_the_queue() {
        let dispatcher = TaskDispatcher::new();
        let counter = Arc::new(AtomicUsize::new(0));

        dispatcher.dispatch("failing", async move { Err(anyhow::anyhow!("boom")) });

        let c = counter.clone();
        dispatcher.dispatch("after-failure", async move {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        assert!(wait_until(|| counter.load(Ordering::SeqCst) == 1).await);
    }

    #[tokio::test]
    async fn dispatch_after_shutdown_is_dropped() {
        let dispatcher = TaskDispatcher::new();
        dispatcher.shutdown().await;
        // Give the worker loop a moment to exit
        tokio::time::sleep(Duration::from_millis(50)).await;

        let counter = Arc::new(AtomicUsize::new(0));
        let c = counter.clone();
        dispatcher.dispatch("late", async move {
            c.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
