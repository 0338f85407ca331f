//! Task inbox
//!
//! Runs futures on the tokio runtime and hands their outputs back to the frame loop.

use std::future::Future;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Spawns background work and collects its results
///
/// The owner drains completed results with [`Inbox::try_next`] once per frame.
/// Dropping the inbox drops the receiver, so results that arrive after the
/// owning view is gone are discarded.
#[derive(Debug)]
pub struct Inbox<T> {
    runtime: Handle,
    tx: UnboundedSender<T>,
    rx: UnboundedReceiver<T>,
    in_flight: usize,
}

impl<T: Send + 'static> Inbox<T> {
    /// Create an inbox that spawns onto the given runtime
    pub fn new(runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Run a future in the background; its output is delivered to this inbox
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.in_flight += 1;
        self.runtime.spawn(async move {
            // receiver gone means the owner was torn down
            let _ = tx.send(future.await);
        });
    }

    /// Take one completed result without blocking
    pub fn try_next(&mut self) -> Option<T> {
        let item = self.rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(item)
    }

    /// Wait for the next completed result
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn next(&mut self) -> Option<T> {
        if self.in_flight == 0 {
            return None;
        }
        let item = self.rx.recv().await?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(item)
    }

    /// Number of spawned futures whose result has not been taken yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_results_arrive_in_completion_order() {
        let mut inbox = Inbox::new(Handle::current());
        inbox.spawn(async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            "slow"
        });
        inbox.spawn(async { "fast" });
        assert_eq!(inbox.in_flight(), 2);

        assert_eq!(inbox.next().await, Some("fast"));
        assert_eq!(inbox.next().await, Some("slow"));
        assert_eq!(inbox.in_flight(), 0);
        assert_eq!(inbox.next().await, None);
    }

    #[tokio::test]
    async fn test_try_next_is_non_blocking() {
        let mut inbox: Inbox<u8> = Inbox::new(Handle::current());
        assert!(inbox.try_next().is_none());
        inbox.spawn(async { 7 });
        tokio::task::yield_now().await;
        let value = match inbox.try_next() {
            Some(v) => v,
            None => inbox.next().await.unwrap(),
        };
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_dropped_inbox_discards_late_results() {
        let mut inbox = Inbox::new(Handle::current());
        let (done_tx, done_rx) = tokio::sync::oneshot::channel();
        inbox.spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let _ = done_tx.send(());
            1u8
        });
        drop(inbox);
        // the task still completes without panicking
        done_rx.await.unwrap();
    }
}
