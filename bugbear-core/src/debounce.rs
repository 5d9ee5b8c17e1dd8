//! Cancellable last-write-wins timer
//!
//! Explicit debounce handle: scheduling a new action cancels whatever was
//! pending, so only the timer armed by the final event in a burst ever
//! fires. Cancellation rides on [`CancellationToken`], checked against the
//! delay in a `select!`.

use std::future::Future;
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Arm the timer with `action`, cancelling any pending one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending.lock().replace(token.clone()) {
            previous.cancel();
        }

        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => action.await,
            }
        });
    }

    /// Drop the pending timer without replacing it
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().take() {
            pending.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn only_the_last_scheduled_action_fires() {
        let debouncer = Debouncer::new(Duration::from_millis(800));
        let fired = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        for i in 1..=5 {
            let fired = Arc::clone(&fired);
            let last = Arc::clone(&last);
            debouncer.schedule(async move {
                fired.fetch_add(1, Ordering::SeqCst);
                last.store(i, Ordering::SeqCst);
            });
            tokio::task::yield_now().await;
        }

        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_action() {
        let debouncer = Debouncer::new(Duration::from_millis(800));
        let fired = Arc::new(AtomicUsize::new(0));

        {
            let fired = Arc::clone(&fired);
            debouncer.schedule(async move {
                fired.fetch_add(1, Ordering::SeqCst);
            });
        }
        tokio::task::yield_now().await;
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
