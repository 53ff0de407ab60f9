// ── Auto-refresh handle ──
//
// The log view re-issues its (idempotent) query on a timer while the
// operator has auto-refresh enabled. The handle guarantees deterministic
// shutdown: `stop()` cancels the task, and dropping the handle cancels it
// too — a leaked timer is a defect, not a tolerated quirk.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A running periodic refresh task.
pub struct AutoRefresh {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl AutoRefresh {
    /// Spawn a task invoking `tick` every `every`, starting one interval
    /// from now. The callback owns its own error handling — a failed
    /// refresh is surfaced by the callback, never retried here.
    pub fn spawn<F, Fut>(every: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of `interval` fires immediately; consume it
            // so the first refresh lands one interval from now.
            interval.tick().await;

            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = interval.tick() => tick().await,
                }
            }
            debug!("auto-refresh stopped");
        });

        Self { cancel, handle }
    }

    /// Stop the timer. Idempotent; any in-flight tick finishes, no new
    /// tick starts.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Whether the task has fully wound down.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn ticks_at_the_configured_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let refresh = AutoRefresh::spawn(Duration::from_secs(5), move || {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_secs(16)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        refresh.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stop_prevents_further_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let refresh = AutoRefresh::spawn(Duration::from_secs(5), move || {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_secs(6)).await;
        refresh.stop();
        let after_stop = count.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_stop);
        assert!(refresh.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_the_task() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let refresh = AutoRefresh::spawn(Duration::from_secs(5), move || {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        drop(refresh);
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
