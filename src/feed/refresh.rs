//! Per-item periodic refresh.
//!
//! Every displayed item owns a [`RefreshHandle`]. The handle's task runs on the
//! backend's tokio runtime and posts a [`RefreshTick`] to the UI thread once per
//! period. Dropping or cancelling the handle stops the task synchronously from the
//! owner's point of view: the token is flipped before the call returns, and any tick
//! already in flight is ignored by the UI because its target no longer exists.

use std::time::Duration;

use crossbeam_channel::Sender;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Default cadence; fine enough for the seconds unit.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Lower bound accepted from settings.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshTarget {
    /// A feed item, by presentation id
    Item(u64),
    /// The release-date line of the about window
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTick {
    pub target: RefreshTarget,
}

/// Spawns refresh tasks onto a runtime and routes their ticks to one channel.
#[derive(Clone)]
pub struct RefreshScheduler {
    runtime: Handle,
    tick_tx: Sender<RefreshTick>,
    period: Duration,
}

impl RefreshScheduler {
    pub fn new(runtime: Handle, tick_tx: Sender<RefreshTick>, period: Duration) -> Self {
        Self {
            runtime,
            tick_tx,
            period: period.max(MIN_REFRESH_INTERVAL),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking for `target` until the returned handle is cancelled or dropped.
    ///
    /// The first tick arrives one period after scheduling; owners compute the initial
    /// value themselves when they present the item.
    pub fn schedule(&self, target: RefreshTarget) -> RefreshHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tick_tx = self.tick_tx.clone();
        let period = self.period;

        let task = self.runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if tick_tx.send(RefreshTick { target }).is_err() {
                            break;
                        }
                    }
                }
            }
            trace!(?target, "refresh task stopped");
        });

        RefreshHandle {
            target,
            token,
            task,
        }
    }
}

/// Owner side of a refresh task. Cancels the task when dropped.
#[derive(Debug)]
pub struct RefreshHandle {
    target: RefreshTarget,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn target(&self) -> RefreshTarget {
        self.target
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The task has exited, either cancelled or because nobody receives ticks.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// A token observers can watch; cancelling the handle cancels it too.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn scheduler(period_ms: u64) -> (RefreshScheduler, crossbeam_channel::Receiver<RefreshTick>) {
        let (tx, rx) = unbounded();
        (
            RefreshScheduler::new(Handle::current(), tx, Duration::from_millis(period_ms)),
            rx,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (scheduler, rx) = scheduler(1000);
        let _handle = scheduler.schedule(RefreshTarget::Item(7));

        tokio::time::sleep(Duration::from_millis(3500)).await;

        let ticks: Vec<RefreshTick> = rx.try_iter().collect();
        assert_eq!(ticks.len(), 3);
        assert!(ticks.iter().all(|t| t.target == RefreshTarget::Item(7)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_ticks() {
        let (scheduler, rx) = scheduler(1000);
        let handle = scheduler.schedule(RefreshTarget::Item(1));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        handle.cancel();
        assert!(handle.is_cancelled());
        let before = rx.try_iter().count();
        assert_eq!(before, 1);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(rx.try_iter().count(), 0);
        assert!(handle.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (scheduler, rx) = scheduler(1000);
        let handle = scheduler.schedule(RefreshTarget::About);
        let token = handle.token();
        drop(handle);
        assert!(token.is_cancelled());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_exits_when_receiver_is_gone() {
        let (scheduler, rx) = scheduler(1000);
        let handle = scheduler.schedule(RefreshTarget::Item(3));
        drop(rx);

        assert!(!handle.is_finished());

        // The task notices the closed channel on its next tick and exits on its own.
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(handle.is_finished());
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn test_period_is_clamped() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let (tx, _rx) = unbounded();
        let scheduler = RefreshScheduler::new(runtime.handle().clone(), tx, Duration::from_millis(1));
        assert_eq!(scheduler.period(), MIN_REFRESH_INTERVAL);
    }
}
