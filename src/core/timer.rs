//! # Scoped Timers
//!
//! Recurring and one-shot timers as tokio tasks that report back through the
//! same `mpsc` channel the event loop drains. Each timer is owned by a
//! `TimerGuard`; dropping the guard aborts the task, so a timer can never
//! outlive the view that scheduled it.
//!
//! Must be called from within a tokio runtime.

use std::sync::mpsc::Sender;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::AbortHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep};

use crate::core::action::Action;

/// Aborts its task when dropped.
#[derive(Debug)]
pub struct TimerGuard {
    name: &'static str,
    handle: AbortHandle,
}

impl TimerGuard {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("Cancelling timer '{}'", self.name);
        }
        self.handle.abort();
    }
}

/// Send `make_action()` every `period`, the first one after a full period.
///
/// The task ends on its own once the receiving side is gone.
pub fn spawn_interval<F>(
    name: &'static str,
    period: Duration,
    tx: Sender<Action>,
    make_action: F,
) -> TimerGuard
where
    F: Fn() -> Action + Send + 'static,
{
    if period.is_zero() {
        warn!("Timer '{}' not started: period must be non-zero", name);
        let task = tokio::spawn(async {});
        return TimerGuard {
            name,
            handle: task.abort_handle(),
        };
    }
    debug!("Starting timer '{}' every {:?}", name, period);
    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if tx.send(make_action()).is_err() {
                debug!("Timer '{}' stopped: receiver dropped", name);
                return;
            }
        }
    });
    TimerGuard {
        name,
        handle: task.abort_handle(),
    }
}

/// Send `action` once after `delay`.
pub fn spawn_after(
    name: &'static str,
    delay: Duration,
    tx: Sender<Action>,
    action: Action,
) -> TimerGuard {
    debug!("Scheduling timer '{}' in {:?}", name, delay);
    let task = tokio::spawn(async move {
        sleep(delay).await;
        if tx.send(action).is_err() {
            debug!("Timer '{}' fired after receiver dropped", name);
        }
    });
    TimerGuard {
        name,
        handle: task.abort_handle(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn drain(rx: &mpsc::Receiver<Action>) -> Vec<Action> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_first_tick_after_full_period() {
        let (tx, rx) = mpsc::channel();
        let _guard = spawn_interval("slides", Duration::from_millis(5000), tx, || {
            Action::SlideTick { epoch: 1 }
        });

        sleep(Duration::from_millis(4999)).await;
        assert!(drain(&rx).is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&rx), vec![Action::SlideTick { epoch: 1 }]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticks_three_times_in_fifteen_seconds() {
        let (tx, rx) = mpsc::channel();
        let _guard = spawn_interval("slides", Duration::from_millis(5000), tx, || {
            Action::SlideTick { epoch: 0 }
        });

        sleep(Duration::from_millis(15001)).await;
        assert_eq!(drain(&rx).len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_guard_stops_interval() {
        let (tx, rx) = mpsc::channel();
        let guard = spawn_interval("slides", Duration::from_millis(5000), tx, || {
            Action::SlideTick { epoch: 0 }
        });

        sleep(Duration::from_millis(5001)).await;
        drop(guard);
        sleep(Duration::from_millis(20000)).await;
        assert_eq!(drain(&rx).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_interval_is_skipped() {
        let (tx, rx) = mpsc::channel();
        let guard = spawn_interval("slides", Duration::ZERO, tx, || Action::SlideTick {
            epoch: 0,
        });

        sleep(Duration::from_millis(10_000)).await;
        tokio::task::yield_now().await;
        assert!(guard.is_finished());
        assert!(drain(&rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_fires_once() {
        let (tx, rx) = mpsc::channel();
        let guard = spawn_after(
            "form-reset",
            Duration::from_millis(3000),
            tx,
            Action::ResetContactForm { epoch: 2 },
        );

        sleep(Duration::from_millis(2999)).await;
        assert!(drain(&rx).is_empty());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&rx), vec![Action::ResetContactForm { epoch: 2 }]);

        tokio::task::yield_now().await;
        assert!(guard.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_cancelled_before_firing() {
        let (tx, rx) = mpsc::channel();
        let guard = spawn_after(
            "form-reset",
            Duration::from_millis(3000),
            tx,
            Action::ResetContactForm { epoch: 0 },
        );
        assert_eq!(guard.name(), "form-reset");

        sleep(Duration::from_millis(1000)).await;
        drop(guard);
        sleep(Duration::from_millis(5000)).await;
        assert!(drain(&rx).is_empty());
    }
}
