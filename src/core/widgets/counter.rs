//! Count-up animation for the home statistics.

use std::time::{Duration, Instant};

/// A number that climbs linearly from 0 to `target` once triggered.
///
/// Triggering is one-shot: scrolling the statistic out of view and back does
/// not restart the animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp {
    target: u32,
    duration: Duration,
    started_at: Option<Instant>,
}

impl CountUp {
    pub fn new(target: u32, duration: Duration) -> Self {
        Self {
            target,
            duration,
            started_at: None,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Start the animation at `now`. Returns false if it had already started.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    /// Still climbing at `now`.
    pub fn is_running(&self, now: Instant) -> bool {
        match self.started_at {
            Some(start) => now.saturating_duration_since(start) < self.duration,
            None => false,
        }
    }

    /// `floor(min(elapsed / duration, 1) * target)`; 0 before the trigger.
    pub fn value_at(&self, now: Instant) -> u32 {
        let Some(start) = self.started_at else {
            return 0;
        };
        if self.duration.is_zero() {
            return self.target;
        }
        let elapsed = now.saturating_duration_since(start);
        let progress = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        (progress * f64::from(self.target)).floor() as u32
    }
}
