//! Cancellable periodic task.

use std::time::Duration;

use tracing::trace;

use crate::error::PlaybackError;

/// A repeating timer that is polled rather than run on a thread.
///
/// While running, each call to [`poll`](Self::poll) reports how many whole
/// periods have elapsed since the previous due time. A stopped task never
/// fires, so cancelling it is just [`stop`](Self::stop).
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    period: Duration,
    next_due: Option<Duration>,
}

impl ScheduledTask {
    /// Creates a stopped task.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::ZeroPeriod`] if `period` is zero.
    pub fn new(period: Duration) -> Result<Self, PlaybackError> {
        if period.is_zero() {
            return Err(PlaybackError::ZeroPeriod { period });
        }
        Ok(Self {
            period,
            next_due: None,
        })
    }

    /// Returns the firing period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Starts the task; the first firing is one period after `now`.
    /// Restarting a running task resets its schedule.
    pub fn start(&mut self, now: Duration) {
        self.next_due = Some(now.saturating_add(self.period));
    }

    /// Stops the task. Pending periods are discarded.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Returns `true` between `start` and `stop`.
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of periods that elapsed up to `now`; 0 when stopped or not yet
    /// due.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }
        let late = (now - due).as_nanos() / self.period.as_nanos();
        let fired = u32::try_from(late.saturating_add(1)).unwrap_or(u32::MAX);
        self.next_due = Some(due.saturating_add(self.period.saturating_mul(fired)));
        trace!(fired, "scheduled task fired");
        fired
    }
}
