//! Explicit application state for an interactive viewer.

use std::time::Duration;

use tracing::debug;

use crate::clock::Clock;
use crate::cursor::YearCursor;
use crate::error::PlaybackError;
use crate::task::ScheduledTask;

/// State shared by the views of one presentation: the current year, the
/// autoplay timer and the selected group.
///
/// State changes only through the methods below.
#[derive(Debug)]
pub struct Session<C: Clock> {
    clock: C,
    cursor: YearCursor,
    autoplay: ScheduledTask,
    selection: Option<String>,
}

impl<C: Clock> Session<C> {
    /// Creates a paused session positioned at the first year.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::EmptyYears`] or
    /// [`PlaybackError::ZeroPeriod`].
    pub fn new(clock: C, years: Vec<i32>, period: Duration) -> Result<Self, PlaybackError> {
        let cursor = YearCursor::new(years)?;
        let autoplay = ScheduledTask::new(period)?;
        debug!(
            first = cursor.current(),
            n_years = cursor.years().len(),
            "session created"
        );
        Ok(Self {
            clock,
            cursor,
            autoplay,
            selection: None,
        })
    }

    /// Returns the current year.
    pub fn year(&self) -> i32 {
        self.cursor.current()
    }

    /// Returns the playable years in ascending order.
    pub fn years(&self) -> &[i32] {
        self.cursor.years()
    }

    /// Returns `true` while autoplay is running.
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Returns the selected group, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Returns the clock driving autoplay.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Starts autoplay if paused, pauses it if playing. Returns whether the
    /// session is now playing.
    pub fn toggle_play(&mut self) -> bool {
        if self.autoplay.is_running() {
            self.autoplay.stop();
        } else {
            self.autoplay.start(self.clock.now());
        }
        debug!(playing = self.is_playing(), "toggled autoplay");
        self.is_playing()
    }

    /// Jumps to `year` and stops autoplay.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::UnknownYear`]; the session is unchanged in
    /// that case.
    pub fn scrub(&mut self, year: i32) -> Result<(), PlaybackError> {
        self.cursor.seek(year)?;
        self.autoplay.stop();
        Ok(())
    }

    /// Selects `key`, or clears the selection if `key` is already selected.
    /// Returns the selection after the change.
    pub fn select(&mut self, key: &str) -> Option<&str> {
        if self.selection.as_deref() == Some(key) {
            self.selection = None;
        } else {
            self.selection = Some(key.to_string());
        }
        self.selection()
    }

    /// Advances once per autoplay period elapsed since the last tick.
    /// Returns the new year if it moved.
    pub fn tick(&mut self) -> Option<i32> {
        let steps = self.autoplay.poll(self.clock.now());
        (steps > 0).then(|| self.cursor.advance_by(steps))
    }

    /// Stops autoplay and releases the session, returning the final year.
    pub fn teardown(mut self) -> i32 {
        self.autoplay.stop();
        let year = self.cursor.current();
        debug!(year, "session torn down");
        year
    }
}
