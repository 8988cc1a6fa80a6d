//! # ember-playback
//!
//! Autoplay over a sequence of years, driven by an injected [`Clock`].
//!
//! All interactive state lives in a [`Session`] value created once at
//! startup. Nothing here spawns threads or sleeps: callers poll with
//! [`Session::tick`] and the session advances once per elapsed period, so
//! tests can drive time with a [`ManualClock`].
//!
//! ```ignore
//! use std::time::Duration;
//! use ember_playback::{ManualClock, Session};
//!
//! let clock = ManualClock::default();
//! let mut session = Session::new(clock.clone(), vec![1970, 1971, 1972], Duration::from_millis(400))?;
//! session.toggle_play();
//! clock.advance(Duration::from_millis(800));
//! assert_eq!(session.tick(), Some(1972));
//! ```

mod clock;
mod cursor;
mod error;
mod session;
mod task;

pub use clock::{Clock, ManualClock, SystemClock};
pub use cursor::YearCursor;
pub use error::PlaybackError;
pub use session::Session;
pub use task::ScheduledTask;
