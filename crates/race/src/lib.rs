//! Per-year emitter rankings ("bar race") and per-country sector
//! breakdowns.

mod config;
mod error;
mod frame;
mod sector;
mod table;

pub use config::RaceConfig;
pub use error::RaceError;
pub use frame::{RaceEntry, RaceFrame, race_frame, race_years};
pub use sector::{DEFAULT_SECTOR_ORDER, SectorBreakdown, SectorValue, sector_breakdown};
pub use table::{CountryTotals, SectorRow};
