//! # ember-io
//!
//! Read emissions and measurement tables from CSV files into the in-memory
//! shapes used by the Ember computation crates.
//!
//! Three layouts are supported:
//!
//! - **long** tables with one row per group and period and one column per
//!   measure (see [`read_long`]);
//! - **wide** tables with name/code columns and one column per four-digit
//!   year (see [`read_wide`]);
//! - plain year/value **series** (see [`read_series`]).
//!
//! Empty or non-numeric measure cells are read as missing values. Malformed
//! key cells (years, months) are collected and reported together as a single
//! [`IoError::Validation`].

mod cell;
mod error;
mod long;
mod series;
mod validate;
mod wide;

pub use error::IoError;
pub use long::{LongTableConfig, MeasurementTable, read_long};
pub use series::read_series;
pub use wide::{WideRow, WideTableConfig, read_wide};
