//! Accumulated validation of key cells.
//!
//! [`ValidationCollector`] gathers every malformed year or month cell in a
//! file so that a single [`IoError::Validation`] reports all of them.

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Parses a required year cell, recording a message on failure.
pub(crate) fn require_year(
    c: &mut ValidationCollector,
    line: u64,
    raw: &str,
) -> Option<i32> {
    let parsed = crate::cell::parse_year(raw);
    if parsed.is_none() {
        c.push(format!("line {line}: invalid year '{}'", raw.trim()));
    }
    parsed
}

/// Parses an optional month cell. Empty cells are allowed; anything else must
/// be an integer in `1..=12`.
pub(crate) fn optional_month(
    c: &mut ValidationCollector,
    line: u64,
    raw: &str,
) -> Option<u8> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match crate::cell::parse_year(trimmed) {
        Some(m) if (1..=12).contains(&m) => Some(m as u8),
        _ => {
            c.push(format!("line {line}: month '{trimmed}' out of range 1..=12"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert_eq!(c.len(), 0);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("error one");
        c.push("error two");
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "error one; error two");
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn year_cells() {
        let mut c = ValidationCollector::new();
        assert_eq!(require_year(&mut c, 2, "2014"), Some(2014));
        assert_eq!(require_year(&mut c, 3, " 2015.0 "), Some(2015));
        assert_eq!(require_year(&mut c, 4, "soon"), None);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn month_cells() {
        let mut c = ValidationCollector::new();
        assert_eq!(optional_month(&mut c, 2, "3"), Some(3));
        assert_eq!(optional_month(&mut c, 3, ""), None);
        assert_eq!(optional_month(&mut c, 4, "13"), None);
        assert_eq!(optional_month(&mut c, 5, "0"), None);
        assert_eq!(c.len(), 2);
    }
}
