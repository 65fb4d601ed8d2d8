//! Season identifiers for ESPN Fantasy Basketball.

use crate::error::{EspnError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First month that belongs to the following season.
const SEASON_ROLLOVER_MONTH: u32 = 10;

/// Type-safe wrapper for Season years.
///
/// ESPN names a basketball season by the calendar year in which it ends, so
/// the 2025-26 season is `Season(2026)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Season in progress (or about to tip off) on the given date.
    pub fn current_for(date: NaiveDate) -> Self {
        let year = u16::try_from(date.year()).unwrap_or(u16::MAX);
        if date.month() >= SEASON_ROLLOVER_MONTH {
            Self(year.saturating_add(1))
        } else {
            Self(year)
        }
    }

    pub fn previous(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current_for(chrono::Local::now().date_naive())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u16>()
            .map(Self)
            .map_err(|e| EspnError::Config {
                message: format!("invalid season '{s}': {e}"),
            })
    }
}
