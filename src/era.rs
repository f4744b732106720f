use std::fmt;

use log::debug;
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Era bucket: a half-open year interval sharing one reference pace.
///
/// The buckets are contiguous and cover 1950 through 2029. Years outside that
/// range resolve to the latest bucket (see [`classify_era`]).
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Era {
    #[serde(rename = "1960s")]
    Sixties,
    #[serde(rename = "1970s")]
    Seventies,
    #[serde(rename = "1980s")]
    Eighties,
    #[serde(rename = "1990s")]
    Nineties,
    #[serde(rename = "2000s")]
    Aughts,
    #[serde(rename = "2010s")]
    Tens,
    #[serde(rename = "2020s")]
    Twenties,
}

impl Era {
    /// All buckets, oldest first.
    pub const ALL: [Era; 7] = [
        Era::Sixties,
        Era::Seventies,
        Era::Eighties,
        Era::Nineties,
        Era::Aughts,
        Era::Tens,
        Era::Twenties,
    ];

    /// Bucket used for any year the table does not cover
    pub const LATEST: Era = Era::Twenties;

    pub fn label(self) -> &'static str {
        match self {
            Era::Sixties => "1960s",
            Era::Seventies => "1970s",
            Era::Eighties => "1980s",
            Era::Nineties => "1990s",
            Era::Aughts => "2000s",
            Era::Tens => "2010s",
            Era::Twenties => "2020s",
        }
    }

    /// Half-open `[start, end)` interval of season start years.
    pub fn years(self) -> (i32, i32) {
        match self {
            Era::Sixties => (1950, 1970),
            Era::Seventies => (1970, 1980),
            Era::Eighties => (1980, 1990),
            Era::Nineties => (1990, 2000),
            Era::Aughts => (2000, 2010),
            Era::Tens => (2010, 2020),
            Era::Twenties => (2020, 2030),
        }
    }

    /// League-average possessions per 48 minutes for the bucket.
    pub fn default_pace(self) -> f64 {
        match self {
            Era::Sixties => 115.0,
            Era::Seventies | Era::Eighties => 107.0,
            Era::Nineties | Era::Aughts => 95.0,
            Era::Tens => 98.0,
            Era::Twenties => 99.5,
        }
    }

    pub fn contains(self, year: i32) -> bool {
        let (start, end) = self.years();
        year >= start && year < end
    }

    pub fn from_label(label: &str) -> Option<Era> {
        Era::ALL.into_iter().find(|era| era.label() == label)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a season start year into its era bucket.
///
/// Never fails: a year below 1950 or at/after 2030 falls back to
/// [`Era::LATEST`].
pub fn classify_era(year: i32) -> Era {
    match Era::ALL.into_iter().find(|era| era.contains(year)) {
        Some(era) => era,
        None => {
            debug!("year {} outside era table, using {}", year, Era::LATEST);
            Era::LATEST
        }
    }
}
