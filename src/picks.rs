//! Picks dashboard summary and liveness.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::LIVE_WINDOW_SECS;
use crate::error::{EngineError, Result};

/// Timestamp format used by the picks feed
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single pick as served by the picks feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    #[serde(default)]
    pub id: Option<i64>,
    pub game: String,
    pub pick: String,

    /// Edge, in percent
    pub edge: f64,

    #[serde(default)]
    pub home_tusg: f64,
    #[serde(default)]
    pub away_tusg: f64,
    #[serde(default)]
    pub home_pvr: f64,
    #[serde(default)]
    pub away_pvr: f64,
    #[serde(default)]
    pub spread: Option<f64>,

    /// "%Y-%m-%d %H:%M:%S"
    pub timestamp: String,
}

impl Pick {
    pub fn parsed_timestamp(&self) -> Result<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }
}

/// Dashboard header numbers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PickStats {
    pub total_picks: usize,
    pub avg_edge: f64,
    pub highest_edge: f64,
    pub last_updated: Option<String>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarize the picks feed. Edges are rounded to two decimals.
pub fn summarize_picks(picks: &[Pick]) -> PickStats {
    if picks.is_empty() {
        return PickStats::default();
    }

    let total = picks.iter().map(|p| p.edge).sum::<f64>();
    let highest = picks.iter().map(|p| p.edge).fold(f64::NEG_INFINITY, f64::max);

    // Feed timestamps sort lexically
    let last_updated = picks.iter().map(|p| p.timestamp.as_str()).max().map(str::to_string);

    PickStats {
        total_picks: picks.len(),
        avg_edge: round2(total / picks.len() as f64),
        highest_edge: round2(highest),
        last_updated,
    }
}

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        EngineError::InvalidTimestamp { value: value.to_string(), source }
    })
}

/// Whether the picks feed is live: the last pick is under two minutes old.
///
/// No pick at all means not live.
pub fn is_live(last_timestamp: Option<&str>, now: NaiveDateTime) -> Result<bool> {
    let Some(last) = last_timestamp else {
        return Ok(false);
    };
    let elapsed = now.signed_duration_since(parse_timestamp(last)?);
    Ok(elapsed.num_seconds() < LIVE_WINDOW_SECS)
}
