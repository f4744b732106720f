//! Hoops Core - era-adjusted basketball metrics.
//!
//! This library computes True Usage (TUSG%) and Possession Value Rating (PVR)
//! for player seasons under user-adjustable era assumptions, and builds the
//! leaderboards, pace sweeps and cross-era comparisons on top of them.
//! Python bindings via PyO3 are available with the `python` feature.

pub mod compare;
pub mod constants;
pub mod dataset;
pub mod era;
pub mod error;
pub mod feed;
pub mod leaderboard;
pub mod params;
pub mod picks;
pub mod player;
pub mod rating;
pub mod session;
pub mod sweep;
pub mod usage;

#[cfg(feature = "python")]
mod python;

pub use compare::{
    compare_selection, head_to_head, timeline, what_if, EraComparison, HeadToHead, Selection,
};
pub use constants::{CURRENT_SEASON, MAX_SELECTION, PACE_SWEEP};
pub use dataset::all_time_greats;
pub use era::{classify_era, Era};
pub use error::{EngineError, Result, SelectionError};
pub use feed::Feed;
pub use leaderboard::{
    insights, rank_by, rank_by_rating, rank_by_usage, top_n, Insight, LeaderboardSummary, Metric,
    RankedEntry,
};
pub use params::AdjustmentParameters;
pub use picks::{is_live, summarize_picks, Pick, PickStats};
pub use player::{load_players_json, PlayerRecord, PlayerSeasonStat};
pub use rating::compute_rating;
pub use session::Session;
pub use sweep::{sweep_by_pace, sweep_selection, sweep_usage_by_pace, PaceSeries};
pub use usage::compute_usage;
