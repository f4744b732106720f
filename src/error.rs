//! Error types for the metric engine and its consumers

use thiserror::Error;

/// Errors raised while loading data or configuration.
///
/// The metric formulas themselves never fail: division by zero yields a
/// zero result instead of an error.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid season label {label:?}")]
    InvalidSeason { label: String },

    #[error("Player {player:?} has no season label or year")]
    MissingSeason { player: String },

    #[error("Player {player:?} has negative {field}: {value}")]
    NegativeStat {
        player: String,
        field: &'static str,
        value: f64,
    },

    #[error("Invalid parameter {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Errors for player selection on the comparison pages.
///
/// These are rejected before any metric is computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Maximum {capacity} players can be selected for comparison")]
    Full { capacity: usize },

    #[error("Select at least one player to compare")]
    Empty,

    #[error("Please select both players to compare")]
    MissingPlayer,

    #[error("Player {0:?} not found")]
    UnknownPlayer(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
