use log::warn;
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::CURRENT_SEASON;
use crate::era::{classify_era, Era};
use crate::error::{EngineError, Result};

/// One player's season: per-game box score inputs plus the published metrics.
///
/// Rate stats are non-negative. The published usage, rating and rank are
/// reference values only; the engine always recomputes from the box score.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonStat {
    /// Backend record id, e.g. "historical_Magic_Johnson_1986-87"
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    /// Season label, e.g. "1987-88"
    pub season: String,

    /// Season start year
    pub year: i32,

    pub minutes_per_game: f64,
    pub points_per_game: f64,
    pub assists_per_game: f64,
    pub field_goal_attempts: f64,
    pub free_throw_attempts: f64,
    pub turnovers: f64,
    pub field_goals_made: f64,

    /// Usage percentage as historically published
    pub original_usage: f64,

    /// Rating as historically published
    pub original_rating: f64,

    /// League pace when the season was played (informational)
    pub era_pace: Option<f64>,

    /// Published leaderboard position, 1-based
    pub reference_rank: Option<u32>,
}

impl PlayerSeasonStat {
    /// Create a season with an empty box score.
    pub fn new(name: impl Into<String>, season: impl Into<String>, year: i32) -> Self {
        PlayerSeasonStat {
            id: None,
            name: name.into(),
            season: season.into(),
            year,
            minutes_per_game: 0.0,
            points_per_game: 0.0,
            assists_per_game: 0.0,
            field_goal_attempts: 0.0,
            free_throw_attempts: 0.0,
            turnovers: 0.0,
            field_goals_made: 0.0,
            original_usage: 0.0,
            original_rating: 0.0,
            era_pace: None,
            reference_rank: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the per-game box score.
    pub fn with_box_score(
        mut self,
        mpg: f64,
        ppg: f64,
        apg: f64,
        fga: f64,
        fta: f64,
        tov: f64,
    ) -> Self {
        self.minutes_per_game = mpg;
        self.points_per_game = ppg;
        self.assists_per_game = apg;
        self.field_goal_attempts = fga;
        self.free_throw_attempts = fta;
        self.turnovers = tov;
        self
    }

    /// Set the published usage, rating and leaderboard rank.
    pub fn with_reference(mut self, usage: f64, rating: f64, rank: Option<u32>) -> Self {
        self.original_usage = usage;
        self.original_rating = rating;
        self.reference_rank = rank;
        self
    }

    pub fn era(&self) -> Era {
        classify_era(self.year)
    }

    /// Display label, e.g. "Michael Jordan (1987-88)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.season)
    }

    /// Identity of this season within a pool: the backend id, or the label
    /// when the record has none.
    pub fn key(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.label())
    }
}

/// Player record as served by the backend JSON endpoints.
///
/// Numeric fields that are missing or `null` decode as zero. `mpg` may be a
/// number or a game-clock string. `id` may be a string or an integer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,

    #[serde(alias = "player")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_historical: bool,

    #[serde(default)]
    pub season: Option<String>,

    #[serde(default)]
    pub year: Option<i32>,

    #[serde(default)]
    pub rank: Option<u32>,

    #[serde(default, deserialize_with = "deserialize_minutes")]
    pub mpg: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ppg: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub apg: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub fga: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub fta: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tov: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub fgm: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tusg: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub pvr: f64,

    #[serde(default)]
    pub era_pace: Option<f64>,
}

impl TryFrom<PlayerRecord> for PlayerSeasonStat {
    type Error = EngineError;

    fn try_from(record: PlayerRecord) -> Result<Self> {
        let (season, year) = match (record.season, record.year) {
            (Some(label), _) => {
                let year = parse_season_start_year(&label)?;
                (label, year)
            }
            (None, Some(year)) => (season_label(year), year),
            (None, None) if !record.is_historical => {
                (CURRENT_SEASON.to_string(), parse_season_start_year(CURRENT_SEASON)?)
            }
            (None, None) => return Err(EngineError::MissingSeason { player: record.name }),
        };

        let rates = [
            ("mpg", record.mpg),
            ("ppg", record.ppg),
            ("apg", record.apg),
            ("fga", record.fga),
            ("fta", record.fta),
            ("tov", record.tov),
            ("fgm", record.fgm),
        ];
        if let Some(&(field, value)) = rates.iter().find(|(_, value)| *value < 0.0) {
            return Err(EngineError::NegativeStat { player: record.name, field, value });
        }

        Ok(PlayerSeasonStat {
            id: record.id,
            name: record.name,
            season,
            year,
            minutes_per_game: record.mpg,
            points_per_game: record.ppg,
            assists_per_game: record.apg,
            field_goal_attempts: record.fga,
            free_throw_attempts: record.fta,
            turnovers: record.tov,
            field_goals_made: record.fgm,
            original_usage: record.tusg,
            original_rating: record.pvr,
            era_pace: record.era_pace,
            reference_rank: record.rank,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PlayerPayload {
    Wrapped { players: Vec<serde_json::Value> },
    List(Vec<serde_json::Value>),
}

/// Decode a backend player list.
///
/// Accepts either a bare array or the `{"players": [...]}` envelope. Records
/// that do not decode or fail validation are skipped with a warning; only a
/// malformed envelope is an error.
pub fn load_players_json(json: &str) -> Result<Vec<PlayerSeasonStat>> {
    let records = match serde_json::from_str(json)? {
        PlayerPayload::Wrapped { players } => players,
        PlayerPayload::List(players) => players,
    };

    let mut stats = Vec::with_capacity(records.len());
    for (index, value) in records.into_iter().enumerate() {
        let decoded = serde_json::from_value::<PlayerRecord>(value)
            .map_err(EngineError::from)
            .and_then(PlayerSeasonStat::try_from);
        match decoded {
            Ok(stat) => stats.push(stat),
            Err(e) => warn!("skipping player record {}: {}", index, e),
        }
    }
    Ok(stats)
}

/// Start year of a season label: "1987-88" -> 1987, "2024" -> 2024.
pub fn parse_season_start_year(label: &str) -> Result<i32> {
    label
        .split('-')
        .next()
        .map(str::trim)
        .and_then(|year| year.parse().ok())
        .ok_or_else(|| EngineError::InvalidSeason { label: label.to_string() })
}

fn season_label(year: i32) -> String {
    format!("{}-{:02}", year, (year + 1).rem_euclid(100))
}

/// Parse a minutes value from a game-clock string.
///
/// Handles `MM:SS`, `MM:SS:hh` and true `HH:MM:SS` (first field above 59), as
/// well as plain numbers. Anything unparseable is zero minutes.
pub fn parse_minutes(value: &str) -> f64 {
    let value = value.trim();
    if !value.contains(':') {
        return value.parse().unwrap_or(0.0);
    }

    let parts: Option<Vec<f64>> = value.split(':').map(|p| p.trim().parse().ok()).collect();
    match parts.as_deref() {
        Some(&[hours, minutes, seconds]) if hours > 59.0 => {
            hours * 60.0 + minutes + seconds / 60.0
        }
        Some(&[minutes, seconds, hundredths]) => minutes + seconds / 60.0 + hundredths / 3600.0,
        Some(&[minutes, seconds]) => minutes + seconds / 60.0,
        _ => 0.0,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MinutesField {
    Number(f64),
    Clock(String),
}

fn deserialize_minutes<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<MinutesField>::deserialize(deserializer)? {
        Some(MinutesField::Number(minutes)) => minutes,
        Some(MinutesField::Clock(clock)) => parse_minutes(&clock),
        None => 0.0,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdField {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IdField>::deserialize(deserializer)?.map(|id| match id {
        IdField::Text(text) => text,
        IdField::Number(number) => number.to_string(),
    }))
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
