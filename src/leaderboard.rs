use std::fmt;

#[cfg(feature = "python")]
use pyo3::prelude::*;
use rayon::prelude::*;
use statrs::statistics::Statistics;

use crate::constants::{DEFAULT_AST_THRESHOLD, DEFAULT_FT_WEIGHT};
use crate::params::AdjustmentParameters;
use crate::player::PlayerSeasonStat;
use crate::rating::compute_rating;
use crate::usage::compute_usage;

/// Which derived statistic to rank or sweep by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Usage,
    Rating,
}

impl Metric {
    pub fn compute(self, stat: &PlayerSeasonStat, params: &AdjustmentParameters) -> f64 {
        match self {
            Metric::Usage => compute_usage(stat, params),
            Metric::Rating => compute_rating(stat, params),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Usage => "TUSG%",
            Metric::Rating => "PVR",
        }
    }

    fn of(self, entry: &RankedEntry) -> f64 {
        match self {
            Metric::Usage => entry.usage,
            Metric::Rating => entry.rating,
        }
    }
}

/// A leaderboard row under the current parameters.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub stat: PlayerSeasonStat,

    /// New 1-based position
    pub rank: usize,

    pub usage: f64,
    pub rating: f64,

    /// Published rank minus new rank; positive means the player moved up
    pub rank_change: Option<i64>,
}

/// Rank seasons by adjusted usage, highest first.
pub fn rank_by_usage(
    stats: &[PlayerSeasonStat],
    params: &AdjustmentParameters,
) -> Vec<RankedEntry> {
    rank_by(stats, params, Metric::Usage)
}

/// Rank seasons by adjusted rating, highest first.
pub fn rank_by_rating(
    stats: &[PlayerSeasonStat],
    params: &AdjustmentParameters,
) -> Vec<RankedEntry> {
    rank_by(stats, params, Metric::Rating)
}

/// Rank seasons by `metric`, descending.
///
/// The sort is stable, so tied seasons keep their input order. Rank changes
/// compare the new position against each season's published rank.
pub fn rank_by(
    stats: &[PlayerSeasonStat],
    params: &AdjustmentParameters,
    metric: Metric,
) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = stats
        .par_iter()
        .map(|stat| RankedEntry {
            stat: stat.clone(),
            rank: 0,
            usage: compute_usage(stat, params),
            rating: compute_rating(stat, params),
            rank_change: None,
        })
        .collect();

    entries.sort_by(|a, b| metric.of(b).total_cmp(&metric.of(a)));

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
        entry.rank_change = entry
            .stat
            .reference_rank
            .map(|published| i64::from(published) - entry.rank as i64);
    }

    entries
}

/// First `n` rows of a ranking.
pub fn top_n(mut entries: Vec<RankedEntry>, n: usize) -> Vec<RankedEntry> {
    entries.truncate(n);
    entries
}

/// Percentile of a 1-based rank among `n` peers (rank 1 is the 100th).
pub fn percentile(rank: usize, n: usize) -> f64 {
    if n == 0 || rank == 0 || rank > n {
        return 0.0;
    }
    (n - rank + 1) as f64 / n as f64 * 100.0
}

/// Distribution of adjusted metrics across a leaderboard.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardSummary {
    pub count: usize,
    pub mean_usage: f64,
    pub std_dev_usage: f64,
    pub mean_rating: f64,
    pub std_dev_rating: f64,
}

impl LeaderboardSummary {
    pub fn from_entries(entries: &[RankedEntry]) -> Self {
        let usage: Vec<f64> = entries.iter().map(|e| e.usage).collect();
        let rating: Vec<f64> = entries.iter().map(|e| e.rating).collect();

        LeaderboardSummary {
            count: entries.len(),
            mean_usage: mean_or_zero(&usage),
            std_dev_usage: std_dev_or_zero(&usage),
            mean_rating: mean_or_zero(&rating),
            std_dev_rating: std_dev_or_zero(&rating),
        }
    }

    /// Standard score of a usage value; 0.0 when the pool has no spread.
    pub fn usage_z_score(&self, usage: f64) -> f64 {
        z_score(usage, self.mean_usage, self.std_dev_usage)
    }

    pub fn rating_z_score(&self, rating: f64) -> f64 {
        z_score(rating, self.mean_rating, self.std_dev_rating)
    }
}

fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().mean()
    }
}

fn std_dev_or_zero(values: &[f64]) -> f64 {
    if values.len() < 2 {
        0.0
    } else {
        values.iter().std_dev()
    }
}

fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev > 0.0 {
        (value - mean) / std_dev
    } else {
        0.0
    }
}

/// Observation cards for the metric customizer.
#[derive(Clone, Debug, PartialEq)]
pub enum Insight {
    UsageRiser {
        player: String,
        from_rank: u32,
        to_rank: usize,
        rise: i64,
        ft_weight: f64,
    },
    RatingRiser {
        player: String,
        rise: i64,
        ast_low_multiplier: f64,
        ast_high_multiplier: f64,
    },
    FtWeightShift {
        ft_weight: f64,
        increased: bool,
    },
    AssistThresholdShift {
        threshold: f64,
        raised: bool,
    },
    DefaultSettings,
}

impl Insight {
    pub fn title(&self) -> &'static str {
        match self {
            Insight::UsageRiser { .. } => "Biggest TUSG% Riser",
            Insight::RatingRiser { .. } => "Top PVR Improver",
            Insight::FtWeightShift { .. } => "FTA Multiplier Impact",
            Insight::AssistThresholdShift { .. } => "AST/TOV Threshold Change",
            Insight::DefaultSettings => "Default Settings",
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::UsageRiser { player, from_rank, to_rank, rise, ft_weight } => write!(
                f,
                "{} jumped from #{} to #{} in TUSG% rankings (+{} spots) \
                 with FTA multiplier at {:.2}.",
                player, from_rank, to_rank, rise, ft_weight
            ),
            Insight::RatingRiser {
                player,
                rise,
                ast_low_multiplier,
                ast_high_multiplier,
            } => write!(
                f,
                "{} benefits most from current PVR settings, rising +{} ranks \
                 with AST multipliers at {:.1}/{:.1}.",
                player, rise, ast_low_multiplier, ast_high_multiplier
            ),
            Insight::FtWeightShift { ft_weight, increased } => {
                let (direction, impact) = if *increased {
                    ("increased", "boosts high FTA players")
                } else {
                    ("decreased", "reduces FTA impact")
                };
                write!(
                    f,
                    "FTA multiplier {} to {:.2} from default {:.2}, which {}.",
                    direction, ft_weight, DEFAULT_FT_WEIGHT, impact
                )
            }
            Insight::AssistThresholdShift { threshold, raised } => {
                let (direction, impact) = if *raised {
                    ("raised", "fewer players qualify for high multiplier")
                } else {
                    ("lowered", "more players qualify for high multiplier")
                };
                write!(
                    f,
                    "AST/TOV threshold {} to {:.1}, meaning {}.",
                    direction, threshold, impact
                )
            }
            Insight::DefaultSettings => f.write_str(
                "Using default formula parameters. \
                 Adjust the parameters to see how rankings change.",
            ),
        }
    }
}

/// Entry with the largest positive rank change; ties go to the higher-ranked entry.
fn biggest_riser(entries: &[RankedEntry]) -> Option<&RankedEntry> {
    entries.iter().filter(|e| e.rank_change.is_some()).fold(None, |best, entry| match best {
        Some(b) if b.rank_change >= entry.rank_change => Some(b),
        _ => Some(entry),
    })
}

/// Derive the customizer insight cards for a pool of seasons.
///
/// Risers are measured against each season's published rank. The rating
/// riser is skipped when it is the same player as the top usage riser.
pub fn insights(stats: &[PlayerSeasonStat], params: &AdjustmentParameters) -> Vec<Insight> {
    let by_usage = rank_by_usage(stats, params);
    let by_rating = rank_by_rating(stats, params);
    let mut cards = Vec::new();

    let usage_riser = biggest_riser(&by_usage);
    if let Some(entry) = usage_riser {
        if let (Some(rise), Some(from_rank)) = (entry.rank_change, entry.stat.reference_rank) {
            if rise > 0 {
                cards.push(Insight::UsageRiser {
                    player: entry.stat.name.clone(),
                    from_rank,
                    to_rank: entry.rank,
                    rise,
                    ft_weight: params.ft_weight,
                });
            }
        }
    }

    if let Some(entry) = biggest_riser(&by_rating) {
        let rise = entry.rank_change.unwrap_or(0);
        let same_player = usage_riser.is_some_and(|u| u.stat.name == entry.stat.name);
        if rise > 0 && !same_player {
            cards.push(Insight::RatingRiser {
                player: entry.stat.name.clone(),
                rise,
                ast_low_multiplier: params.ast_low_multiplier,
                ast_high_multiplier: params.ast_high_multiplier,
            });
        }
    }

    let ft_diff = params.ft_weight - DEFAULT_FT_WEIGHT;
    if ft_diff.abs() > 0.05 {
        cards.push(Insight::FtWeightShift {
            ft_weight: params.ft_weight,
            increased: ft_diff > 0.0,
        });
    }

    let threshold_diff = params.ast_threshold - DEFAULT_AST_THRESHOLD;
    if threshold_diff.abs() > 0.2 {
        cards.push(Insight::AssistThresholdShift {
            threshold: params.ast_threshold,
            raised: threshold_diff > 0.0,
        });
    }

    if cards.is_empty() {
        cards.push(Insight::DefaultSettings);
    }

    cards
}
