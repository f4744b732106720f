use crate::constants::{HANDCHECK_CUTOFF_YEAR, SPACING_CUTOFF_YEAR};
use crate::params::AdjustmentParameters;
use crate::player::PlayerSeasonStat;

/// Assist-to-turnover ratio, with zero turnovers treated as a ratio of the
/// raw assist count.
pub fn assist_turnover_ratio(assists: f64, turnovers: f64) -> f64 {
    if turnovers == 0.0 {
        if assists > 0.0 {
            assists
        } else {
            0.0
        }
    } else {
        assists / turnovers
    }
}

/// Points after the defense, hand-check and spacing adjustments.
///
/// A zero defense multiplier leaves points unscaled. The hand-check and
/// spacing adjustments are each gated on their own cutoff year.
pub fn adjusted_points(stat: &PlayerSeasonStat, params: &AdjustmentParameters) -> f64 {
    let mut points = if params.defense_multiplier == 0.0 {
        stat.points_per_game
    } else {
        stat.points_per_game / params.defense_multiplier
    };

    if stat.year < HANDCHECK_CUTOFF_YEAR && params.handcheck_penalty > 0.0 {
        points *= 1.0 - params.handcheck_penalty / 100.0;
    }

    if stat.year >= SPACING_CUTOFF_YEAR && params.spacing_bonus > 0.0 {
        points *= 1.0 + params.spacing_bonus / 100.0;
    }

    points
}

/// Calculate the possession value rating (PVR).
///
/// PVR = [(PTS + AST × multiplier) / (FGA + TOV + ft_weight × FTA + AST) - 1.00] × 100
///
/// The assist multiplier is `ast_high_multiplier` when the assist/turnover
/// ratio is above `ast_threshold`, else `ast_low_multiplier`. Points are
/// era-adjusted first (see [`adjusted_points`]).
///
/// # Returns
/// The rating, or exactly 0.0 when the possession denominator is zero.
pub fn compute_rating(stat: &PlayerSeasonStat, params: &AdjustmentParameters) -> f64 {
    let assists = stat.assists_per_game;
    let ratio = assist_turnover_ratio(assists, stat.turnovers);

    let multiplier = if ratio > params.ast_threshold {
        params.ast_high_multiplier
    } else {
        params.ast_low_multiplier
    };

    let numerator = adjusted_points(stat, params) + assists * multiplier;
    let denominator = stat.field_goal_attempts
        + stat.turnovers
        + params.ft_weight * stat.free_throw_attempts
        + assists;

    if denominator == 0.0 {
        return 0.0;
    }

    let rating = (numerator / denominator - 1.0) * 100.0;
    if rating.is_finite() {
        rating
    } else {
        0.0
    }
}
