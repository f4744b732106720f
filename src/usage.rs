use crate::constants::MINUTES_PER_GAME;
use crate::era::classify_era;
use crate::params::AdjustmentParameters;
use crate::player::PlayerSeasonStat;

/// Calculate era-adjusted true usage (TUSG%).
///
/// TUSG% = (FGA + TOV + FTA × ft_weight) × usage_scaling / ((MPG / 48) × pace) × 100
///
/// Pace is resolved from `params` for the season's era bucket.
///
/// # Returns
/// Usage percentage, or exactly 0.0 when minutes, pace or possessions played
/// is zero. Always finite.
pub fn compute_usage(stat: &PlayerSeasonStat, params: &AdjustmentParameters) -> f64 {
    let pace = params.pace_for(classify_era(stat.year));
    usage_at_pace(stat, params, pace)
}

/// Usage with an explicit pace in place of the era lookup.
pub fn usage_at_pace(stat: &PlayerSeasonStat, params: &AdjustmentParameters, pace: f64) -> f64 {
    if stat.minutes_per_game == 0.0 || pace == 0.0 {
        return 0.0;
    }

    let possessions_played = (stat.minutes_per_game / MINUTES_PER_GAME) * pace;
    if possessions_played == 0.0 {
        return 0.0;
    }

    let raw_load =
        stat.field_goal_attempts + stat.turnovers + stat.free_throw_attempts * params.ft_weight;
    let usage = (raw_load * params.usage_scaling / possessions_played) * 100.0;

    if usage.is_finite() {
        usage
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::era::Era;
    use proptest::prelude::*;

    fn westbrook() -> PlayerSeasonStat {
        PlayerSeasonStat::new("Russell Westbrook", "2016-17", 2016)
            .with_box_score(34.6, 31.6, 10.4, 24.0, 10.4, 5.4)
    }

    #[test]
    fn test_westbrook_fixture() {
        let params = AdjustmentParameters::new();
        assert_eq!(params.pace_for(Era::Tens), 98.0);

        let usage = compute_usage(&westbrook(), &params);
        assert!((usage - 48.10).abs() < 0.05, "expected ~48.10, got {}", usage);
    }

    #[test]
    fn test_historical_reference_values() {
        let params = AdjustmentParameters::new();

        let jordan = PlayerSeasonStat::new("Michael Jordan", "1987-88", 1987)
            .with_box_score(40.4, 35.0, 5.9, 27.8, 11.9, 3.1);
        assert!((compute_usage(&jordan, &params) - 40.13).abs() < 0.05);

        let wilt = PlayerSeasonStat::new("Wilt Chamberlain", "1961-62", 1961)
            .with_box_score(48.5, 50.4, 2.4, 39.5, 17.0, 5.0);
        assert!((compute_usage(&wilt, &params) - 44.73).abs() < 0.05);
    }

    #[test]
    fn test_pace_override_lowers_usage() {
        let mut params = AdjustmentParameters::new();
        let base = compute_usage(&westbrook(), &params);

        params.set_pace(Era::Tens, 110.0);
        let faster = compute_usage(&westbrook(), &params);
        assert!(faster < base, "more possessions should mean lower usage share");

        // Other eras' overrides don't matter
        let mut params = AdjustmentParameters::new();
        params.set_pace(Era::Sixties, 130.0);
        assert_eq!(compute_usage(&westbrook(), &params), base);
    }

    #[test]
    fn test_usage_scaling_is_linear() {
        let mut params = AdjustmentParameters::new();
        let base = compute_usage(&westbrook(), &params);

        params.usage_scaling = 1.5;
        let scaled = compute_usage(&westbrook(), &params);
        assert!((scaled - base * 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_guards() {
        let params = AdjustmentParameters::new();

        let benched = PlayerSeasonStat::new("Bench", "2016-17", 2016)
            .with_box_score(0.0, 0.0, 0.0, 5.0, 2.0, 1.0);
        assert_eq!(compute_usage(&benched, &params), 0.0);

        let mut zero_pace = AdjustmentParameters::new();
        zero_pace.set_pace(Era::Tens, 0.0);
        assert_eq!(compute_usage(&westbrook(), &zero_pace), 0.0);

        assert_eq!(usage_at_pace(&westbrook(), &params, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_zero_minutes_is_zero(
            fga in 0.0f64..50.0,
            fta in 0.0f64..30.0,
            tov in 0.0f64..10.0,
            year in 1900i32..2100,
            pace in 0.0f64..200.0,
            scaling in 0.1f64..3.0,
            ft_weight in 0.0f64..1.0,
        ) {
            let stat = PlayerSeasonStat::new("P", "x", year)
                .with_box_score(0.0, 20.0, 5.0, fga, fta, tov);
            let mut params = AdjustmentParameters::new();
            params.set_pace(classify_era(year), pace);
            params.usage_scaling = scaling;
            params.ft_weight = ft_weight;

            prop_assert_eq!(compute_usage(&stat, &params), 0.0);
        }

        #[test]
        fn prop_usage_is_finite(
            mpg in 0.0f64..48.0,
            fga in 0.0f64..50.0,
            fta in 0.0f64..30.0,
            tov in 0.0f64..10.0,
            pace in 0.0f64..200.0,
        ) {
            let stat = PlayerSeasonStat::new("P", "x", 2000)
                .with_box_score(mpg, 20.0, 5.0, fga, fta, tov);
            let usage = usage_at_pace(&stat, &AdjustmentParameters::new(), pace);
            prop_assert!(usage.is_finite());
            prop_assert!(usage >= 0.0);
        }
    }
}
