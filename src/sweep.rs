use rayon::prelude::*;

use crate::era::classify_era;
use crate::leaderboard::Metric;
use crate::params::AdjustmentParameters;
use crate::player::PlayerSeasonStat;

/// One player's metric values across a range of paces.
#[derive(Clone, Debug, PartialEq)]
pub struct PaceSeries {
    pub name: String,
    pub season: String,
    pub paces: Vec<f64>,
    pub values: Vec<f64>,
}

/// Rating at each candidate pace for the player's era.
///
/// The caller's `params` are never touched: each candidate pace is applied to
/// a private copy.
pub fn sweep_by_pace(
    stat: &PlayerSeasonStat,
    params: &AdjustmentParameters,
    paces: &[f64],
) -> Vec<f64> {
    sweep_metric(stat, params, paces, Metric::Rating)
}

/// Usage at each candidate pace for the player's era.
pub fn sweep_usage_by_pace(
    stat: &PlayerSeasonStat,
    params: &AdjustmentParameters,
    paces: &[f64],
) -> Vec<f64> {
    sweep_metric(stat, params, paces, Metric::Usage)
}

/// Evaluate `metric` with the player's era pace replaced by each candidate.
pub fn sweep_metric(
    stat: &PlayerSeasonStat,
    params: &AdjustmentParameters,
    paces: &[f64],
    metric: Metric,
) -> Vec<f64> {
    let era = classify_era(stat.year);
    let mut scratch = params.clone();

    paces
        .iter()
        .map(|&pace| {
            scratch.set_pace(era, pace);
            metric.compute(stat, &scratch)
        })
        .collect()
}

/// Sweep every selected player.
///
/// Players are evaluated in parallel; the output keeps input order.
pub fn sweep_selection(
    stats: &[PlayerSeasonStat],
    params: &AdjustmentParameters,
    paces: &[f64],
    metric: Metric,
) -> Vec<PaceSeries> {
    stats
        .par_iter()
        .map(|stat| PaceSeries {
            name: stat.name.clone(),
            season: stat.season.clone(),
            paces: paces.to_vec(),
            values: sweep_metric(stat, params, paces, metric),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PACE_SWEEP;
    use crate::era::Era;
    use crate::rating::compute_rating;
    use crate::usage::compute_usage;
    use proptest::prelude::*;

    fn jordan() -> PlayerSeasonStat {
        PlayerSeasonStat::new("Michael Jordan", "1987-88", 1987)
            .with_box_score(40.4, 35.0, 5.9, 27.8, 11.9, 3.1)
    }

    fn curry() -> PlayerSeasonStat {
        PlayerSeasonStat::new("Stephen Curry", "2015-16", 2015)
            .with_box_score(34.2, 30.1, 6.7, 20.2, 5.1, 3.3)
    }

    #[test]
    fn test_sweep_length_and_order() {
        let params = AdjustmentParameters::new();
        let values = sweep_usage_by_pace(&jordan(), &params, &PACE_SWEEP);
        assert_eq!(values.len(), PACE_SWEEP.len());

        for (pace, value) in PACE_SWEEP.iter().zip(&values) {
            let mut expected_params = params.clone();
            expected_params.set_pace(Era::Eighties, *pace);
            assert_eq!(*value, compute_usage(&jordan(), &expected_params));
        }

        // More possessions, smaller share
        assert!(values.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_rating_sweep_matches_rating() {
        let mut params = AdjustmentParameters::new();
        params.handcheck_penalty = 5.0;

        let values = sweep_by_pace(&jordan(), &params, &PACE_SWEEP);
        let rating = compute_rating(&jordan(), &params);
        assert!(values.iter().all(|v| *v == rating), "rating does not depend on pace");
    }

    #[test]
    fn test_empty_paces() {
        let params = AdjustmentParameters::new();
        assert!(sweep_by_pace(&jordan(), &params, &[]).is_empty());
    }

    #[test]
    fn test_params_untouched() {
        let mut params = AdjustmentParameters::new();
        params.set_pace(Era::Eighties, 104.0);
        let before = params.clone();

        let _ = sweep_by_pace(&jordan(), &params, &PACE_SWEEP);
        let _ = sweep_usage_by_pace(&jordan(), &params, &PACE_SWEEP);

        assert_eq!(params, before);
        assert_eq!(params.pace_override(Era::Eighties), Some(104.0));
    }

    #[test]
    fn test_sweep_selection_keeps_order() {
        let params = AdjustmentParameters::new();
        let stats = vec![curry(), jordan()];

        let series = sweep_selection(&stats, &params, &PACE_SWEEP, Metric::Usage);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Stephen Curry");
        assert_eq!(series[1].name, "Michael Jordan");
        assert_eq!(series[1].values, sweep_usage_by_pace(&jordan(), &params, &PACE_SWEEP));
        assert_eq!(series[0].paces, PACE_SWEEP.to_vec());
    }

    proptest! {
        #[test]
        fn prop_sweep_leaves_params_identical(
            paces in prop::collection::vec(0.0f64..200.0, 1..12),
            override_pace in prop::option::of(80.0f64..130.0),
            year in 1940i32..2040,
            ft_weight in 0.0f64..1.0,
        ) {
            let mut params = AdjustmentParameters::new();
            params.ft_weight = ft_weight;
            if let Some(pace) = override_pace {
                params.set_pace(classify_era(year), pace);
            }
            let before = serde_json::to_string(&params).unwrap();

            let stat = PlayerSeasonStat::new("P", "x", year)
                .with_box_score(35.0, 25.0, 6.0, 20.0, 6.0, 3.0);
            let _ = sweep_by_pace(&stat, &params, &paces);

            prop_assert_eq!(serde_json::to_string(&params).unwrap(), before);
        }
    }
}
