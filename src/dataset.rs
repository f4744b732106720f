//! Built-in reference seasons for the all-time leaderboard.

use crate::player::PlayerSeasonStat;

/// (name, season, start year, published TUSG%, published PVR,
/// mpg, ppg, apg, fga, fta, tov, era pace)
type Row = (&'static str, &'static str, i32, f64, f64, f64, f64, f64, f64, f64, f64, f64);

/// Published all-time leaderboard, in published rank order.
const ALL_TIME_GREATS: [Row; 15] = [
    ("Russell Westbrook", "2016-17", 2016, 48.1, 25.11, 34.6, 31.6, 10.4, 24.0, 10.4, 5.4, 98.0),
    ("James Harden", "2018-19", 2018, 45.71, 18.55, 36.8, 36.1, 7.5, 24.5, 11.0, 5.0, 98.0),
    ("Wilt Chamberlain", "1961-62", 1961, 44.73, 0.63, 48.5, 50.4, 2.4, 39.5, 17.0, 5.0, 115.0),
    (
        "Giannis Antetokounmpo",
        "2019-20",
        2019,
        43.51,
        28.35,
        30.4,
        29.5,
        5.6,
        19.7,
        10.5,
        3.1,
        99.5,
    ),
    ("Kobe Bryant", "2005-06", 2005, 42.87, 10.72, 41.0, 35.4, 4.5, 27.2, 10.2, 3.1, 95.0),
    ("Michael Jordan", "1987-88", 1987, 40.13, 15.54, 40.4, 35.0, 5.9, 27.8, 11.9, 3.1, 107.0),
    ("Stephen Curry", "2015-16", 2015, 36.87, 40.27, 34.2, 30.1, 6.7, 20.2, 5.1, 3.3, 98.0),
    ("Kevin Durant", "2013-14", 2013, 36.06, 23.79, 38.5, 32.0, 5.5, 20.8, 9.2, 3.5, 98.0),
    ("Shaquille O'Neal", "1999-00", 1999, 34.82, 16.5, 40.0, 29.7, 3.8, 19.0, 13.1, 2.8, 95.0),
    ("Nikola Jokić", "2021-22", 2021, 33.73, 44.54, 33.5, 27.1, 7.9, 18.0, 5.5, 3.0, 99.5),
    ("Kareem Abdul-Jabbar", "1971-72", 1971, 33.29, 15.19, 44.2, 34.8, 4.6, 25.2, 10.0, 3.2, 107.0),
    ("LeBron James", "2012-13", 2012, 31.03, 39.21, 37.9, 26.8, 7.3, 17.8, 7.3, 3.0, 98.0),
    ("Tim Duncan", "2001-02", 2001, 30.18, 15.07, 40.6, 25.5, 3.7, 18.8, 6.7, 2.5, 95.0),
    ("Magic Johnson", "1986-87", 1986, 29.51, 44.03, 36.3, 23.9, 12.2, 17.7, 5.4, 3.8, 107.0),
    ("Larry Bird", "1987-88", 1987, 28.8, 44.35, 37.9, 29.9, 6.1, 19.1, 5.3, 2.9, 107.0),
];

/// Career-best seasons of the all-time greats, ranked by published TUSG%.
pub fn all_time_greats() -> Vec<PlayerSeasonStat> {
    ALL_TIME_GREATS
        .iter()
        .zip(1u32..)
        .map(|(&(name, season, year, tusg, pvr, mpg, ppg, apg, fga, fta, tov, pace), rank)| {
            let mut stat = PlayerSeasonStat::new(name, season, year)
                .with_box_score(mpg, ppg, apg, fga, fta, tov)
                .with_reference(tusg, pvr, Some(rank));
            stat.era_pace = Some(pace);
            stat
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::AdjustmentParameters;
    use crate::rating::compute_rating;
    use crate::usage::compute_usage;

    #[test]
    fn test_ranks_are_sequential() {
        let greats = all_time_greats();
        assert_eq!(greats.len(), 15);
        for (i, stat) in greats.iter().enumerate() {
            assert_eq!(stat.reference_rank, Some(i as u32 + 1));
        }
    }

    #[test]
    fn test_recomputed_metrics_match_published() {
        let params = AdjustmentParameters::new();
        for stat in all_time_greats() {
            let rating = compute_rating(&stat, &params);
            assert!(
                (rating - stat.original_rating).abs() < 0.05,
                "{}: rating {} vs published {}",
                stat.name,
                rating,
                stat.original_rating
            );

            // Giannis was published with the 2020s pace; his season starts in 2019
            if stat.name != "Giannis Antetokounmpo" {
                let usage = compute_usage(&stat, &params);
                assert!(
                    (usage - stat.original_usage).abs() < 0.05,
                    "{}: usage {} vs published {}",
                    stat.name,
                    usage,
                    stat.original_usage
                );
            }
        }
    }
}
