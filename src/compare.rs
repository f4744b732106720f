use log::debug;
#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::constants::MAX_SELECTION;
use crate::era::Era;
use crate::error::SelectionError;
use crate::params::AdjustmentParameters;
use crate::player::PlayerSeasonStat;
use crate::rating::compute_rating;
use crate::usage::compute_usage;

/// Seasons selected when the cross-era page first loads
pub const DEFAULT_SELECTION: [&str; 6] = [
    "Michael Jordan",
    "LeBron James",
    "Kobe Bryant",
    "Wilt Chamberlain",
    "Magic Johnson",
    "Larry Bird",
];

/// Seasons chosen for comparison, in selection order.
///
/// Seasons are identified by [`PlayerSeasonStat::key`], so a player with
/// several seasons in the pool can have each one picked separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<String>,
    capacity: usize,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::new(MAX_SELECTION)
    }
}

impl Selection {
    pub fn new(capacity: usize) -> Self {
        Selection { keys: Vec::new(), capacity }
    }

    /// Default cross-era selection: the first season in `pool` of each
    /// default player.
    pub fn with_defaults(pool: &[PlayerSeasonStat]) -> Self {
        let mut selection = Selection::default();
        for name in DEFAULT_SELECTION {
            if let Some(stat) = pool.iter().find(|stat| stat.name == name) {
                selection.keys.push(stat.key());
            }
        }
        selection
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Add a season. Selecting an already-selected season is a no-op.
    pub fn select(&mut self, key: &str) -> Result<(), SelectionError> {
        if self.contains(key) {
            return Ok(());
        }
        if self.keys.len() >= self.capacity {
            debug!("selection full, rejecting {}", key);
            return Err(SelectionError::Full { capacity: self.capacity });
        }
        self.keys.push(key.to_string());
        Ok(())
    }

    /// Remove a season, returning whether it was selected.
    pub fn deselect(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    /// Flip a season's selection. Returns whether it is now selected.
    pub fn toggle(&mut self, key: &str) -> Result<bool, SelectionError> {
        if self.deselect(key) {
            Ok(false)
        } else {
            self.select(key).map(|()| true)
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Selected seasons, in pool order. A key matches at most one season.
    pub fn resolve<'a>(&self, pool: &'a [PlayerSeasonStat]) -> Vec<&'a PlayerSeasonStat> {
        let mut seen: Vec<String> = Vec::with_capacity(self.keys.len());
        let mut stats = Vec::with_capacity(self.keys.len());
        for stat in pool {
            let key = stat.key();
            if self.contains(&key) && !seen.contains(&key) {
                seen.push(key);
                stats.push(stat);
            }
        }
        stats
    }
}

/// What-if card: a season's published metrics against the adjusted ones.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct EraComparison {
    pub name: String,
    pub season: String,
    pub era: Era,

    /// Era the card imagines the player moved to
    pub target_era: Era,

    pub original_usage: f64,
    pub adjusted_usage: f64,
    pub usage_change: f64,
    pub original_rating: f64,
    pub adjusted_rating: f64,
    pub rating_change: f64,
}

/// Compare one season's published metrics with the current adjustments.
pub fn what_if(stat: &PlayerSeasonStat, params: &AdjustmentParameters) -> EraComparison {
    let era = stat.era();
    let target_era = if era == Era::Sixties { Era::Twenties } else { Era::Sixties };
    let adjusted_usage = compute_usage(stat, params);
    let adjusted_rating = compute_rating(stat, params);

    EraComparison {
        name: stat.name.clone(),
        season: stat.season.clone(),
        era,
        target_era,
        original_usage: stat.original_usage,
        adjusted_usage,
        usage_change: adjusted_usage - stat.original_usage,
        original_rating: stat.original_rating,
        adjusted_rating,
        rating_change: adjusted_rating - stat.original_rating,
    }
}

/// What-if cards for every selected season, in pool order.
///
/// Nothing is computed when the selection resolves to no seasons.
pub fn compare_selection(
    selection: &Selection,
    pool: &[PlayerSeasonStat],
    params: &AdjustmentParameters,
) -> Result<Vec<EraComparison>, SelectionError> {
    let stats = selection.resolve(pool);
    if stats.is_empty() {
        return Err(SelectionError::Empty);
    }
    Ok(stats.into_iter().map(|stat| what_if(stat, params)).collect())
}

/// How a statistic is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    /// Two decimals with a percent sign
    Percentage,
    /// Two decimals
    Rating,
    /// One decimal
    PerGame,
}

impl StatKind {
    pub fn decimals(self) -> usize {
        match self {
            StatKind::Percentage | StatKind::Rating => 2,
            StatKind::PerGame => 1,
        }
    }

    pub fn format(self, value: f64) -> String {
        match self {
            StatKind::Percentage => format!("{:.2}%", value),
            StatKind::Rating => format!("{:.2}", value),
            StatKind::PerGame => format!("{:.1}", value),
        }
    }

    /// Signed difference, e.g. "+1.25%" or "-0.4"; exactly "0" when equal.
    pub fn format_diff(self, diff: f64) -> String {
        if diff > 0.0 {
            format!("+{}", self.format(diff))
        } else if diff < 0.0 {
            format!("-{}", self.format(diff.abs()))
        } else {
            "0".to_string()
        }
    }
}

/// One row of the head-to-head stat table.
#[derive(Clone, Debug, PartialEq)]
pub struct StatDiff {
    pub label: &'static str,
    pub kind: StatKind,
    pub left: f64,
    pub right: f64,
}

impl StatDiff {
    pub fn diff(&self) -> f64 {
        self.left - self.right
    }

    pub fn left_text(&self) -> String {
        self.kind.format(self.left)
    }

    pub fn right_text(&self) -> String {
        self.kind.format(self.right)
    }

    pub fn diff_text(&self) -> String {
        self.kind.format_diff(self.diff())
    }
}

/// Radar chart axes, each scaled to 0..=100.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarProfile {
    pub usage: f64,
    pub rating: f64,
    pub scoring: f64,
    pub passing: f64,
    pub minutes: f64,
    pub efficiency: f64,
}

impl RadarProfile {
    pub fn from_stat(stat: &PlayerSeasonStat) -> Self {
        let fga = stat.field_goal_attempts;
        let efficiency = if fga > 0.0 {
            let fg_pct = stat.field_goals_made / fga * 100.0;
            let tov_rate = stat.turnovers / (fga + stat.turnovers);
            fg_pct * (1.0 - tov_rate)
        } else {
            50.0
        };

        RadarProfile {
            usage: stat.original_usage.min(100.0),
            rating: (stat.original_rating + 50.0).clamp(0.0, 100.0),
            scoring: (stat.points_per_game * 2.0).min(100.0),
            passing: (stat.assists_per_game * 8.0).min(100.0),
            minutes: (stat.minutes_per_game * 2.5).min(100.0),
            efficiency: efficiency.min(100.0),
        }
    }
}

/// Side-by-side comparison of two players.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadToHead {
    pub left: RadarProfile,
    pub right: RadarProfile,
    pub rows: Vec<StatDiff>,
}

/// Build the head-to-head view. Both players must be chosen.
///
/// Uses the published usage and rating: backend comparison records often
/// omit the shot counts needed to recompute them.
pub fn head_to_head(
    left: Option<&PlayerSeasonStat>,
    right: Option<&PlayerSeasonStat>,
) -> Result<HeadToHead, SelectionError> {
    let (Some(left), Some(right)) = (left, right) else {
        return Err(SelectionError::MissingPlayer);
    };

    let row = |label, kind, f: fn(&PlayerSeasonStat) -> f64| StatDiff {
        label,
        kind,
        left: f(left),
        right: f(right),
    };
    let rows = vec![
        row("TUSG%", StatKind::Percentage, |s| s.original_usage),
        row("PVR", StatKind::Rating, |s| s.original_rating),
        row("PPG", StatKind::PerGame, |s| s.points_per_game),
        row("APG", StatKind::PerGame, |s| s.assists_per_game),
        row("MPG", StatKind::PerGame, |s| s.minutes_per_game),
        row("FGA", StatKind::PerGame, |s| s.field_goal_attempts),
        row("FTA", StatKind::PerGame, |s| s.free_throw_attempts),
        row("TOV", StatKind::PerGame, |s| s.turnovers),
    ];

    Ok(HeadToHead {
        left: RadarProfile::from_stat(left),
        right: RadarProfile::from_stat(right),
        rows,
    })
}

/// A season placed on the selection timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineMarker {
    pub name: String,
    pub season: String,

    /// Percent of the way from the earliest to the latest season
    pub position: f64,
}

/// Place seasons on a 0..=100 axis between the earliest and latest year.
pub fn timeline(stats: &[&PlayerSeasonStat]) -> Vec<TimelineMarker> {
    let (Some(min_year), Some(max_year)) =
        (stats.iter().map(|s| s.year).min(), stats.iter().map(|s| s.year).max())
    else {
        return Vec::new();
    };
    let range = match max_year - min_year {
        0 => 1.0,
        span => f64::from(span),
    };

    stats
        .iter()
        .map(|stat| TimelineMarker {
            name: stat.name.clone(),
            season: stat.season.clone(),
            position: f64::from(stat.year - min_year) / range * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::all_time_greats;

    #[test]
    fn test_selection_capacity() {
        let mut selection = Selection::default();
        for name in ["A", "B", "C", "D", "E", "F"] {
            selection.select(name).unwrap();
        }
        assert_eq!(selection.len(), 6);
        assert_eq!(selection.select("G"), Err(SelectionError::Full { capacity: 6 }));
        assert_eq!(selection.toggle("G"), Err(SelectionError::Full { capacity: 6 }));

        // Re-selecting is fine even when full
        assert_eq!(selection.select("A"), Ok(()));

        assert_eq!(selection.toggle("A"), Ok(false));
        assert_eq!(selection.toggle("G"), Ok(true));
        assert!(selection.contains("G"));
        assert!(!selection.contains("A"));
    }

    #[test]
    fn test_defaults_and_resolve_order() {
        let pool = all_time_greats();
        let selection = Selection::with_defaults(&pool);
        assert_eq!(selection.len(), 6);
        assert_eq!(selection.keys()[0], "Michael Jordan (1987-88)");

        // Resolved in pool order, not selection order
        let resolved: Vec<&str> =
            selection.resolve(&pool).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            resolved,
            vec![
                "Wilt Chamberlain",
                "Kobe Bryant",
                "Michael Jordan",
                "LeBron James",
                "Magic Johnson",
                "Larry Bird"
            ]
        );

        let partial = Selection::with_defaults(&pool[..3]);
        assert_eq!(partial.keys(), ["Wilt Chamberlain (1961-62)".to_string()]);
    }

    #[test]
    fn test_seasons_sharing_a_name() {
        let mut pool = all_time_greats();
        pool.push(
            PlayerSeasonStat::new("LeBron James", "2024-25", 2024)
                .with_id("bdl_237")
                .with_box_score(35.0, 23.7, 8.9, 18.1, 5.0, 3.7),
        );
        let params = AdjustmentParameters::new();

        let mut selection = Selection::with_defaults(&pool);
        assert_eq!(selection.len(), 6);
        let cards = compare_selection(&selection, &pool, &params).unwrap();
        assert_eq!(cards.len(), 6);
        let lebron: Vec<&str> = cards
            .iter()
            .filter(|c| c.name == "LeBron James")
            .map(|c| c.season.as_str())
            .collect();
        assert_eq!(lebron, vec!["2012-13"]);

        // Swap the historical season for the current one
        assert_eq!(selection.toggle("LeBron James (2012-13)"), Ok(false));
        assert_eq!(selection.toggle("bdl_237"), Ok(true));
        let resolved = selection.resolve(&pool);
        assert_eq!(resolved.len(), 6);
        let lebron: Vec<&str> = resolved
            .iter()
            .filter(|s| s.name == "LeBron James")
            .map(|s| s.season.as_str())
            .collect();
        assert_eq!(lebron, vec!["2024-25"]);

        // Both seasons at once
        selection.toggle("Larry Bird (1987-88)").unwrap();
        selection.toggle("LeBron James (2012-13)").unwrap();
        assert_eq!(compare_selection(&selection, &pool, &params).unwrap().len(), 6);
    }

    #[test]
    fn test_what_if() {
        let pool = all_time_greats();
        let mut params = AdjustmentParameters::new();
        params.set_pace(Era::Sixties, 125.0);

        let wilt = pool.iter().find(|s| s.name == "Wilt Chamberlain").unwrap();
        let card = what_if(wilt, &params);
        assert_eq!(card.era, Era::Sixties);
        assert_eq!(card.target_era, Era::Twenties);
        assert!(card.usage_change < 0.0);
        assert_eq!(card.adjusted_usage, compute_usage(wilt, &params));
        assert!((card.rating_change - (card.adjusted_rating - 0.63)).abs() < 1e-12);

        let jordan = pool.iter().find(|s| s.name == "Michael Jordan").unwrap();
        assert_eq!(what_if(jordan, &params).target_era, Era::Sixties);
    }

    #[test]
    fn test_compare_selection() {
        let pool = all_time_greats();
        let params = AdjustmentParameters::new();

        let empty = Selection::default();
        assert_eq!(compare_selection(&empty, &pool, &params), Err(SelectionError::Empty));

        let mut unknown = Selection::default();
        unknown.select("Nobody (1999-00)").unwrap();
        assert_eq!(compare_selection(&unknown, &pool, &params), Err(SelectionError::Empty));

        let cards = compare_selection(&Selection::with_defaults(&pool), &pool, &params).unwrap();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].name, "Wilt Chamberlain");
    }

    #[test]
    fn test_stat_formatting() {
        assert_eq!(StatKind::Percentage.format(48.096), "48.10%");
        assert_eq!(StatKind::Rating.format(25.113), "25.11");
        assert_eq!(StatKind::PerGame.format(31.64), "31.6");
        assert_eq!(StatKind::PerGame.decimals(), 1);

        assert_eq!(StatKind::Percentage.format_diff(1.254), "+1.25%");
        assert_eq!(StatKind::PerGame.format_diff(-0.42), "-0.4");
        assert_eq!(StatKind::Rating.format_diff(0.0), "0");
    }

    #[test]
    fn test_head_to_head() {
        let pool = all_time_greats();
        assert_eq!(head_to_head(Some(&pool[0]), None), Err(SelectionError::MissingPlayer));
        assert_eq!(head_to_head(None, None), Err(SelectionError::MissingPlayer));

        let view = head_to_head(Some(&pool[0]), Some(&pool[1])).unwrap();
        assert_eq!(view.rows.len(), 8);
        assert_eq!(view.rows[0].label, "TUSG%");
        assert_eq!(view.rows[0].left_text(), "48.10%");
        assert_eq!(view.rows[2].diff_text(), "-4.5");
        assert_eq!(view.left.passing, 83.2);
        assert_eq!(view.right.scoring, 72.2);
    }

    #[test]
    fn test_radar_profile() {
        let mut stat = PlayerSeasonStat::new("P", "2016-17", 2016)
            .with_box_score(50.0, 60.0, 14.0, 20.0, 5.0, 5.0)
            .with_reference(120.0, -70.0, None);
        stat.field_goals_made = 10.0;

        let radar = RadarProfile::from_stat(&stat);
        assert_eq!(radar.usage, 100.0);
        assert_eq!(radar.rating, 0.0);
        assert_eq!(radar.scoring, 100.0);
        assert_eq!(radar.passing, 100.0);
        assert_eq!(radar.minutes, 100.0);
        assert!((radar.efficiency - 50.0 * (1.0 - 5.0 / 25.0)).abs() < 1e-9);

        let no_shots = PlayerSeasonStat::new("Q", "2016-17", 2016);
        assert_eq!(RadarProfile::from_stat(&no_shots).efficiency, 50.0);
    }

    #[test]
    fn test_timeline() {
        let pool = all_time_greats();
        let wilt = &pool[2];
        let jokic = &pool[9];
        let jordan = &pool[5];

        let markers = timeline(&[wilt, jordan, jokic]);
        assert_eq!(markers[0].position, 0.0);
        assert_eq!(markers[2].position, 100.0);
        assert!((markers[1].position - 26.0 / 60.0 * 100.0).abs() < 1e-9);

        let single = timeline(&[jordan]);
        assert_eq!(single[0].position, 0.0);
        assert!(timeline(&[]).is_empty());
    }
}
