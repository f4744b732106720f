/// Minutes in a regulation game
pub const MINUTES_PER_GAME: f64 = 48.0;

/// Free throw attempts counted per possession
pub const DEFAULT_FT_WEIGHT: f64 = 0.44;

/// Assist/turnover ratio above which the high assist multiplier applies
pub const DEFAULT_AST_THRESHOLD: f64 = 1.8;

/// Assist multiplier at or below the threshold
pub const DEFAULT_AST_LOW_MULTIPLIER: f64 = 1.8;

/// Assist multiplier above the threshold
pub const DEFAULT_AST_HIGH_MULTIPLIER: f64 = 2.3;

/// Seasons starting before this year get the hand-check penalty
pub const HANDCHECK_CUTOFF_YEAR: i32 = 2004;

/// Seasons starting in or after this year get the spacing bonus
pub const SPACING_CUTOFF_YEAR: i32 = 2010;

/// Candidate paces for the evolution chart (90..=130, step 5)
pub const PACE_SWEEP: [f64; 9] = [90.0, 95.0, 100.0, 105.0, 110.0, 115.0, 120.0, 125.0, 130.0];

/// Most players the cross-era page compares at once
pub const MAX_SELECTION: usize = 6;

/// Rows shown by the metric customizer leaderboard
pub const LEADERBOARD_SIZE: usize = 10;

/// Season label assumed for current (non-historical) players
pub const CURRENT_SEASON: &str = "2024-25";

/// A picks feed counts as live while its last pick is younger than this
pub const LIVE_WINDOW_SECS: i64 = 120;
