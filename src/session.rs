use std::path::Path;

use log::debug;

use crate::compare::{compare_selection, EraComparison, Selection};
use crate::constants::{LEADERBOARD_SIZE, PACE_SWEEP};
use crate::error::{Result, SelectionError};
use crate::feed::Feed;
use crate::leaderboard::{insights, rank_by, top_n, Insight, Metric, RankedEntry};
use crate::params::AdjustmentParameters;
use crate::player::{load_players_json, PlayerSeasonStat};
use crate::sweep::{sweep_selection, PaceSeries};

/// State behind one interactive page: the adjustment knobs, the comparison
/// selection and the player pool.
#[derive(Clone, Debug)]
pub struct Session {
    pub params: AdjustmentParameters,
    pub selection: Selection,
    players: Feed<Vec<PlayerSeasonStat>>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session {
            params: AdjustmentParameters::new(),
            selection: Selection::default(),
            players: Feed::new("players"),
        }
    }

    /// A session over a fixed pool with the default comparison selection.
    pub fn with_pool(pool: Vec<PlayerSeasonStat>) -> Self {
        let mut session = Session::new();
        session.update_players(Ok::<_, String>(pool));
        session
    }

    pub fn players(&self) -> &Feed<Vec<PlayerSeasonStat>> {
        &self.players
    }

    /// Current pool, empty until the first successful load.
    pub fn pool(&self) -> &[PlayerSeasonStat] {
        self.players.value().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Record a player load. The first successful load seeds the default
    /// selection.
    pub fn update_players<E: std::fmt::Display>(
        &mut self,
        result: std::result::Result<Vec<PlayerSeasonStat>, E>,
    ) {
        let first_load = !self.players.is_loaded();
        self.players.apply(result);
        if first_load && self.players.is_loaded() && self.selection.is_empty() {
            self.selection = Selection::with_defaults(self.pool());
            debug!("seeded selection with {} players", self.selection.len());
        }
    }

    pub fn load_players_json(&mut self, json: &str) {
        self.update_players(load_players_json(json));
    }

    /// Replace the parameters from a JSON file. On failure the current
    /// parameters are kept.
    pub fn load_parameters(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.params = AdjustmentParameters::read_from_file(path)?;
        Ok(())
    }

    pub fn reset_parameters(&mut self) {
        self.params.reset();
    }

    /// Toggle a season, by [`PlayerSeasonStat::key`], that must be in the
    /// current pool.
    pub fn toggle_player(&mut self, key: &str) -> std::result::Result<bool, SelectionError> {
        if !self.pool().iter().any(|stat| stat.key() == key) {
            return Err(SelectionError::UnknownPlayer(key.to_string()));
        }
        self.selection.toggle(key)
    }

    pub fn leaderboard(&self, metric: Metric) -> Vec<RankedEntry> {
        rank_by(self.pool(), &self.params, metric)
    }

    /// Leaderboard rows shown on the customizer page.
    pub fn top_leaderboard(&self, metric: Metric) -> Vec<RankedEntry> {
        top_n(self.leaderboard(metric), LEADERBOARD_SIZE)
    }

    pub fn insights(&self) -> Vec<Insight> {
        insights(self.pool(), &self.params)
    }

    pub fn comparisons(&self) -> std::result::Result<Vec<EraComparison>, SelectionError> {
        compare_selection(&self.selection, self.pool(), &self.params)
    }

    /// Pace sweeps over the standard pace range for the selected players.
    pub fn pace_sweeps(&self, metric: Metric) -> Vec<PaceSeries> {
        let selected: Vec<PlayerSeasonStat> =
            self.selection.resolve(self.pool()).into_iter().cloned().collect();
        sweep_selection(&selected, &self.params, &PACE_SWEEP, metric)
    }
}
