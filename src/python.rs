//! Python bindings, built with the `python` feature.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::compare::{self, EraComparison, Selection};
use crate::era::{self, Era};
use crate::error::{EngineError, SelectionError};
use crate::leaderboard::{self, RankedEntry};
use crate::params::AdjustmentParameters;
use crate::player::{self, PlayerSeasonStat};
use crate::{rating, sweep, usage};

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> PyErr {
        match err {
            EngineError::Io(_) => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

impl From<SelectionError> for PyErr {
    fn from(err: SelectionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn era_from_label(label: &str) -> PyResult<Era> {
    Era::from_label(label).ok_or_else(|| PyValueError::new_err(format!("Unknown era: {}", label)))
}

#[pymethods]
impl PlayerSeasonStat {
    #[new]
    #[pyo3(signature = (
        name, season, year, mpg = 0.0, ppg = 0.0, apg = 0.0, fga = 0.0, fta = 0.0, tov = 0.0
    ))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        name: String,
        season: String,
        year: i32,
        mpg: f64,
        ppg: f64,
        apg: f64,
        fga: f64,
        fta: f64,
        tov: f64,
    ) -> Self {
        PlayerSeasonStat::new(name, season, year).with_box_score(mpg, ppg, apg, fga, fta, tov)
    }

    /// Era label of the season, e.g. "1980s"
    #[pyo3(name = "era")]
    fn py_era(&self) -> &'static str {
        self.era().label()
    }

    #[pyo3(name = "key")]
    fn py_key(&self) -> String {
        self.key()
    }

    fn __repr__(&self) -> String {
        format!("PlayerSeasonStat({:?}, {:?}, {})", self.name, self.season, self.year)
    }
}

#[pymethods]
impl AdjustmentParameters {
    #[new]
    fn py_new() -> Self {
        AdjustmentParameters::new()
    }

    /// Load parameters from a JSON file.
    #[staticmethod]
    #[pyo3(name = "read_from_file")]
    fn py_read_from_file(filepath: &str) -> PyResult<Self> {
        Ok(AdjustmentParameters::read_from_file(filepath)?)
    }

    #[pyo3(name = "pace_for")]
    fn py_pace_for(&self, era: &str) -> PyResult<f64> {
        Ok(self.pace_for(era_from_label(era)?))
    }

    #[pyo3(name = "set_pace")]
    fn py_set_pace(&mut self, era: &str, pace: f64) -> PyResult<()> {
        self.set_pace(era_from_label(era)?, pace);
        Ok(())
    }

    #[pyo3(name = "reset")]
    fn py_reset(&mut self) {
        self.reset();
    }

    #[pyo3(name = "validate")]
    fn py_validate(&self) -> PyResult<()> {
        Ok(self.validate()?)
    }

    #[getter(usage_scaling)]
    fn get_usage_scaling(&self) -> f64 {
        self.usage_scaling
    }

    #[setter(usage_scaling)]
    fn set_usage_scaling(&mut self, value: f64) {
        self.usage_scaling = value;
    }

    #[getter(defense_multiplier)]
    fn get_defense_multiplier(&self) -> f64 {
        self.defense_multiplier
    }

    #[setter(defense_multiplier)]
    fn set_defense_multiplier(&mut self, value: f64) {
        self.defense_multiplier = value;
    }

    #[getter(handcheck_penalty)]
    fn get_handcheck_penalty(&self) -> f64 {
        self.handcheck_penalty
    }

    #[setter(handcheck_penalty)]
    fn set_handcheck_penalty(&mut self, value: f64) {
        self.handcheck_penalty = value;
    }

    #[getter(spacing_bonus)]
    fn get_spacing_bonus(&self) -> f64 {
        self.spacing_bonus
    }

    #[setter(spacing_bonus)]
    fn set_spacing_bonus(&mut self, value: f64) {
        self.spacing_bonus = value;
    }

    #[getter(ft_weight)]
    fn get_ft_weight(&self) -> f64 {
        self.ft_weight
    }

    #[setter(ft_weight)]
    fn set_ft_weight(&mut self, value: f64) {
        self.ft_weight = value;
    }

    #[getter(ast_threshold)]
    fn get_ast_threshold(&self) -> f64 {
        self.ast_threshold
    }

    #[setter(ast_threshold)]
    fn set_ast_threshold(&mut self, value: f64) {
        self.ast_threshold = value;
    }

    #[getter(ast_low_multiplier)]
    fn get_ast_low_multiplier(&self) -> f64 {
        self.ast_low_multiplier
    }

    #[setter(ast_low_multiplier)]
    fn set_ast_low_multiplier(&mut self, value: f64) {
        self.ast_low_multiplier = value;
    }

    #[getter(ast_high_multiplier)]
    fn get_ast_high_multiplier(&self) -> f64 {
        self.ast_high_multiplier
    }

    #[setter(ast_high_multiplier)]
    fn set_ast_high_multiplier(&mut self, value: f64) {
        self.ast_high_multiplier = value;
    }

    fn __repr__(&self) -> String {
        if self.is_default() {
            "AdjustmentParameters(default)".to_string()
        } else {
            format!("{:?}", self)
        }
    }
}

#[pymethods]
impl RankedEntry {
    fn __repr__(&self) -> String {
        format!(
            "RankedEntry({}, {}, usage={:.2}, rating={:.2})",
            self.rank,
            self.stat.label(),
            self.usage,
            self.rating
        )
    }
}

/// Era label for a season start year.
#[pyfunction]
fn classify_era(year: i32) -> &'static str {
    era::classify_era(year).label()
}

#[pyfunction]
fn compute_usage(stat: &PlayerSeasonStat, params: &AdjustmentParameters) -> f64 {
    usage::compute_usage(stat, params)
}

#[pyfunction]
fn compute_rating(stat: &PlayerSeasonStat, params: &AdjustmentParameters) -> f64 {
    rating::compute_rating(stat, params)
}

#[pyfunction]
fn sweep_by_pace(
    stat: &PlayerSeasonStat,
    params: &AdjustmentParameters,
    paces: Vec<f64>,
) -> Vec<f64> {
    sweep::sweep_by_pace(stat, params, &paces)
}

#[pyfunction]
fn sweep_usage_by_pace(
    stat: &PlayerSeasonStat,
    params: &AdjustmentParameters,
    paces: Vec<f64>,
) -> Vec<f64> {
    sweep::sweep_usage_by_pace(stat, params, &paces)
}

#[pyfunction]
fn rank_by_usage(
    stats: Vec<PlayerSeasonStat>,
    params: &AdjustmentParameters,
) -> Vec<RankedEntry> {
    leaderboard::rank_by_usage(&stats, params)
}

#[pyfunction]
fn rank_by_rating(
    stats: Vec<PlayerSeasonStat>,
    params: &AdjustmentParameters,
) -> Vec<RankedEntry> {
    leaderboard::rank_by_rating(&stats, params)
}

#[pyfunction]
fn what_if(stat: &PlayerSeasonStat, params: &AdjustmentParameters) -> EraComparison {
    compare::what_if(stat, params)
}

/// What-if cards for the seasons with the given keys, in pool order.
#[pyfunction]
fn compare_selection(
    keys: Vec<String>,
    pool: Vec<PlayerSeasonStat>,
    params: &AdjustmentParameters,
) -> PyResult<Vec<EraComparison>> {
    let mut selection = Selection::default();
    for key in &keys {
        selection.select(key)?;
    }
    Ok(compare::compare_selection(&selection, &pool, params)?)
}

#[pyfunction]
fn load_players_json(json: &str) -> PyResult<Vec<PlayerSeasonStat>> {
    Ok(player::load_players_json(json)?)
}

/// Python module definition
#[pymodule]
fn hoops_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<PlayerSeasonStat>()?;
    m.add_class::<AdjustmentParameters>()?;
    m.add_class::<RankedEntry>()?;
    m.add_class::<EraComparison>()?;
    m.add_class::<Era>()?;

    // Metrics
    m.add_function(wrap_pyfunction!(classify_era, m)?)?;
    m.add_function(wrap_pyfunction!(compute_usage, m)?)?;
    m.add_function(wrap_pyfunction!(compute_rating, m)?)?;
    m.add_function(wrap_pyfunction!(sweep_by_pace, m)?)?;
    m.add_function(wrap_pyfunction!(sweep_usage_by_pace, m)?)?;

    // Leaderboard and comparison
    m.add_function(wrap_pyfunction!(rank_by_usage, m)?)?;
    m.add_function(wrap_pyfunction!(rank_by_rating, m)?)?;
    m.add_function(wrap_pyfunction!(what_if, m)?)?;
    m.add_function(wrap_pyfunction!(compare_selection, m)?)?;
    m.add_function(wrap_pyfunction!(load_players_json, m)?)?;

    // Constants
    m.add("PACE_SWEEP", crate::constants::PACE_SWEEP.to_vec())?;
    m.add("CURRENT_SEASON", crate::constants::CURRENT_SEASON)?;

    Ok(())
}
