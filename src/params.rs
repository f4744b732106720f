use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AST_HIGH_MULTIPLIER, DEFAULT_AST_LOW_MULTIPLIER, DEFAULT_AST_THRESHOLD,
    DEFAULT_FT_WEIGHT,
};
use crate::era::Era;
use crate::error::{EngineError, Result};

/// Adjustable inputs to the usage and rating formulas.
///
/// One instance lives in each UI session. It is mutated by user input and
/// passed by reference into the engine, which never mutates it. Pace is
/// stored as per-era overrides; an era without an override uses its
/// reference pace.
///
/// Parameters can also be loaded from a JSON file where every key is
/// optional, e.g. `{"pace": {"1960s": 110.0}, "ft_weight": 0.5}`.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdjustmentParameters {
    pace: BTreeMap<Era, f64>,

    /// Global multiplier on usage load
    pub usage_scaling: f64,

    /// Points are divided by this before the rating is computed
    pub defense_multiplier: f64,

    /// Percent taken off scoring for seasons before 2004
    pub handcheck_penalty: f64,

    /// Percent added to scoring for seasons from 2010 on
    pub spacing_bonus: f64,

    /// Free throw attempts counted per possession
    pub ft_weight: f64,

    pub ast_threshold: f64,
    pub ast_low_multiplier: f64,
    pub ast_high_multiplier: f64,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        AdjustmentParameters {
            pace: BTreeMap::new(),
            usage_scaling: 1.0,
            defense_multiplier: 1.0,
            handcheck_penalty: 0.0,
            spacing_bonus: 0.0,
            ft_weight: DEFAULT_FT_WEIGHT,
            ast_threshold: DEFAULT_AST_THRESHOLD,
            ast_low_multiplier: DEFAULT_AST_LOW_MULTIPLIER,
            ast_high_multiplier: DEFAULT_AST_HIGH_MULTIPLIER,
        }
    }
}

impl AdjustmentParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse parameters from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: AdjustmentParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Read parameters from a JSON file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let params = Self::from_json_str(&contents)?;
        debug!(
            "loaded adjustment parameters from {} ({} pace overrides)",
            path.display(),
            params.pace.len()
        );
        Ok(params)
    }

    /// Pace in effect for an era: the override if set, else the reference pace.
    pub fn pace_for(&self, era: Era) -> f64 {
        self.pace.get(&era).copied().unwrap_or_else(|| era.default_pace())
    }

    /// Override the pace for an era.
    pub fn set_pace(&mut self, era: Era, pace: f64) {
        self.pace.insert(era, pace);
    }

    /// Get the override for an era, if one exists.
    pub fn pace_override(&self, era: Era) -> Option<f64> {
        self.pace.get(&era).copied()
    }

    /// Drop an era's override so it falls back to the reference pace.
    pub fn clear_pace(&mut self, era: Era) {
        self.pace.remove(&era);
    }

    /// Restore every parameter to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing differs from the defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Check that every parameter is usable by the formulas.
    pub fn validate(&self) -> Result<()> {
        for &pace in self.pace.values() {
            check("pace", pace, pace >= 0.0, "must be non-negative")?;
        }
        check("usage_scaling", self.usage_scaling, self.usage_scaling > 0.0, "must be positive")?;
        check(
            "defense_multiplier",
            self.defense_multiplier,
            self.defense_multiplier > 0.0,
            "must be positive",
        )?;
        check(
            "handcheck_penalty",
            self.handcheck_penalty,
            (0.0..=100.0).contains(&self.handcheck_penalty),
            "must be a percentage between 0 and 100",
        )?;
        check(
            "spacing_bonus",
            self.spacing_bonus,
            self.spacing_bonus >= 0.0,
            "must be non-negative",
        )?;
        check("ft_weight", self.ft_weight, self.ft_weight >= 0.0, "must be non-negative")?;
        check(
            "ast_threshold",
            self.ast_threshold,
            self.ast_threshold >= 0.0,
            "must be non-negative",
        )?;
        check(
            "ast_low_multiplier",
            self.ast_low_multiplier,
            self.ast_low_multiplier >= 0.0,
            "must be non-negative",
        )?;
        check(
            "ast_high_multiplier",
            self.ast_high_multiplier,
            self.ast_high_multiplier >= 0.0,
            "must be non-negative",
        )?;
        Ok(())
    }
}

fn check(name: &'static str, value: f64, ok: bool, reason: &'static str) -> Result<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidParameter { name, value, reason: "must be finite" });
    }
    if !ok {
        return Err(EngineError::InvalidParameter { name, value, reason });
    }
    Ok(())
}
