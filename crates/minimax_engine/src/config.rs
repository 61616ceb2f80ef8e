//! Engine configuration.
//!
//! Everything here is read once at construction. A TOML file can override
//! any subset of the fields; the defaults alone give a playable engine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EngineError;

/// Which evaluator scores leaf positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalMode {
    /// Material count plus piece-square bonuses.
    Material,
    /// Learned scalar model loaded from `model_path`.
    Network,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies.
    pub depth: u8,
    /// Prune with alpha-beta bounds instead of plain minimax.
    pub use_alpha_beta: bool,
    /// Advisory per-move budget in seconds. Accepted for compatibility
    /// with front-end configs; fixed-depth search does not enforce it.
    pub time_limit: f64,
    /// Leaf evaluator selection.
    pub evaluation: EvalMode,
    /// ONNX weights for [`EvalMode::Network`].
    pub model_path: PathBuf,
    /// Opening randomization gate.
    pub opening: OpeningConfig,
}

/// Opening randomization, to avoid repetitive early games.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningConfig {
    /// Base probability of considering a random move at all.
    pub random_move_chance: f64,
    /// Last fullmove number at which randomization may trigger.
    pub randomize_until: u16,
    /// Randomize among this many of the top ranked moves.
    pub top_k: usize,
    /// Eval magnitude at which the randomization chance decays to zero.
    pub decay_threshold: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            use_alpha_beta: true,
            time_limit: 5.0,
            evaluation: EvalMode::Material,
            model_path: PathBuf::from("models/eval.onnx"),
            opening: OpeningConfig::default(),
        }
    }
}

impl Default for OpeningConfig {
    fn default() -> Self {
        Self {
            random_move_chance: 0.2,
            randomize_until: 3,
            top_k: 10,
            decay_threshold: 4.0,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, EngineError> {
        let text = fs::read_to_string(path).map_err(|source| EngineError::ConfigIo {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| EngineError::ConfigParse {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
