//! Fixed-depth chess move search with pluggable evaluation.
//!
//! The engine walks the legal-move tree to a configured depth -- plain
//! minimax, or alpha-beta pruning with identical move choice -- ranking
//! every root move from the mover's perspective. Leaves are scored either
//! by material plus piece-square bonuses or by a trained scalar network,
//! selected once at construction. Early in the game a two-stage random
//! gate may swap the top choice for a nearby one to vary openings.

pub mod config;
pub mod error;
pub mod eval;
pub mod features;
pub mod model;
pub mod opening;
pub mod search;

use std::path::Path;

use chess_board::Position;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

pub use config::{EngineConfig, EvalMode, OpeningConfig};
pub use error::EngineError;
pub use eval::{create_evaluator, Evaluator, MaterialEvaluator, NetworkEvaluator, MATE_SCORE};
pub use opening::OpeningRandomizer;
pub use search::{alpha_beta_search, minimax_search, RankedMove, SearchResult};

/// Engine facade tying together search, evaluation, and opening variety.
///
/// Construction loads everything the configuration asks for (including
/// network weights); a built engine never fails mid-search.
#[derive(Debug)]
pub struct ChessEngine {
    config: EngineConfig,
    evaluator: Box<dyn Evaluator>,
    randomizer: OpeningRandomizer,
    rng: StdRng,
}

impl ChessEngine {
    /// Builds an engine from configuration.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Builds an engine with a caller-supplied RNG, for deterministic tests.
    pub fn with_rng(config: EngineConfig, rng: StdRng) -> Result<Self, EngineError> {
        let evaluator = create_evaluator(&config)?;
        info!(mode = ?config.evaluation, depth = config.depth, "engine ready");
        Ok(Self {
            randomizer: OpeningRandomizer::new(config.opening.clone()),
            evaluator,
            config,
            rng,
        })
    }

    /// Reads configuration from a TOML file, then builds.
    pub fn from_config_file(path: &Path) -> Result<Self, EngineError> {
        Self::new(EngineConfig::from_toml_file(path)?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Adjusts search depth between games (UCI `Depth` option).
    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    /// Searches for the best move in `pos`.
    ///
    /// Returns a no-move result when the game is already over. The ranked
    /// list covers every legal root move, best for the side to move first;
    /// the opening randomizer may override `best_move` early in the game
    /// without touching the ranking.
    pub fn best_move(&mut self, pos: &Position) -> SearchResult {
        let mut result = if self.config.use_alpha_beta {
            alpha_beta_search(pos, self.config.depth, self.evaluator.as_ref())
        } else {
            minimax_search(pos, self.config.depth, self.evaluator.as_ref())
        };

        if let Some(mv) = self
            .randomizer
            .maybe_randomize(pos, &result.ranked, &mut self.rng)
        {
            debug!(%mv, "opening randomizer overrode the search move");
            result.best_move = Some(mv);
        }

        debug!(depth = result.depth, nodes = result.nodes, "search complete");
        result
    }
}
