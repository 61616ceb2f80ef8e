//! Opening move randomization.

use chess_board::{Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::OpeningConfig;
use crate::search::RankedMove;

/// Injects variety into early-game move choice.
///
/// Two independent uniform draws gate the override: the first against the
/// base chance, the second against the base chance scaled down by how
/// decisive the position already is. Only when both fire is a move drawn
/// from the top of the ranking. The two-draw structure is load-bearing:
/// collapsing it into one check changes the effective probability.
#[derive(Debug, Clone)]
pub struct OpeningRandomizer {
    config: OpeningConfig,
}

impl OpeningRandomizer {
    pub fn new(config: OpeningConfig) -> Self {
        Self { config }
    }

    /// Returns a replacement for the searched best move, if the gate fires.
    ///
    /// `ranked` must be ordered best-for-the-mover first; the caller's
    /// search result already is.
    pub fn maybe_randomize<R: Rng>(
        &self,
        pos: &Position,
        ranked: &[RankedMove],
        rng: &mut R,
    ) -> Option<Move> {
        if pos.fullmove_number() > self.config.randomize_until
            || rng.gen::<f64>() >= self.config.random_move_chance
            || ranked.is_empty()
        {
            return None;
        }

        // Fade out as the evaluation becomes decisive in either direction.
        let best_value = ranked[0].value;
        let scale = (1.0 - f64::from(best_value.abs()) / f64::from(self.config.decay_threshold))
            .max(0.0);
        let chance = self.config.random_move_chance * scale;
        if rng.gen::<f64>() >= chance {
            return None;
        }

        let top_k = &ranked[..self.config.top_k.min(ranked.len())];
        top_k.choose(rng).map(|entry| entry.mv)
    }
}

#[cfg(test)]
#[path = "opening_tests.rs"]
mod opening_tests;
