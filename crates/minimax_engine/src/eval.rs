//! Evaluation strategies for chess positions.
//!
//! Both evaluators score from White's perspective: positive favors White,
//! negative favors Black. Search relies on that convention to decide who
//! maximizes, so the two variants are interchangeable.

use std::path::Path;

use chess_board::{Color, GameOutcome, Piece, Position};
use tracing::warn;

use crate::config::{EngineConfig, EvalMode};
use crate::error::EngineError;
use crate::features;
use crate::model::ScalarModel;

/// Score of a checkmated position, from White's perspective.
pub const MATE_SCORE: f32 = 10_000.0;

/// Scores a position from White's perspective.
///
/// Implementations are pure: the same position always gets the same score.
pub trait Evaluator: Send + std::fmt::Debug {
    fn evaluate(&self, pos: &Position) -> f32;
}

/// Builds the evaluator selected by the configuration.
///
/// Fails when the network mode is configured but its weights cannot be
/// loaded; there is no silent fallback to the material evaluator.
pub fn create_evaluator(config: &EngineConfig) -> Result<Box<dyn Evaluator>, EngineError> {
    match config.evaluation {
        EvalMode::Material => Ok(Box::new(MaterialEvaluator)),
        EvalMode::Network => Ok(Box::new(NetworkEvaluator::load(&config.model_path)?)),
    }
}

/// Material evaluation with small piece-square perturbations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

/// Piece values in pawns.
fn piece_value(piece: Piece) -> f32 {
    match piece {
        Piece::Pawn => 1.0,
        Piece::Knight => 3.0,
        Piece::Bishop => 3.0,
        Piece::Rook => 5.0,
        Piece::Queen => 9.0,
        Piece::King => 0.0,
    }
}

// Piece-square tables indexed by square (a1 = 0, h8 = 63), White's view;
// Black reads them mirrored vertically. Entries are tenths of a pawn.
#[rustfmt::skip]
const PAWN_PST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    5, 5, 5, 5, 5, 5, 5, 5,
    1, 1, 2, 3, 3, 2, 1, 1,
    0, 0, 0, 2, 2, 0, 0, 0,
    0, 0, 0, 3, 3, 0, 0, 0,
    1, -1, -2, 0, 0, -2, -1, 1,
    1, 2, 2, -2, -2, 2, 2, 1,
    0, 0, 0, 0, 0, 0, 0, 0,
];

#[rustfmt::skip]
const KNIGHT_PST: [i32; 64] = [
    -5, -4, -2, -2, -2, -2, -4, -5,
    -4, 0, 0, 0, 0, 0, 0, -4,
    -2, 0, 1, 2, 2, 1, 0, -2,
    -2, 1, 2, 3, 3, 2, 1, -2,
    -2, 0, 2, 3, 3, 2, 0, -2,
    -2, 1, 2, 2, 2, 2, 1, -2,
    -4, 0, 1, 0, 0, 1, 0, -4,
    -5, -4, -2, -2, -2, -2, -4, -5,
];

#[rustfmt::skip]
const BISHOP_PST: [i32; 64] = [
    -2, -1, -1, -1, -1, -1, -1, -2,
    -1, 1, 0, 0, 0, 0, 1, -1,
    -1, 0, 2, 1, 1, 2, 0, -1,
    -1, 1, 1, 2, 2, 1, 1, -1,
    -1, 1, 1, 2, 2, 1, 1, -1,
    -1, 0, 2, 1, 1, 2, 0, -1,
    -1, 1, 0, 0, 0, 0, 1, -1,
    -2, -1, -1, -1, -1, -1, -1, -2,
];

#[rustfmt::skip]
const ROOK_PST: [i32; 64] = [
    0, 0, 0, 1, 1, 0, 0, 0,
    -1, 0, 0, 0, 0, 0, 0, -1,
    -1, 0, 0, 0, 0, 0, 0, -1,
    -1, 0, 0, 0, 0, 0, 0, -1,
    -1, 0, 0, 0, 0, 0, 0, -1,
    -1, 0, 0, 0, 0, 0, 0, -1,
    1, 2, 2, 2, 2, 2, 2, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];

#[rustfmt::skip]
const QUEEN_PST: [i32; 64] = [
    -2, -1, -1, 0, 0, -1, -1, -2,
    -1, 0, 0, 0, 0, 0, 0, -1,
    -1, 0, 1, 1, 1, 1, 0, -1,
    0, 0, 1, 1, 1, 1, 0, 0,
    0, 0, 1, 1, 1, 1, 0, 0,
    -1, 0, 1, 1, 1, 1, 0, -1,
    -1, 0, 0, 0, 0, 0, 0, -1,
    -2, -1, -1, 0, 0, -1, -1, -2,
];

#[rustfmt::skip]
const KING_PST: [i32; 64] = [
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -3, -4, -4, -5, -5, -4, -4, -3,
    -2, -3, -3, -4, -4, -3, -3, -2,
    -1, -2, -2, -2, -2, -2, -2, -1,
    2, 2, 0, 0, 0, 0, 2, 2,
    2, 3, 1, 0, 0, 1, 3, 2,
];

fn pst(piece: Piece) -> &'static [i32; 64] {
    match piece {
        Piece::Pawn => &PAWN_PST,
        Piece::Knight => &KNIGHT_PST,
        Piece::Bishop => &BISHOP_PST,
        Piece::Rook => &ROOK_PST,
        Piece::Queen => &QUEEN_PST,
        Piece::King => &KING_PST,
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, pos: &Position) -> f32 {
        match pos.outcome() {
            Some(GameOutcome::Checkmate { winner }) => {
                return if winner == Color::White {
                    MATE_SCORE
                } else {
                    -MATE_SCORE
                };
            }
            Some(_) => return 0.0,
            None => {}
        }

        let board = pos.board();
        let mut score = 0.0;
        for &piece in &Piece::ALL {
            let value = piece_value(piece);
            let table = pst(piece);
            for sq in board.pieces(piece) & board.colors(Color::White) {
                score += value + table[sq as usize] as f32 / 10.0;
            }
            for sq in board.pieces(piece) & board.colors(Color::Black) {
                score -= value + table[sq.flip_rank() as usize] as f32 / 10.0;
            }
        }
        score
    }
}

/// Evaluator backed by a trained scalar-regression network.
///
/// The model maps the 768-entry occupancy encoding to one tanh-bounded
/// value; that value is stretched onto the material evaluator's pawn scale
/// so search can treat both evaluators alike.
#[derive(Debug)]
pub struct NetworkEvaluator {
    model: ScalarModel,
}

/// Multiplier from the network's [-1, 1] output to pawn units.
const OUTPUT_SCALE: f32 = 4.0;

impl NetworkEvaluator {
    /// Loads the network weights. Fails fast when the file is missing or
    /// not a 768-input scalar model.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        Ok(Self {
            model: ScalarModel::load(path)?,
        })
    }
}

impl Evaluator for NetworkEvaluator {
    fn evaluate(&self, pos: &Position) -> f32 {
        let encoded = features::encode_position(pos);
        match self.model.forward(&encoded) {
            Ok(raw) => raw * OUTPUT_SCALE,
            Err(err) => {
                warn!("inference failed, scoring 0: {err}");
                0.0
            }
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
