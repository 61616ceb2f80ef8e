//! Position encoding for the learned evaluator.
//!
//! One-hot occupancy: 2 colors x 6 piece types x 64 squares. The encoding
//! is a pure function of the board, always from White's point of view
//! (a1 = index 0 within each plane).

use chess_board::{Color, Piece, Position, PositionError};

/// Length of the encoded vector.
pub const NUM_FEATURES: usize = 768;

/// Offset of the Black planes within the encoding.
const BLACK_OFFSET: usize = NUM_FEATURES / 2;

/// Encodes a position as a flat `f32` vector.
///
/// Index layout: `color_offset + piece_index * 64 + square`, with White at
/// offset 0, Black at 384, and pieces ordered pawn, knight, bishop, rook,
/// queen, king.
pub fn encode_position(pos: &Position) -> Vec<f32> {
    let mut encoded = vec![0.0f32; NUM_FEATURES];
    let board = pos.board();

    for (index, &piece) in Piece::ALL.iter().enumerate() {
        for sq in board.pieces(piece) & board.colors(Color::White) {
            encoded[index * 64 + sq as usize] = 1.0;
        }
        for sq in board.pieces(piece) & board.colors(Color::Black) {
            encoded[BLACK_OFFSET + index * 64 + sq as usize] = 1.0;
        }
    }

    encoded
}

/// Encodes a position given as a FEN string.
pub fn encode_fen(fen: &str) -> Result<Vec<f32>, PositionError> {
    Ok(encode_position(&Position::from_fen(fen)?))
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod features_tests;
