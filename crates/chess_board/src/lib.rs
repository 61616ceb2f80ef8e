//! Board state for the engine, backed by `cozy-chess`.
//!
//! The engine never implements chess rules itself: move generation,
//! legality, and board mutation all come from `cozy-chess`. This crate
//! wraps a [`cozy_chess::Board`] in a [`Position`] that adds the one thing
//! search needs on top: an undo stack, so a depth-first tree walk can
//! apply and take back moves with a guarantee that the original state is
//! restored on every path.

pub mod uci;

use thiserror::Error;

pub use cozy_chess::{BitBoard, Board, Color, File, Move, Piece, Rank, Square};
pub use uci::{move_to_uci, parse_uci_move, set_position_from_uci};

/// Dark squares, for the same-colored-bishops draw check.
const DARK_SQUARES: BitBoard = BitBoard(0xAA55_AA55_AA55_AA55);

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] cozy_chess::FenParseError),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    FiftyMoveDraw,
}

/// A mutable game state with apply/undo primitives.
///
/// Callers own the position; search borrows it, pushes moves while
/// descending and pops them while unwinding. Undo restores the exact
/// prior state, snapshots are kept per applied move.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    stack: Vec<Board>,
}

impl Position {
    /// The standard starting position.
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
            stack: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        Ok(Self {
            board: Board::from_fen(fen, false)?,
            stack: Vec::new(),
        })
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Read-only view of the underlying board, for evaluators and encoders.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Fullmove counter, starting at 1 and incremented after Black moves.
    pub fn fullmove_number(&self) -> u16 {
        self.board.fullmove_number()
    }

    pub fn halfmove_clock(&self) -> u8 {
        self.board.halfmove_clock()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// All legal moves for the side to move, in generation order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|mvs| {
            moves.extend(mvs);
            false
        });
        moves
    }

    /// Applies `mv` in place.
    ///
    /// `mv` must come from [`Position::legal_moves`]; applying an illegal
    /// move is a caller bug and panics in the underlying board.
    pub fn make_move(&mut self, mv: Move) {
        self.stack.push(self.board.clone());
        self.board.play(mv);
    }

    /// Takes back the most recent applied move, restoring the exact prior
    /// state. Does nothing when no move has been applied.
    pub fn unmake_move(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.board = prev;
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Terminal state of the game, or `None` while play continues.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.legal_moves().is_empty() {
            return Some(if self.in_check() {
                let winner = match self.board.side_to_move() {
                    Color::White => Color::Black,
                    Color::Black => Color::White,
                };
                GameOutcome::Checkmate { winner }
            } else {
                GameOutcome::Stalemate
            });
        }
        if self.insufficient_material() {
            return Some(GameOutcome::InsufficientMaterial);
        }
        if self.board.halfmove_clock() >= 100 {
            return Some(GameOutcome::FiftyMoveDraw);
        }
        None
    }

    /// Neither side can force mate: bare kings, a lone minor piece, or
    /// king and bishop each with both bishops on the same square color.
    fn insufficient_material(&self) -> bool {
        let board = &self.board;
        let heavy =
            board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let bishops = board.pieces(Piece::Bishop);
        let minors = board.pieces(Piece::Knight) | bishops;
        match minors.len() {
            0 | 1 => true,
            2 => {
                bishops.len() == 2
                    && (bishops & board.colors(Color::White)).len() == 1
                    && (bishops & DARK_SQUARES).len() != 1
            }
            _ => false,
        }
    }
}
