//! UCI move and position-command handling.
//!
//! `cozy-chess` encodes castling as the king capturing its own rook, while
//! standard UCI writes the king's two-square destination (`e1g1`). The
//! conversions here keep that detail out of the engine and the front end.

use cozy_chess::{File, Move, Piece, Square};

use crate::Position;

/// Serializes `mv` as a UCI move string.
pub fn move_to_uci(pos: &Position, mv: Move) -> String {
    let board = pos.board();
    if board.piece_on(mv.from) == Some(Piece::King) && board.color_on(mv.to) == board.color_on(mv.from)
    {
        // King takes own rook: castling. Emit the king's standard target.
        let file = if mv.to.file() > mv.from.file() {
            File::G
        } else {
            File::C
        };
        return format!("{}{}", mv.from, Square::new(file, mv.from.rank()));
    }

    let mut text = format!("{}{}", mv.from, mv.to);
    if let Some(piece) = mv.promotion {
        text.push(match piece {
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            _ => 'q',
        });
    }
    text
}

/// Parses a UCI move string and validates it against the legal moves of
/// `pos`. Returns `None` for unparseable or illegal input.
pub fn parse_uci_move(pos: &Position, text: &str) -> Option<Move> {
    let mut mv: Move = text.parse().ok()?;

    // A two-file king move is standard castling notation; rewrite it to
    // the king-takes-rook form the board expects.
    let files_moved = (mv.to.file() as i8 - mv.from.file() as i8).abs();
    if pos.board().piece_on(mv.from) == Some(Piece::King) && files_moved == 2 {
        let rook_file = if mv.to.file() > mv.from.file() {
            File::H
        } else {
            File::A
        };
        mv = Move {
            from: mv.from,
            to: Square::new(rook_file, mv.from.rank()),
            promotion: None,
        };
    }

    if pos.legal_moves().contains(&mv) {
        Some(mv)
    } else {
        None
    }
}

/// Applies a UCI `position` command body: `startpos | fen <fields>`,
/// optionally followed by `moves <uci>...`.
///
/// Illegal or unparseable moves in the list are skipped.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) {
    let rest = match args.split_first() {
        Some((&"startpos", tail)) => {
            *pos = Position::startpos();
            tail
        }
        Some((&"fen", tail)) => {
            let end = tail.iter().position(|&t| t == "moves").unwrap_or(tail.len());
            match Position::from_fen(&tail[..end].join(" ")) {
                Ok(parsed) => *pos = parsed,
                Err(_) => *pos = Position::startpos(),
            }
            &tail[end..]
        }
        _ => {
            *pos = Position::startpos();
            &[]
        }
    };

    if let Some((&"moves", moves)) = rest.split_first() {
        for text in moves {
            if let Some(mv) = parse_uci_move(pos, text) {
                pos.make_move(mv);
            }
        }
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
