use super::*;
use crate::{Color, Position, Square};

#[test]
fn parses_a_simple_pawn_move() {
    let pos = Position::startpos();
    let mv = parse_uci_move(&pos, "e2e4").unwrap();
    assert_eq!(mv.from, Square::E2);
    assert_eq!(mv.to, Square::E4);
    assert_eq!(move_to_uci(&pos, mv), "e2e4");
}

#[test]
fn rejects_illegal_or_garbage_input() {
    let pos = Position::startpos();
    assert!(parse_uci_move(&pos, "e2e5").is_none());
    assert!(parse_uci_move(&pos, "e7e5").is_none());
    assert!(parse_uci_move(&pos, "bestmove").is_none());
    assert!(parse_uci_move(&pos, "").is_none());
}

#[test]
fn round_trips_promotions() {
    let pos = Position::from_fen("8/P7/8/8/8/8/k7/7K w - - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "a7a8q").unwrap();
    assert_eq!(mv.promotion, Some(Piece::Queen));
    assert_eq!(move_to_uci(&pos, mv), "a7a8q");

    let under = parse_uci_move(&pos, "a7a8n").unwrap();
    assert_eq!(under.promotion, Some(Piece::Knight));
    assert_eq!(move_to_uci(&pos, under), "a7a8n");
}

#[test]
fn converts_castling_between_notations() {
    let pos =
        Position::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();

    // Standard notation in, king-takes-rook internally, standard back out.
    let kingside = parse_uci_move(&pos, "e1g1").unwrap();
    assert_eq!(kingside.to, Square::H1);
    assert_eq!(move_to_uci(&pos, kingside), "e1g1");

    let queenside = parse_uci_move(&pos, "e1c1").unwrap();
    assert_eq!(queenside.to, Square::A1);
    assert_eq!(move_to_uci(&pos, queenside), "e1c1");
}

#[test]
fn set_position_startpos_with_moves() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e7e5", "g1f3"]);
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.fullmove_number(), 2);
}

#[test]
fn set_position_skips_illegal_moves() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e2e4", "e7e5"]);
    // The repeated white move is dropped; e7e5 still applies.
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.fullmove_number(), 2);
}

#[test]
fn set_position_from_fen() {
    let fen = "k7/8/8/8/8/8/8/K6R w - - 0 1";
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["fen", "k7/8/8/8/8/8/8/K6R", "w", "-", "-", "0", "1"]);
    assert_eq!(pos.fen(), fen);

    set_position_from_uci(
        &mut pos,
        &["fen", "k7/8/8/8/8/8/8/K6R", "w", "-", "-", "0", "1", "moves", "h1h8"],
    );
    assert!(pos.in_check());
}

#[test]
fn set_position_falls_back_to_startpos_on_bad_fen() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["fen", "not", "a", "position"]);
    assert_eq!(pos.fen(), Position::startpos().fen());
}
