use super::*;

#[test]
fn test_move_to_uci() {
    assert_eq!(move_to_uci(Move::new(12, 28)), "e2e4");
    assert_eq!(move_to_uci(Move::promotion(52, 60, PieceKind::Queen)), "e7e8q");
    assert_eq!(move_to_uci(Move::promotion(11, 2, PieceKind::Knight)), "d2c1n");
}

#[test]
fn test_parse_castle_sets_flag() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "e1c1").unwrap();
    assert!(mv.is_castle);
}

#[test]
fn test_parse_promotion_defaults_to_queen() {
    let pos = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert_eq!(
        parse_uci_move(&pos, "a7a8").and_then(|m| m.promo),
        Some(PieceKind::Queen)
    );
    assert_eq!(
        parse_uci_move(&pos, "a7a8r").and_then(|m| m.promo),
        Some(PieceKind::Rook)
    );
}

#[test]
fn test_parse_rejects_illegal_and_malformed() {
    let pos = Position::startpos();
    assert_eq!(parse_uci_move(&pos, "e2e5"), None);
    assert_eq!(parse_uci_move(&pos, "e2"), None);
    assert_eq!(parse_uci_move(&pos, "e2e4q"), None);
}

#[test]
fn test_set_position_startpos_with_moves() {
    let mut pos = Position::startpos();
    set_position_from_uci(&mut pos, &["startpos", "moves", "e2e4", "e7e5"]).unwrap();
    assert_eq!(
        pos.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
    );
}

#[test]
fn test_set_position_from_fen() {
    let mut pos = Position::startpos();
    let fen = "8/P6k/8/8/8/8/8/K7 w - - 0 1";
    let mut args = vec!["fen"];
    args.extend(fen.split_whitespace());
    args.extend(["moves", "a7a8q"]);
    set_position_from_uci(&mut pos, &args).unwrap();
    assert_eq!(pos.to_fen(), "Q7/7k/8/8/8/8/8/K7 b - - 0 1");
}

#[test]
fn test_set_position_errors_leave_position_untouched() {
    let mut pos = Position::startpos();
    pos.push_move(Move::new(12, 28));
    let before = pos.clone();

    assert_eq!(
        set_position_from_uci(&mut pos, &["startpos", "moves", "e2e5"]),
        Err(UciError::IllegalMove("e2e5".to_string()))
    );
    assert_eq!(set_position_from_uci(&mut pos, &[]), Err(UciError::MissingSetup));
    assert!(matches!(
        set_position_from_uci(&mut pos, &["fen", "bad"]),
        Err(UciError::Fen(_))
    ));
    assert_eq!(pos, before);
}
