use itertools::Itertools;
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use parlor_chess::*;


fn coord(label: &str) -> Coord { Coord::from_algebraic(label).unwrap() }

fn piece(code: &str) -> Piece { Piece::from_wire(code).unwrap() }

fn proposed(from: &str, to: &str, piece_code: &str) -> ProposedMove {
    ProposedMove::new(coord(from), coord(to), piece(piece_code))
}

// The scenario from the manual test script: white pawn e2-e4 just confirmed, black pawn
// on f4 takes en passant on e3.
fn en_passant_setup() -> (ProposedMove, LastMove) {
    let last = LastMove::new(coord("e2"), coord("e4"), piece("wp"));
    (proposed("f4", "e3", "bp"), last)
}


#[test]
fn castling_is_king_moving_two_files() {
    assert!(is_castling_attempt(&proposed("e1", "g1", "wk")));
    assert!(is_castling_attempt(&proposed("e1", "c1", "wk")));
    assert!(is_castling_attempt(&proposed("e8", "g8", "bk")));
    assert!(is_castling_attempt(&proposed("e8", "c8", "bk")));
}

#[test]
fn castling_truth_table_exhaustive() {
    for (from, to) in Coord::all().cartesian_product(Coord::all()) {
        for (force, kind) in Force::iter().cartesian_product(PieceKind::iter()) {
            let mv = ProposedMove::new(from, to, Piece::new(force, kind));
            let expected = kind == PieceKind::King && (to.col - from.col).abs() == 2;
            assert_eq!(is_castling_attempt(&mv), expected, "{:?}", mv);
        }
    }
}

#[test]
fn rook_two_files_is_not_castling() {
    assert!(!is_castling_attempt(&proposed("a1", "c1", "wr")));
}

#[test]
fn en_passant_detected() {
    let (mv, last) = en_passant_setup();
    let intent = classify(mv, Some(&last), false);
    assert!(intent.is_en_passant);
    assert!(intent.is_capture);
}

#[test]
fn en_passant_white_capturing() {
    let last = LastMove::new(coord("d7"), coord("d5"), piece("bp"));
    let intent = classify(proposed("e5", "d6", "wp"), Some(&last), false);
    assert!(intent.is_en_passant);
    assert!(intent.is_capture);
}

#[test]
fn en_passant_needs_pawn_mover() {
    let (mv, last) = en_passant_setup();
    let knight_mv = ProposedMove::new(mv.from, mv.to, piece("bn"));
    let intent = classify(knight_mv, Some(&last), false);
    assert!(!intent.is_en_passant);
}

#[test]
fn en_passant_needs_last_move() {
    let (mv, _) = en_passant_setup();
    assert!(!classify(mv, None, false).is_en_passant);
}

#[test]
fn en_passant_needs_opposite_colored_pawn() {
    let (mv, _) = en_passant_setup();
    let own_pawn = LastMove::new(coord("e2"), coord("e4"), piece("bp"));
    assert!(!classify(mv, Some(&own_pawn), false).is_en_passant);
    let last_knight = LastMove::new(coord("e2"), coord("e4"), piece("wn"));
    assert!(!classify(mv, Some(&last_knight), false).is_en_passant);
}

#[test]
fn en_passant_needs_double_advance() {
    let (mv, _) = en_passant_setup();
    let single_step = LastMove::new(coord("e3"), coord("e4"), piece("wp"));
    assert!(!classify(mv, Some(&single_step), false).is_en_passant);
}

#[test]
fn en_passant_needs_same_destination_file() {
    let (_, last) = en_passant_setup();
    // Diagonal step away from the advanced pawn's file.
    let wrong_file = proposed("f4", "g3", "bp");
    assert!(!classify(wrong_file, Some(&last), false).is_en_passant);
}

#[test]
fn en_passant_needs_rank_behind_advanced_pawn() {
    let (_, last) = en_passant_setup();
    // Capture rank is derived from the last move's destination, so a pawn dropped onto
    // any other rank of the e-file does not qualify.
    let wrong_rank = proposed("f5", "e4", "bp");
    assert!(!classify(wrong_rank, Some(&last), false).is_en_passant);
}

#[test]
fn en_passant_needs_diagonal_step() {
    let (_, last) = en_passant_setup();
    let straight = proposed("e4", "e3", "bp");
    assert!(!classify(straight, Some(&last), false).is_en_passant);
}

#[test]
fn en_passant_needs_empty_destination() {
    let (mv, last) = en_passant_setup();
    let intent = classify(mv, Some(&last), true);
    assert!(!intent.is_en_passant);
    // Occupied destination still reads as a standard capture attempt.
    assert!(intent.is_capture);
}

#[test]
fn standard_capture_mirrors_destination_occupancy() {
    let mv = proposed("e4", "d5", "wp");
    assert!(classify(mv, None, true).is_capture);
    assert!(!classify(mv, None, false).is_capture);
}
