use enum_map::EnumMap;
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::force::Force;
use crate::piece::{Piece, PieceKind};


// How many pieces of each code one panel shows. Always folded fresh from the server's
// captured-piece list; nothing is accumulated across calls.
pub type CapturedTally = EnumMap<Force, EnumMap<PieceKind, usize>>;

pub fn captured_tally(captured: &[Piece]) -> CapturedTally {
    let mut tally = CapturedTally::default();
    for piece in captured {
        tally[piece.force][piece.kind] += 1;
    }
    tally
}

// Non-zero tally entries in a stable order, white pieces first, pawn through king.
pub fn tally_entries(tally: &CapturedTally) -> impl Iterator<Item = (Piece, usize)> + '_ {
    Force::iter()
        .cartesian_product(PieceKind::iter())
        .map(|(force, kind)| (Piece::new(force, kind), tally[force][kind]))
        .filter(|&(_, count)| count > 0)
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn piece(code: &str) -> Piece { Piece::from_wire(code).unwrap() }

    #[test]
    fn counts_by_piece_code() {
        let tally = captured_tally(&[piece("wp"), piece("bn"), piece("wp")]);
        assert_eq!(tally[Force::White][PieceKind::Pawn], 2);
        assert_eq!(tally[Force::Black][PieceKind::Knight], 1);
        assert_eq!(tally[Force::Black][PieceKind::Pawn], 0);
    }

    #[test]
    fn pure_function_of_input() {
        let list = vec![piece("wp"), piece("wp")];
        let first = captured_tally(&list);
        let _ = captured_tally(&[piece("bq")]);
        assert_eq!(captured_tally(&list), first);
    }

    #[test]
    fn empty_list_empty_tally() {
        assert_eq!(captured_tally(&[]), CapturedTally::default());
        assert_eq!(tally_entries(&captured_tally(&[])).count(), 0);
    }

    #[test]
    fn entries_in_stable_order() {
        let entries: Vec<_> =
            tally_entries(&captured_tally(&[piece("bq"), piece("wp"), piece("wn")])).collect();
        assert_eq!(entries, vec![(piece("wp"), 1), (piece("wn"), 1), (piece("bq"), 1)]);
    }
}
