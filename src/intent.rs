use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::piece::{Piece, PieceKind};


// A move as read off the drag gesture, before any classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug, new)]
pub struct ProposedMove {
    pub from: Coord,
    pub to: Coord,
    pub piece: Piece,
}

// The most recently server-confirmed standard move. Kept only for en passant detection.
#[derive(Clone, Copy, PartialEq, Eq, Debug, new, Serialize, Deserialize)]
pub struct LastMove {
    pub from: Coord,
    pub to: Coord,
    pub piece: Piece,
}

// A locally classified move, not authoritative until the server accepts it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveIntent {
    pub proposed: ProposedMove,
    pub is_capture: bool,
    pub is_en_passant: bool,
}

// True iff the gesture looks like castling: the king moving two files. Legality and rook
// relocation are the server's business.
pub fn is_castling_attempt(proposed: &ProposedMove) -> bool {
    proposed.piece.kind == PieceKind::King && (proposed.to.col - proposed.from.col).abs() == 2
}

// Classifies a proposed move against the remembered last move and the occupancy of the
// destination square. Pure: no DOM, no network.
//
// For a standard move the capture flag simply mirrors destination occupancy; the server
// has the final word. En passant requires every condition below at once:
//   - the mover is a pawn;
//   - the last confirmed move was an opposite-colored pawn advancing two ranks;
//   - both moves target the same file;
//   - the destination is the square directly behind the advanced pawn (one step further
//     in the mover's forward direction from the advanced pawn's rank);
//   - the gesture is a one-file diagonal step onto an empty square.
pub fn classify(
    proposed: ProposedMove, last_move: Option<&LastMove>, destination_occupied: bool,
) -> MoveIntent {
    let is_en_passant = is_en_passant_attempt(&proposed, last_move, destination_occupied);
    MoveIntent {
        proposed,
        is_capture: is_en_passant || destination_occupied,
        is_en_passant,
    }
}

fn is_en_passant_attempt(
    proposed: &ProposedMove, last_move: Option<&LastMove>, destination_occupied: bool,
) -> bool {
    if proposed.piece.kind != PieceKind::Pawn {
        return false;
    }
    let Some(last) = last_move else {
        return false;
    };
    if last.piece.kind != PieceKind::Pawn || last.piece.force == proposed.piece.force {
        return false;
    }
    let double_advance = (last.to.row - last.from.row).abs() == 2;
    let same_file = last.to.col == proposed.to.col;
    // The capture rank is derived, not hard-coded: the rank one step past the advanced
    // pawn, in the capturing pawn's own direction of travel.
    let behind_advanced_pawn =
        last.to.row.forward(proposed.piece.force) == Some(proposed.to.row);
    let diagonal_step = (proposed.to.col - proposed.from.col).abs() == 1;
    double_advance && same_file && behind_advanced_pawn && diagonal_step && !destination_occupied
}
