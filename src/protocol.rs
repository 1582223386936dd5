use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::intent::MoveIntent;
use crate::piece::Piece;


// Wire types for the four server endpoints. Field names follow the server's JSON
// (camelCase); responses come back partial, e.g. a rejection carries no board and the
// reset response carries no captured-piece lists.

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub from: String,
    pub to: String,
    pub piece: Piece,
    pub capture: bool,
    pub en_passant: bool,
}

impl MoveRequest {
    pub fn from_intent(intent: &MoveIntent) -> Self {
        MoveRequest {
            from: intent.proposed.from.to_algebraic(),
            to: intent.proposed.to.to_algebraic(),
            piece: intent.proposed.piece,
            capture: intent.is_capture,
            en_passant: intent.is_en_passant,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CastleRequest {
    pub from: String,
    pub to: String,
    pub piece: Piece,
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct TakenPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub success: bool,
    #[serde(default)]
    pub new_board_state: Option<Grid>,
    #[serde(default)]
    pub game_moves: Option<String>,
    #[serde(default)]
    pub taken_pieces: Option<TakenPieces>,
    #[serde(default)]
    pub message: Option<String>,
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::coord::Coord;
    use crate::force::Force;
    use crate::intent::ProposedMove;
    use crate::intent::classify;
    use crate::piece::PieceKind;

    #[test]
    fn move_request_json_shape() {
        let proposed = ProposedMove::new(
            Coord::from_algebraic("e2").unwrap(),
            Coord::from_algebraic("e4").unwrap(),
            Piece::new(Force::White, PieceKind::Pawn),
        );
        let request = MoveRequest::from_intent(&classify(proposed, None, false));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "from": "e2",
                "to": "e4",
                "piece": "wp",
                "capture": false,
                "enPassant": false,
            })
        );
    }

    #[test]
    fn rejection_response_parses_without_board() {
        let response: MoveResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid move"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.new_board_state, None);
        assert_eq!(response.message.as_deref(), Some("Invalid move"));
    }

    #[test]
    fn full_response_parses() {
        let json = serde_json::json!({
            "success": true,
            "message": "Move recorded",
            "newBoardState": serde_json::to_value(crate::grid::Grid::starting_position()).unwrap(),
            "gameMoves": "1. e4 e5",
            "takenPieces": {"white": ["wp"], "black": []},
        });
        let response: MoveResponse = serde_json::from_value(json).unwrap();
        assert!(response.success);
        assert_eq!(response.game_moves.as_deref(), Some("1. e4 e5"));
        let taken = response.taken_pieces.unwrap();
        assert_eq!(taken.white, vec![Piece::new(Force::White, PieceKind::Pawn)]);
        assert_eq!(taken.black, vec![]);
    }
}
