#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod coord;
pub mod force;
pub mod grid;
pub mod intent;
pub mod piece;
pub mod protocol;
pub mod session;
pub mod tally;
pub mod util;

pub use coord::{Col, Coord, Row};
pub use force::Force;
pub use grid::Grid;
pub use intent::{classify, is_castling_attempt, LastMove, MoveIntent, ProposedMove};
pub use piece::{piece_to_pictogram, Piece, PieceKind};
pub use protocol::{CastleRequest, MoveRequest, MoveResponse, TakenPieces};
pub use session::{GameSessionState, UpdateLock};
pub use tally::{captured_tally, tally_entries, CapturedTally};
