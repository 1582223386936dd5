use std::fmt;

use derive_new::new;
use enum_map::Enum;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::force::Force;
use crate::util::as_two_chars;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    // Type letter used in two-character wire piece codes.
    pub fn to_wire_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_wire_char(ch: char) -> Option<Self> {
        match ch {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}


// A concrete piece, e.g. the white queen. Serialized as the two-character color+type code
// used by the server and by DOM element ids ("wq").
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, new)]
pub struct Piece {
    pub force: Force,
    pub kind: PieceKind,
}

impl Piece {
    pub fn to_wire(self) -> String {
        format!("{}{}", self.force.to_wire_char(), self.kind.to_wire_char())
    }

    pub fn from_wire(code: &str) -> Option<Self> {
        let (force, kind) = as_two_chars(code)?;
        Some(Piece {
            force: Force::from_wire_char(force)?,
            kind: PieceKind::from_wire_char(kind)?,
        })
    }

    // Path of the SVG asset served by the web app for this piece.
    pub fn svg_path(self) -> String { format!("/static/svg/pieces/{}.svg", self.to_wire()) }
}

pub fn piece_to_pictogram(piece: Piece) -> char {
    use self::PieceKind::*;
    use Force::*;
    match (piece.force, piece.kind) {
        (White, Pawn) => '♙',
        (White, Knight) => '♘',
        (White, Bishop) => '♗',
        (White, Rook) => '♖',
        (White, Queen) => '♕',
        (White, King) => '♔',
        (Black, Pawn) => '♟',
        (Black, Knight) => '♞',
        (Black, Bishop) => '♝',
        (Black, Rook) => '♜',
        (Black, Queen) => '♛',
        (Black, King) => '♚',
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.to_wire()) }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PieceVisitor;
        impl Visitor<'_> for PieceVisitor {
            type Value = Piece;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a two-character piece code like \"wp\"")
            }
            fn visit_str<E: de::Error>(self, v: &str) -> Result<Piece, E> {
                Piece::from_wire(v)
                    .ok_or_else(|| E::custom(format!("invalid piece code: {:?}", v)))
            }
        }
        deserializer.deserialize_str(PieceVisitor)
    }
}


#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn wire_code_round_trip() {
        for (force, kind) in Force::iter().cartesian_product(PieceKind::iter()) {
            let piece = Piece::new(force, kind);
            assert_eq!(Piece::from_wire(&piece.to_wire()), Some(piece));
        }
    }

    #[test]
    fn bad_wire_codes_rejected() {
        assert_eq!(Piece::from_wire(""), None);
        assert_eq!(Piece::from_wire("w"), None);
        assert_eq!(Piece::from_wire("wx"), None);
        assert_eq!(Piece::from_wire("gp"), None);
        assert_eq!(Piece::from_wire("wpp"), None);
    }

    #[test]
    fn serde_as_wire_string() {
        let piece = Piece::new(Force::Black, PieceKind::Knight);
        assert_eq!(serde_json::to_string(&piece).unwrap(), "\"bn\"");
        assert_eq!(serde_json::from_str::<Piece>("\"bn\"").unwrap(), piece);
        assert!(serde_json::from_str::<Piece>("\"zz\"").is_err());
    }
}
