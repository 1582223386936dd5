use std::fmt;
use std::ops;

use ndarray::{Array, Array2};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::coord::{Col, Coord, Row, NUM_COLS, NUM_ROWS};
use crate::force::Force;
use crate::piece::{Piece, PieceKind};


// The board as last confirmed by the server. At most one piece per square.
//
// Wire format (shared with the server): an 8×8 nested array, row 0 = rank 8 down to
// row 7 = rank 1, column 0 = file a; each cell is a two-character piece code or `null`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    data: Array2<Option<Piece>>,
}

impl Grid {
    pub fn empty() -> Self {
        Grid { data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None) }
    }

    pub fn starting_position() -> Self {
        use PieceKind::*;
        let mut grid = Grid::empty();
        let back_row = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (col, kind) in Col::all().zip(back_row) {
            grid[Coord::new(Row::_1, col)] = Some(Piece::new(Force::White, kind));
            grid[Coord::new(Row::_8, col)] = Some(Piece::new(Force::Black, kind));
        }
        for col in Col::all() {
            grid[Coord::new(Row::_2, col)] = Some(Piece::new(Force::White, Pawn));
            grid[Coord::new(Row::_7, col)] = Some(Piece::new(Force::Black, Pawn));
        }
        grid
    }

    pub fn is_empty_at(&self, pos: Coord) -> bool { self[pos].is_none() }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|pos| self[pos].map(|piece| (pos, piece)))
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<Piece>;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.data[coord_to_index(pos)]
    }
}

// Wire rows run from rank 8 down, while `Row` is rank-based, hence the flip.
fn coord_to_index(pos: Coord) -> [usize; 2] {
    [
        (NUM_ROWS - 1 - pos.row.to_zero_based()) as usize,
        pos.col.to_zero_based() as usize,
    ]
}

fn index_to_coord(wire_row: usize, wire_col: usize) -> Coord {
    Coord::new(
        Row::from_zero_based(NUM_ROWS - 1 - wire_row as u8),
        Col::from_zero_based(wire_col as u8),
    )
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(NUM_ROWS as usize))?;
        for wire_row in 0..NUM_ROWS as usize {
            let row: Vec<Option<Piece>> = (0..NUM_COLS as usize)
                .map(|wire_col| self[index_to_coord(wire_row, wire_col)])
                .collect();
            rows.serialize_element(&row)?;
        }
        rows.end()
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GridVisitor;
        impl<'de> Visitor<'de> for GridVisitor {
            type Value = Grid;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an 8×8 matrix of piece codes and nulls")
            }
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Grid, A::Error> {
                let mut grid = Grid::empty();
                for wire_row in 0..NUM_ROWS as usize {
                    let row: Vec<Option<Piece>> = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(wire_row, &self))?;
                    if row.len() != NUM_COLS as usize {
                        return Err(de::Error::custom(format!(
                            "expected {} cells in row {}, got {}",
                            NUM_COLS,
                            wire_row,
                            row.len()
                        )));
                    }
                    for (wire_col, cell) in row.into_iter().enumerate() {
                        grid[index_to_coord(wire_row, wire_col)] = cell;
                    }
                }
                if seq.next_element::<Vec<Option<Piece>>>()?.is_some() {
                    return Err(de::Error::custom("expected exactly 8 rows"));
                }
                Ok(grid)
            }
        }
        deserializer.deserialize_seq(GridVisitor)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..NUM_ROWS).rev().map(Row::from_zero_based) {
            for col in Col::all() {
                match self[Coord::new(row, col)] {
                    Some(piece) => write!(f, "{} ", piece.to_wire())?,
                    None => write!(f, ".. ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
