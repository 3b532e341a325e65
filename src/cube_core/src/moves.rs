//! Move notation and the per-move sticker permutations.

use std::{fmt, str::FromStr, sync::LazyLock};

use crate::{
    CubeError, Face, Permutation, STICKER_COUNT,
    cycle::EdgeCycle,
    grid::{Faces, SIZE, rotate_clockwise, rotate_counterclockwise},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    /// The quarter turns, in the order scrambles draw from.
    pub const QUARTER_TURNS: [Move; 12] = {
        let mut moves = [Move::new(Face::U, Turn::Clockwise); 12];

        let mut i = 0;
        while i < Face::ALL.len() {
            moves[i * 2] = Move::new(Face::ALL[i], Turn::Clockwise);
            moves[i * 2 + 1] = Move::new(Face::ALL[i], Turn::CounterClockwise);
            i += 1;
        }

        moves
    };

    /// Every move token: the quarter turns followed by the double turns.
    pub const ALL: [Move; 18] = {
        let mut moves = [Move::new(Face::U, Turn::Clockwise); 18];

        let mut i = 0;
        while i < Move::QUARTER_TURNS.len() {
            moves[i] = Move::QUARTER_TURNS[i];
            i += 1;
        }

        let mut i = 0;
        while i < Face::ALL.len() {
            moves[12 + i] = Move::new(Face::ALL[i], Turn::Double);
            i += 1;
        }

        moves
    };

    #[must_use]
    pub const fn new(face: Face, turn: Turn) -> Move {
        Move { face, turn }
    }

    #[must_use]
    pub const fn inverse(self) -> Move {
        let turn = match self.turn {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        };
        Move::new(self.face, turn)
    }

    #[must_use]
    pub const fn is_quarter_turn(self) -> bool {
        !matches!(self.turn, Turn::Double)
    }

    /// The quarter turn this move is made of, and how many times it is applied.
    #[must_use]
    pub const fn quarter_turns(self) -> (Move, usize) {
        match self.turn {
            Turn::Double => (Move::new(self.face, Turn::Clockwise), 2),
            _ => (self, 1),
        }
    }

    /// Perform the move directly on a set of faces: turn the face itself,
    /// then carry the border strips of its neighbours around. Double turns
    /// do this twice.
    pub fn apply_to_faces<T: Copy>(self, faces: &mut Faces<T>) {
        let (quarter, count) = self.quarter_turns();
        let clockwise = quarter.turn == Turn::Clockwise;
        let edges = EdgeCycle::for_quarter_turn(quarter.face, clockwise);

        for _ in 0..count {
            let face = &mut faces[quarter.face.index()];
            *face = if clockwise {
                rotate_clockwise(face)
            } else {
                rotate_counterclockwise(face)
            };

            edges.apply(faces);
        }
    }

    /// The sticker permutation performed by this move.
    #[must_use]
    pub fn permutation(self) -> Permutation {
        let (quarter, count) = self.quarter_turns();
        let quarter = quarter_turn_permutation(quarter);

        let mut permutation = quarter.clone();
        for _ in 1..count {
            permutation.compose(quarter);
        }
        permutation
    }
}

/// Index of a sticker in the flat 54 slot layout.
#[must_use]
pub const fn slot(face: Face, row: usize, col: usize) -> usize {
    face.index() * SIZE * SIZE + row * SIZE + col
}

static QUARTER_TURN_TABLE: LazyLock<Vec<Permutation>> = LazyLock::new(|| {
    Move::QUARTER_TURNS
        .iter()
        .map(|&quarter| derive_permutation(quarter))
        .collect()
});

/// Run the quarter turn over a cube whose stickers are their own slot numbers;
/// whatever label lands in a slot is where that slot's sticker comes from.
fn derive_permutation(quarter: Move) -> Permutation {
    let mut slots: Faces<usize> = Face::ALL.map(|face| {
        let mut grid = [[0; SIZE]; SIZE];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = slot(face, row, col);
            }
        }
        grid
    });

    quarter.apply_to_faces(&mut slots);

    let mapping: Vec<usize> = slots.iter().flatten().flatten().copied().collect();
    debug_assert_eq!(mapping.len(), STICKER_COUNT);

    Permutation::from_mapping(mapping)
}

pub(crate) fn quarter_turn_permutation(quarter: Move) -> &'static Permutation {
    debug_assert!(quarter.is_quarter_turn());

    // Same layout as `Move::QUARTER_TURNS`
    let index = quarter.face.index() * 2 + usize::from(quarter.turn == Turn::CounterClockwise);
    &QUARTER_TURN_TABLE[index]
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let face = chars.next().and_then(Face::from_letter);
        let turn = match (chars.next(), chars.next()) {
            (None, _) => Some(Turn::Clockwise),
            (Some('\''), None) => Some(Turn::CounterClockwise),
            (Some('2'), None) => Some(Turn::Double),
            _ => None,
        };

        match (face, turn) {
            (Some(face), Some(turn)) => Ok(Move::new(face, turn)),
            _ => Err(CubeError::InvalidMove(s.to_owned())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = match self.turn {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        };
        write!(f, "{}{suffix}", self.face)
    }
}
