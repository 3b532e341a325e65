//! Moving the border stickers around a turning face.
//!
//! U and D use a generic four strip shift since their neighbours all share a
//! row. The remaining faces mix rows and columns with different reversal
//! directions, so each of their quarter turns is spelled out as four explicit
//! transfers.

use crate::{
    Face,
    Face::{B as BACK, D as DOWN, F as FRONT, L as LEFT, R as RIGHT, U as UP},
    grid::{Faces, SIZE},
};

/// A full row or column of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub line: Line,
}

impl Strip {
    #[must_use]
    pub const fn row(face: Face, index: usize) -> Strip {
        Strip {
            face,
            line: Line::Row(index),
        }
    }

    #[must_use]
    pub const fn column(face: Face, index: usize) -> Strip {
        Strip {
            face,
            line: Line::Column(index),
        }
    }

    /// Read the three stickers, top to bottom or left to right.
    #[must_use]
    pub fn read<T: Copy>(self, faces: &Faces<T>) -> [T; SIZE] {
        let grid = &faces[self.face.index()];
        match self.line {
            Line::Row(row) => grid[row],
            Line::Column(col) => [grid[0][col], grid[1][col], grid[2][col]],
        }
    }

    pub fn write<T: Copy>(self, faces: &mut Faces<T>, values: [T; SIZE]) {
        let grid = &mut faces[self.face.index()];
        match self.line {
            Line::Row(row) => grid[row] = values,
            Line::Column(col) => {
                for (row, value) in grid.iter_mut().zip(values) {
                    row[col] = value;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    /// Strip `k` receives strip `k + 1`.
    Forward,
    /// Strip `k` receives strip `k - 1`.
    Reverse,
}

/// Shift four strips one place around the cycle. Each strip is given as a
/// face and an index that selects a row, or a column when `vertical` is set.
pub fn cycle_strips<T: Copy>(
    faces: &mut Faces<T>,
    strips: &[(Face, usize); 4],
    vertical: bool,
    direction: CycleDirection,
) {
    let strips = strips.map(|(face, index)| {
        if vertical {
            Strip::column(face, index)
        } else {
            Strip::row(face, index)
        }
    });
    // Every strip is read before any is written
    let buffered = strips.map(|strip| strip.read(faces));

    for (k, strip) in strips.iter().enumerate() {
        let source = match direction {
            CycleDirection::Forward => (k + 1) % strips.len(),
            CycleDirection::Reverse => (k + strips.len() - 1) % strips.len(),
        };
        strip.write(faces, buffered[source]);
    }
}

/// Copy one strip onto another, optionally reversing sticker order so that
/// source index `i` lands on destination index `2 - i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripTransfer {
    pub from: Strip,
    pub to: Strip,
    pub reversed: bool,
}

const fn straight(from: Strip, to: Strip) -> StripTransfer {
    StripTransfer {
        from,
        to,
        reversed: false,
    }
}

const fn reversed(from: Strip, to: Strip) -> StripTransfer {
    StripTransfer {
        from,
        to,
        reversed: true,
    }
}

/// Perform four transfers, all reading from the state before any of them.
pub fn transfer_strips<T: Copy>(faces: &mut Faces<T>, transfers: &[StripTransfer; 4]) {
    let buffered = transfers.map(|transfer| transfer.from.read(faces));

    for (transfer, mut values) in transfers.iter().zip(buffered) {
        if transfer.reversed {
            values.reverse();
        }
        transfer.to.write(faces, values);
    }
}

const fn row(face: Face, index: usize) -> Strip {
    Strip::row(face, index)
}

const fn col(face: Face, index: usize) -> Strip {
    Strip::column(face, index)
}

const R_CW: [StripTransfer; 4] = [
    straight(col(DOWN, 2), col(FRONT, 2)),
    straight(col(FRONT, 2), col(UP, 2)),
    reversed(col(UP, 2), col(BACK, 0)),
    reversed(col(BACK, 0), col(DOWN, 2)),
];

const R_CCW: [StripTransfer; 4] = [
    reversed(col(BACK, 0), col(UP, 2)),
    straight(col(UP, 2), col(FRONT, 2)),
    straight(col(FRONT, 2), col(DOWN, 2)),
    reversed(col(DOWN, 2), col(BACK, 0)),
];

const F_CW: [StripTransfer; 4] = [
    reversed(col(LEFT, 2), row(UP, 2)),
    straight(row(UP, 2), col(RIGHT, 0)),
    reversed(col(RIGHT, 0), row(DOWN, 0)),
    straight(row(DOWN, 0), col(LEFT, 2)),
];

const F_CCW: [StripTransfer; 4] = [
    reversed(row(UP, 2), col(LEFT, 2)),
    straight(col(LEFT, 2), row(DOWN, 0)),
    reversed(row(DOWN, 0), col(RIGHT, 0)),
    straight(col(RIGHT, 0), row(UP, 2)),
];

const L_CW: [StripTransfer; 4] = [
    straight(col(UP, 0), col(FRONT, 0)),
    straight(col(FRONT, 0), col(DOWN, 0)),
    reversed(col(DOWN, 0), col(BACK, 2)),
    reversed(col(BACK, 2), col(UP, 0)),
];

const L_CCW: [StripTransfer; 4] = [
    straight(col(FRONT, 0), col(UP, 0)),
    straight(col(DOWN, 0), col(FRONT, 0)),
    reversed(col(BACK, 2), col(DOWN, 0)),
    reversed(col(UP, 0), col(BACK, 2)),
];

const B_CW: [StripTransfer; 4] = [
    straight(col(RIGHT, 2), row(UP, 0)),
    reversed(row(DOWN, 2), col(RIGHT, 2)),
    straight(col(LEFT, 0), row(DOWN, 2)),
    reversed(row(UP, 0), col(LEFT, 0)),
];

const B_CCW: [StripTransfer; 4] = [
    straight(row(UP, 0), col(RIGHT, 2)),
    reversed(col(RIGHT, 2), row(DOWN, 2)),
    straight(row(DOWN, 2), col(LEFT, 0)),
    reversed(col(LEFT, 0), row(UP, 0)),
];

/// Top rows of the faces around U, in the order the U cycle visits them.
const U_STRIPS: [(Face, usize); 4] = [(LEFT, 0), (FRONT, 0), (RIGHT, 0), (BACK, 0)];

/// Bottom rows of the faces around D.
const D_STRIPS: [(Face, usize); 4] = [(FRONT, 2), (LEFT, 2), (BACK, 2), (RIGHT, 2)];

/// How the border stickers move for one quarter turn.
#[derive(Debug, Clone, Copy)]
pub enum EdgeCycle {
    Shift {
        strips: &'static [(Face, usize); 4],
        direction: CycleDirection,
    },
    Transfer(&'static [StripTransfer; 4]),
}

impl EdgeCycle {
    #[must_use]
    pub fn for_quarter_turn(face: Face, clockwise: bool) -> EdgeCycle {
        let shift = |strips, clockwise| EdgeCycle::Shift {
            strips,
            direction: if clockwise {
                CycleDirection::Forward
            } else {
                CycleDirection::Reverse
            },
        };

        match (face, clockwise) {
            (Face::U, clockwise) => shift(&U_STRIPS, clockwise),
            (Face::D, clockwise) => shift(&D_STRIPS, clockwise),
            (Face::R, true) => EdgeCycle::Transfer(&R_CW),
            (Face::R, false) => EdgeCycle::Transfer(&R_CCW),
            (Face::F, true) => EdgeCycle::Transfer(&F_CW),
            (Face::F, false) => EdgeCycle::Transfer(&F_CCW),
            (Face::L, true) => EdgeCycle::Transfer(&L_CW),
            (Face::L, false) => EdgeCycle::Transfer(&L_CCW),
            (Face::B, true) => EdgeCycle::Transfer(&B_CW),
            (Face::B, false) => EdgeCycle::Transfer(&B_CCW),
        }
    }

    pub fn apply<T: Copy>(self, faces: &mut Faces<T>) {
        match self {
            EdgeCycle::Shift { strips, direction } => {
                cycle_strips(faces, strips, false, direction);
            }
            EdgeCycle::Transfer(transfers) => transfer_strips(faces, transfers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::uniform;

    /// Every sticker holds its own (face, row, col) coordinate.
    fn labelled() -> Faces<(Face, usize, usize)> {
        Face::ALL.map(|face| {
            let mut grid = uniform((face, 0, 0));
            for (r, row) in grid.iter_mut().enumerate() {
                for (c, sticker) in row.iter_mut().enumerate() {
                    *sticker = (face, r, c);
                }
            }
            grid
        })
    }

    #[test]
    fn strips_read_and_write() {
        let mut faces = labelled();
        assert_eq!(
            Strip::column(Face::F, 2).read(&faces),
            [(Face::F, 0, 2), (Face::F, 1, 2), (Face::F, 2, 2)]
        );

        let row = Strip::row(Face::U, 1).read(&faces);
        Strip::column(Face::D, 0).write(&mut faces, row);
        assert_eq!(faces[Face::D.index()][2][0], (Face::U, 1, 2));
    }

    #[test]
    fn forward_shift_pulls_from_next_strip() {
        let mut faces = labelled();
        cycle_strips(&mut faces, &U_STRIPS, false, CycleDirection::Forward);

        assert_eq!(faces[Face::L.index()][0][1], (Face::F, 0, 1));
        assert_eq!(faces[Face::F.index()][0][1], (Face::R, 0, 1));
        assert_eq!(faces[Face::R.index()][0][1], (Face::B, 0, 1));
        // The last strip receives the buffered first strip
        assert_eq!(faces[Face::B.index()][0][1], (Face::L, 0, 1));
    }

    #[test]
    fn reverse_shift_undoes_forward_shift() {
        let mut faces = labelled();
        cycle_strips(&mut faces, &D_STRIPS, true, CycleDirection::Forward);
        assert_eq!(faces[Face::F.index()][0][2], (Face::L, 0, 2));
        cycle_strips(&mut faces, &D_STRIPS, true, CycleDirection::Reverse);
        assert_eq!(faces, labelled());
    }

    #[test]
    fn reversed_transfer() {
        let mut faces = labelled();
        transfer_strips(&mut faces, &R_CW);

        // D col2 -> F col2, straight
        assert_eq!(faces[Face::F.index()][0][2], (Face::D, 0, 2));
        // U col2 -> B col0, reversed
        assert_eq!(faces[Face::B.index()][0][0], (Face::U, 2, 2));
        assert_eq!(faces[Face::B.index()][2][0], (Face::U, 0, 2));
        // Reads come from the snapshot, not the already written U column
        assert_eq!(faces[Face::D.index()][0][2], (Face::B, 2, 0));
    }

    #[test]
    fn each_side_table_is_undone_by_its_counterpart() {
        for face in [Face::R, Face::F, Face::L, Face::B] {
            let mut faces = labelled();
            EdgeCycle::for_quarter_turn(face, true).apply(&mut faces);
            assert_ne!(faces, labelled());
            EdgeCycle::for_quarter_turn(face, false).apply(&mut faces);
            assert_eq!(faces, labelled(), "{face}");
        }
    }
}
