//! Face grids and the quarter rotation primitive.
//!
//! Grids are generic over the sticker type so the same code that turns colored
//! stickers can also turn slot labels when the move tables are derived.

use crate::Face;

/// Side length of a face.
pub const SIZE: usize = 3;

pub type FaceGrid<T> = [[T; SIZE]; SIZE];

/// All six faces in `U R F D L B` order.
pub type Faces<T> = [FaceGrid<T>; 6];

/// Rotate a face grid 90° clockwise: the sticker at `[i][j]` moves to
/// `[j][2 - i]`.
#[must_use]
pub fn rotate_clockwise<T: Copy>(face: &FaceGrid<T>) -> FaceGrid<T> {
    let mut rotated = *face;

    for (i, row) in face.iter().enumerate() {
        for (j, &sticker) in row.iter().enumerate() {
            rotated[j][SIZE - 1 - i] = sticker;
        }
    }

    rotated
}

/// Three clockwise rotations, so that the two directions are exact inverses.
#[must_use]
pub fn rotate_counterclockwise<T: Copy>(face: &FaceGrid<T>) -> FaceGrid<T> {
    rotate_clockwise(&rotate_clockwise(&rotate_clockwise(face)))
}

/// A grid where every sticker is `value`.
#[must_use]
pub const fn uniform<T: Copy>(value: T) -> FaceGrid<T> {
    [[value; SIZE]; SIZE]
}

/// The solved arrangement: every sticker on face `f` is `f`.
#[must_use]
pub fn solved_faces() -> Faces<Face> {
    Face::ALL.map(uniform)
}

/// Whether all nine stickers equal the top-left one.
pub fn is_uniform<T: Copy + PartialEq>(face: &FaceGrid<T>) -> bool {
    let first = face[0][0];
    face.iter().flatten().all(|&sticker| sticker == first)
}
