//! Conversions between the cube and its external text and grid formats.
//!
//! - The facelet string: 54 letters from `URFDLB`, faces in `U R F D L B`
//!   order and row-major within each face. A sticker is written as the letter
//!   of the face it belongs to, not as a color.
//! - The flattened net: the unfolded cross, nine rows by twelve columns.
//!
//! ```text
//!       U
//!    L  F  R  B
//!       D
//! ```
//!
//! - The sticker list: 54 comma separated integers in the same order as the
//!   facelet string, as typed in by hand.

use crate::{
    CubeError, CubeState, Face, Faces, STICKER_COUNT,
    grid::{SIZE, solved_faces},
};

pub const NET_ROWS: usize = 3 * SIZE;
pub const NET_COLUMNS: usize = 4 * SIZE;

/// Where each face's block starts in the net, as (face, row, column).
const NET_LAYOUT: [(Face, usize, usize); 6] = [
    (Face::U, 0, SIZE),
    (Face::R, SIZE, 2 * SIZE),
    (Face::F, SIZE, SIZE),
    (Face::D, 2 * SIZE, SIZE),
    (Face::L, SIZE, 0),
    (Face::B, SIZE, 3 * SIZE),
];

/// Fill six faces from exactly 54 stickers in facelet order.
fn faces_from_stickers(stickers: impl IntoIterator<Item = Face>) -> Faces<Face> {
    let mut faces = solved_faces();
    for (cell, sticker) in faces.iter_mut().flatten().flatten().zip(stickers) {
        *cell = sticker;
    }
    faces
}

#[must_use]
pub fn to_facelet_string(faces: &Faces<Face>) -> String {
    faces.iter().flatten().flatten().map(|f| f.letter()).collect()
}

/// # Errors
///
/// `CubeError::InvalidShape` if the string is not 54 characters long and
/// `CubeError::InvalidFacelet` for a character outside `URFDLB`.
pub fn from_facelet_string(facelets: &str) -> Result<Faces<Face>, CubeError> {
    let length = facelets.chars().count();
    if length != STICKER_COUNT {
        return Err(CubeError::InvalidShape {
            what: "facelet string length",
            expected: STICKER_COUNT,
            actual: length,
        });
    }

    let stickers = facelets
        .chars()
        .enumerate()
        .map(|(position, facelet)| {
            Face::from_letter(facelet).ok_or(CubeError::InvalidFacelet { facelet, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(faces_from_stickers(stickers))
}

/// Cut the six faces out of an unfolded net. Cells outside the cross are
/// ignored, and rows may be longer than twelve cells.
///
/// # Errors
///
/// `CubeError::InvalidShape` if the grid has fewer than nine rows or a row is
/// too short to hold the face blocks it crosses, and `CubeError::InvalidRange`
/// for a sticker value outside `0..=5`.
pub fn from_flattened_net<R: AsRef<[u8]>>(grid: &[R]) -> Result<Faces<Face>, CubeError> {
    if grid.len() < NET_ROWS {
        return Err(CubeError::InvalidShape {
            what: "flattened net rows",
            expected: NET_ROWS,
            actual: grid.len(),
        });
    }

    let mut faces = solved_faces();

    for (face, row_offset, col_offset) in NET_LAYOUT {
        for (i, face_row) in faces[face.index()].iter_mut().enumerate() {
            let net_row = grid[row_offset + i].as_ref();
            let cells = net_row
                .get(col_offset..col_offset + SIZE)
                .ok_or(CubeError::InvalidShape {
                    what: "flattened net columns",
                    expected: col_offset + SIZE,
                    actual: net_row.len(),
                })?;

            for (sticker, &value) in face_row.iter_mut().zip(cells) {
                *sticker = Face::try_from(value)?;
            }
        }
    }

    Ok(faces)
}

/// Lay the faces out as a 9x12 unfolded net, filling cells outside the cross
/// with `blank`.
#[must_use]
pub fn to_flattened_net(faces: &Faces<Face>, blank: u8) -> Vec<Vec<u8>> {
    net_cells(faces)
        .iter()
        .map(|row| row.iter().map(|cell| cell.map_or(blank, u8::from)).collect())
        .collect()
}

fn net_cells(faces: &Faces<Face>) -> [[Option<Face>; NET_COLUMNS]; NET_ROWS] {
    let mut net = [[None; NET_COLUMNS]; NET_ROWS];

    for (face, row_offset, col_offset) in NET_LAYOUT {
        for (i, face_row) in faces[face.index()].iter().enumerate() {
            for (j, &sticker) in face_row.iter().enumerate() {
                net[row_offset + i][col_offset + j] = Some(sticker);
            }
        }
    }

    net
}

/// The unfolded net as text, one facelet letter per cell.
#[must_use]
pub fn render_net(faces: &Faces<Face>, blank: char) -> String {
    net_cells(faces)
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.map_or(blank, Face::letter))
                .collect::<String>()
                .trim_end()
                .to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse hand-typed input such as `0, 0, 0, ..., 5`.
///
/// # Errors
///
/// `CubeError::InvalidShape` unless there are exactly 54 values,
/// `CubeError::InvalidNumber` for a value that is not an integer and
/// `CubeError::InvalidRange` for one outside `0..=5`.
pub fn parse_sticker_list(text: &str) -> Result<Faces<Face>, CubeError> {
    let values = text.split(',').collect::<Vec<_>>();
    if values.len() != STICKER_COUNT {
        return Err(CubeError::InvalidShape {
            what: "sticker count",
            expected: STICKER_COUNT,
            actual: values.len(),
        });
    }

    let stickers = values
        .into_iter()
        .map(|token| {
            let token = token.trim();
            let value = token.parse::<i64>().map_err(|_| CubeError::InvalidNumber {
                token: token.to_owned(),
            })?;
            Face::from_sticker(value)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(faces_from_stickers(stickers))
}

impl CubeState {
    #[must_use]
    pub fn to_facelet_string(&self) -> String {
        self.stickers().iter().map(|f| f.letter()).collect()
    }

    /// # Errors
    ///
    /// See [`from_facelet_string`].
    pub fn from_facelet_string(facelets: &str) -> Result<CubeState, CubeError> {
        Ok(CubeState::from_faces(&from_facelet_string(facelets)?))
    }

    /// # Errors
    ///
    /// See [`from_flattened_net`].
    pub fn from_flattened_net<R: AsRef<[u8]>>(grid: &[R]) -> Result<CubeState, CubeError> {
        Ok(CubeState::from_faces(&from_flattened_net(grid)?))
    }

    #[must_use]
    pub fn to_flattened_net(&self, blank: u8) -> Vec<Vec<u8>> {
        to_flattened_net(&self.faces(), blank)
    }

    /// Replace the state from a hand-typed sticker list.
    ///
    /// # Errors
    ///
    /// See [`parse_sticker_list`]. The cube is unchanged on error.
    pub fn load_sticker_list(&mut self, text: &str) -> Result<(), CubeError> {
        let faces = parse_sticker_list(text)?;
        self.replace_faces(&faces);
        Ok(())
    }

    #[must_use]
    pub fn render_net(&self, blank: char) -> String {
        render_net(&self.faces(), blank)
    }
}
