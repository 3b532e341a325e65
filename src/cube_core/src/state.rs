use std::fmt;

use log::{debug, trace, warn};

use crate::{
    CubeError, Face, FaceGrid, Faces, Move, MoveSource, STICKER_COUNT,
    grid::{SIZE, is_uniform, solved_faces},
    moves::{quarter_turn_permutation, slot},
    scramble::{format_sequence, random_quarter_turns},
};

/// The sticker colors of a cube, stored as 54 slots in `U R F D L B` face
/// order and row-major within each face.
///
/// Any assignment of colors is accepted; whether the state is reachable by
/// turning a real cube is up to the caller.
#[derive(Clone, Debug)]
pub struct CubeState {
    stickers: [Face; STICKER_COUNT],
    scramble: Option<String>,
}

impl PartialEq for CubeState {
    fn eq(&self, other: &Self) -> bool {
        self.stickers == other.stickers
    }
}

impl Eq for CubeState {}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::new()
    }
}

impl CubeState {
    /// A solved cube.
    #[must_use]
    pub fn new() -> CubeState {
        CubeState::from_faces(&solved_faces())
    }

    #[must_use]
    pub fn from_faces(faces: &Faces<Face>) -> CubeState {
        let mut stickers = [Face::U; STICKER_COUNT];
        for (sticker, &face) in stickers.iter_mut().zip(faces.iter().flatten().flatten()) {
            *sticker = face;
        }

        CubeState {
            stickers,
            scramble: None,
        }
    }

    /// Return every sticker on face `f` to `f`.
    pub fn reset(&mut self) {
        self.replace_faces(&solved_faces());
    }

    /// An owned copy of all six faces.
    #[must_use]
    pub fn faces(&self) -> Faces<Face> {
        Face::ALL.map(|face| self.face(face))
    }

    #[must_use]
    pub fn face(&self, face: Face) -> FaceGrid<Face> {
        let mut grid = [[face; SIZE]; SIZE];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.sticker(face, row, col);
            }
        }
        grid
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not below 3.
    #[must_use]
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Face {
        assert!(row < SIZE && col < SIZE);
        self.stickers[slot(face, row, col)]
    }

    #[must_use]
    pub fn stickers(&self) -> &[Face; STICKER_COUNT] {
        &self.stickers
    }

    pub fn replace_faces(&mut self, faces: &Faces<Face>) {
        self.stickers = CubeState::from_faces(faces).stickers;
    }

    /// Replace every sticker from raw values, given as six faces of three rows
    /// of three values each.
    ///
    /// Nothing is changed unless the whole input is valid.
    ///
    /// # Errors
    ///
    /// `CubeError::InvalidShape` if there are not exactly six 3x3 faces, and
    /// `CubeError::InvalidRange` if a value is not in `0..=5`.
    pub fn set_faces<F, R>(&mut self, faces: &[F]) -> Result<(), CubeError>
    where
        F: AsRef<[R]>,
        R: AsRef<[u8]>,
    {
        let parsed = parse_raw_faces(faces).inspect_err(|e| {
            warn!("Rejected bulk replacement: {e}");
        })?;

        debug!("Replaced all stickers");
        self.replace_faces(&parsed);
        Ok(())
    }

    /// True iff every face is a single color. Whether the six colors are
    /// distinct is not checked.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .into_iter()
            .all(|face| is_uniform(&self.face(face)))
    }

    /// Double turns apply their quarter turn twice.
    pub fn apply_move(&mut self, m: Move) {
        let (quarter, count) = m.quarter_turns();
        let permutation = quarter_turn_permutation(quarter);

        for _ in 0..count {
            permutation.apply(&mut self.stickers);
            trace!(target: "moves", "Applied {quarter}");
        }
    }

    /// Parse and apply a single move token.
    ///
    /// # Errors
    ///
    /// `CubeError::InvalidMove` if `token` is not one of the 18 move tokens.
    pub fn apply_token(&mut self, token: &str) -> Result<Move, CubeError> {
        let m = token.parse::<Move>()?;
        self.apply_move(m);
        Ok(m)
    }

    /// Apply a whitespace separated move sequence. Every token is checked
    /// before the cube is touched.
    ///
    /// # Errors
    ///
    /// `CubeError::InvalidMove` for the first unrecognized token.
    pub fn apply_moves(&mut self, sequence: &str) -> Result<Vec<Move>, CubeError> {
        let moves = sequence
            .split_whitespace()
            .map(str::parse::<Move>)
            .collect::<Result<Vec<_>, _>>()?;

        for &m in &moves {
            self.apply_move(m);
        }

        Ok(moves)
    }

    /// Apply `length` random quarter turns and remember them as the scramble
    /// record, replacing any previous one.
    pub fn scramble(&mut self, length: usize, source: &mut impl MoveSource) -> &str {
        let moves = random_quarter_turns(length, source);
        for &m in &moves {
            self.apply_move(m);
        }

        let sequence = format_sequence(&moves);
        debug!("Scrambled with {length} moves: {sequence}");

        self.scramble.insert(sequence)
    }

    /// The sequence used by the most recent scramble.
    #[must_use]
    pub fn scramble_sequence(&self) -> Option<&str> {
        self.scramble.as_deref()
    }
}

fn parse_raw_faces<F, R>(faces: &[F]) -> Result<Faces<Face>, CubeError>
where
    F: AsRef<[R]>,
    R: AsRef<[u8]>,
{
    if faces.len() != Face::ALL.len() {
        return Err(CubeError::InvalidShape {
            what: "face count",
            expected: Face::ALL.len(),
            actual: faces.len(),
        });
    }

    let mut parsed = solved_faces();

    for (grid, raw_face) in parsed.iter_mut().zip(faces) {
        let raw_face = raw_face.as_ref();
        if raw_face.len() != SIZE {
            return Err(CubeError::InvalidShape {
                what: "rows per face",
                expected: SIZE,
                actual: raw_face.len(),
            });
        }

        for (row, raw_row) in grid.iter_mut().zip(raw_face) {
            let raw_row = raw_row.as_ref();
            if raw_row.len() != SIZE {
                return Err(CubeError::InvalidShape {
                    what: "stickers per row",
                    expected: SIZE,
                    actual: raw_row.len(),
                });
            }

            for (sticker, &value) in row.iter_mut().zip(raw_row) {
                *sticker = Face::try_from(value)?;
            }
        }
    }

    Ok(parsed)
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_net(' '))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Turn, grid::uniform};

    #[test]
    fn new_cube_is_solved() {
        let cube = CubeState::new();
        assert!(cube.is_solved());
        assert_eq!(cube.faces(), solved_faces());
        assert_eq!(cube.scramble_sequence(), None);
        assert_eq!(cube, CubeState::default());
    }

    #[test]
    fn reset_after_moves() {
        let mut cube = CubeState::new();
        cube.apply_moves("R U F' L2").unwrap();
        assert!(!cube.is_solved());
        cube.reset();
        assert!(cube.is_solved());
    }

    #[test]
    fn solved_check_ignores_which_colors() {
        let mut faces = solved_faces();
        faces.swap(0, 3);
        faces[1] = uniform(Face::U);
        assert!(CubeState::from_faces(&faces).is_solved());

        faces[2][1][1] = Face::B;
        assert!(!CubeState::from_faces(&faces).is_solved());
    }

    #[test]
    fn faces_are_owned_copies() {
        let cube = CubeState::new();
        let mut faces = cube.faces();
        faces[0][0][0] = Face::B;
        assert!(cube.is_solved());
        assert_eq!(cube.sticker(Face::U, 0, 0), Face::U);
    }

    #[test]
    fn set_faces_accepts_any_colors() {
        let mut cube = CubeState::new();
        let raw = vec![vec![vec![5_u8, 4, 3], vec![2, 1, 0], vec![0, 0, 0]]; 6];
        cube.set_faces(&raw).unwrap();

        assert_eq!(cube.sticker(Face::B, 0, 0), Face::B);
        assert_eq!(cube.sticker(Face::R, 1, 1), Face::R);
        assert_eq!(cube.face(Face::D)[1], [Face::F, Face::R, Face::U]);
        assert!(!cube.is_solved());
    }

    #[test]
    fn set_faces_shape_errors() {
        let mut cube = CubeState::new();

        let five = [[[0_u8; 3]; 3]; 5];
        assert_eq!(
            cube.set_faces(&five),
            Err(CubeError::InvalidShape {
                what: "face count",
                expected: 6,
                actual: 5
            })
        );

        let mut short = vec![vec![vec![1_u8; 3]; 3]; 6];
        short[4] = vec![vec![1; 3]; 2];
        assert_eq!(
            cube.set_faces(&short),
            Err(CubeError::InvalidShape {
                what: "rows per face",
                expected: 3,
                actual: 2
            })
        );

        let mut narrow = vec![vec![vec![1_u8; 3]; 3]; 6];
        narrow[2][1] = vec![1, 1];
        assert!(matches!(
            cube.set_faces(&narrow),
            Err(CubeError::InvalidShape { actual: 2, .. })
        ));

        assert!(cube.is_solved());
    }

    #[test]
    fn set_faces_range_error_leaves_cube_untouched() {
        let mut cube = CubeState::new();
        let mut raw = vec![vec![vec![1_u8; 3]; 3]; 6];
        raw[5][2][2] = 6;

        assert_eq!(
            cube.set_faces(&raw),
            Err(CubeError::InvalidRange { value: 6 })
        );
        assert!(cube.is_solved());
    }

    #[test]
    fn invalid_sequence_is_not_partially_applied() {
        let mut cube = CubeState::new();
        assert_eq!(
            cube.apply_moves("R U X F"),
            Err(CubeError::InvalidMove("X".to_owned()))
        );
        assert!(cube.is_solved());

        assert_eq!(
            cube.apply_token("R2'"),
            Err(CubeError::InvalidMove("R2'".to_owned()))
        );
        assert_eq!(
            cube.apply_token("F2"),
            Ok(Move::new(Face::F, Turn::Double))
        );
    }

    #[test]
    fn scramble_record_is_overwritten() {
        let mut cube = CubeState::new();
        let mut rng = fastrand::Rng::with_seed(42);

        let first = cube.scramble(5, &mut rng).to_owned();
        assert_eq!(first.split(' ').count(), 5);

        cube.scramble(3, &mut rng);
        assert_eq!(cube.scramble_sequence().unwrap().split(' ').count(), 3);
    }

    #[test]
    fn scramble_replays() {
        let mut scrambled = CubeState::new();
        let sequence = scrambled
            .scramble(25, &mut fastrand::Rng::with_seed(3))
            .to_owned();

        let mut replayed = CubeState::new();
        replayed.apply_moves(&sequence).unwrap();
        assert_eq!(replayed, scrambled);
    }
}
