use std::{fmt, str::FromStr};

use crate::CubeError;

/// One of the six face slots. A sticker is identified by the face it started
/// on, so `Face` is also the sticker color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Face {
    U = 0,
    R = 1,
    F = 2,
    D = 3,
    L = 4,
    B = 5,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, R, F, D, L, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The facelet letter used by the 54 character state string.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Conventional sticker color of the face.
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Face::U => "White",
            Face::R => "Red",
            Face::F => "Green",
            Face::D => "Yellow",
            Face::L => "Orange",
            Face::B => "Blue",
        }
    }

    /// Interpret a raw sticker value.
    ///
    /// # Errors
    ///
    /// `CubeError::InvalidRange` if `value` is not in `0..=5`.
    pub fn from_sticker(value: i64) -> Result<Face, CubeError> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Face::ALL.get(index).copied())
            .ok_or(CubeError::InvalidRange { value })
    }
}

impl TryFrom<u8> for Face {
    type Error = CubeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Face::from_sticker(i64::from(value))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face as u8
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Face::from_letter(letter).ok_or(()),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
