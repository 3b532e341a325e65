#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! State and move engine for the standard 3x3x3 cube.
//!
//! The cube is stored as 54 sticker slots. Every quarter turn is compiled once
//! into a [`Permutation`] of those slots by running the face rotation primitive
//! and the strip cyclers over a slot-labelled cube, so applying a move is a
//! single gather.

pub mod cycle;
pub mod face;
pub mod grid;
pub mod moves;
pub mod permutation;
pub mod scramble;
pub mod serialization;
pub mod state;

pub use face::Face;
pub use grid::{FaceGrid, Faces};
pub use moves::{Move, Turn};
pub use permutation::Permutation;
pub use scramble::MoveSource;
pub use state::CubeState;

use thiserror::Error;

/// Number of stickers on the whole cube.
pub const STICKER_COUNT: usize = 54;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid move: {0:?}")]
    InvalidMove(String),
    #[error("Invalid shape for {what}, expected {expected} but got {actual}")]
    InvalidShape {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Sticker value out of range, expected a value between 0 and 5 but got {value}")]
    InvalidRange { value: i64 },
    #[error("Invalid facelet {facelet:?} at position {position}")]
    InvalidFacelet { facelet: char, position: usize },
    #[error("Could not parse {token:?} as a sticker value")]
    InvalidNumber { token: String },
}
