//! Random scrambles drawn from an injected source of randomness.

use itertools::Itertools;

use crate::Move;

/// Anything that can pick which move a scramble uses next.
pub trait MoveSource {
    /// Return an index in `0..bound`.
    fn next_move_index(&mut self, bound: usize) -> usize;
}

impl MoveSource for fastrand::Rng {
    fn next_move_index(&mut self, bound: usize) -> usize {
        self.usize(..bound)
    }
}

/// Draw `length` moves uniformly from the quarter turns. Double turns are
/// never drawn.
pub fn random_quarter_turns(length: usize, source: &mut impl MoveSource) -> Vec<Move> {
    (0..length)
        .map(|_| {
            let index = source.next_move_index(Move::QUARTER_TURNS.len());
            Move::QUARTER_TURNS[index % Move::QUARTER_TURNS.len()]
        })
        .collect()
}

/// Space separated notation for a move sequence.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves.iter().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Face, Turn};

    struct Scripted(std::vec::IntoIter<usize>);

    impl MoveSource for Scripted {
        fn next_move_index(&mut self, _bound: usize) -> usize {
            self.0.next().unwrap()
        }
    }

    #[test]
    fn scripted_indices_pick_quarter_turns() {
        let mut source = Scripted(vec![0, 3, 11].into_iter());
        let moves = random_quarter_turns(3, &mut source);
        assert_eq!(
            moves,
            [
                Move::new(Face::U, Turn::Clockwise),
                Move::new(Face::R, Turn::CounterClockwise),
                Move::new(Face::B, Turn::CounterClockwise),
            ]
        );
        assert_eq!(format_sequence(&moves), "U R' B'");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = random_quarter_turns(30, &mut fastrand::Rng::with_seed(7));
        let b = random_quarter_turns(30, &mut fastrand::Rng::with_seed(7));
        assert_eq!(a, b);
        assert!(a.iter().all(|m| m.is_quarter_turn()));
    }

    #[test]
    fn empty_scramble() {
        let moves = random_quarter_turns(0, &mut fastrand::Rng::with_seed(1));
        assert!(moves.is_empty());
        assert_eq!(format_sequence(&moves), "");
    }
}
