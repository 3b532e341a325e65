use cube_core::{CubeState, Move, MoveSource};

/// Always picks the same move.
struct Fixed(usize);

impl MoveSource for Fixed {
    fn next_move_index(&mut self, _bound: usize) -> usize {
        self.0
    }
}

#[test_log::test]
fn scramble_of_twenty() {
    let mut cube = CubeState::new();
    let sequence = cube
        .scramble(20, &mut fastrand::Rng::with_seed(2024))
        .to_owned();

    let tokens = sequence.split(' ').collect::<Vec<_>>();
    assert_eq!(tokens.len(), 20);

    let vocabulary = Move::QUARTER_TURNS.map(|m| m.to_string());
    for token in &tokens {
        assert!(vocabulary.iter().any(|v| v == token), "{token}");
    }

    assert_eq!(cube.scramble_sequence(), Some(sequence.as_str()));
}

#[test_log::test]
fn same_seed_same_scramble() {
    let mut a = CubeState::new();
    let mut b = CubeState::new();
    a.scramble(30, &mut fastrand::Rng::with_seed(9));
    b.scramble(30, &mut fastrand::Rng::with_seed(9));

    assert_eq!(a.scramble_sequence(), b.scramble_sequence());
    assert_eq!(a, b);
}

#[test_log::test]
fn injected_source_controls_moves() {
    let mut cube = CubeState::new();
    // Index 2 is R
    assert_eq!(cube.scramble(4, &mut Fixed(2)), "R R R R");
    assert!(cube.is_solved());

    assert_eq!(cube.scramble(2, &mut Fixed(3)), "R' R'");
    let mut expected = CubeState::new();
    expected.apply_token("R2").unwrap();
    assert_eq!(cube, expected);
}

#[test_log::test]
fn scramble_continues_from_current_state() {
    let mut cube = CubeState::new();
    cube.apply_token("F").unwrap();
    cube.scramble(1, &mut Fixed(5));
    assert!(cube.is_solved());
    assert_eq!(cube.scramble_sequence(), Some("F'"));
}
