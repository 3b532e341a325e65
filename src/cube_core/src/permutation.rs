use std::sync::OnceLock;

use itertools::Itertools;

/// A permutation of sticker slots in "comes from" form: after applying it,
/// slot `i` holds whatever was in slot `mapping[i]` before.
#[derive(Clone, Debug)]
pub struct Permutation {
    mapping: Box<[usize]>,
    cycles: OnceLock<Vec<Vec<usize>>>,
}

impl PartialEq for Permutation {
    fn eq(&self, other: &Self) -> bool {
        self.mapping == other.mapping
    }
}

impl Eq for Permutation {}

impl Permutation {
    #[must_use]
    pub fn identity(slot_count: usize) -> Permutation {
        Permutation::from_mapping((0..slot_count).collect())
    }

    /// # Panics
    ///
    /// Panics if `mapping` is not a bijection on `0..mapping.len()`.
    #[must_use]
    pub fn from_mapping(mapping: Vec<usize>) -> Permutation {
        assert!(
            mapping.iter().copied().sorted_unstable().eq(0..mapping.len()),
            "not a permutation: {mapping:?}"
        );

        Permutation {
            mapping: mapping.into_boxed_slice(),
            cycles: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn mapping(&self) -> &[usize] {
        &self.mapping
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.mapping.len()
    }

    /// The nontrivial cycles, each starting from its smallest slot.
    pub fn cycles(&self) -> &[Vec<usize>] {
        self.cycles.get_or_init(|| {
            let mut covered = vec![false; self.mapping.len()];
            let mut cycles = vec![];

            for i in 0..self.mapping.len() {
                if covered[i] {
                    continue;
                }

                covered[i] = true;
                let mut cycle = vec![i];

                loop {
                    let next = self.mapping[*cycle.last().unwrap()];

                    if cycle[0] == next {
                        break;
                    }

                    covered[next] = true;
                    cycle.push(next);
                }

                if cycle.len() > 1 {
                    cycles.push(cycle);
                }
            }

            cycles
        })
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.mapping.iter().enumerate().all(|(i, &v)| i == v)
    }

    /// Move every element of `values` to its new slot.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per slot.
    pub fn apply<T: Copy>(&self, values: &mut [T]) {
        assert_eq!(values.len(), self.mapping.len());

        let before = values.to_vec();
        for (value, &source) in values.iter_mut().zip(self.mapping.iter()) {
            *value = before[source];
        }
    }

    /// Compose `other` after `self`, so that applying the result equals
    /// applying `self` and then `other`.
    ///
    /// # Panics
    ///
    /// Panics if the slot counts differ.
    pub fn compose(&mut self, other: &Permutation) {
        assert_eq!(self.mapping.len(), other.mapping.len());

        let mine = self.mapping.clone();
        for (value, &source) in self.mapping.iter_mut().zip(other.mapping.iter()) {
            *value = mine[source];
        }

        // Invalidate `cycles`
        self.cycles = OnceLock::new();
    }

    #[must_use]
    pub fn inverse(&self) -> Permutation {
        let mut mapping = vec![0; self.mapping.len()];
        for (i, &source) in self.mapping.iter().enumerate() {
            mapping[source] = i;
        }
        Permutation::from_mapping(mapping)
    }

    /// How many times the permutation must be applied to get back to the
    /// identity.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.cycles()
            .iter()
            .map(|cycle| cycle.len() as u64)
            .fold(1, lcm)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    loop {
        if b == 0 {
            return a;
        }

        let rem = a % b;
        a = b;
        b = rem;
    }
}

fn lcm(a: u64, b: u64) -> u64 {
    b / gcd(a, b) * a
}
