use rand::prelude::*;

/// Source of uniform indices. Injected wherever the game needs randomness so
/// tests can substitute a fixed sequence.
pub trait RandomSource {
    /// Returns a value uniformly distributed in `0..bound`. `bound` is never 0.
    fn next_below(&mut self, bound: usize) -> usize;
}

/// Small, fast, non-cryptographic generator seeded from a `u64`.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Fisher-Yates: walks from the last index down to 1, swapping each element
/// with a uniformly chosen one at or before it.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Replays a fixed list of picks, clamped into the requested bound.
    pub(crate) struct FixedSequence {
        picks: Vec<usize>,
        next: usize,
    }

    impl FixedSequence {
        pub(crate) fn new(picks: &[usize]) -> Self {
            Self {
                picks: picks.to_vec(),
                next: 0,
            }
        }

        /// Always picks the highest index, which leaves a shuffle untouched.
        pub(crate) fn identity() -> Self {
            Self::new(&[])
        }
    }

    impl RandomSource for FixedSequence {
        fn next_below(&mut self, bound: usize) -> usize {
            let pick = self.picks.get(self.next).copied().unwrap_or(usize::MAX);
            self.next += 1;
            pick.min(bound - 1)
        }
    }

    #[test]
    fn shuffle_follows_fixed_picks() {
        let mut items = [0, 1, 2, 3, 4];
        // i=4 <-> 0, i=3 <-> 3, i=2 <-> 1, i=1 <-> 0
        shuffle(&mut items, &mut FixedSequence::new(&[0, 3, 1, 0]));
        assert_eq!(items, [2, 4, 1, 3, 0]);
    }

    #[test]
    fn shuffle_with_identity_picks_keeps_order() {
        let mut items = [1, 2, 3];
        shuffle(&mut items, &mut FixedSequence::identity());
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut FixedSequence::identity());

        let mut single = [9];
        shuffle(&mut single, &mut FixedSequence::identity());
        assert_eq!(single, [9]);
    }

    #[test]
    fn seeded_random_stays_in_bounds() {
        let mut rng = SeededRandom::seed_from_u64(42);
        for bound in 1..50 {
            assert!(rng.next_below(bound) < bound);
        }
    }

    #[test]
    fn every_position_is_reachable() {
        // each of the 3! orderings shows up over enough draws
        let mut rng = SeededRandom::seed_from_u64(1);
        let mut seen = Vec::new();
        for _ in 0..600 {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            if !seen.contains(&items) {
                seen.push(items);
            }
        }
        assert_eq!(seen.len(), 6);
    }
}
