//! Seedable source of randomness for target selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index uniformly from `0..len`.
pub trait RandomSource {
    /// `len` is always > 0
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f64;
}

/// Production source backed by `StdRng`
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Seeded when `seed` is given, from OS entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of indices, cycling when exhausted. Each value is
/// reduced modulo the requested length.
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    fn next_value(&mut self) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

impl RandomSource for SequenceRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.next_value() % len
    }

    fn unit(&mut self) -> f64 {
        (self.next_value() % 100) as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(Some(42));
        let mut b = SeededRandom::new(Some(42));
        let seq_a: Vec<usize> = (0..20).map(|_| a.pick_index(16)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.pick_index(16)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn picks_stay_in_range() {
        let mut rng = SeededRandom::new(Some(7));
        for len in 1..10 {
            assert!(rng.pick_index(len) < len);
        }
        let u = rng.unit();
        assert!((0.0..1.0).contains(&u));
    }

    #[test]
    fn sequence_cycles_and_wraps() {
        let mut rng = SequenceRandom::new(vec![1, 7]);
        assert_eq!(rng.pick_index(4), 1);
        assert_eq!(rng.pick_index(4), 3);
        assert_eq!(rng.pick_index(4), 1);
    }
}
