//! Uniform draws over `1..=upper_bound`, optionally skipping excluded ids.

use std::collections::BTreeSet;

use rand::Rng;

/// Ids that must never be drawn (e.g. absent students).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    ids: BTreeSet<u64>,
}

impl Exclusions {
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: ids.into_iter().filter(|id| *id >= 1).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }

    /// Number of excluded ids that fall inside `1..=upper_bound`.
    pub fn count_within(&self, upper_bound: u64) -> u64 {
        self.ids.range(1..=upper_bound.max(1)).count() as u64
    }

    /// True when nothing in `1..=upper_bound` is left to draw.
    pub fn covers(&self, upper_bound: u64) -> bool {
        self.count_within(upper_bound) >= upper_bound.max(1)
    }
}

/// Draw uniformly from `1..=upper_bound`. A bound of 0 is treated as 1.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, upper_bound: u64) -> u64 {
    rng.gen_range(1..=upper_bound.max(1))
}

/// Draw uniformly from `1..=upper_bound` minus `exclusions`.
///
/// If the exclusions cover the whole range they are ignored and the draw
/// falls back to [`uniform`].
pub fn draw<R: Rng + ?Sized>(rng: &mut R, upper_bound: u64, exclusions: &Exclusions) -> u64 {
    let n = upper_bound.max(1);
    let excluded = exclusions.count_within(n);
    if excluded == 0 || excluded >= n {
        return uniform(rng, n);
    }

    // Pick the k-th remaining id, then step over excluded ids at or below it
    let mut value = rng.gen_range(0..n - excluded) + 1;
    for id in exclusions.ids.range(1..=n) {
        if *id <= value {
            value += 1;
        } else {
            break;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SAMPLES: usize = 10_000;

    fn histogram(upper_bound: u64, exclusions: &Exclusions) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts = vec![0usize; upper_bound as usize + 1];
        for _ in 0..SAMPLES {
            let value = draw(&mut rng, upper_bound, exclusions);
            assert!((1..=upper_bound).contains(&value), "{} out of range", value);
            counts[value as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_uniform_single_value() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(uniform(&mut rng, 1), 1);
            assert_eq!(uniform(&mut rng, 0), 1);
        }
    }

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(2);
        for n in [1, 2, 3, 10, 45, 1000] {
            for _ in 0..SAMPLES {
                let value = uniform(&mut rng, n);
                assert!((1..=n).contains(&value));
            }
        }
    }

    #[test]
    fn test_uniform_is_roughly_flat() {
        let n = 5u64;
        let counts = histogram(n, &Exclusions::default());
        let expected = SAMPLES / n as usize;
        for value in 1..=n as usize {
            let count = counts[value];
            assert!(
                count > expected * 8 / 10 && count < expected * 12 / 10,
                "value {} seen {} times, expected about {}",
                value,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_exclusions_never_drawn() {
        let exclusions = Exclusions::new([2, 4, 99]);
        let counts = histogram(6, &exclusions);
        assert_eq!(counts[2], 0);
        assert_eq!(counts[4], 0);
        for value in [1, 3, 5, 6] {
            assert!(counts[value] > SAMPLES / 4 * 8 / 10, "value {} underdrawn", value);
        }
    }

    #[test]
    fn test_exclusions_covering_range_are_ignored() {
        let exclusions = Exclusions::new([1, 2, 3]);
        assert!(exclusions.covers(3));
        let counts = histogram(3, &exclusions);
        assert!(counts[1..].iter().all(|c| *c > 0));
    }

    #[test]
    fn test_exclusions_drop_zero_and_count_within() {
        let exclusions = Exclusions::new([0, 1, 10, 50]);
        assert!(!exclusions.contains(0));
        assert_eq!(exclusions.count_within(45), 2);
        assert!(!exclusions.covers(45));
        assert!(exclusions.covers(1));
    }
}
