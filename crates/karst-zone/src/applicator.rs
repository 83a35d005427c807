//! Value selectors driven by booleans, orderings, and RNG draws.

use crate::error::ZoneError;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;
use std::cmp::Ordering;

/// A pair of cell values selected by a boolean.
///
/// Generation treats `true_value` as the counted (solid) state and
/// `false_value` as its complement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryApplicator<T> {
    true_value: T,
    false_value: T,
}

impl<T> BinaryApplicator<T> {
    /// Pair up the two selectable values.
    pub const fn new(true_value: T, false_value: T) -> Self {
        Self { true_value, false_value }
    }

    /// The value selected by `true`.
    pub const fn true_value(&self) -> &T {
        &self.true_value
    }

    /// The value selected by `false`.
    pub const fn false_value(&self) -> &T {
        &self.false_value
    }

    /// Select by condition.
    pub const fn select(&self, condition: bool) -> &T {
        if condition {
            &self.true_value
        } else {
            &self.false_value
        }
    }

    /// Select by one draw from a prepared Bernoulli distribution.
    pub fn sample<R: Rng>(&self, rng: &mut R, dist: &Bernoulli) -> &T {
        self.select(dist.sample(rng))
    }

    /// Select by one draw at the given probability of `true`.
    pub fn sample_p<R: Rng>(&self, rng: &mut R, probability: f64) -> Result<&T, ZoneError> {
        let dist = Bernoulli::new(probability)
            .map_err(|_| ZoneError::Probability { value: probability })?;
        Ok(self.sample(rng, &dist))
    }
}

/// A triple of cell values selected by an ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TernaryApplicator<T> {
    less_value: T,
    equal_value: T,
    greater_value: T,
}

impl<T> TernaryApplicator<T> {
    /// Group the three selectable values.
    pub const fn new(less_value: T, equal_value: T, greater_value: T) -> Self {
        Self { less_value, equal_value, greater_value }
    }

    /// Select by ordering.
    pub const fn select(&self, ordering: Ordering) -> &T {
        match ordering {
            Ordering::Less => &self.less_value,
            Ordering::Equal => &self.equal_value,
            Ordering::Greater => &self.greater_value,
        }
    }

    /// Select by one uniform draw from `{-1, 0, 1}`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &T {
        self.select(rng.gen_range(-1i32..=1).cmp(&0))
    }

    /// Select by comparing one draw from `dist` against `target`.
    ///
    /// An incomparable draw (such as NaN) selects the equal value.
    pub fn sample_against<R, D, V>(&self, rng: &mut R, dist: &D, target: &V) -> &T
    where
        R: Rng,
        D: Distribution<V>,
        V: PartialOrd,
    {
        let drawn = dist.sample(rng);
        self.select(drawn.partial_cmp(target).unwrap_or(Ordering::Equal))
    }
}

/// A uniform sampler over an inclusive value range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformApplicator<T> {
    min_value: T,
    max_value: T,
}

impl<T: SampleUniform + PartialOrd + Copy> UniformApplicator<T> {
    /// Bound the sampling range, inclusive on both ends.
    pub fn new(min_value: T, max_value: T) -> Result<Self, ZoneError> {
        if min_value > max_value {
            return Err(ZoneError::InvalidRange {
                reason: "minimum exceeds maximum".into(),
            });
        }
        Ok(Self { min_value, max_value })
    }

    /// The lower bound.
    pub fn min_value(&self) -> T {
        self.min_value
    }

    /// The upper bound.
    pub fn max_value(&self) -> T {
        self.max_value
    }

    /// Draw one value uniformly from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> T {
        rng.gen_range(self.min_value..=self.max_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn binary_selects_by_condition() {
        let app = BinaryApplicator::new('#', '.');
        assert_eq!(*app.select(true), '#');
        assert_eq!(*app.select(false), '.');
        assert_eq!(*app.true_value(), '#');
        assert_eq!(*app.false_value(), '.');
    }

    #[test]
    fn binary_sample_extremes() {
        let app = BinaryApplicator::new(1u8, 0u8);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(*app.sample_p(&mut rng, 1.0).unwrap(), 1);
        assert_eq!(*app.sample_p(&mut rng, 0.0).unwrap(), 0);
        assert!(app.sample_p(&mut rng, -0.1).is_err());
    }

    #[test]
    fn ternary_selects_by_ordering() {
        let app = TernaryApplicator::new(-1i32, 0, 1);
        assert_eq!(*app.select(Ordering::Less), -1);
        assert_eq!(*app.select(Ordering::Equal), 0);
        assert_eq!(*app.select(Ordering::Greater), 1);
    }

    #[test]
    fn ternary_sample_hits_all_three() {
        let app = TernaryApplicator::new('a', 'b', 'c');
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            seen.insert(*app.sample(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn uniform_rejects_inverted_range() {
        assert!(UniformApplicator::new(5i32, 3).is_err());
        let app = UniformApplicator::new(3i32, 5).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..32 {
            let v = app.sample(&mut rng);
            assert!((3..=5).contains(&v));
        }
    }
}
