//! Random input arrays

use crate::constants::{MAX_SIZE, MAX_VAL, MIN_SIZE, MIN_VAL};
use crate::errors::{Result, SortError};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Produces fresh random arrays and reshuffles existing ones.
///
/// Values are drawn uniformly from `[MIN_VAL, MAX_VAL]`.
#[derive(Debug, Clone)]
pub struct ArraySource {
    rng: SmallRng,
}

impl ArraySource {
    pub fn new() -> Self {
        ArraySource {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        ArraySource {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// A new array of `len` random values
    pub fn generate(&mut self, len: usize) -> Result<Vec<i32>> {
        validate_size(len)?;
        Ok((0..len)
            .map(|_| self.rng.random_range(MIN_VAL..=MAX_VAL))
            .collect())
    }

    /// A Fisher-Yates shuffled copy of `array`
    pub fn reshuffle(&mut self, array: &[i32]) -> Vec<i32> {
        let mut next = array.to_vec();
        next.shuffle(&mut self.rng);
        next
    }
}

impl Default for ArraySource {
    fn default() -> Self {
        Self::new()
    }
}

/// Check `len` against the supported array sizes
pub fn validate_size(len: usize) -> Result<()> {
    if (MIN_SIZE..=MAX_SIZE).contains(&len) {
        Ok(())
    } else {
        Err(SortError::InvalidArraySize {
            size: len,
            min: MIN_SIZE,
            max: MAX_SIZE,
        })
    }
}

/// Check an explicit array: supported length, every value in `[MIN_VAL, MAX_VAL]`
pub fn validate_values(values: &[i32]) -> Result<()> {
    validate_size(values.len())?;
    match values
        .iter()
        .position(|v| !(MIN_VAL..=MAX_VAL).contains(v))
    {
        Some(index) => Err(SortError::ValueOutOfRange {
            index,
            value: values[index],
            min: MIN_VAL,
            max: MAX_VAL,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_respects_length_and_range() {
        let mut source = ArraySource::seeded(1);
        let array = source.generate(100).unwrap();
        assert_eq!(array.len(), 100);
        assert!(array.iter().all(|v| (MIN_VAL..=MAX_VAL).contains(v)));
    }

    #[test]
    fn test_seeded_sources_agree() {
        let a = ArraySource::seeded(9).generate(20).unwrap();
        let b = ArraySource::seeded(9).generate(20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_out_of_range_sizes() {
        let mut source = ArraySource::seeded(1);
        assert_eq!(
            source.generate(0).unwrap_err(),
            SortError::InvalidArraySize {
                size: 0,
                min: MIN_SIZE,
                max: MAX_SIZE
            }
        );
        assert!(source.generate(MAX_SIZE + 1).is_err());
    }

    #[test]
    fn test_validate_values_rejects_out_of_range() {
        assert!(validate_values(&[MIN_VAL, 40, MAX_VAL]).is_ok());
        assert_eq!(
            validate_values(&[0, 1_000_000, -5]).unwrap_err(),
            SortError::ValueOutOfRange {
                index: 1,
                value: 1_000_000,
                min: MIN_VAL,
                max: MAX_VAL
            }
        );
        assert!(matches!(
            validate_values(&[3, -1]),
            Err(SortError::ValueOutOfRange { index: 1, value: -1, .. })
        ));
        assert!(matches!(
            validate_values(&[7]),
            Err(SortError::InvalidArraySize { size: 1, .. })
        ));
    }

    #[test]
    fn test_reshuffle_keeps_values_and_input() {
        let mut source = ArraySource::seeded(3);
        let original = vec![5, 1, 4, 1, 9, 2, 6];
        let shuffled = source.reshuffle(&original);

        let mut a = original.clone();
        let mut b = shuffled.clone();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert_eq!(original, vec![5, 1, 4, 1, 9, 2, 6]);
    }
}
