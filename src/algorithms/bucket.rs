//! Bucket sort over `floor(sqrt(n))` buckets

use super::Step;

/// Bucket sort as a resumable step sequence.
///
/// Distribution and the per-bucket sorts are not visualized; the run reports
/// one `set` per element as the buckets are concatenated back.
#[derive(Debug, Clone)]
pub struct BucketSteps {
    a: Vec<i32>,
    order: Vec<i32>,
    k: usize,
}

impl BucketSteps {
    pub fn new(input: &[i32]) -> Self {
        BucketSteps {
            a: input.to_vec(),
            order: concatenated_buckets(input),
            k: 0,
        }
    }
}

fn concatenated_buckets(input: &[i32]) -> Vec<i32> {
    let (Some(&min), Some(&max)) = (input.iter().min(), input.iter().max()) else {
        return Vec::new();
    };

    let bucket_count = (input.len() as f64).sqrt().floor() as usize;
    let span = max as i64 - min as i64 + 1;
    let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); bucket_count];
    for &v in input {
        let idx = (v as i64 - min as i64) * bucket_count as i64 / span;
        buckets[idx as usize].push(v);
    }

    buckets
        .into_iter()
        .flat_map(|mut bucket| {
            bucket.sort_unstable();
            bucket
        })
        .collect()
}

impl Iterator for BucketSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let value = *self.order.get(self.k)?;
        let k = self.k;
        self.a[k] = value;
        self.k += 1;
        Some(Step::set(&[k], &self.a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_layout() {
        // n = 4 -> 2 buckets over [0, 80]
        assert_eq!(concatenated_buckets(&[80, 10, 50, 0]), vec![0, 10, 50, 80]);
    }

    #[test]
    fn test_handles_negative_values() {
        let steps: Vec<Step> = BucketSteps::new(&[3, -4, 0, -1]).collect();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[3].array(), Some(&[-4, -1, 0, 3][..]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(BucketSteps::new(&[]).count(), 0);
    }
}
