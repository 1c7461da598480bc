//! Synthetic inputs for benchmarking and testing.

use rand::prelude::*;

/// Ascending values `1, 1 + stride, 1 + 2·stride, ...` below `n`.
///
/// With `stride > step` every value ends up in its own cluster, which is the worst case
/// for [`crate::QuadraticClusterer`].
pub fn arithmetic(n: usize, stride: usize) -> Vec<f64> {
    (1..n).step_by(stride.max(1)).map(|i| i as f64).collect()
}

/// `n` shuffled values forming runs of close values separated by gaps wider than `step`.
///
/// Within a run consecutive sorted values are at most `step` apart; between runs the gap
/// is at least `step + 1`. Deterministic for a given `seed`.
pub fn gapped(n: usize, step: f64, seed: u64) -> Vec<f64> {
    let step = if step.is_finite() { step.max(0.0) } else { 0.0 };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(n);
    let mut current = 0.0f64;
    for _ in 0..n {
        values.push(current);
        if rng.random_bool(0.2) {
            current += step + 1.0 + rng.random::<f64>() * (step + 1.0) * 3.0;
        } else {
            current += rng.random::<f64>() * step;
        }
    }
    values.shuffle(&mut rng);
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_matches_range() {
        assert_eq!(arithmetic(11, 3), vec![1.0, 4.0, 7.0, 10.0]);
        assert!(arithmetic(1, 3).is_empty());
        assert_eq!(arithmetic(4, 0), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_gapped_is_deterministic() {
        assert_eq!(gapped(200, 2.0, 7), gapped(200, 2.0, 7));
        assert_eq!(gapped(200, 2.0, 7).len(), 200);
        assert_ne!(gapped(200, 2.0, 7), gapped(200, 2.0, 8));
    }

    #[test]
    fn test_gapped_has_gaps() {
        let mut v = gapped(500, 1.0, 42);
        v.sort_by(f64::total_cmp);
        let tol = 1e-9;
        assert!(v
            .windows(2)
            .all(|w| w[1] - w[0] <= 1.0 + tol || w[1] - w[0] >= 2.0 - tol));
        assert!(v.windows(2).any(|w| w[1] - w[0] >= 2.0 - tol));
    }
}
