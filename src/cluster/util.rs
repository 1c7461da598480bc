use crate::error::{Error, Result};

/// Admission window of a cluster under construction: `[min - step, max + step]`.
///
/// The window only ever widens while a cluster is being built.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Bounds {
    min: f64,
    max: f64,
    step: f64,
}

impl Bounds {
    pub(crate) fn seed(value: f64, step: f64) -> Self {
        Self {
            min: value,
            max: value,
            step,
        }
    }

    #[inline]
    pub(crate) fn low(&self) -> f64 {
        self.min - self.step
    }

    #[inline]
    pub(crate) fn high(&self) -> f64 {
        self.max + self.step
    }

    #[inline]
    pub(crate) fn admits(&self, value: f64) -> bool {
        self.low() <= value && value <= self.high()
    }

    /// Extend the window to cover an admitted value.
    #[inline]
    pub(crate) fn widen(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}

pub(crate) fn check_step(step: f64) -> Result<()> {
    if !step.is_finite() {
        return Err(Error::InvalidParameter {
            name: "step",
            message: "must be finite",
        });
    }
    if step < 0.0 {
        return Err(Error::InvalidParameter {
            name: "step",
            message: "must be non-negative",
        });
    }
    Ok(())
}

/// Validate `values` and return an ascending, independently owned copy.
pub(crate) fn sorted_copy(values: &[f64]) -> Result<Vec<f64>> {
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::NonFiniteValue { index });
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Partition of an input with at most one value.
pub(crate) fn degenerate(sorted: Vec<f64>) -> Vec<Vec<f64>> {
    debug_assert!(sorted.len() <= 1);
    if sorted.is_empty() {
        Vec::new()
    } else {
        vec![sorted]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_widen_monotonically() {
        let mut b = Bounds::seed(5.0, 2.0);
        assert_eq!((b.low(), b.high()), (3.0, 7.0));

        b.widen(7.0);
        assert_eq!((b.low(), b.high()), (3.0, 9.0));

        // An interior value never narrows the window.
        b.widen(6.0);
        assert_eq!((b.low(), b.high()), (3.0, 9.0));

        b.widen(3.0);
        assert_eq!((b.low(), b.high()), (1.0, 9.0));
    }

    #[test]
    fn test_bounds_inclusive_edges() {
        let b = Bounds::seed(0.0, 1.5);
        assert!(b.admits(-1.5));
        assert!(b.admits(1.5));
        assert!(!b.admits(1.5000001));
        assert!(!b.admits(-1.5000001));
    }

    #[test]
    fn test_check_step() {
        assert!(check_step(0.0).is_ok());
        assert!(check_step(2.5).is_ok());
        assert!(check_step(-0.1).is_err());
        assert!(check_step(f64::NAN).is_err());
        assert!(check_step(f64::INFINITY).is_err());
    }

    #[test]
    fn test_sorted_copy_leaves_input_untouched() {
        let input = vec![3.0, -1.0, 2.0, 2.0];
        let sorted = sorted_copy(&input).unwrap();
        assert_eq!(sorted, vec![-1.0, 2.0, 2.0, 3.0]);
        assert_eq!(input, vec![3.0, -1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_sorted_copy_rejects_non_finite() {
        let err = sorted_copy(&[1.0, f64::NAN, 2.0]).unwrap_err();
        assert_eq!(err, Error::NonFiniteValue { index: 1 });

        let err = sorted_copy(&[f64::NEG_INFINITY]).unwrap_err();
        assert_eq!(err, Error::NonFiniteValue { index: 0 });
    }
}
