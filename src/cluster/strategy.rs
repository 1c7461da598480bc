use std::fmt;
use std::str::FromStr;

use super::linear::LinearClusterer;
use super::quadratic::QuadraticClusterer;
use super::traits::AdaptiveClustering;
use crate::error::{Error, Result};

/// Selector for one of the interchangeable clustering strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`QuadraticClusterer`].
    Quadratic,
    /// [`LinearClusterer`].
    #[default]
    Linear,
}

impl Strategy {
    /// Every available strategy.
    pub const ALL: [Strategy; 2] = [Strategy::Quadratic, Strategy::Linear];

    /// Build a boxed clusterer for this strategy.
    pub fn clusterer(self, step: f64) -> Box<dyn AdaptiveClustering> {
        match self {
            Strategy::Quadratic => Box::new(QuadraticClusterer::new(step)),
            Strategy::Linear => Box::new(LinearClusterer::new(step)),
        }
    }

    /// Lowercase name, matching [`AdaptiveClustering::name`].
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Quadratic => "quadratic",
            Strategy::Linear => "linear",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quadratic" => Ok(Strategy::Quadratic),
            "linear" => Ok(Strategy::Linear),
            _ => Err(Error::InvalidParameter {
                name: "strategy",
                message: "expected `quadratic` or `linear`",
            }),
        }
    }
}

/// Partition `values` with the given strategy.
///
/// ```rust
/// use stride::{run, Strategy};
///
/// let clusters = run(&[1.0, 2.0, 4.0, 10.0, 11.0, 20.0], 2.0, Strategy::Linear).unwrap();
/// assert_eq!(clusters, vec![vec![1.0, 2.0, 4.0], vec![10.0, 11.0], vec![20.0]]);
/// ```
pub fn run(values: &[f64], step: f64, strategy: Strategy) -> Result<Vec<Vec<f64>>> {
    strategy.clusterer(step).run(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names_match_clusterers() {
        for s in Strategy::ALL {
            assert_eq!(s.clusterer(1.0).name(), s.as_str());
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("Linear".parse::<Strategy>().unwrap(), Strategy::Linear);
        assert_eq!("QUADRATIC".parse::<Strategy>().unwrap(), Strategy::Quadratic);
        assert!("kmeans".parse::<Strategy>().is_err());
        assert!("v1".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_clusterer_carries_step() {
        assert_eq!(Strategy::Quadratic.clusterer(0.25).step(), 0.25);
        assert_eq!(Strategy::Linear.clusterer(4.0).step(), 4.0);
    }
}
