//! Linear strategy: a single cursor sweep over the sorted values.
//!
//! Each cluster starts at the cursor and grows rightward while the next value lies within
//! the cluster's bounds. Values only increase to the right, so the first value above
//! `max + step` closes the cluster for good and becomes the seed of the next one; nothing
//! is ever revisited.
//!
//! ## Complexity
//!
//! - **Time**: O(n log n) for the sort plus O(n) for the sweep.
//! - **Space**: O(n) for the sorted copy.

use log::{debug, trace};

use super::traits::AdaptiveClustering;
use super::util::{check_step, degenerate, sorted_copy, Bounds};
use crate::error::Result;

/// Single-sweep adaptive clusterer.
#[derive(Debug, Clone)]
pub struct LinearClusterer {
    step: f64,
}

impl LinearClusterer {
    /// Create a new clusterer admitting values within `step` of a cluster's bounds.
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    /// Set the admission step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Return the exclusive end of the cluster seeded at `start`.
    ///
    /// Requires `start < sorted.len()`.
    fn cluster_end(&self, sorted: &[f64], start: usize) -> usize {
        let mut bounds = Bounds::seed(sorted[start], self.step);
        let mut end = start + 1;
        while end < sorted.len() && bounds.admits(sorted[end]) {
            bounds.widen(sorted[end]);
            end += 1;
        }
        end
    }
}

impl Default for LinearClusterer {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl AdaptiveClustering for LinearClusterer {
    fn step(&self) -> f64 {
        self.step
    }

    fn name(&self) -> &'static str {
        "linear"
    }

    fn run(&self, values: &[f64]) -> Result<Vec<Vec<f64>>> {
        check_step(self.step)?;
        let sorted = sorted_copy(values)?;
        if sorted.len() <= 1 {
            return Ok(degenerate(sorted));
        }

        let mut clusters: Vec<Vec<f64>> = Vec::new();
        let mut start = 0;
        while start < sorted.len() {
            let end = self.cluster_end(&sorted, start);
            trace!("cluster [{}, {}) of {} values", start, end, end - start);
            clusters.push(sorted[start..end].to_vec());
            start = end;
        }

        debug!(
            "linear: n={} step={} clusters={}",
            values.len(),
            self.step,
            clusters.len()
        );
        Ok(clusters)
    }
}
