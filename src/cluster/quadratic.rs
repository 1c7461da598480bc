//! Quadratic strategy: one full pass over the unplaced values per cluster.
//!
//! ## Algorithm
//!
//! 1. Sort a copy of the input.
//! 2. Seed a cluster with the first remaining value and scan every other remaining value:
//!    admit it if it lies within the current bounds (widening them), otherwise set it
//!    aside for the next pass.
//! 3. The set-aside values, in their relative order, become the remaining buffer.
//!    Repeat until nothing remains.
//!
//! A rejection only lasts for the current pass; the value is tried again against the
//! next cluster.
//!
//! ## Complexity
//!
//! - **Time**: O(n log n) for the sort plus O(n · k) for `k` clusters, so O(n²) when most
//!   clusters are singletons.
//! - **Space**: O(n) for two swap buffers.

use log::{debug, trace};

use super::traits::AdaptiveClustering;
use super::util::{check_step, degenerate, sorted_copy, Bounds};
use crate::error::Result;

/// Multi-pass adaptive clusterer.
#[derive(Debug, Clone)]
pub struct QuadraticClusterer {
    step: f64,
}

impl QuadraticClusterer {
    /// Create a new clusterer admitting values within `step` of a cluster's bounds.
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    /// Set the admission step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Build one cluster from `remaining`, pushing rejected values onto `rest`.
    fn take_cluster(&self, remaining: &[f64], rest: &mut Vec<f64>) -> Vec<f64> {
        let Some((&seed, tail)) = remaining.split_first() else {
            return Vec::new();
        };

        let mut bounds = Bounds::seed(seed, self.step);
        let mut cluster = vec![seed];
        for &candidate in tail {
            if bounds.admits(candidate) {
                cluster.push(candidate);
                bounds.widen(candidate);
            } else {
                rest.push(candidate);
            }
        }
        cluster
    }
}

impl Default for QuadraticClusterer {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl AdaptiveClustering for QuadraticClusterer {
    fn step(&self) -> f64 {
        self.step
    }

    fn name(&self) -> &'static str {
        "quadratic"
    }

    fn run(&self, values: &[f64]) -> Result<Vec<Vec<f64>>> {
        check_step(self.step)?;
        let mut remaining = sorted_copy(values)?;
        if remaining.len() <= 1 {
            return Ok(degenerate(remaining));
        }

        let mut rest: Vec<f64> = Vec::with_capacity(remaining.len());
        let mut clusters: Vec<Vec<f64>> = Vec::new();
        let mut passes = 0usize;

        while !remaining.is_empty() {
            rest.clear();
            let cluster = self.take_cluster(&remaining, &mut rest);
            trace!(
                "pass {}: cluster of {} values, {} deferred",
                passes,
                cluster.len(),
                rest.len()
            );
            clusters.push(cluster);
            std::mem::swap(&mut remaining, &mut rest);
            passes += 1;
        }

        debug!(
            "quadratic: n={} step={} clusters={} passes={}",
            values.len(),
            self.step,
            clusters.len(),
            passes
        );
        Ok(clusters)
    }
}
