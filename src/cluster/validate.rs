//! Partition checks.
//!
//! [`validate_partition`] verifies that a result is a maximal partition of its input under a
//! given step:
//! - every cluster is non-empty and sorted ascending
//! - consecutive values inside a cluster are at most `step` apart
//! - consecutive clusters are more than `step` apart, in ascending order
//! - the clusters together hold exactly the input multiset
//!
//! Distances are compared as `b <= a + step`, the same arithmetic the strategies use
//! when admitting a value.
//!
//! [`same_clusters`] compares two partitions up to the internal order of each cluster.

use std::cmp::Ordering;

use super::util::check_step;
use crate::error::{Error, Result};

/// Check that `clusters` is the maximal step-partition of `values`.
pub fn validate_partition(values: &[f64], clusters: &[Vec<f64>], step: f64) -> Result<()> {
    check_step(step)?;

    let mut prev_max: Option<f64> = None;
    for (i, cluster) in clusters.iter().enumerate() {
        let (Some(&first), Some(&last)) = (cluster.first(), cluster.last()) else {
            return Err(Error::InvalidPartition(format!("cluster {} is empty", i)));
        };

        for pair in cluster.windows(2) {
            if pair[1] < pair[0] {
                return Err(Error::InvalidPartition(format!(
                    "cluster {} is not sorted: {} follows {}",
                    i, pair[1], pair[0]
                )));
            }
            if pair[1] > pair[0] + step {
                return Err(Error::InvalidPartition(format!(
                    "cluster {} has a gap of {} between {} and {}",
                    i,
                    pair[1] - pair[0],
                    pair[0],
                    pair[1]
                )));
            }
        }

        if let Some(prev) = prev_max {
            if first <= prev + step {
                return Err(Error::InvalidPartition(format!(
                    "clusters {} and {} are mergeable: {} is within {} of {}",
                    i - 1,
                    i,
                    first,
                    step,
                    prev
                )));
            }
        }
        prev_max = Some(last);
    }

    let mut expected = values.to_vec();
    expected.sort_by(f64::total_cmp);
    let mut found: Vec<f64> = clusters.iter().flatten().copied().collect();
    found.sort_by(f64::total_cmp);
    if expected.len() != found.len() {
        return Err(Error::InvalidPartition(format!(
            "partition holds {} values, input has {}",
            found.len(),
            expected.len()
        )));
    }
    if let Some((a, b)) = expected
        .iter()
        .zip(found.iter())
        .find(|(a, b)| a.total_cmp(b) != Ordering::Equal)
    {
        return Err(Error::InvalidPartition(format!(
            "partition does not match input multiset: expected {}, found {}",
            a, b
        )));
    }

    Ok(())
}

/// Whether `a` and `b` hold the same clusters, ignoring order within and between clusters.
pub fn same_clusters(a: &[Vec<f64>], b: &[Vec<f64>]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    canonical(a) == canonical(b)
}

fn canonical(clusters: &[Vec<f64>]) -> Vec<Vec<u64>> {
    let mut out: Vec<Vec<f64>> = clusters
        .iter()
        .map(|c| {
            let mut c = c.clone();
            c.sort_by(f64::total_cmp);
            c
        })
        .collect();
    out.sort_by(|x, y| {
        x.iter()
            .zip(y.iter())
            .map(|(p, q)| p.total_cmp(q))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len()))
    });
    out.into_iter()
        .map(|c| c.into_iter().map(f64::to_bits).collect())
        .collect()
}
