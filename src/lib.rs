//! Adaptive one-dimensional clustering.
//!
//! `stride` partitions a sequence of real numbers into maximal clusters: two values share a
//! cluster when a chain of values links them, each admission landing within `step` of the
//! cluster's current bounds.
//!
//! The primary public API is under [`cluster`], which provides two interchangeable strategies:
//! - [`QuadraticClusterer`]: repeated full passes over the not-yet-placed values
//! - [`LinearClusterer`]: a single cursor sweep over the sorted values
//!
//! Both produce the same partition; they differ only in cost. [`synth`] generates the
//! ascending-with-gaps sequences used by the `stride-bench` harness and the benches.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod synth;

pub use cluster::{
    run, same_clusters, validate_partition, AdaptiveClustering, LinearClusterer,
    QuadraticClusterer, Strategy,
};
pub use error::{Error, Result};
