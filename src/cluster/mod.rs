//! Adaptive clustering of one-dimensional values.
//!
//! ## The rule
//!
//! A cluster starts from a single value and admits any value `b` with
//!
//! ```text
//! min(cluster) - step <= b <= max(cluster) + step
//! ```
//!
//! re-evaluating the bounds after every admission. The bounds only widen, so a cluster is
//! the transitive closure of "within `step` of a neighbour" over the sorted values, and the
//! resulting partition is maximal: any two clusters are more than `step` apart.
//!
//! ## Strategies
//!
//! ### Quadratic
//!
//! Scans all unplaced values once per cluster and carries the rejected ones into the next
//! pass. O(n · k) after sorting, where `k` is the number of clusters.
//!
//! ### Linear
//!
//! Sweeps the sorted values once; the first value outside the bounds closes the cluster.
//! O(n) after sorting.
//!
//! Both implement [`AdaptiveClustering`] and return identical partitions. [`Strategy`]
//! selects one at runtime.
//!
//! ## Usage
//!
//! ```rust
//! use stride::cluster::{AdaptiveClustering, LinearClusterer, QuadraticClusterer};
//!
//! let values = [20.0, 1.0, 11.0, 4.0, 2.0, 10.0];
//!
//! let fast = LinearClusterer::new(2.0).run(&values).unwrap();
//! let slow = QuadraticClusterer::new(2.0).run(&values).unwrap();
//! assert_eq!(fast, slow);
//! assert_eq!(fast, vec![vec![1.0, 2.0, 4.0], vec![10.0, 11.0], vec![20.0]]);
//!
//! // One label per input value, in input order.
//! let labels = LinearClusterer::new(2.0).fit_predict(&values).unwrap();
//! assert_eq!(labels, vec![2, 0, 1, 0, 0, 1]);
//! ```

mod linear;
mod quadratic;
mod strategy;
mod traits;
mod util;
mod validate;

pub use linear::LinearClusterer;
pub use quadratic::QuadraticClusterer;
pub use strategy::{run, Strategy};
pub use traits::AdaptiveClustering;
pub use validate::{same_clusters, validate_partition};
