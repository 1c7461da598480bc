use crate::error::Result;

/// Common interface for the adaptive clustering strategies.
///
/// Implementations must be pure: the input is never mutated and no state survives a call.
pub trait AdaptiveClustering {
    /// Maximum extension of a cluster's bounds when admitting a new value.
    fn step(&self) -> f64;

    /// Short strategy name, used in logs and benchmark output.
    fn name(&self) -> &'static str;

    /// Partition `values` into maximal clusters.
    ///
    /// Clusters are returned in ascending order, each sorted ascending. An empty input yields
    /// an empty partition and a single value yields one singleton cluster.
    fn run(&self, values: &[f64]) -> Result<Vec<Vec<f64>>>;

    /// Return one cluster label per input value, in input order.
    ///
    /// Labels index into the partition returned by [`AdaptiveClustering::run`].
    fn fit_predict(&self, values: &[f64]) -> Result<Vec<usize>> {
        let clusters = self.run(values)?;
        // Clusters cover disjoint ascending intervals, so the first one whose maximum
        // reaches `v` is the one holding it.
        let upper: Vec<f64> = clusters
            .iter()
            .map(|c| c.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .collect();
        Ok(values
            .iter()
            .map(|&v| upper.partition_point(|&hi| hi < v))
            .collect())
    }

    /// Number of clusters found in `values`.
    fn n_clusters(&self, values: &[f64]) -> Result<usize> {
        Ok(self.run(values)?.len())
    }
}
