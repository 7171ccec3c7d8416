use std::time::Duration;

/// Read side of training counters.
pub trait Progress {
    /// Completed iterations.
    fn epoch(&self) -> usize;
    /// Game-tree nodes visited across all walks.
    fn nodes(&self) -> usize;
    /// Regret-matching updates applied.
    fn infos(&self) -> usize;
    fn elapsed(&self) -> Duration;

    /// Nodes per second over the whole run.
    fn throughput(&self) -> f64 {
        self.nodes() as f64 / self.elapsed().as_secs_f64().max(1e-3)
    }
    /// One aligned status row at the given rate.
    fn row(&self, rate: f64) -> String {
        [
            format!("epoch {}", self.epoch()),
            format!("nodes {}", self.nodes()),
            format!("infos {}", self.infos()),
            format!("N/sec {:.1}", rate),
        ]
        .iter()
        .map(|column| format!("{:<20}", column))
        .collect()
    }
    fn stats(&self) -> String {
        self.row(self.throughput())
    }
    fn summary(&self) -> String {
        format!("finished after {:.1?}\n{}", self.elapsed(), self.stats())
    }
}
