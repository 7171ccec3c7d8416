use crate::Progress;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Training counters, updated through `&self` from any walker thread.
pub struct Metrics {
    epoch: AtomicUsize,
    nodes: AtomicUsize,
    infos: AtomicUsize,
    start: Instant,
    /// When the last checkpoint row was taken, and the node count then.
    last: Mutex<(Instant, usize)>,
}

impl Default for Metrics {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            epoch: AtomicUsize::new(0),
            nodes: AtomicUsize::new(0),
            infos: AtomicUsize::new(0),
            start: now,
            last: Mutex::new((now, 0)),
        }
    }
}

impl Metrics {
    pub fn inc_epoch(&self) {
        self.epoch.fetch_add(1, Ordering::Relaxed);
    }
    pub fn add_nodes(&self, n: usize) {
        self.nodes.fetch_add(n, Ordering::Relaxed);
    }
    pub fn add_infos(&self, n: usize) {
        self.infos.fetch_add(n, Ordering::Relaxed);
    }
    /// A status row once per [`TRAINING_LOG_INTERVAL`], with the rate
    /// measured since the previous row.
    ///
    /// [`TRAINING_LOG_INTERVAL`]: trick_core::TRAINING_LOG_INTERVAL
    pub fn checkpoint(&self) -> Option<String> {
        let mut last = self.last.lock().ok()?;
        let (then, seen) = *last;
        let waited = then.elapsed();
        if waited < trick_core::TRAINING_LOG_INTERVAL {
            return None;
        }
        let nodes = self.nodes();
        *last = (Instant::now(), nodes);
        Some(self.row(nodes.saturating_sub(seen) as f64 / waited.as_secs_f64()))
    }
}

impl Progress for Metrics {
    fn epoch(&self) -> usize {
        self.epoch.load(Ordering::Relaxed)
    }
    fn nodes(&self) -> usize {
        self.nodes.load(Ordering::Relaxed)
    }
    fn infos(&self) -> usize {
        self.infos.load(Ordering::Relaxed)
    }
    fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }
}
