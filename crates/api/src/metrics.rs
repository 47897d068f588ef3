use dashmap::DashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

pub struct Metrics {
    // Counters
    total_requests: AtomicUsize,
    successful_requests: AtomicUsize,
    failed_requests: AtomicUsize,

    // Timing (in microseconds)
    total_generate_time_us: AtomicU64,

    // Counts
    total_nodes_built: AtomicUsize,
    total_edges_built: AtomicUsize,
    template_hits: DashMap<String, usize>,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            total_requests: AtomicUsize::new(0),
            successful_requests: AtomicUsize::new(0),
            failed_requests: AtomicUsize::new(0),
            total_generate_time_us: AtomicU64::new(0),
            total_nodes_built: AtomicUsize::new(0),
            total_edges_built: AtomicUsize::new(0),
            template_hits: DashMap::new(),
        })
    }

    pub fn record_request(&self, success: bool) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        if success {
            self.successful_requests.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_generate(&self, duration: Duration, template: &str, nodes: usize, edges: usize) {
        self.total_generate_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.total_nodes_built.fetch_add(nodes, Ordering::Relaxed);
        self.total_edges_built.fetch_add(edges, Ordering::Relaxed);
        *self.template_hits.entry(template.to_string()).or_insert(0) += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let successful = self.successful_requests.load(Ordering::Relaxed);
        let total_us = self.total_generate_time_us.load(Ordering::Relaxed) as f64;

        MetricsSnapshot {
            total_requests: self.total_requests.load(Ordering::Relaxed),
            successful_requests: successful,
            failed_requests: self.failed_requests.load(Ordering::Relaxed),
            avg_generate_time_ms: if successful > 0 {
                total_us / successful as f64 / 1000.0
            } else {
                0.0
            },
            total_nodes_built: self.total_nodes_built.load(Ordering::Relaxed),
            total_edges_built: self.total_edges_built.load(Ordering::Relaxed),
            template_hits: self
                .template_hits
                .iter()
                .map(|r| (r.key().clone(), *r.value()))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub failed_requests: usize,
    pub avg_generate_time_ms: f64,
    pub total_nodes_built: usize,
    pub total_edges_built: usize,
    pub template_hits: BTreeMap<String, usize>,
}

pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_counts() {
        let metrics = Metrics::new();

        metrics.record_request(true);
        metrics.record_generate(Duration::from_millis(2), "crm", 4, 3);
        metrics.record_request(true);
        metrics.record_generate(Duration::from_millis(4), "crm", 4, 3);
        metrics.record_request(false);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_requests, 3);
        assert_eq!(snapshot.successful_requests, 2);
        assert_eq!(snapshot.failed_requests, 1);
        assert_eq!(snapshot.total_nodes_built, 8);
        assert_eq!(snapshot.total_edges_built, 6);
        assert_eq!(snapshot.template_hits.get("crm"), Some(&2));
        assert!((snapshot.avg_generate_time_ms - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Metrics::new().snapshot();
        assert_eq!(snapshot.total_requests, 0);
        assert_eq!(snapshot.avg_generate_time_ms, 0.0);
        assert!(snapshot.template_hits.is_empty());
    }
}
