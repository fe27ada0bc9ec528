use std::time::Duration;

/// Counts graph-bearing units met during one render pass.
///
/// The count only sizes the wait before the session reports completion; it is
/// reset at the start of every pass and never decreases within one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityEstimator {
    graphs: usize,
}

impl ComplexityEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.graphs = 0;
    }

    pub fn record_graph(&mut self) {
        self.graphs += 1;
    }

    pub fn count(&self) -> usize {
        self.graphs
    }

    /// The settle time for the current count: `per_graph × count`.
    pub fn delay(&self, per_graph: Duration) -> Duration {
        let count = u32::try_from(self.graphs).unwrap_or(u32::MAX);
        per_graph.saturating_mul(count)
    }
}
