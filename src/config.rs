use std::time::Duration;

/// Settle time budgeted per graph before a pass reports completion.
pub const DEFAULT_DELAY_PER_GRAPH: Duration = Duration::from_millis(50);

/// Session-wide settings that don't change between passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How long to wait per graph for the external engine to finish drawing.
    /// The wait is a heuristic, not a completion guarantee.
    pub delay_per_graph: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            delay_per_graph: DEFAULT_DELAY_PER_GRAPH,
        }
    }
}

impl SessionConfig {
    pub fn with_delay_per_graph(mut self, delay: Duration) -> Self {
        self.delay_per_graph = delay;
        self
    }
}
