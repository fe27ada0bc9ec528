//! GraphEngine trait for handing graph configurations to an external drawer.
//!
//! The real drawing happens outside this crate, asynchronously, after the
//! render pass has already moved on. An engine only has to return the node the
//! drawing will eventually land in.

use folio_idf::DocNode;
use folio_types::GraphConfig;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A fire-and-forget graph renderer.
///
/// # Implementations
///
/// - `MountingGraphEngine`: emits a mount node carrying a config snapshot
///   (always available)
///
/// # Example
///
/// ```ignore
/// let engine = MountingGraphEngine::new();
/// let node = engine.render(&GraphConfig::empty_coordinate());
/// assert_eq!(node.kind(), "graph");
/// ```
pub trait GraphEngine: Debug {
    /// Produces the node the graph for `config` will be drawn into.
    ///
    /// Must not block on the drawing itself; the session only budgets a
    /// delay for it.
    fn render(&self, config: &GraphConfig) -> DocNode;

    /// Returns a human-readable name for this engine (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// The default engine: each call yields a `graph` mount node holding a copy of
/// the configuration, for a host-side drawer to fill in later.
#[derive(Debug, Default)]
pub struct MountingGraphEngine {
    dispatched: AtomicUsize,
}

impl MountingGraphEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of configurations handed to this engine so far.
    pub fn dispatched(&self) -> usize {
        self.dispatched.load(Ordering::Relaxed)
    }
}

impl GraphEngine for MountingGraphEngine {
    fn render(&self, config: &GraphConfig) -> DocNode {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
        if !config.print_mode {
            log::warn!(
                "Graph dispatched without print mode (engine: {}).",
                config.render_engine
            );
        }
        DocNode::graph(config.clone())
    }

    fn name(&self) -> &'static str {
        "MountingGraphEngine"
    }
}
