//! RenderSurface trait for the single output target of a render pass.

use folio_idf::DocNode;
use std::fmt::Debug;

/// The host-side target a render pass writes into.
///
/// A session holds its surface exclusively while a pass runs; overlapping
/// passes on one surface are not supported.
pub trait RenderSurface: Debug {
    /// Makes the surface visible to the host.
    fn show(&mut self);

    /// Hides the surface again.
    fn hide(&mut self);

    fn is_visible(&self) -> bool;

    /// Drops all previously appended nodes.
    fn clear(&mut self);

    fn append(&mut self, node: DocNode);

    /// The nodes currently attached, in append order.
    fn nodes(&self) -> &[DocNode];
}

/// A surface that keeps its nodes in memory.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    nodes: Vec<DocNode>,
    visible: bool,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Takes the attached nodes out, leaving the surface empty.
    pub fn take_nodes(&mut self) -> Vec<DocNode> {
        std::mem::take(&mut self.nodes)
    }
}

impl RenderSurface for InMemorySurface {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn append(&mut self, node: DocNode) {
        self.nodes.push(node);
    }

    fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }
}
