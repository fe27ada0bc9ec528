#![allow(dead_code)]

pub mod fixtures;

use folio::{
    DocNode, InMemorySurface, MountingGraphEngine, RenderError, RenderOptions, RenderReport,
    RenderSession, RenderSurface, SessionBuilder, Task,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Result of a finished pass, with the surface's tree copied out.
pub struct RenderedPass {
    pub nodes: Vec<DocNode>,
    pub report: RenderReport,
    pub dispatched: usize,
}

impl RenderedPass {
    /// The `task` section at `index`.
    pub fn task(&self, index: usize) -> &DocNode {
        &self.nodes[index]
    }

    /// Counts nodes tagged `class` across every task.
    pub fn count(&self, class: &str) -> usize {
        self.nodes.iter().map(|n| n.count_by_class(class)).sum()
    }

    /// Every graph mount in document order.
    pub fn graphs(&self) -> Vec<&DocNode> {
        self.nodes
            .iter()
            .flat_map(|n| n.descendants())
            .filter(|n| matches!(n, DocNode::Graph { .. }))
            .collect()
    }

    pub fn html(&self) -> String {
        folio::idf::html::to_html(&self.nodes)
    }
}

pub fn session() -> RenderSession<InMemorySurface, MountingGraphEngine> {
    SessionBuilder::new().build()
}

/// Runs a full pass on a fresh session and waits for its completion.
pub async fn render(
    tasks: &mut [Task],
    options: &RenderOptions,
) -> Result<RenderedPass, RenderError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut session = session();
    let report = session.render(tasks, options)?.await;
    Ok(RenderedPass {
        nodes: session.surface().nodes().to_vec(),
        report,
        dispatched: session.graph_engine().dispatched(),
    })
}
