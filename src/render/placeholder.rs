use super::Renderer;
use folio_idf::{DocNode, classes};
use folio_types::{ContentUnit, GraphConfig};

/// What stands in for one solution unit while answers are hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenAnswer {
    /// A blank answer box.
    Blank,
    /// A blank coordinate grid, for graph answers.
    EmptyCoordinate,
}

impl HiddenAnswer {
    /// Options-typed solution units get no stand-in at all.
    pub fn for_unit(unit: &ContentUnit) -> Option<Self> {
        match unit {
            ContentUnit::Graph(_) => Some(HiddenAnswer::EmptyCoordinate),
            ContentUnit::Options(_) => None,
            ContentUnit::Text(_) | ContentUnit::Unknown { .. } => Some(HiddenAnswer::Blank),
        }
    }
}

/// An empty block marking a withheld answer.
pub fn render_problem_placeholder() -> DocNode {
    DocNode::block([classes::PROBLEM_PLACEHOLDER], Vec::new())
}

impl Renderer<'_> {
    /// Dispatches the fixed blank grid to the graph engine.
    ///
    /// Does not count: the caller records exactly one graph per hidden graph
    /// answer.
    pub fn render_empty_coordinate(&self) -> DocNode {
        self.graphs.render(&GraphConfig::empty_coordinate())
    }

    /// Renders the stand-in for `hidden`, counting the grid's graph.
    pub(crate) fn render_hidden_answer(&mut self, hidden: HiddenAnswer) -> DocNode {
        match hidden {
            HiddenAnswer::Blank => render_problem_placeholder(),
            HiddenAnswer::EmptyCoordinate => {
                self.complexity.record_graph();
                self.render_empty_coordinate()
            }
        }
    }
}
