// src/render/mod.rs
//! Turns tasks into document trees.
//!
//! Rendering is split by level, leaf-first:
//! - [`part`]: one content unit (text, graph, options set)
//! - [`placeholder`]: stand-ins for hidden answers
//! - [`title_page`]: the optional cover block of a task
//! - [`problem`]: one problem with its steps and solution
//! - [`problem_list`]: the ordered problems of a task
//! - [`task`]: title page plus problem list
//!
//! Every level that can meet a graph unit goes through one [`Renderer`], which
//! carries the graph engine and the pass's [`ComplexityEstimator`].

pub mod part;
pub mod placeholder;
pub mod problem;
pub mod problem_list;
pub mod task;
pub mod title_page;

use crate::complexity::ComplexityEstimator;
use folio_traits::GraphEngine;
use folio_types::ContentUnit;

pub use placeholder::render_problem_placeholder;
pub use title_page::render_title_page;

/// State threaded through one render pass.
pub struct Renderer<'a> {
    graphs: &'a dyn GraphEngine,
    complexity: &'a mut ComplexityEstimator,
}

impl<'a> Renderer<'a> {
    pub fn new(graphs: &'a dyn GraphEngine, complexity: &'a mut ComplexityEstimator) -> Self {
        Self { graphs, complexity }
    }

    pub fn complexity(&self) -> usize {
        self.complexity.count()
    }

    /// Counts every graph this unit will dispatch and switches each one to
    /// print mode, in place on the caller's data. Options sets are checked one
    /// level down.
    ///
    /// Must run exactly once for each unit later handed to `render_part`, so
    /// the count stays paired with the graphs actually drawn.
    pub(crate) fn prepare_unit(&mut self, unit: &mut ContentUnit) {
        match unit {
            ContentUnit::Graph(config) => {
                self.complexity.record_graph();
                config.print_mode = true;
            }
            ContentUnit::Options(units) => {
                for option in units.iter_mut() {
                    if let ContentUnit::Graph(config) = option {
                        self.complexity.record_graph();
                        config.print_mode = true;
                    }
                }
            }
            ContentUnit::Text(_) | ContentUnit::Unknown { .. } => {}
        }
    }
}
