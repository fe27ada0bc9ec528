//! # folio
//!
//! Print rendering for academic problem sets.
//!
//! A pass takes a list of [`Task`]s and builds a printable document tree:
//! - **render**: task, title page, problem list and content part renderers
//! - **session**: drives a pass over a [`RenderSurface`] and signals completion
//! - **printer**: waits for completion and fires a [`PrintTrigger`]
//! - **complexity**: graph counting that sizes the settle delay
//!
//! The document model lives in `folio-idf`, task data in `folio-types`, and
//! the host seams (surface, graph engine, print trigger) in `folio-traits`.

pub mod builder;
pub mod complexity;
pub mod config;
pub mod error;
pub mod printer;
pub mod render;
pub mod session;

pub use builder::SessionBuilder;
pub use complexity::ComplexityEstimator;
pub use config::{DEFAULT_DELAY_PER_GRAPH, SessionConfig};
pub use error::RenderError;
pub use printer::Printer;
pub use render::{Renderer, render_problem_placeholder, render_title_page};
pub use session::{Completion, RenderReport, RenderSession};

// Re-export the workspace crates
pub use folio_idf as idf;
pub use folio_source as source;
pub use folio_traits as traits;
pub use folio_types as types;

pub use folio_idf::DocNode;
pub use folio_source::{SourceError, TaskSource, VecTaskSource};
pub use folio_traits::{
    GraphEngine, InMemorySurface, MountingGraphEngine, NoopPrintTrigger, PrintError,
    PrintTrigger, RenderSurface,
};
pub use folio_types::{ContentUnit, GraphConfig, Problem, RenderOptions, Task};
