//! Input data model for a print render pass.
//!
//! A [`Task`] owns an ordered list of [`Problem`]s, and each problem is a set of
//! named [`ContentUnit`] sequences. All types (de)serialize with the camelCase
//! keys the host application supplies.

pub mod content;
pub mod graph;
pub mod options;
pub mod problem;
pub mod task;

pub use content::{ContentUnit, printable_text};
pub use graph::{ArrowMode, GraphConfig, GraphOptions, MathBounds};
pub use options::RenderOptions;
pub use problem::{Problem, ProblemField};
pub use task::Task;
