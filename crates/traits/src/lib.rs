pub mod graph;
pub mod print;
pub mod surface;

pub use graph::{GraphEngine, MountingGraphEngine};
pub use print::{CountingPrintTrigger, NoopPrintTrigger, PrintError, PrintTrigger};
pub use surface::{InMemorySurface, RenderSurface};
