// src/builder.rs
use crate::config::SessionConfig;
use crate::printer::Printer;
use crate::session::RenderSession;
use folio_traits::{
    GraphEngine, InMemorySurface, MountingGraphEngine, PrintTrigger, RenderSurface,
};
use std::time::Duration;

/// A builder for creating a `RenderSession` or a `Printer`.
///
/// Starts from an in-memory surface and the mounting graph engine; swap either
/// with `with_surface` / `with_graph_engine`.
#[derive(Debug)]
pub struct SessionBuilder<S = InMemorySurface, G = MountingGraphEngine> {
    surface: S,
    graphs: G,
    config: SessionConfig,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            surface: InMemorySurface::new(),
            graphs: MountingGraphEngine::new(),
            config: SessionConfig::default(),
        }
    }
}

impl SessionBuilder {
    /// Creates a new `SessionBuilder` with default settings.
    pub fn new() -> Self {
        Default::default()
    }
}

impl<S: RenderSurface, G: GraphEngine> SessionBuilder<S, G> {
    /// Selects the surface passes are rendered onto.
    pub fn with_surface<S2: RenderSurface>(self, surface: S2) -> SessionBuilder<S2, G> {
        SessionBuilder {
            surface,
            graphs: self.graphs,
            config: self.config,
        }
    }

    /// Selects the engine graph configurations are handed to.
    pub fn with_graph_engine<G2: GraphEngine>(self, graphs: G2) -> SessionBuilder<S, G2> {
        SessionBuilder {
            surface: self.surface,
            graphs,
            config: self.config,
        }
    }

    /// Sets the settle time budgeted per graph.
    pub fn with_delay_per_graph(mut self, delay: Duration) -> Self {
        self.config.delay_per_graph = delay;
        self
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Consumes the builder and creates the `RenderSession`.
    pub fn build(self) -> RenderSession<S, G> {
        RenderSession::with_config(self.surface, self.graphs, self.config)
    }

    /// Consumes the builder and creates a `Printer` that fires `trigger` after
    /// each completed pass.
    pub fn build_printer<P: PrintTrigger>(self, trigger: P) -> Printer<S, G, P> {
        Printer::new(self.build(), trigger)
    }
}
