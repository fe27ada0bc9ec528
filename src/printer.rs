// src/printer.rs
use crate::error::RenderError;
use crate::session::{RenderReport, RenderSession};
use folio_source::TaskSource;
use folio_traits::{GraphEngine, PrintTrigger, RenderSurface};
use folio_types::{RenderOptions, Task};

/// Renders tasks and then fires the host's print action.
#[derive(Debug)]
pub struct Printer<S, G, P> {
    session: RenderSession<S, G>,
    trigger: P,
}

impl<S: RenderSurface, G: GraphEngine, P: PrintTrigger> Printer<S, G, P> {
    pub fn new(session: RenderSession<S, G>, trigger: P) -> Self {
        Self { session, trigger }
    }

    pub fn session(&self) -> &RenderSession<S, G> {
        &self.session
    }

    pub fn trigger(&self) -> &P {
        &self.trigger
    }

    /// Runs a render pass, waits for its completion, then prints once.
    ///
    /// A failed pass never reaches the trigger.
    pub async fn print(
        &mut self,
        tasks: &mut [Task],
        options: &RenderOptions,
    ) -> Result<RenderReport, RenderError> {
        let report = self.session.render(tasks, options)?.await;
        log::debug!("Invoking print trigger {}.", self.trigger.name());
        self.trigger.print()?;
        Ok(report)
    }

    /// Like [`Printer::print`], reading tasks from `source`.
    pub async fn print_from(
        &mut self,
        source: &mut dyn TaskSource,
        options: &RenderOptions,
    ) -> Result<RenderReport, RenderError> {
        let report = self.session.render_from(source, options)?.await;
        log::debug!("Invoking print trigger {}.", self.trigger.name());
        self.trigger.print()?;
        Ok(report)
    }

    pub fn into_session(self) -> RenderSession<S, G> {
        self.session
    }
}
