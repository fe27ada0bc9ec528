// src/session.rs
//! One render pass from tasks to a ready surface.

use crate::complexity::ComplexityEstimator;
use crate::config::SessionConfig;
use crate::error::RenderError;
use crate::render::Renderer;
use folio_source::TaskSource;
use folio_traits::{GraphEngine, RenderSurface};
use folio_types::{RenderOptions, Task};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::{Instant, Sleep};

/// Summary of a finished pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    /// Number of tasks appended to the surface.
    pub tasks: usize,
    /// Graph units met during the pass.
    pub complexity: usize,
    /// The settle time that was waited before completion.
    pub delay: Duration,
}

/// Owns the render surface and runs passes over it.
#[derive(Debug)]
pub struct RenderSession<S, G> {
    surface: S,
    graphs: G,
    config: SessionConfig,
    complexity: ComplexityEstimator,
}

impl<S: RenderSurface, G: GraphEngine> RenderSession<S, G> {
    pub fn new(surface: S, graphs: G) -> Self {
        Self::with_config(surface, graphs, SessionConfig::default())
    }

    pub fn with_config(surface: S, graphs: G, config: SessionConfig) -> Self {
        Self {
            surface,
            graphs,
            config,
            complexity: ComplexityEstimator::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn graph_engine(&self) -> &G {
        &self.graphs
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Graph count of the most recent pass.
    pub fn complexity(&self) -> usize {
        self.complexity.count()
    }

    /// Renders `tasks` onto the surface and returns the completion signal.
    ///
    /// The tree is built synchronously before this returns: the surface is
    /// shown, cleared, and receives one `task` section per task, in order.
    /// Each task's own fields take precedence over `options`. Graph configs
    /// in `tasks` are switched to print mode in place.
    ///
    /// The returned [`Completion`] resolves `delay_per_graph × complexity`
    /// after this call, hides the surface, and yields the [`RenderReport`].
    /// The deadline is fixed here, not at the first poll. Dropping it early
    /// leaves the surface visible.
    pub fn render(
        &mut self,
        tasks: &mut [Task],
        options: &RenderOptions,
    ) -> Result<Completion<'_, S>, RenderError> {
        self.complexity.reset();
        self.surface.show();
        self.surface.clear();

        log::info!(
            "Rendering {} task(s) with graph engine {}.",
            tasks.len(),
            self.graphs.name()
        );

        let mut renderer = Renderer::new(&self.graphs, &mut self.complexity);
        for (i, task) in tasks.iter_mut().enumerate() {
            let settings = task.settings(options);
            let node = renderer.render_task(task, &settings)?;
            log::debug!(
                "Task {} rendered ({} problem(s), complexity so far {}).",
                i + 1,
                task.problems.len(),
                renderer.complexity()
            );
            self.surface.append(node);
        }

        let complexity = self.complexity.count();
        let delay = self.complexity.delay(self.config.delay_per_graph);
        log::info!(
            "Render pass built; waiting {:?} for {} graph(s) to settle.",
            delay,
            complexity
        );

        Ok(Completion {
            surface: &mut self.surface,
            deadline: Instant::now() + delay,
            sleep: None,
            report: RenderReport {
                tasks: tasks.len(),
                complexity,
                delay,
            },
        })
    }

    /// Renders every task the source provides.
    ///
    /// Defaults shipped with the source sit underneath `options`, which sit
    /// underneath each task's own fields.
    pub fn render_from(
        &mut self,
        source: &mut dyn TaskSource,
        options: &RenderOptions,
    ) -> Result<Completion<'_, S>, RenderError> {
        let options = match source.defaults() {
            Some(defaults) => defaults.overlay(options),
            None => options.clone(),
        };
        self.render(source.tasks(), &options)
    }
}

/// Completion signal of a render pass. See [`RenderSession::render`].
#[must_use = "the surface stays visible until the completion is awaited"]
#[derive(Debug)]
pub struct Completion<'a, S: RenderSurface> {
    surface: &'a mut S,
    deadline: Instant,
    sleep: Option<Pin<Box<Sleep>>>,
    report: RenderReport,
}

impl<S: RenderSurface> Completion<'_, S> {
    /// The report this completion will resolve with.
    pub fn report(&self) -> &RenderReport {
        &self.report
    }
}

impl<S: RenderSurface> Future for Completion<'_, S> {
    type Output = RenderReport;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        // Created lazily so `render` itself works outside a runtime.
        let deadline = this.deadline;
        let sleep = this
            .sleep
            .get_or_insert_with(|| Box::pin(tokio::time::sleep_until(deadline)));

        match sleep.as_mut().poll(cx) {
            Poll::Ready(()) => {
                this.surface.hide();
                log::info!(
                    "Render pass complete: {} task(s), {} graph(s).",
                    this.report.tasks,
                    this.report.complexity
                );
                Poll::Ready(this.report)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
