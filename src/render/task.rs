use super::Renderer;
use super::title_page::render_title_page;
use crate::error::RenderError;
use folio_idf::{DocNode, classes};
use folio_types::{RenderOptions, Task};

impl Renderer<'_> {
    /// Renders one task as a `task` section: the title page when enabled, then
    /// the problem list.
    ///
    /// `settings` are the task's effective options, already merged with the
    /// run defaults (see [`Task::settings`]).
    pub fn render_task(
        &mut self,
        task: &mut Task,
        settings: &RenderOptions,
    ) -> Result<DocNode, RenderError> {
        let mut section = DocNode::section([classes::TASK], Vec::with_capacity(2));

        if settings.title_page_shown() {
            section.push(render_title_page(settings));
        }

        let problems = self.render_problems(
            &mut task.problems,
            settings.answers_shown(),
            settings.two_column_layout(),
        )?;
        section.push(problems);

        Ok(section)
    }
}
