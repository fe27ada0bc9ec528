use super::Renderer;
use crate::error::RenderError;
use folio_idf::{DocNode, classes};
use folio_types::Problem;

impl Renderer<'_> {
    /// Renders problems in order, numbered from 1, inside a `problem-section`
    /// block. `two_columns` only adds the `two-columns` tag; the column
    /// layout itself is up to the presentation layer.
    pub fn render_problems(
        &mut self,
        problems: &mut [Problem],
        with_answers: bool,
        two_columns: bool,
    ) -> Result<DocNode, RenderError> {
        let mut section =
            DocNode::block([classes::PROBLEM_SECTION], Vec::with_capacity(problems.len()));
        if two_columns {
            section.add_class(classes::TWO_COLUMNS);
        }

        for (index, problem) in problems.iter_mut().enumerate() {
            let node = self.render_problem(problem, index, with_answers)?;
            section.push(node);
        }

        Ok(section)
    }
}
