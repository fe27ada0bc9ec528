use super::Renderer;
use super::placeholder::HiddenAnswer;
use crate::error::RenderError;
use folio_idf::{DocNode, classes};
use folio_types::{Problem, ProblemField};

impl Renderer<'_> {
    /// Renders one problem.
    ///
    /// The output is a `problem` block headed `Problem {index + 1}`, followed
    /// by one container per key of the problem, in the problem's own key
    /// order:
    /// - `problem`: the body, then (answers hidden) one stand-in per solution
    ///   unit.
    /// - `steps` / `solution`: populated and tagged `steps` / `answer` only
    ///   when answers are shown.
    /// - anything else: an empty, untagged container.
    pub fn render_problem(
        &mut self,
        problem: &mut Problem,
        index: usize,
        with_answers: bool,
    ) -> Result<DocNode, RenderError> {
        if problem.body().is_none() {
            return Err(RenderError::MissingProblemBody { index });
        }

        let hidden: Vec<HiddenAnswer> = if with_answers {
            Vec::new()
        } else {
            problem
                .solution()
                .map(|units| units.iter().filter_map(HiddenAnswer::for_unit).collect())
                .unwrap_or_default()
        };

        let header = DocNode::heading(classes::NONE, 2, format!("Problem {}", index + 1));
        let mut node = DocNode::block([classes::PROBLEM], vec![header]);

        for field in problem.fields_mut() {
            let mut parts = DocNode::empty_block();

            match field {
                ProblemField::Problem(units) => {
                    for unit in units.iter_mut() {
                        self.prepare_unit(unit);
                        self.render_part(&mut parts, unit);
                    }
                    for answer in &hidden {
                        let stand_in = self.render_hidden_answer(*answer);
                        parts.push(stand_in);
                    }
                }
                ProblemField::Steps(units) if with_answers => {
                    parts.add_class(classes::STEPS);
                    for unit in units.iter_mut() {
                        self.prepare_unit(unit);
                        self.render_part(&mut parts, unit);
                    }
                }
                ProblemField::Solution(units) if with_answers => {
                    parts.add_class(classes::ANSWER);
                    for unit in units.iter_mut() {
                        self.prepare_unit(unit);
                        self.render_solution_part(&mut parts, unit);
                    }
                }
                ProblemField::Steps(_) | ProblemField::Solution(_) | ProblemField::Other { .. } => {}
            }

            node.push(parts);
        }

        log::debug!(
            "Rendered problem {} (answers {}, complexity so far {}).",
            index + 1,
            if with_answers { "shown" } else { "hidden" },
            self.complexity()
        );
        Ok(node)
    }
}
