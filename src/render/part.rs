use super::Renderer;
use folio_idf::{DocNode, NodeMetadata, classes};
use folio_types::{ContentUnit, printable_text};

impl Renderer<'_> {
    /// Renders one content unit into `container`.
    ///
    /// Dispatch is on the unit type alone. This never touches the complexity
    /// counter; callers run `prepare_unit` first.
    pub fn render_part(&self, container: &mut DocNode, unit: &ContentUnit) {
        match unit {
            ContentUnit::Text(value) => {
                container.push(DocNode::text(printable_text(value)));
            }
            ContentUnit::Graph(config) => {
                container.push(self.graphs.render(config));
            }
            ContentUnit::Options(units) => {
                container.push(self.render_options(units));
            }
            ContentUnit::Unknown { kind, .. } => {
                log::warn!("Skipping content unit of unknown type '{}'.", kind);
            }
        }
    }

    /// Renders a solution unit wrapped in a `highlight` block, so answers
    /// stand out from the body text.
    pub fn render_solution_part(&self, container: &mut DocNode, unit: &ContentUnit) {
        let mut highlighted = DocNode::block([classes::HIGHLIGHT], Vec::new());
        self.render_part(&mut highlighted, unit);
        if !highlighted.children().is_empty() {
            container.push(highlighted);
        }
    }

    fn render_options(&self, units: &[ContentUnit]) -> DocNode {
        let items = units
            .iter()
            .map(|unit| {
                let mut item = DocNode::ListItem {
                    meta: NodeMetadata::tagged([classes::OPTION]),
                    children: Vec::new(),
                };
                if unit.is_options() {
                    log::warn!("Options nested inside an options set are not rendered.");
                } else {
                    self.render_part(&mut item, unit);
                }
                item
            })
            .collect();

        DocNode::List {
            meta: NodeMetadata::tagged([classes::OPTIONS]),
            children: items,
        }
    }
}
