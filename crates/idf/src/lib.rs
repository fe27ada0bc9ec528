//! Intermediate Document Format (IDF)
//! The in-memory tree a render pass produces. It is independent of any UI
//! toolkit: nodes are generic containers and leaves tagged with class names,
//! which a host maps onto its own presentation layer (see [`html`]).

pub mod classes;
pub mod html;

use folio_types::GraphConfig;

/// A string type for document text.
pub type TextStr = String;

/// Metadata shared by every non-text node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeMetadata {
    pub classes: Vec<TextStr>,
}

impl NodeMetadata {
    pub fn tagged<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TextStr>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }
}

/// A node of the output document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocNode {
    /// A top-level section; one per rendered task.
    Section {
        meta: NodeMetadata,
        children: Vec<DocNode>,
    },
    /// A generic block container.
    Block {
        meta: NodeMetadata,
        children: Vec<DocNode>,
    },
    /// A heading, with a level and plain text.
    Heading {
        meta: NodeMetadata,
        level: u8,
        text: TextStr,
    },
    /// A paragraph of plain text.
    Paragraph { meta: NodeMetadata, text: TextStr },
    /// Opaque content passed through from a text unit.
    Text(TextStr),
    /// Mount point for the external graph engine, with the configuration it
    /// was handed.
    Graph {
        meta: NodeMetadata,
        config: GraphConfig,
    },
    /// A choice set.
    List {
        meta: NodeMetadata,
        children: Vec<DocNode>,
    },
    /// One choice within a `List`.
    ListItem {
        meta: NodeMetadata,
        children: Vec<DocNode>,
    },
}

impl DocNode {
    pub fn section<I, S>(classes: I, children: Vec<DocNode>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TextStr>,
    {
        DocNode::Section {
            meta: NodeMetadata::tagged(classes),
            children,
        }
    }

    pub fn block<I, S>(classes: I, children: Vec<DocNode>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TextStr>,
    {
        DocNode::Block {
            meta: NodeMetadata::tagged(classes),
            children,
        }
    }

    /// An untagged, childless block.
    pub fn empty_block() -> Self {
        DocNode::Block {
            meta: NodeMetadata::default(),
            children: Vec::new(),
        }
    }

    pub fn heading<I, S>(classes: I, level: u8, text: impl Into<TextStr>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TextStr>,
    {
        DocNode::Heading {
            meta: NodeMetadata::tagged(classes),
            level,
            text: text.into(),
        }
    }

    pub fn paragraph<I, S>(classes: I, text: impl Into<TextStr>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TextStr>,
    {
        DocNode::Paragraph {
            meta: NodeMetadata::tagged(classes),
            text: text.into(),
        }
    }

    pub fn text(content: impl Into<TextStr>) -> Self {
        DocNode::Text(content.into())
    }

    pub fn graph(config: GraphConfig) -> Self {
        DocNode::Graph {
            meta: NodeMetadata::tagged([classes::GRAPH]),
            config,
        }
    }

    pub fn meta(&self) -> Option<&NodeMetadata> {
        match self {
            DocNode::Section { meta, .. }
            | DocNode::Block { meta, .. }
            | DocNode::Heading { meta, .. }
            | DocNode::Paragraph { meta, .. }
            | DocNode::Graph { meta, .. }
            | DocNode::List { meta, .. }
            | DocNode::ListItem { meta, .. } => Some(meta),
            DocNode::Text(_) => None,
        }
    }

    pub fn meta_mut(&mut self) -> Option<&mut NodeMetadata> {
        match self {
            DocNode::Section { meta, .. }
            | DocNode::Block { meta, .. }
            | DocNode::Heading { meta, .. }
            | DocNode::Paragraph { meta, .. }
            | DocNode::Graph { meta, .. }
            | DocNode::List { meta, .. }
            | DocNode::ListItem { meta, .. } => Some(meta),
            DocNode::Text(_) => None,
        }
    }

    pub fn classes(&self) -> &[TextStr] {
        self.meta().map(|m| m.classes.as_slice()).unwrap_or(&[])
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// Adds a class tag. Text nodes carry no metadata and are left unchanged.
    pub fn add_class(&mut self, class: impl Into<TextStr>) {
        if let Some(meta) = self.meta_mut() {
            meta.classes.push(class.into());
        }
    }

    pub fn children(&self) -> &[DocNode] {
        match self {
            DocNode::Section { children, .. }
            | DocNode::Block { children, .. }
            | DocNode::List { children, .. }
            | DocNode::ListItem { children, .. } => children,
            _ => &[],
        }
    }

    /// Appends a child. Leaf nodes can't hold one; the child is dropped.
    pub fn push(&mut self, child: DocNode) {
        match self {
            DocNode::Section { children, .. }
            | DocNode::Block { children, .. }
            | DocNode::List { children, .. }
            | DocNode::ListItem { children, .. } => children.push(child),
            leaf => log::warn!("Dropped a child pushed onto a {} node.", leaf.kind()),
        }
    }

    /// Returns a string identifier for the node type.
    pub fn kind(&self) -> &'static str {
        match self {
            DocNode::Section { .. } => "section",
            DocNode::Block { .. } => "block",
            DocNode::Heading { .. } => "heading",
            DocNode::Paragraph { .. } => "paragraph",
            DocNode::Text(_) => "text",
            DocNode::Graph { .. } => "graph",
            DocNode::List { .. } => "list",
            DocNode::ListItem { .. } => "list-item",
        }
    }

    /// The node's own text, for leaves that have one.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            DocNode::Heading { text, .. } | DocNode::Paragraph { text, .. } => Some(text.as_str()),
            DocNode::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Depth-first, pre-order traversal of this node and all descendants.
    pub fn descendants(&self) -> Vec<&DocNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&DocNode> {
        self.descendants()
            .into_iter()
            .filter(|n| n.has_class(class))
            .collect()
    }

    pub fn count_by_class(&self, class: &str) -> usize {
        self.find_all_by_class(class).len()
    }

    pub fn find_first_by_class(&self, class: &str) -> Option<&DocNode> {
        self.descendants().into_iter().find(|n| n.has_class(class))
    }
}
