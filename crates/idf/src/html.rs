//! HTML serialization of a document tree.
//!
//! Element choice mirrors what a browser-based print view expects: tasks are
//! `<section>`, containers `<div>`, choice sets `<ul>`. Graph mounts become
//! empty `<div class="graph">` elements carrying their configuration as JSON
//! in `data-graph`, for a client-side drawer to pick up.

use crate::DocNode;
use std::fmt::{self, Write};

/// Renders a sequence of top-level nodes as one HTML fragment.
pub fn to_html(nodes: &[DocNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        // Writing into a String only fails if a graph config can't be encoded.
        if write_node(&mut out, node).is_err() {
            log::warn!("Skipped a node that could not be serialized to HTML.");
        }
    }
    out
}

impl DocNode {
    pub fn to_html(&self) -> String {
        to_html(std::slice::from_ref(self))
    }
}

fn write_node(out: &mut String, node: &DocNode) -> fmt::Result {
    match node {
        DocNode::Section { meta, children } => {
            write_container(out, "section", &meta.classes, children)
        }
        DocNode::Block { meta, children } => {
            write_container(out, "div", &meta.classes, children)
        }
        DocNode::List { meta, children } => {
            write_container(out, "ul", &meta.classes, children)
        }
        DocNode::ListItem { meta, children } => {
            write_container(out, "li", &meta.classes, children)
        }
        DocNode::Heading { meta, level, text } => {
            let tag = format!("h{}", (*level).clamp(1, 6));
            open_tag(out, &tag, &meta.classes)?;
            out.push_str(&escape_text(text));
            write!(out, "</{}>", tag)
        }
        DocNode::Paragraph { meta, text } => {
            open_tag(out, "p", &meta.classes)?;
            out.push_str(&escape_text(text));
            out.push_str("</p>");
            Ok(())
        }
        DocNode::Text(text) => {
            out.push_str(&escape_text(text));
            Ok(())
        }
        DocNode::Graph { meta, config } => {
            let json = serde_json::to_string(config).map_err(|_| fmt::Error)?;
            write_attrs(out, "div", &meta.classes)?;
            write!(out, " data-graph=\"{}\"></div>", escape_attr(&json))
        }
    }
}

fn write_container(
    out: &mut String,
    tag: &str,
    classes: &[String],
    children: &[DocNode],
) -> fmt::Result {
    open_tag(out, tag, classes)?;
    for child in children {
        write_node(out, child)?;
    }
    write!(out, "</{}>", tag)
}

fn open_tag(out: &mut String, tag: &str, classes: &[String]) -> fmt::Result {
    write_attrs(out, tag, classes)?;
    out.push('>');
    Ok(())
}

/// Writes `<tag` and its class attribute, leaving the tag open.
fn write_attrs(out: &mut String, tag: &str, classes: &[String]) -> fmt::Result {
    write!(out, "<{}", tag)?;
    if !classes.is_empty() {
        write!(out, " class=\"{}\"", escape_attr(&classes.join(" ")))?;
    }
    Ok(())
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
