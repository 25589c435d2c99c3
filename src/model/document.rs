//! Document-level types.

use super::{attrs, tags, DocumentTree, NodeId};
use crate::error::{Error, Result};
use crate::render::JsonFormat;
use crate::text::{TabStops, TabStopsMut};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A document: a body of paragraphs plus a style sheet, stored as one tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    tree: DocumentTree,
    body: NodeId,
    styles: NodeId,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        let (tree, children) =
            DocumentTree::with_root_children(tags::DOCUMENT, &[tags::BODY, tags::STYLES]);
        Self {
            tree,
            body: children[0],
            styles: children[1],
        }
    }

    /// Load a document snapshot from a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write a pretty-printed JSON snapshot to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json(JsonFormat::Pretty)?)?;
        Ok(())
    }

    /// Parse a JSON snapshot.
    ///
    /// Snapshots whose parent and child links disagree or loop are rejected
    /// with [`Error::MalformedTree`].
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(json)?;
        doc.tree.validate()?;
        doc.tree.element(doc.body)?;
        doc.tree.element(doc.styles)?;
        Ok(doc)
    }

    /// Serialize to a JSON snapshot.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self)?,
            JsonFormat::Compact => serde_json::to_string(self)?,
        };
        Ok(json)
    }

    /// The underlying tree.
    pub fn tree(&self) -> &DocumentTree {
        &self.tree
    }

    /// The underlying tree, mutably.
    pub fn tree_mut(&mut self) -> &mut DocumentTree {
        &mut self.tree
    }

    /// Append an empty paragraph to the body.
    pub fn add_paragraph(&mut self) -> Result<NodeId> {
        let p = self.tree.create_element(tags::PARAGRAPH);
        self.tree.append_child(self.body, p)?;
        Ok(p)
    }

    /// Paragraphs in body order.
    pub fn paragraphs(&self) -> Result<Vec<NodeId>> {
        self.tree.children_with_tag(self.body, tags::PARAGRAPH)
    }

    /// Get a paragraph by index (0-indexed).
    pub fn paragraph(&self, index: usize) -> Result<NodeId> {
        let paragraphs = self.paragraphs()?;
        paragraphs
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: paragraphs.len(),
            })
    }

    /// Add a paragraph style with the given style id.
    pub fn add_paragraph_style(&mut self, style_id: &str) -> Result<NodeId> {
        let style = self.tree.create_element(tags::STYLE);
        self.tree.set_attribute(style, attrs::TYPE, "paragraph")?;
        self.tree.set_attribute(style, attrs::STYLE_ID, style_id)?;
        self.tree.append_child(self.styles, style)?;
        Ok(style)
    }

    /// Find a paragraph style by style id.
    pub fn style(&self, style_id: &str) -> Result<NodeId> {
        for style in self.tree.children_with_tag(self.styles, tags::STYLE)? {
            if self.tree.attribute(style, attrs::STYLE_ID)? == Some(style_id) {
                return Ok(style);
            }
        }
        Err(Error::StyleNotFound(style_id.to_string()))
    }

    /// Read-only tab stops of a paragraph or paragraph style.
    pub fn tab_stops(&self, owner: NodeId) -> Result<TabStops<'_>> {
        self.tree.tab_stops(owner)
    }

    /// Mutable tab stops of a paragraph or paragraph style.
    pub fn tab_stops_mut(&mut self, owner: NodeId) -> Result<TabStopsMut<'_>> {
        self.tree.tab_stops_mut(owner)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
