//! Arena-backed element tree.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of an element inside a [`DocumentTree`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single element: tag, attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    tag: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<NodeId>,
}

impl Element {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Qualified tag name, e.g. `w:tab`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in name order.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Children in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent element, if attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// An ordered element tree stored in an arena.
///
/// Removing an element destroys its whole subtree. Slots of destroyed
/// elements are never reused, so a stale [`NodeId`] reports
/// [`Error::NodeNotFound`] rather than resolving to an unrelated element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentTree {
    nodes: Vec<Option<Element>>,
    root: NodeId,
}

impl DocumentTree {
    /// Create a tree holding a single root element.
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            nodes: vec![Some(Element::new(root_tag))],
            root: NodeId(0),
        }
    }

    /// Create a tree whose root holds one child per tag, in order.
    pub(crate) fn with_root_children(root_tag: &str, child_tags: &[&str]) -> (Self, Vec<NodeId>) {
        let mut tree = Self::new(root_tag);
        let root = tree.root;
        let children: Vec<NodeId> = child_tags
            .iter()
            .map(|&tag| {
                let id = tree.create_element(tag);
                if let Some(element) = tree.nodes[id.0].as_mut() {
                    element.parent = Some(root);
                }
                id
            })
            .collect();
        if let Some(element) = tree.nodes[root.0].as_mut() {
            element.children = children.clone();
        }
        (tree, children)
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live elements, detached ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Check whether `id` refers to a live element.
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id.0), Some(Some(_)))
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Element::new(tag)));
        id
    }

    /// Look up an element.
    pub fn element(&self, id: NodeId) -> Result<&Element> {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .ok_or(Error::NodeNotFound(id))
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(Error::NodeNotFound(id))
    }

    /// Tag name of an element.
    pub fn tag(&self, id: NodeId) -> Result<&str> {
        Ok(self.element(id)?.tag())
    }

    /// Parent of an element.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.element(id)?.parent)
    }

    /// Children of an element in document order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.element(id)?.children())
    }

    /// Children with the given tag, in document order.
    pub fn children_with_tag(&self, id: NodeId, tag: &str) -> Result<Vec<NodeId>> {
        let mut matched = Vec::new();
        for &child in self.children(id)? {
            if self.tag(child)? == tag {
                matched.push(child);
            }
        }
        Ok(matched)
    }

    /// First child with the given tag.
    pub fn first_child_with_tag(&self, id: NodeId, tag: &str) -> Result<Option<NodeId>> {
        for &child in self.children(id)? {
            if self.tag(child)? == tag {
                return Ok(Some(child));
            }
        }
        Ok(None)
    }

    /// Return the first child with `tag`, appending a new one if there is none.
    pub fn get_or_add_child(&mut self, id: NodeId, tag: &str) -> Result<NodeId> {
        if let Some(existing) = self.first_child_with_tag(id, tag)? {
            return Ok(existing);
        }
        let child = self.create_element(tag);
        self.append_child(id, child)?;
        log::trace!("created <{}> {} under {}", tag, child, id);
        Ok(child)
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` into `parent` immediately before `reference`.
    ///
    /// `None` appends. A child that is already attached elsewhere is moved.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<()> {
        self.element(parent)?;
        self.element(child)?;
        if reference == Some(child) {
            return Err(Error::Cycle { parent, child });
        }
        if self.is_ancestor_or_self(child, parent)? {
            return Err(Error::Cycle { parent, child });
        }
        if let Some(reference) = reference {
            if !self.children(parent)?.contains(&reference) {
                return Err(Error::NotAChild {
                    parent,
                    child: reference,
                });
            }
        }

        self.detach(child)?;

        let children = &self.element(parent)?.children;
        let index = match reference {
            Some(reference) => children
                .iter()
                .position(|&c| c == reference)
                .ok_or(Error::NotAChild {
                    parent,
                    child: reference,
                })?,
            None => children.len(),
        };

        self.element_mut(parent)?.children.insert(index, child);
        self.element_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Remove `child` from `parent` and destroy its subtree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let children = &mut self.element_mut(parent)?.children;
        let index = children
            .iter()
            .position(|&c| c == child)
            .ok_or(Error::NotAChild { parent, child })?;
        children.remove(index);
        self.destroy(child);
        Ok(())
    }

    /// Remove and destroy every child of `parent` with the given tag.
    ///
    /// Returns the number of children removed.
    pub fn remove_children_with_tag(&mut self, parent: NodeId, tag: &str) -> Result<usize> {
        let doomed = self.children_with_tag(parent, tag)?;
        for &child in &doomed {
            self.remove_child(parent, child)?;
        }
        Ok(doomed.len())
    }

    /// Attribute value, if present.
    pub fn attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>> {
        Ok(self.element(id)?.attributes.get(name).map(String::as_str))
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.element_mut(id)?
            .attributes
            .insert(name.into(), value.into());
        Ok(())
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>> {
        Ok(self.element_mut(id)?.attributes.remove(name))
    }

    /// Check that parent and child links agree and form a forest.
    ///
    /// Every child must be live, list its container as parent, and appear
    /// exactly once; the root must be live and unattached. Trees built through
    /// this API always pass. Deserialized trees should be checked before use.
    pub fn validate(&self) -> Result<()> {
        let malformed = |node, reason| Err(Error::MalformedTree { node, reason });

        if self.parent(self.root)?.is_some() {
            return malformed(self.root, "root has a parent");
        }

        for (index, slot) in self.nodes.iter().enumerate() {
            let Some(element) = slot else { continue };
            let id = NodeId(index);
            if let Some(parent) = element.parent {
                match self.nodes.get(parent.0).and_then(Option::as_ref) {
                    Some(p) if p.children.contains(&id) => {}
                    Some(_) => return malformed(id, "parent does not list it as a child"),
                    None => return malformed(id, "parent does not exist"),
                }
            }
            for &child in &element.children {
                match self.nodes.get(child.0).and_then(Option::as_ref) {
                    Some(c) if c.parent == Some(id) => {}
                    Some(_) => return malformed(child, "child names a different parent"),
                    None => return malformed(child, "child does not exist"),
                }
            }
        }

        // Links agree, so a walk down from the parentless nodes reaches every
        // node once unless it sits on a cycle or is listed twice.
        let mut seen = vec![false; self.nodes.len()];
        let mut stack: Vec<NodeId> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.as_ref().is_some_and(|e| e.parent.is_none()))
            .map(|(index, _)| NodeId(index))
            .collect();
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.0], true) {
                return malformed(id, "listed more than once");
            }
            stack.extend(self.children(id)?.iter().copied());
        }
        for (index, slot) in self.nodes.iter().enumerate() {
            if slot.is_some() && !seen[index] {
                return malformed(NodeId(index), "part of a parent cycle");
            }
        }

        Ok(())
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, mut id: NodeId) -> Result<bool> {
        loop {
            if id == candidate {
                return Ok(true);
            }
            match self.parent(id)? {
                Some(parent) => id = parent,
                None => return Ok(false),
            }
        }
    }

    fn detach(&mut self, id: NodeId) -> Result<()> {
        if let Some(parent) = self.element_mut(id)?.parent.take() {
            self.element_mut(parent)?.children.retain(|&c| c != id);
        }
        Ok(())
    }

    fn destroy(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(element) = self.nodes.get_mut(id.0).and_then(Option::take) {
                stack.extend(element.children);
            }
        }
    }
}
