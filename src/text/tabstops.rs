//! Live views over the tab stops of a paragraph or paragraph style.
//!
//! Tab stops live as `w:tab` children of a `w:tabs` container inside the
//! owner's `w:pPr`. The views here hold no copy of that list: every call
//! walks the tree again, so a view always reflects the current state.
//!
//! Writers keep the stops in ascending position order. Readers trust that
//! order and never re-sort, so a tree edited behind the view's back may
//! yield stops out of order.

use crate::error::{Error, Result};
use crate::model::{tags, DocumentTree, NodeId, TabAlignment, TabLeader};
use crate::units::Length;
use std::fmt;
use std::slice;

/// `w:tab` children of the `w:tabs` container, in document order.
///
/// Uses the same filter as [`Iter`] so `get` and `len` always agree.
fn tab_nodes(tree: &DocumentTree, ppr: Option<NodeId>) -> Result<Vec<NodeId>> {
    match container(tree, ppr)? {
        Some(tabs) => Ok(tree
            .children(tabs)?
            .iter()
            .copied()
            .filter(|&node| is_tab(tree, node))
            .collect()),
        None => Ok(Vec::new()),
    }
}

fn is_tab(tree: &DocumentTree, node: NodeId) -> bool {
    tree.tag(node).is_ok_and(|tag| tag == tags::TAB)
}

fn container(tree: &DocumentTree, ppr: Option<NodeId>) -> Result<Option<NodeId>> {
    match ppr {
        Some(ppr) => tree.first_child_with_tag(ppr, tags::TABS),
        None => Ok(None),
    }
}

fn nth_tab(tree: &DocumentTree, ppr: Option<NodeId>, index: usize) -> Result<NodeId> {
    let tabs = tab_nodes(tree, ppr)?;
    tabs.get(index).copied().ok_or(Error::IndexOutOfRange {
        index,
        len: tabs.len(),
    })
}

/// Read-only tab stops of one paragraph or paragraph style.
///
/// Obtained from [`DocumentTree::tab_stops`]. An owner without paragraph
/// properties or without a `w:tabs` container has no tab stops.
#[derive(Clone, Copy)]
pub struct TabStops<'a> {
    tree: &'a DocumentTree,
    ppr: Option<NodeId>,
}

impl<'a> TabStops<'a> {
    pub(crate) fn new(tree: &'a DocumentTree, ppr: Option<NodeId>) -> Self {
        Self { tree, ppr }
    }

    /// Number of tab stops.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if there are no tab stops.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Tab stop at `index` in document order.
    pub fn get(&self, index: usize) -> Result<TabStop<'a>> {
        let node = nth_tab(self.tree, self.ppr, index)?;
        Ok(TabStop {
            tree: self.tree,
            node,
        })
    }

    /// Iterate tab stops in document order.
    pub fn iter(&self) -> Iter<'a> {
        // The tree is borrowed, so the container can't have been removed
        // since the view was built; a lookup failure means "no container".
        let tree = self.tree;
        let children = container(tree, self.ppr)
            .ok()
            .flatten()
            .and_then(|tabs| tree.children(tabs).ok())
            .unwrap_or_default();
        Iter {
            tree,
            children: children.iter(),
        }
    }
}

impl<'a> IntoIterator for TabStops<'a> {
    type Item = TabStop<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &TabStops<'a> {
    type Item = TabStop<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for TabStops<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over tab stops in document order.
#[derive(Clone)]
pub struct Iter<'a> {
    tree: &'a DocumentTree,
    children: slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = TabStop<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.children
            .by_ref()
            .find(|&&node| is_tab(tree, node))
            .map(|&node| TabStop { tree, node })
    }
}

impl std::iter::FusedIterator for Iter<'_> {}

/// Mutable tab stops of one paragraph or paragraph style.
///
/// Obtained from [`DocumentTree::tab_stops_mut`], which creates the owner's
/// paragraph properties if needed. The `w:tabs` container is created on the
/// first [`add`](Self::add) and dropped again once it holds no stops.
pub struct TabStopsMut<'a> {
    tree: &'a mut DocumentTree,
    ppr: NodeId,
}

impl<'a> TabStopsMut<'a> {
    pub(crate) fn new(tree: &'a mut DocumentTree, ppr: NodeId) -> Self {
        Self { tree, ppr }
    }

    /// Read-only view of the same tab stops.
    pub fn as_view(&self) -> TabStops<'_> {
        TabStops::new(self.tree, Some(self.ppr))
    }

    /// Number of tab stops.
    pub fn len(&self) -> usize {
        self.as_view().len()
    }

    /// Check if there are no tab stops.
    pub fn is_empty(&self) -> bool {
        self.as_view().is_empty()
    }

    /// Tab stop at `index` in document order.
    pub fn get(&self, index: usize) -> Result<TabStop<'_>> {
        self.as_view().get(index)
    }

    /// Editable tab stop at `index` in document order.
    pub fn get_mut(&mut self, index: usize) -> Result<TabStopMut<'_>> {
        let node = nth_tab(self.tree, Some(self.ppr), index)?;
        Ok(TabStopMut {
            tree: self.tree,
            node,
        })
    }

    /// Iterate tab stops in document order.
    pub fn iter(&self) -> Iter<'_> {
        self.as_view().iter()
    }

    /// Add a tab stop with unset alignment and no leader.
    ///
    /// See [`add_with`](Self::add_with) for placement.
    pub fn add(&mut self, position: Length) -> Result<TabStopMut<'_>> {
        self.add_with(position, None, None)
    }

    /// Add a tab stop, keeping the stops in ascending position order.
    ///
    /// The new stop goes immediately before the first existing stop with a
    /// greater position, or last if there is none. Stops sharing a position
    /// therefore stay in the order they were added. The existing stops are
    /// assumed to be in order already; they are not re-sorted.
    ///
    /// Positions are stored in twips, so `position` is rounded to the
    /// nearest twip before it is compared or written.
    pub fn add_with(
        &mut self,
        position: Length,
        alignment: Option<TabAlignment>,
        leader: Option<TabLeader>,
    ) -> Result<TabStopMut<'_>> {
        let position = position.to_twip_precision();

        let mut reference = None;
        for tab in tab_nodes(self.tree, Some(self.ppr))? {
            if self.tree.tab_position(tab)? > position {
                reference = Some(tab);
                break;
            }
        }

        let tabs = self.tree.get_or_add_child(self.ppr, tags::TABS)?;
        let node = self.tree.create_element(tags::TAB);
        self.tree.set_tab_alignment(node, alignment)?;
        self.tree.set_tab_leader(node, leader)?;
        self.tree.set_tab_position(node, position)?;
        self.tree.insert_before(tabs, node, reference)?;

        log::debug!(
            "inserted tab stop {} at {} before {:?}",
            node,
            position,
            reference
        );

        Ok(TabStopMut {
            tree: self.tree,
            node,
        })
    }

    /// Remove the tab stop at `index`.
    ///
    /// Other stops keep their positions. Indices past `index` shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        let node = nth_tab(self.tree, Some(self.ppr), index)?;
        let tabs = self
            .tree
            .parent(node)?
            .ok_or(Error::NodeNotFound(node))?;

        self.tree.remove_child(tabs, node)?;
        log::debug!("removed tab stop {} at index {}", node, index);

        if self.tree.children(tabs)?.is_empty() {
            self.tree.remove_child(self.ppr, tabs)?;
            log::trace!("dropped empty tab container {}", tabs);
        }
        Ok(())
    }

    /// Remove every tab stop.
    pub fn clear(&mut self) -> Result<()> {
        let removed = self.tree.remove_children_with_tag(self.ppr, tags::TABS)?;
        if removed > 0 {
            log::debug!("cleared tab stops of {}", self.ppr);
        }
        Ok(())
    }
}

impl fmt::Debug for TabStopsMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_view(), f)
    }
}

/// A tab stop, read-only.
///
/// A handle to one `w:tab` element. Two handles to the same element compare
/// equal and read the same values.
#[derive(Clone, Copy)]
pub struct TabStop<'a> {
    tree: &'a DocumentTree,
    node: NodeId,
}

impl TabStop<'_> {
    /// The backing element.
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Alignment, `None` when unset. Callers treat unset as [`TabAlignment::default`].
    pub fn alignment(&self) -> Result<Option<TabAlignment>> {
        self.tree.tab_alignment(self.node)
    }

    /// Leader; unset reads as [`TabLeader::Spaces`].
    pub fn leader(&self) -> Result<TabLeader> {
        self.tree.tab_leader(self.node)
    }

    /// Distance from the paragraph's inside edge. May be negative.
    pub fn position(&self) -> Result<Length> {
        self.tree.tab_position(self.node)
    }
}

impl PartialEq for TabStop<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.node == other.node
    }
}

impl Eq for TabStop<'_> {}

impl fmt::Debug for TabStop<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabStop")
            .field("node", &self.node)
            .field("position", &self.position().ok())
            .field("alignment", &self.alignment().ok().flatten())
            .field("leader", &self.leader().ok())
            .finish()
    }
}

/// A tab stop that can be edited in place.
pub struct TabStopMut<'a> {
    tree: &'a mut DocumentTree,
    node: NodeId,
}

impl TabStopMut<'_> {
    /// The backing element.
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// Read-only handle to the same element.
    pub fn as_view(&self) -> TabStop<'_> {
        TabStop {
            tree: self.tree,
            node: self.node,
        }
    }

    /// Alignment, `None` when unset.
    pub fn alignment(&self) -> Result<Option<TabAlignment>> {
        self.tree.tab_alignment(self.node)
    }

    /// Set the alignment; `None` unsets it.
    pub fn set_alignment(&mut self, alignment: Option<TabAlignment>) -> Result<()> {
        self.tree.set_tab_alignment(self.node, alignment)
    }

    /// Leader; unset reads as [`TabLeader::Spaces`].
    pub fn leader(&self) -> Result<TabLeader> {
        self.tree.tab_leader(self.node)
    }

    /// Set the leader. `None` has the same effect as [`TabLeader::Spaces`].
    pub fn set_leader(&mut self, leader: Option<TabLeader>) -> Result<()> {
        self.tree.set_tab_leader(self.node, leader)
    }

    /// Distance from the paragraph's inside edge.
    pub fn position(&self) -> Result<Length> {
        self.tree.tab_position(self.node)
    }

    /// Move the stop. Sibling order is left as is.
    pub fn set_position(&mut self, position: Length) -> Result<()> {
        self.tree.set_tab_position(self.node, position)
    }
}

impl fmt::Debug for TabStopMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_view(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attrs;

    fn paragraph() -> (DocumentTree, NodeId) {
        let mut tree = DocumentTree::new(tags::BODY);
        let p = tree.create_element(tags::PARAGRAPH);
        tree.append_child(tree.root(), p).unwrap();
        (tree, p)
    }

    fn positions(stops: &TabStopsMut<'_>) -> Vec<i64> {
        stops
            .iter()
            .map(|t| t.position().unwrap().as_twips())
            .collect()
    }

    #[test]
    fn test_empty_without_properties() {
        let (tree, p) = paragraph();
        let stops = tree.tab_stops(p).unwrap();
        assert_eq!(stops.len(), 0);
        assert!(stops.is_empty());
        assert_eq!(stops.iter().count(), 0);
        assert!(matches!(
            stops.get(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_add_keeps_position_order() {
        let (mut tree, p) = paragraph();
        let mut stops = tree.tab_stops_mut(p).unwrap();
        for twips in [2880, 720, 4320, 1440, -360] {
            stops.add(Length::twips(twips)).unwrap();
        }
        assert_eq!(positions(&stops), vec![-360, 720, 1440, 2880, 4320]);
    }

    #[test]
    fn test_add_equal_positions_keep_insertion_order() {
        let (mut tree, p) = paragraph();
        let mut stops = tree.tab_stops_mut(p).unwrap();
        stops.add(Length::twips(1440)).unwrap();
        let first = stops
            .add_with(Length::twips(720), Some(TabAlignment::Left), None)
            .unwrap()
            .node_id();
        let second = stops
            .add_with(Length::twips(720), Some(TabAlignment::Right), None)
            .unwrap()
            .node_id();

        let order: Vec<NodeId> = stops.iter().map(|t| t.node_id()).collect();
        assert_eq!(order[0], first);
        assert_eq!(order[1], second);
        assert_eq!(positions(&stops), vec![720, 720, 1440]);
    }

    #[test]
    fn test_add_defaults() {
        let (mut tree, p) = paragraph();
        let mut stops = tree.tab_stops_mut(p).unwrap();
        let stop = stops.add(Length::inches(1.0)).unwrap();
        assert_eq!(stop.alignment().unwrap(), None);
        assert_eq!(stop.leader().unwrap(), TabLeader::Spaces);
        assert_eq!(stop.position().unwrap(), Length::inches(1.0));
    }

    #[test]
    fn test_add_rounds_to_twips() {
        let (mut tree, p) = paragraph();
        let mut stops = tree.tab_stops_mut(p).unwrap();
        let stop = stops.add(Length::emu(1000)).unwrap();
        assert_eq!(stop.position().unwrap(), Length::emu(1270));
    }

    #[test]
    fn test_remove_drops_empty_container() {
        let (mut tree, p) = paragraph();
        let ppr = {
            let mut stops = tree.tab_stops_mut(p).unwrap();
            stops.add(Length::inches(1.0)).unwrap();
            stops.remove(0).unwrap();
            assert!(stops.is_empty());
            stops.ppr
        };
        assert_eq!(tree.first_child_with_tag(ppr, tags::TABS).unwrap(), None);
    }

    #[test]
    fn test_remove_out_of_range() {
        let (mut tree, p) = paragraph();
        let mut stops = tree.tab_stops_mut(p).unwrap();
        assert!(matches!(
            stops.remove(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        ));
        stops.add(Length::inches(1.0)).unwrap();
        assert!(matches!(
            stops.remove(1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(stops.len(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (mut tree, p) = paragraph();
        let mut stops = tree.tab_stops_mut(p).unwrap();
        stops.add(Length::inches(1.0)).unwrap();
        stops.add(Length::inches(2.0)).unwrap();

        stops.clear().unwrap();
        assert_eq!(stops.len(), 0);
        stops.clear().unwrap();
        assert_eq!(stops.len(), 0);
    }

    #[test]
    fn test_iteration_skips_foreign_children() {
        let (mut tree, p) = paragraph();
        let tabs = {
            let mut stops = tree.tab_stops_mut(p).unwrap();
            stops.add(Length::inches(1.0)).unwrap();
            let node = stops.get(0).unwrap().node_id();
            stops.tree.parent(node).unwrap().unwrap()
        };
        let comment = tree.create_element("w:comment");
        tree.insert_before(tabs, comment, None).unwrap();

        let stops = tree.tab_stops(p).unwrap();
        assert_eq!(stops.len(), 1);
        assert!(stops.get(1).is_err());
    }

    #[test]
    fn test_reads_do_not_resort() {
        let (mut tree, p) = paragraph();
        let (tabs, first) = {
            let mut stops = tree.tab_stops_mut(p).unwrap();
            stops.add(Length::twips(720)).unwrap();
            stops.add(Length::twips(1440)).unwrap();
            let first = stops.get(0).unwrap().node_id();
            (stops.tree.parent(first).unwrap().unwrap(), first)
        };
        // Move the first stop to the end behind the view's back.
        tree.append_child(tabs, first).unwrap();

        let stops = tree.tab_stops(p).unwrap();
        let twips: Vec<i64> = stops
            .iter()
            .map(|t| t.position().unwrap().as_twips())
            .collect();
        assert_eq!(twips, vec![1440, 720]);
    }

    #[test]
    fn test_record_mutation_passes_through() {
        let (mut tree, p) = paragraph();
        let node = {
            let mut stops = tree.tab_stops_mut(p).unwrap();
            stops.add(Length::inches(1.0)).unwrap();
            let mut stop = stops.get_mut(0).unwrap();
            stop.set_alignment(Some(TabAlignment::Center)).unwrap();
            stop.set_leader(Some(TabLeader::Dots)).unwrap();
            stop.set_position(Length::inches(-0.5)).unwrap();
            stop.node_id()
        };

        assert_eq!(tree.attribute(node, attrs::VAL).unwrap(), Some("center"));
        assert_eq!(tree.attribute(node, attrs::LEADER).unwrap(), Some("dot"));
        assert_eq!(tree.attribute(node, attrs::POS).unwrap(), Some("-720"));
    }

    #[test]
    fn test_handles_to_same_node_are_equal() {
        let (mut tree, p) = paragraph();
        tree.tab_stops_mut(p)
            .unwrap()
            .add(Length::inches(1.0))
            .unwrap();

        let stops = tree.tab_stops(p).unwrap();
        let by_index = stops.get(0).unwrap();
        let by_iter = stops.iter().next().unwrap();
        assert_eq!(by_index, by_iter);
    }

    #[test]
    fn test_malformed_position_propagates() {
        let (mut tree, p) = paragraph();
        let node = tree
            .tab_stops_mut(p)
            .unwrap()
            .add(Length::inches(1.0))
            .unwrap()
            .node_id();
        tree.set_attribute(node, attrs::POS, "wide").unwrap();

        let mut stops = tree.tab_stops_mut(p).unwrap();
        assert!(matches!(
            stops.add(Length::inches(2.0)),
            Err(Error::InvalidAttribute { name: "w:pos", .. })
        ));
        assert_eq!(stops.len(), 1);
    }

    #[test]
    fn test_len_and_get_agree_on_dangling_child() {
        let tree: DocumentTree = serde_json::from_str(
            r#"{"nodes":[
                {"tag":"w:pPr","children":[1]},
                {"tag":"w:tabs","parent":0,"children":[2,3]},
                null,
                {"tag":"w:tab","attributes":{"w:pos":"720"},"parent":1}
            ],"root":0}"#,
        )
        .unwrap();
        let stops = TabStops::new(&tree, Some(tree.root()));

        assert_eq!(stops.len(), 1);
        assert_eq!(stops.get(0).unwrap().position().unwrap(), Length::twips(720));
        assert!(matches!(
            stops.get(1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        ));
    }
}
