//! Paragraph-properties lookup for paragraphs and paragraph styles.

use super::{tags, DocumentTree, NodeId};
use crate::error::{Error, Result};
use crate::text::{TabStops, TabStopsMut};

impl DocumentTree {
    /// The `w:pPr` of a paragraph or style, if it has one.
    pub fn paragraph_properties(&self, owner: NodeId) -> Result<Option<NodeId>> {
        self.check_owner(owner)?;
        self.first_child_with_tag(owner, tags::PARAGRAPH_PROPERTIES)
    }

    /// The `w:pPr` of a paragraph or style, created if missing.
    ///
    /// In a paragraph the properties element is placed first, ahead of any runs.
    pub fn get_or_add_paragraph_properties(&mut self, owner: NodeId) -> Result<NodeId> {
        if let Some(ppr) = self.paragraph_properties(owner)? {
            return Ok(ppr);
        }

        let ppr = self.create_element(tags::PARAGRAPH_PROPERTIES);
        let reference = if self.tag(owner)? == tags::PARAGRAPH {
            self.children(owner)?.first().copied()
        } else {
            None
        };
        self.insert_before(owner, ppr, reference)?;
        log::debug!("added paragraph properties {} to {}", ppr, owner);
        Ok(ppr)
    }

    /// Read-only live view of the tab stops of a paragraph or style.
    pub fn tab_stops(&self, owner: NodeId) -> Result<TabStops<'_>> {
        let ppr = self.paragraph_properties(owner)?;
        Ok(TabStops::new(self, ppr))
    }

    /// Mutable live view of the tab stops of a paragraph or style.
    pub fn tab_stops_mut(&mut self, owner: NodeId) -> Result<TabStopsMut<'_>> {
        let ppr = self.get_or_add_paragraph_properties(owner)?;
        Ok(TabStopsMut::new(self, ppr))
    }

    fn check_owner(&self, owner: NodeId) -> Result<()> {
        match self.tag(owner)? {
            tags::PARAGRAPH | tags::STYLE => Ok(()),
            other => Err(Error::UnsupportedOwner(other.to_string())),
        }
    }
}
