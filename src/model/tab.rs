//! Typed access to the attributes of `w:tab` elements.

use super::{attrs, DocumentTree, NodeId, TabAlignment, TabLeader};
use crate::error::{Error, Result};
use crate::units::Length;

impl DocumentTree {
    /// Alignment of a tab element, `None` when `w:val` is absent.
    pub fn tab_alignment(&self, tab: NodeId) -> Result<Option<TabAlignment>> {
        match self.attribute(tab, attrs::VAL)? {
            None => Ok(None),
            Some(value) => TabAlignment::from_xml(value)
                .map(Some)
                .ok_or_else(|| Error::InvalidAttribute {
                    name: attrs::VAL,
                    value: value.to_string(),
                }),
        }
    }

    /// Set or clear the alignment of a tab element.
    pub fn set_tab_alignment(
        &mut self,
        tab: NodeId,
        alignment: Option<TabAlignment>,
    ) -> Result<()> {
        match alignment {
            Some(alignment) => self.set_attribute(tab, attrs::VAL, alignment.as_xml()),
            None => self.remove_attribute(tab, attrs::VAL).map(|_| ()),
        }
    }

    /// Leader of a tab element; an absent `w:leader` reads as [`TabLeader::Spaces`].
    pub fn tab_leader(&self, tab: NodeId) -> Result<TabLeader> {
        match self.attribute(tab, attrs::LEADER)? {
            None => Ok(TabLeader::default()),
            Some(value) => TabLeader::from_xml(value).ok_or_else(|| Error::InvalidAttribute {
                name: attrs::LEADER,
                value: value.to_string(),
            }),
        }
    }

    /// Set the leader of a tab element.
    ///
    /// `None` and [`TabLeader::Spaces`] both remove `w:leader`.
    pub fn set_tab_leader(&mut self, tab: NodeId, leader: Option<TabLeader>) -> Result<()> {
        match leader {
            Some(leader) if leader != TabLeader::default() => {
                self.set_attribute(tab, attrs::LEADER, leader.as_xml())
            }
            _ => self.remove_attribute(tab, attrs::LEADER).map(|_| ()),
        }
    }

    /// Position of a tab element, read from the twips value in `w:pos`.
    pub fn tab_position(&self, tab: NodeId) -> Result<Length> {
        let value = self
            .attribute(tab, attrs::POS)?
            .ok_or_else(|| Error::MissingAttribute {
                tag: self.tag(tab).unwrap_or_default().to_string(),
                name: attrs::POS,
            })?;
        value
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(Length::checked_twips)
            .ok_or_else(|| Error::InvalidAttribute {
                name: attrs::POS,
                value: value.to_string(),
            })
    }

    /// Set the position of a tab element, rounded to the nearest twip.
    pub fn set_tab_position(&mut self, tab: NodeId, position: Length) -> Result<()> {
        self.set_attribute(tab, attrs::POS, position.as_twips().to_string())
    }
}
