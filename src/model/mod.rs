//! Document tree types.
//!
//! This module holds the element tree that persists paragraph formatting,
//! plus the typed accessors tab-stop views use to read and write it. The
//! tree is the single source of truth: views in [`crate::text`] never copy
//! tab stops out of it.

mod document;
mod enums;
mod paragraph;
mod tab;
mod tree;

pub use document::Document;
pub use enums::{TabAlignment, TabLeader};
pub use tree::{DocumentTree, Element, NodeId};

/// Qualified element names.
pub mod tags {
    /// Document root
    pub const DOCUMENT: &str = "w:document";
    /// Document body
    pub const BODY: &str = "w:body";
    /// Style collection
    pub const STYLES: &str = "w:styles";
    /// A single style definition
    pub const STYLE: &str = "w:style";
    /// Paragraph
    pub const PARAGRAPH: &str = "w:p";
    /// Paragraph properties
    pub const PARAGRAPH_PROPERTIES: &str = "w:pPr";
    /// Tab stop container
    pub const TABS: &str = "w:tabs";
    /// Tab stop
    pub const TAB: &str = "w:tab";
}

/// Qualified attribute names.
pub mod attrs {
    /// Tab alignment
    pub const VAL: &str = "w:val";
    /// Tab leader
    pub const LEADER: &str = "w:leader";
    /// Tab position in twips
    pub const POS: &str = "w:pos";
    /// Style identifier
    pub const STYLE_ID: &str = "w:styleId";
    /// Style type
    pub const TYPE: &str = "w:type";
}
