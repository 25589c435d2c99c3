//! # tabstops
//!
//! Live access to the tab stops of paragraphs and paragraph styles in a
//! WordprocessingML element tree.
//!
//! The tree is the only copy of the data. [`TabStops`] and [`TabStopsMut`]
//! are views that re-read it on every call, and each [`TabStop`] is a
//! handle to one `w:tab` element.
//!
//! ## Quick Start
//!
//! ```
//! use tabstops::{Document, Length, TabAlignment, TabLeader};
//!
//! fn main() -> tabstops::Result<()> {
//!     let mut doc = Document::new();
//!     let paragraph = doc.add_paragraph()?;
//!
//!     let mut stops = doc.tab_stops_mut(paragraph)?;
//!     stops.add(Length::inches(3.0))?;
//!     stops.add_with(
//!         Length::inches(1.0),
//!         Some(TabAlignment::Center),
//!         Some(TabLeader::Dots),
//!     )?;
//!
//!     let stops = doc.tab_stops(paragraph)?;
//!     assert_eq!(stops.len(), 2);
//!     assert_eq!(stops.get(0)?.position()?, Length::inches(1.0));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Ordered insertion**: new stops land in ascending position order
//! - **No caching**: every read goes to the tree, so views never go stale
//! - **Handles, not copies**: edits through a [`TabStopMut`] hit the tree directly
//! - **Snapshots**: documents round-trip through JSON

pub mod error;
pub mod model;
pub mod render;
pub mod text;
pub mod units;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Document, DocumentTree, NodeId, TabAlignment, TabLeader};
pub use render::{DisplayUnit, JsonFormat, RenderOptions, TabStopSummary};
pub use text::{TabStop, TabStopMut, TabStops, TabStopsMut};
pub use units::Length;

use std::path::Path;

/// Open a document snapshot from a JSON file.
///
/// # Example
///
/// ```no_run
/// let doc = tabstops::open("document.json").unwrap();
/// let first = doc.paragraph(0).unwrap();
/// println!("{} tab stops", doc.tab_stops(first).unwrap().len());
/// ```
pub fn open<P: AsRef<Path>>(path: P) -> Result<Document> {
    Document::open(path)
}
