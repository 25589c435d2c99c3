//! Error types for the tabstops library.

use crate::model::NodeId;
use std::io;
use thiserror::Error;

/// Result type alias for tabstops operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or editing tab stops.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing snapshot files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Snapshot (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Indexed access or removal past the end of a collection.
    #[error("Index {index} is out of range (collection has {len} items)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length at the time of the request
        len: usize,
    },

    /// The node id does not refer to a live element.
    #[error("Node {0} does not exist")]
    NodeNotFound(NodeId),

    /// Tab stops were requested on an element that cannot own paragraph properties.
    #[error("Element <{0}> cannot own tab stops")]
    UnsupportedOwner(String),

    /// A required attribute is absent.
    #[error("Element <{tag}> is missing required attribute {name}")]
    MissingAttribute {
        /// Tag of the element
        tag: String,
        /// Attribute name
        name: &'static str,
    },

    /// An attribute holds a value outside its value space.
    #[error("Invalid value {value:?} for attribute {name}")]
    InvalidAttribute {
        /// Attribute name
        name: &'static str,
        /// The offending value
        value: String,
    },

    /// The reference node is not a child of the given parent.
    #[error("Node {child} is not a child of node {parent}")]
    NotAChild {
        /// Expected parent
        parent: NodeId,
        /// Offending node
        child: NodeId,
    },

    /// Inserting the node would make it its own ancestor.
    #[error("Cannot insert node {child} under node {parent}: would create a cycle")]
    Cycle {
        /// Requested parent
        parent: NodeId,
        /// Node being inserted
        child: NodeId,
    },

    /// A loaded snapshot does not describe a well-formed tree.
    #[error("Malformed tree at node {node}: {reason}")]
    MalformedTree {
        /// First node found at fault
        node: NodeId,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A length string could not be parsed.
    #[error("Invalid length: {0:?}")]
    InvalidLength(String),

    /// No paragraph style with the given id.
    #[error("Style not found: {0}")]
    StyleNotFound(String),

    /// Error while rendering a listing.
    #[error("Rendering error: {0}")]
    Render(String),
}
