//! Shared fixture: a document laid out the way a word processor writes it.

use tabstops::model::{attrs, tags};
use tabstops::{Document, NodeId};

/// Build the tab-stop fixture document.
///
/// - paragraph 0: no tab stops
/// - paragraph 1: left at 1in, center at 2in, right with dot leader at 3in
/// - paragraph 2: left at -0.5in and at 0.5in
/// - style `Toc`: right with dot leader at 6.5in
pub fn fixture() -> Document {
    let mut doc = Document::new();

    doc.add_paragraph().unwrap();

    let p = doc.add_paragraph().unwrap();
    write_tabs(
        &mut doc,
        p,
        &[
            ("left", None, "1440"),
            ("center", None, "2880"),
            ("right", Some("dot"), "4320"),
        ],
    );

    let p = doc.add_paragraph().unwrap();
    write_tabs(&mut doc, p, &[("left", None, "-720"), ("left", None, "720")]);

    let style = doc.add_paragraph_style("Toc").unwrap();
    write_tabs(&mut doc, style, &[("right", Some("dot"), "9360")]);

    doc
}

/// Write `w:tab` elements directly, bypassing the tab-stop API.
pub fn write_tabs(doc: &mut Document, owner: NodeId, tabs: &[(&str, Option<&str>, &str)]) {
    let tree = doc.tree_mut();
    let ppr = tree.get_or_add_paragraph_properties(owner).unwrap();
    let container = tree.get_or_add_child(ppr, tags::TABS).unwrap();
    for &(val, leader, pos) in tabs {
        let tab = tree.create_element(tags::TAB);
        tree.set_attribute(tab, attrs::VAL, val).unwrap();
        if let Some(leader) = leader {
            tree.set_attribute(tab, attrs::LEADER, leader).unwrap();
        }
        tree.set_attribute(tab, attrs::POS, pos).unwrap();
        tree.append_child(container, tab).unwrap();
    }
}
