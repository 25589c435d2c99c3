//! JSON rendering for tab-stop listings.

use crate::error::{Error, Result};
use crate::model::{TabAlignment, TabLeader};
use crate::text::TabStops;
use crate::units::Length;
use serde::{Deserialize, Serialize};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// A snapshot of one tab stop, detached from the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStopSummary {
    /// Index in document order
    pub index: usize,

    /// Position in EMU
    pub position: Length,

    /// Alignment, `None` when unset
    pub alignment: Option<TabAlignment>,

    /// Leader
    pub leader: TabLeader,
}

/// Read every tab stop into a summary list.
pub fn summarize(stops: &TabStops<'_>) -> Result<Vec<TabStopSummary>> {
    stops
        .iter()
        .enumerate()
        .map(|(index, stop)| {
            Ok(TabStopSummary {
                index,
                position: stop.position()?,
                alignment: stop.alignment()?,
                leader: stop.leader()?,
            })
        })
        .collect()
}

/// Convert tab stops to JSON.
pub fn to_json(stops: &TabStops<'_>, format: JsonFormat) -> Result<String> {
    let summaries = summarize(stops)?;
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&summaries),
        JsonFormat::Compact => serde_json::to_string(&summaries),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    #[test]
    fn test_to_json_compact() {
        let mut doc = Document::new();
        let p = doc.add_paragraph().unwrap();
        doc.tab_stops_mut(p)
            .unwrap()
            .add_with(
                Length::inches(1.0),
                Some(TabAlignment::Center),
                Some(TabLeader::Dots),
            )
            .unwrap();

        let json = to_json(&doc.tab_stops(p).unwrap(), JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"[{"index":0,"position":914400,"alignment":"center","leader":"dot"}]"#
        );
    }

    #[test]
    fn test_to_json_pretty_unset_alignment() {
        let mut doc = Document::new();
        let p = doc.add_paragraph().unwrap();
        doc.tab_stops_mut(p)
            .unwrap()
            .add(Length::inches(-0.5))
            .unwrap();

        let json = to_json(&doc.tab_stops(p).unwrap(), JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"alignment\": null"));
        assert!(json.contains("\"leader\": \"none\""));
        assert!(json.contains("-457200"));
    }

    #[test]
    fn test_to_json_empty() {
        let mut doc = Document::new();
        let p = doc.add_paragraph().unwrap();
        let json = to_json(&doc.tab_stops(p).unwrap(), JsonFormat::Compact).unwrap();
        assert_eq!(json, "[]");
    }
}
