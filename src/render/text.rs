//! Plain text rendering for tab-stop listings.

use crate::error::Result;
use crate::text::TabStops;

use super::RenderOptions;

/// Render one line per tab stop: index, position, alignment and leader,
/// separated by tabs. Unset alignment shows as `-`.
pub fn to_text(stops: &TabStops<'_>, options: &RenderOptions) -> Result<String> {
    let mut lines = Vec::new();
    for (index, stop) in stops.iter().enumerate() {
        let position = options.format_length(stop.position()?);
        let alignment = stop
            .alignment()?
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        let leader = stop.leader()?;

        let line = if options.show_index {
            format!("{}\t{}\t{}\t{}", index, position, alignment, leader)
        } else {
            format!("{}\t{}\t{}", position, alignment, leader)
        };
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
