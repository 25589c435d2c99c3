//! Rendering module for tab-stop listings.

mod json;
mod options;
mod text;

pub use json::{summarize, to_json, JsonFormat, TabStopSummary};
pub use options::{DisplayUnit, RenderOptions};
pub use text::to_text;
