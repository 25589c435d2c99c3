//! Tab alignment and leader enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How text aligns at a tab stop.
///
/// Serialized with the `w:val` token used by WordprocessingML.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabAlignment {
    /// Text starts at the stop (default)
    #[default]
    #[serde(rename = "left")]
    Left,
    /// Text is centered on the stop
    #[serde(rename = "center")]
    Center,
    /// Text ends at the stop
    #[serde(rename = "right")]
    Right,
    /// The decimal separator sits on the stop
    #[serde(rename = "decimal")]
    Decimal,
    /// A vertical bar is drawn at the stop
    #[serde(rename = "bar")]
    Bar,
    /// List tab
    #[serde(rename = "num")]
    List,
    /// Clears an inherited stop at this position
    #[serde(rename = "clear")]
    Clear,
    /// Text ends at the stop, bidi-aware
    #[serde(rename = "end")]
    End,
    /// Text starts at the stop, bidi-aware
    #[serde(rename = "start")]
    Start,
}

impl TabAlignment {
    /// All variants, in declaration order.
    pub const ALL: [TabAlignment; 9] = [
        TabAlignment::Left,
        TabAlignment::Center,
        TabAlignment::Right,
        TabAlignment::Decimal,
        TabAlignment::Bar,
        TabAlignment::List,
        TabAlignment::Clear,
        TabAlignment::End,
        TabAlignment::Start,
    ];

    /// The `w:val` attribute token.
    pub fn as_xml(self) -> &'static str {
        match self {
            TabAlignment::Left => "left",
            TabAlignment::Center => "center",
            TabAlignment::Right => "right",
            TabAlignment::Decimal => "decimal",
            TabAlignment::Bar => "bar",
            TabAlignment::List => "num",
            TabAlignment::Clear => "clear",
            TabAlignment::End => "end",
            TabAlignment::Start => "start",
        }
    }

    /// Parse a `w:val` attribute token.
    pub fn from_xml(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_xml() == value)
    }
}

impl fmt::Display for TabAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_xml())
    }
}

/// Fill character drawn across the space a tab spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabLeader {
    /// No leader; the span is blank (default)
    #[default]
    #[serde(rename = "none")]
    Spaces,
    /// Dotted leader
    #[serde(rename = "dot")]
    Dots,
    /// Dashed leader
    #[serde(rename = "hyphen")]
    Dashes,
    /// Solid underline leader
    #[serde(rename = "underscore")]
    Lines,
    /// Heavy solid leader
    #[serde(rename = "heavy")]
    Heavy,
    /// Centered-dot leader
    #[serde(rename = "middleDot")]
    MiddleDot,
}

impl TabLeader {
    /// All variants, in declaration order.
    pub const ALL: [TabLeader; 6] = [
        TabLeader::Spaces,
        TabLeader::Dots,
        TabLeader::Dashes,
        TabLeader::Lines,
        TabLeader::Heavy,
        TabLeader::MiddleDot,
    ];

    /// The `w:leader` attribute token.
    pub fn as_xml(self) -> &'static str {
        match self {
            TabLeader::Spaces => "none",
            TabLeader::Dots => "dot",
            TabLeader::Dashes => "hyphen",
            TabLeader::Lines => "underscore",
            TabLeader::Heavy => "heavy",
            TabLeader::MiddleDot => "middleDot",
        }
    }

    /// Parse a `w:leader` attribute token.
    pub fn from_xml(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_xml() == value)
    }
}

impl fmt::Display for TabLeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_xml())
    }
}
