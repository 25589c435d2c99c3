//! Rendering options and configuration.

use crate::units::Length;

/// Options for rendering tab-stop listings.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Unit positions are shown in
    pub unit: DisplayUnit,

    /// Decimal places for fractional units
    pub precision: usize,

    /// Prefix each line with the stop's index
    pub show_index: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display unit.
    pub fn with_unit(mut self, unit: DisplayUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the number of decimal places.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Enable or disable the index column.
    pub fn with_index(mut self, show: bool) -> Self {
        self.show_index = show;
        self
    }

    /// Format a position according to these options.
    pub fn format_length(&self, length: Length) -> String {
        let precision = self.precision;
        match self.unit {
            DisplayUnit::Emu => length.as_emu().to_string(),
            DisplayUnit::Twips => format!("{}tw", length.as_twips()),
            DisplayUnit::Inches => format!("{:.precision$}in", length.as_inches()),
            DisplayUnit::Centimeters => format!("{:.precision$}cm", length.as_cm()),
            DisplayUnit::Points => format!("{:.precision$}pt", length.as_pt()),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unit: DisplayUnit::Inches,
            precision: 2,
            show_index: true,
        }
    }
}

/// Unit used when displaying positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayUnit {
    /// Raw English Metric Units
    Emu,
    /// Twentieths of a point
    Twips,
    /// Inches (default)
    #[default]
    Inches,
    /// Centimeters
    Centimeters,
    /// Points
    Points,
}
