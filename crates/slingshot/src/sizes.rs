use serde::{Deserialize, Serialize};

/// Linear measurements of the indicator, in device-independent pixels.
/// All fields are expected to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSizes {
    /// Diameter of the backing disc, and the glyph's bounding box.
    pub size: f64,
    pub arc_radius: f64,
    pub stroke_width: f64,
    pub arrow_width: f64,
    pub arrow_height: f64,
}

impl IndicatorSizes {
    pub const DEFAULT: Self = Self {
        size: 40.0,
        arc_radius: 7.5,
        stroke_width: 2.5,
        arrow_width: 10.0,
        arrow_height: 5.0,
    };

    pub const LARGE: Self = Self {
        size: 56.0,
        arc_radius: 11.0,
        stroke_width: 3.0,
        arrow_width: 14.0,
        arrow_height: 7.0,
    };
}

impl Default for IndicatorSizes {
    fn default() -> Self {
        Self::DEFAULT
    }
}
