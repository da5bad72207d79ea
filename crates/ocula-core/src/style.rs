//! Inspector look and feel.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Colors and label font used by the overlay.
///
/// Pixel metrics (margins, marker sizes, label placement) are fixed in
/// [`crate::geometry`]; the style carries only what a host theme would vary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorStyle {
    /// Outlines, leader lines and outer corner markers.
    pub accent: Rgba,
    /// Fill of the inner corner markers.
    pub marker_core: Rgba,
    /// Fill of the label plate.
    pub label_fill: Rgba,
    /// Label text color.
    pub label_text: Rgba,
    /// Label font size in points.
    pub label_font_size: f64,
}

impl Default for InspectorStyle {
    fn default() -> Self {
        Self {
            accent: Rgba::new(66, 133, 244, 255),
            marker_core: Rgba::white(),
            label_fill: Rgba::new(23, 78, 166, 255),
            label_text: Rgba::new(232, 240, 254, 255),
            label_font_size: 13.0,
        }
    }
}

impl InspectorStyle {
    /// Accent color as a renderable color.
    pub fn accent_color(&self) -> Color {
        self.accent.into()
    }

    /// Inner corner marker fill.
    pub fn marker_core_color(&self) -> Color {
        self.marker_core.into()
    }

    /// Label plate fill.
    pub fn label_fill_color(&self) -> Color {
        self.label_fill.into()
    }

    /// Label text color.
    pub fn label_text_color(&self) -> Color {
        self.label_text.into()
    }

    /// Serialize the style to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a style from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
