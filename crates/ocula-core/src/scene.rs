//! Overlay display list.
//!
//! The overlay never paints directly; it emits an [`OverlayScene`] that a
//! backend binding replays in order. This keeps the paint path a pure
//! function of inspector state and lets tests assert on exactly what would
//! be drawn.

use kurbo::{Line, Rect};
use peniko::Color;

/// A single paint primitive, in overlay coordinates.
#[derive(Debug, Clone)]
pub enum OverlayShape {
    /// Rectangle stroke, drawn inward from the rect edge.
    StrokeRect { rect: Rect, width: f64, color: Color },
    /// Solid rectangle fill.
    FillRect { rect: Rect, color: Color },
    /// Rounded rectangle fill.
    RoundedRect { rect: Rect, radius: f64, color: Color },
    /// Dashed line segment.
    DashedLine {
        line: Line,
        dash: f64,
        gap: f64,
        width: f64,
        color: Color,
    },
    /// A single line of text centered in `rect`.
    Text {
        rect: Rect,
        text: String,
        font_size: f64,
        color: Color,
    },
}

/// Everything the overlay wants painted this frame, in paint order.
#[derive(Debug, Clone, Default)]
pub struct OverlayScene {
    shapes: Vec<OverlayShape>,
}

impl OverlayScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: OverlayShape) {
        self.shapes.push(shape);
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> &[OverlayShape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OverlayShape> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a OverlayScene {
    type Item = &'a OverlayShape;
    type IntoIter = std::slice::Iter<'a, OverlayShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
