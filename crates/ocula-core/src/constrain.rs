//! Size limits applied to resize operations.

use kurbo::{Rect, Size};

const EDGE_EPSILON: f64 = 1e-9;

/// Clamps proposed widget bounds to configured size limits.
///
/// When a clamp kicks in, the edge the drag did not move stays put, so
/// resizing against a limit pins the widget to its anchored edge instead
/// of sliding it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsConstrainer {
    min_size: Size,
    max_size: Option<Size>,
}

impl Default for BoundsConstrainer {
    fn default() -> Self {
        Self {
            min_size: Size::new(1.0, 1.0),
            max_size: None,
        }
    }
}

impl BoundsConstrainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the smallest allowed widget size.
    pub fn set_minimum_size(&mut self, width: f64, height: f64) {
        self.min_size = Size::new(width, height);
    }

    /// Set the largest allowed widget size, or `None` for unbounded.
    pub fn set_maximum_size(&mut self, size: Option<Size>) {
        self.max_size = size;
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn max_size(&self) -> Option<Size> {
        self.max_size
    }

    /// Clamp `proposed` against the limits.
    ///
    /// `previous` is the bounds before the drag step; comparing edges
    /// against it decides which edge re-anchors a clamped dimension.
    /// A pure translation passes through untouched.
    pub fn constrain(&self, proposed: Rect, previous: Rect) -> Rect {
        let width = self.clamp_length(
            proposed.x1 - proposed.x0,
            self.min_size.width,
            self.max_size.map(|s| s.width),
        );
        let height = self.clamp_length(
            proposed.y1 - proposed.y0,
            self.min_size.height,
            self.max_size.map(|s| s.height),
        );
        let (x0, x1) = anchor_span(proposed.x0, proposed.x1, previous.x0, previous.x1, width);
        let (y0, y1) = anchor_span(proposed.y0, proposed.y1, previous.y0, previous.y1, height);
        Rect::new(x0, y0, x1, y1)
    }

    fn clamp_length(&self, length: f64, min: f64, max: Option<f64>) -> f64 {
        let hi = max.unwrap_or(f64::INFINITY).max(min);
        length.clamp(min, hi)
    }
}

/// Re-span one axis to `length`, keeping the edge that did not move.
///
/// Handles inverted spans (an edge dragged past its opposite) by anchoring
/// on the stationary edge and growing back to the clamped length.
fn anchor_span(p0: f64, p1: f64, prev0: f64, prev1: f64, length: f64) -> (f64, f64) {
    if (p1 - p0 - length).abs() <= EDGE_EPSILON {
        return (p0, p1);
    }
    let low_moved = (p0 - prev0).abs() > EDGE_EPSILON;
    let high_moved = (p1 - prev1).abs() > EDGE_EPSILON;
    if low_moved && !high_moved {
        (p1 - length, p1)
    } else {
        (p0, p0 + length)
    }
}
