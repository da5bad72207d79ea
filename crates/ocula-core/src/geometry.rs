//! Derived overlay geometry.
//!
//! Pure functions from widget bounds to the rectangles and lines the
//! overlay draws. Everything here is frame-agnostic: callers pass bounds in
//! whatever frame they need the result in and convert afterwards.

use kurbo::{Line, Point, Rect, Size};

/// Margin of the hover outline around the widget, in pixels.
pub const HOVER_MARGIN: f64 = 2.0;
/// Margin of the selection outline around the widget, in pixels.
pub const SELECTION_MARGIN: f64 = 1.0;
/// Stroke width of the hover outline.
pub const HOVER_STROKE: f64 = 2.0;
/// Stroke width of the selection outline.
pub const SELECTION_STROKE: f64 = 1.0;
/// Dash and gap length of the leader lines.
pub const LEADER_DASH: f64 = 2.0;
/// Stroke width of the leader lines.
pub const LEADER_STROKE: f64 = 1.0;
/// Side of the outer (accent-colored) corner marker squares.
pub const CORNER_MARKER_OUTER: f64 = 8.0;
/// Side of the inner (background-colored) corner marker squares.
pub const CORNER_MARKER_INNER: f64 = 6.0;
/// Height of the dimension label.
pub const LABEL_HEIGHT: f64 = 15.0;
/// Vertical gap between the selection outline and the label.
pub const LABEL_GAP: f64 = 2.0;
/// Vertical room required below the outline before the label is shown.
pub const LABEL_CLEARANCE: f64 = 20.0;
/// Width added to the measured text to size the label.
pub const LABEL_TEXT_PAD: f64 = 15.0;
/// Corner radius of the label plate.
pub const LABEL_CORNER_RADIUS: f64 = 2.0;
/// The plate extends this far past the label bottom so the text sits
/// optically centered despite baseline alignment.
pub const LABEL_PLATE_EXTEND: f64 = 4.0;

/// Outline of a widget in its parent's frame: bounds grown by `margin` on
/// every side.
pub fn outline_in_parent(bounds_in_parent: Rect, margin: f64) -> Rect {
    bounds_in_parent.inflate(margin, margin)
}

/// The two dashed leader lines of a selection, in the same frame as the
/// outline they were derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaderLines {
    /// From the top edge midpoint straight up to `y = 0`.
    pub top: Line,
    /// From the left edge midpoint straight left to `x = 0`.
    pub left: Line,
}

/// Leader lines for `outline`, running to the zero axes of the frame the
/// outline is expressed in.
pub fn leader_lines(outline: Rect) -> LeaderLines {
    let center = outline.center();
    LeaderLines {
        top: Line::new(
            Point::new(center.x, outline.y0),
            Point::new(center.x, 0.0),
        ),
        left: Line::new(
            Point::new(outline.x0, center.y),
            Point::new(0.0, center.y),
        ),
    }
}

/// Squares of side `size` centered on each corner of `outline`.
///
/// Order: top-left, top-right, bottom-right, bottom-left.
pub fn corner_markers(outline: Rect, size: f64) -> [Rect; 4] {
    let half = size / 2.0;
    let square = |x: f64, y: f64| Rect::new(x - half, y - half, x + half, y + half);
    [
        square(outline.x0, outline.y0),
        square(outline.x1, outline.y0),
        square(outline.x1, outline.y1),
        square(outline.x0, outline.y1),
    ]
}

/// Format a widget size for the dimension label.
pub fn dimension_text(size: Size) -> String {
    format!("{:.0} × {:.0}", size.width, size.height)
}

/// Label rect directly below the outline, or `None` when there is not
/// enough vertical room left inside the overlay.
///
/// The label sits [`LABEL_GAP`] below the outline, horizontally centered on
/// it, sized to the measured text plus [`LABEL_TEXT_PAD`]. No alternate
/// placement is attempted when it does not fit.
pub fn label_bounds(outline: Rect, overlay: Rect, text_width: f64) -> Option<Rect> {
    if outline.y1 + LABEL_CLEARANCE + LABEL_GAP > overlay.y1 {
        return None;
    }
    let width = text_width + LABEL_TEXT_PAD;
    let x = outline.center().x - width / 2.0;
    Some(Rect::from_origin_size(
        (x, outline.y1 + LABEL_GAP),
        (width, LABEL_HEIGHT),
    ))
}

/// Plate drawn behind the label: the label rect with its bottom edge
/// extended by [`LABEL_PLATE_EXTEND`].
pub fn label_plate(label: Rect) -> Rect {
    Rect::new(label.x0, label.y0, label.x1, label.y1 + LABEL_PLATE_EXTEND)
}
