//! Interactive resize handle wrapped around the selected widget.

use crate::constrain::BoundsConstrainer;
use crate::geometry::SELECTION_MARGIN;
use crate::host::{HostView, WidgetId};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Width of the interactive border band, in pixels.
pub const HANDLE_BORDER: f64 = 6.0;

/// Compass zone of the handle border a drag grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeZone {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl ResizeZone {
    /// Whether dragging this zone moves the left edge.
    pub fn moves_left(self) -> bool {
        matches!(self, Self::NorthWest | Self::West | Self::SouthWest)
    }

    /// Whether dragging this zone moves the right edge.
    pub fn moves_right(self) -> bool {
        matches!(self, Self::NorthEast | Self::East | Self::SouthEast)
    }

    /// Whether dragging this zone moves the top edge.
    pub fn moves_top(self) -> bool {
        matches!(self, Self::NorthWest | Self::North | Self::NorthEast)
    }

    /// Whether dragging this zone moves the bottom edge.
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::SouthWest | Self::South | Self::SouthEast)
    }
}

/// A border drag in progress.
#[derive(Debug, Clone, Copy)]
struct DragState {
    zone: ResizeZone,
    start: Point,
    /// Handle bounds when the drag began, in overlay coordinates.
    original: Rect,
}

/// Resize handle bound to one widget.
///
/// The handle covers the selection outline exactly; only the border band
/// just inside its edge is interactive. Dragging writes new bounds through
/// the host and never moves the handle itself: the overlay resyncs it from
/// the host's resize notification, so the visible handle always reflects
/// what the host actually applied.
#[derive(Debug, Clone)]
pub struct ResizeHandle {
    target: WidgetId,
    bounds: Rect,
    border: f64,
    constrainer: BoundsConstrainer,
    drag: Option<DragState>,
}

impl ResizeHandle {
    pub fn new(target: WidgetId) -> Self {
        Self {
            target,
            bounds: Rect::ZERO,
            border: HANDLE_BORDER,
            constrainer: BoundsConstrainer::default(),
            drag: None,
        }
    }

    /// The widget this handle resizes.
    pub fn target(&self) -> WidgetId {
        self.target
    }

    /// Handle bounds in overlay coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move the handle to track the selection outline. Does not disturb a
    /// drag in progress; drag deltas stay relative to where it began.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn constrainer(&self) -> &BoundsConstrainer {
        &self.constrainer
    }

    pub fn constrainer_mut(&mut self) -> &mut BoundsConstrainer {
        &mut self.constrainer
    }

    /// Zone of the border band under `point`, or `None` when the point is
    /// outside the handle or over its non-interactive interior.
    pub fn zone_at(&self, point: Point) -> Option<ResizeZone> {
        if !self.bounds.contains(point) {
            return None;
        }
        let near_left = point.x < self.bounds.x0 + self.border;
        let near_right = point.x >= self.bounds.x1 - self.border;
        let near_top = point.y < self.bounds.y0 + self.border;
        let near_bottom = point.y >= self.bounds.y1 - self.border;
        let zone = match (near_top, near_bottom, near_left, near_right) {
            (true, _, true, _) => ResizeZone::NorthWest,
            (true, _, _, true) => ResizeZone::NorthEast,
            (_, true, true, _) => ResizeZone::SouthWest,
            (_, true, _, true) => ResizeZone::SouthEast,
            (true, _, _, _) => ResizeZone::North,
            (_, true, _, _) => ResizeZone::South,
            (_, _, true, _) => ResizeZone::West,
            (_, _, _, true) => ResizeZone::East,
            _ => return None,
        };
        Some(zone)
    }

    /// Start a drag if `point` lands in the border band.
    pub fn begin_drag(&mut self, point: Point) -> Option<ResizeZone> {
        let zone = self.zone_at(point)?;
        self.drag = Some(DragState {
            zone,
            start: point,
            original: self.bounds,
        });
        Some(zone)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Zone of the drag in progress.
    pub fn drag_zone(&self) -> Option<ResizeZone> {
        self.drag.map(|d| d.zone)
    }

    /// Advance the drag to `point` and push the resulting bounds through
    /// the host. Ends the drag if the target is gone.
    pub fn drag_to(&mut self, host: &mut impl HostView, point: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let delta = point - drag.start;
        let proposed_outline = apply_zone(drag.original, drag.zone, delta);
        let (Some(proposed_parent), Some(original_parent)) = (
            host.rect_to_parent(self.target, proposed_outline),
            host.rect_to_parent(self.target, drag.original),
        ) else {
            log::debug!("resize drag target {} vanished, ending drag", self.target);
            self.drag = None;
            return;
        };
        let proposed = proposed_parent.inflate(-SELECTION_MARGIN, -SELECTION_MARGIN);
        let previous = original_parent.inflate(-SELECTION_MARGIN, -SELECTION_MARGIN);
        let constrained = self.constrainer.constrain(proposed, previous);
        if host.set_bounds_in_parent(self.target, constrained).is_err() {
            log::debug!("resize drag target {} vanished, ending drag", self.target);
            self.drag = None;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

/// Offset the edges `zone` controls by the drag delta.
fn apply_zone(original: Rect, zone: ResizeZone, delta: Vec2) -> Rect {
    let mut rect = original;
    if zone.moves_left() {
        rect.x0 += delta.x;
    }
    if zone.moves_right() {
        rect.x1 += delta.x;
    }
    if zone.moves_top() {
        rect.y0 += delta.y;
    }
    if zone.moves_bottom() {
        rect.y1 += delta.y;
    }
    rect
}
