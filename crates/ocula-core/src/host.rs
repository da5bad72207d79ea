//! Host view abstraction.
//!
//! The inspector never owns the widgets it decorates. Everything it knows
//! about the inspected UI flows through [`HostView`]: liveness checks,
//! bounds queries, coordinate conversions, and bounds-change watches. A GUI
//! framework embeds the inspector by implementing this trait over its own
//! widget tree; [`MemoryTree`](crate::tree::MemoryTree) is the in-process
//! reference implementation used by the demo app and the tests.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Stable identity of a widget in the host tree.
///
/// Holding a `WidgetId` never keeps a widget alive; every use must go back
/// through the host, which reports death via `Option`/`Result` returns.
pub type WidgetId = Uuid;

/// Token returned by [`HostView::watch_bounds`], used to cancel the watch.
pub type WatchId = u64;

/// A bounds-change notification drained from the host.
///
/// `moved` and `resized` mirror what actually changed: a pure translation
/// sets only `moved`, a size change sets `resized` (and `moved` too if the
/// origin shifted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsChange {
    /// The watched widget whose bounds changed.
    pub id: WidgetId,
    /// The widget's origin in its parent changed.
    pub moved: bool,
    /// The widget's size changed.
    pub resized: bool,
}

/// Errors reported by host mutations.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Widget not found: {0}")]
    WidgetNotFound(WidgetId),
}

/// Read/write access to the inspected widget tree.
///
/// Coordinate conventions: every widget has bounds expressed in its parent's
/// local frame ("in-parent"). A widget with no parent uses the host's root
/// frame as its parent frame. The overlay layer covers the host's root area,
/// so "overlay coordinates" are the frame the inspector draws in. Queries
/// return `None` for widgets that no longer exist.
pub trait HostView {
    /// Whether the widget still exists.
    fn is_alive(&self, id: WidgetId) -> bool;

    /// Parent of `id`, or `None` for roots and dead widgets.
    fn parent_of(&self, id: WidgetId) -> Option<WidgetId>;

    /// Whether `id` is `ancestor` or lies somewhere below it.
    fn is_descendant_of(&self, id: WidgetId, ancestor: WidgetId) -> bool;

    /// Bounds of `id` in its parent's frame.
    fn bounds_in_parent(&self, id: WidgetId) -> Option<Rect>;

    /// Convert a rectangle from the frame of `id`'s parent to overlay coordinates.
    fn rect_from_parent(&self, id: WidgetId, rect: Rect) -> Option<Rect>;

    /// Convert a point from the frame of `id`'s parent to overlay coordinates.
    fn point_from_parent(&self, id: WidgetId, point: Point) -> Option<Point>;

    /// Convert a rectangle from overlay coordinates to the frame of `id`'s parent.
    fn rect_to_parent(&self, id: WidgetId, rect: Rect) -> Option<Rect>;

    /// Bounds of the overlay layer in its own frame (origin at zero).
    fn overlay_bounds(&self) -> Rect;

    /// Topmost live widget containing `point` (overlay coordinates), front to back.
    fn widget_at(&self, point: Point) -> Option<WidgetId>;

    /// Reposition/resize a widget. The host fires a [`BoundsChange`] for
    /// watched widgets when the bounds actually changed.
    fn set_bounds_in_parent(&mut self, id: WidgetId, bounds: Rect) -> Result<(), HostError>;

    /// Start watching `id` for bounds changes.
    fn watch_bounds(&mut self, id: WidgetId) -> WatchId;

    /// Cancel a watch. Unknown tokens are ignored.
    fn unwatch_bounds(&mut self, watch: WatchId);

    /// Approximate width of `text` at `font_size`, in overlay pixels.
    ///
    /// The default is a flat per-glyph advance; hosts with a real text
    /// system should override it with an actual measurement.
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * 0.6
    }
}
