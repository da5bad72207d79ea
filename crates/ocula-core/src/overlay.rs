//! Overlay state machine.
//!
//! Tracks the hovered and selected widgets, keeps the derived visuals
//! (outlines, leader lines, dimension label, resize handle) in sync with
//! the host's bounds notifications, and emits the display list the host
//! paints each frame.
//!
//! The overlay holds ids, never widgets. A target can die at any moment;
//! every read goes back through the [`HostView`] and a dead target behaves
//! exactly like no target at all.

use crate::geometry::{
    self, CORNER_MARKER_INNER, CORNER_MARKER_OUTER, HOVER_MARGIN, HOVER_STROKE, LABEL_CORNER_RADIUS,
    LEADER_DASH, LEADER_STROKE, LeaderLines, SELECTION_MARGIN, SELECTION_STROKE,
};
use crate::handle::{ResizeHandle, ResizeZone};
use crate::host::{BoundsChange, HostView, WatchId, WidgetId};
use crate::scene::{OverlayScene, OverlayShape};
use crate::style::InspectorStyle;
use kurbo::{Line, Point, Rect};

/// The widget under the cursor and its cached hover outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    pub target: WidgetId,
    /// Hover outline in overlay coordinates.
    pub bounds: Rect,
}

/// Dimension label of the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLabel {
    pub text: String,
    /// Label rect in overlay coordinates (the painted plate extends below it).
    pub bounds: Rect,
}

/// Everything derived from the selected widget.
#[derive(Debug, Clone)]
struct Selection {
    target: WidgetId,
    /// Selection outline in overlay coordinates.
    bounds: Rect,
    leaders: LeaderLines,
    label: Option<DimensionLabel>,
    handle: ResizeHandle,
    watch: WatchId,
}

/// Geometry recomputed whenever the selection target changes shape.
struct SelectionGeometry {
    bounds: Rect,
    leaders: LeaderLines,
    label: Option<DimensionLabel>,
}

impl SelectionGeometry {
    fn compute(host: &impl HostView, widget: WidgetId, style: &InspectorStyle) -> Option<Self> {
        let in_parent = host.bounds_in_parent(widget)?;
        let outline_parent = geometry::outline_in_parent(in_parent, SELECTION_MARGIN);
        let bounds = host.rect_from_parent(widget, outline_parent)?;

        // Leader lines run to the parent frame's zero axes, then get
        // expressed in overlay coordinates endpoint by endpoint.
        let parent_lines = geometry::leader_lines(outline_parent);
        let leaders = LeaderLines {
            top: Line::new(
                host.point_from_parent(widget, parent_lines.top.p0)?,
                host.point_from_parent(widget, parent_lines.top.p1)?,
            ),
            left: Line::new(
                host.point_from_parent(widget, parent_lines.left.p0)?,
                host.point_from_parent(widget, parent_lines.left.p1)?,
            ),
        };

        let text = geometry::dimension_text(in_parent.size());
        let text_width = host.text_width(&text, style.label_font_size);
        let label = geometry::label_bounds(bounds, host.overlay_bounds(), text_width)
            .map(|bounds| DimensionLabel { text, bounds });

        Some(Self {
            bounds,
            leaders,
            label,
        })
    }
}

/// Hover/selection state and the display list derived from it.
#[derive(Debug, Clone)]
pub struct Overlay {
    style: InspectorStyle,
    hover: Option<HoverState>,
    selection: Option<Selection>,
    needs_repaint: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new(InspectorStyle::default())
    }
}

impl Overlay {
    pub fn new(style: InspectorStyle) -> Self {
        Self {
            style,
            hover: None,
            selection: None,
            needs_repaint: false,
        }
    }

    pub fn style(&self) -> &InspectorStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: InspectorStyle) {
        self.style = style;
        self.request_repaint();
    }

    /// Currently hovered widget, if it is still alive.
    pub fn hover_target(&self, host: &impl HostView) -> Option<WidgetId> {
        self.hover
            .filter(|h| host.is_alive(h.target))
            .map(|h| h.target)
    }

    /// Hover outline in overlay coordinates, if the target is still alive.
    pub fn hover_bounds(&self, host: &impl HostView) -> Option<Rect> {
        self.hover
            .filter(|h| host.is_alive(h.target))
            .map(|h| h.bounds)
    }

    /// Currently selected widget, if it is still alive.
    pub fn selection_target(&self, host: &impl HostView) -> Option<WidgetId> {
        self.live_selection(host).map(|s| s.target)
    }

    /// Selection outline in overlay coordinates, if the target is still alive.
    pub fn selection_bounds(&self, host: &impl HostView) -> Option<Rect> {
        self.live_selection(host).map(|s| s.bounds)
    }

    /// Leader lines of the live selection, in overlay coordinates.
    pub fn leader_lines(&self, host: &impl HostView) -> Option<LeaderLines> {
        self.live_selection(host).map(|s| s.leaders)
    }

    /// Dimension label of the live selection, if there was room for it.
    pub fn label(&self, host: &impl HostView) -> Option<&DimensionLabel> {
        self.live_selection(host).and_then(|s| s.label.as_ref())
    }

    /// The resize handle, while a selection exists.
    pub fn handle(&self) -> Option<&ResizeHandle> {
        self.selection.as_ref().map(|s| &s.handle)
    }

    /// Mutable resize handle, e.g. to tighten its constrainer.
    pub fn handle_mut(&mut self) -> Option<&mut ResizeHandle> {
        self.selection.as_mut().map(|s| &mut s.handle)
    }

    fn live_selection(&self, host: &impl HostView) -> Option<&Selection> {
        self.selection.as_ref().filter(|s| host.is_alive(s.target))
    }

    /// Point the hover outline at `widget`.
    ///
    /// Hovering the current selection shows nothing extra: the selection
    /// visuals already mark that widget, so any hover outline is cleared.
    /// A dead widget likewise clears the hover.
    pub fn set_hover_target(&mut self, host: &impl HostView, widget: WidgetId) {
        if self.selection.as_ref().is_some_and(|s| s.target == widget) {
            if self.hover.take().is_some() {
                self.request_repaint();
            }
            return;
        }
        let bounds = host
            .bounds_in_parent(widget)
            .map(|b| geometry::outline_in_parent(b, HOVER_MARGIN))
            .and_then(|outline| host.rect_from_parent(widget, outline));
        match bounds {
            Some(bounds) => {
                self.hover = Some(HoverState {
                    target: widget,
                    bounds,
                });
                self.request_repaint();
            }
            None => {
                if self.hover.take().is_some() {
                    self.request_repaint();
                }
            }
        }
    }

    /// Select `widget`, or deselect it if it already is the selection.
    ///
    /// Selecting releases the previous selection's bounds watch before
    /// taking a new one, so exactly one watch is live at any time. A dead
    /// `widget` is a no-op: whatever was selected stays selected.
    pub fn toggle_select(&mut self, host: &mut impl HostView, widget: WidgetId) {
        if self.selection.as_ref().is_some_and(|s| s.target == widget) {
            self.deselect(host);
            self.request_repaint();
            return;
        }
        let Some(geometry) = SelectionGeometry::compute(host, widget, &self.style) else {
            return;
        };
        self.deselect(host);
        // Selection supersedes any hover outline.
        self.hover = None;
        let watch = host.watch_bounds(widget);
        let mut handle = ResizeHandle::new(widget);
        handle.set_bounds(geometry.bounds);
        self.selection = Some(Selection {
            target: widget,
            bounds: geometry.bounds,
            leaders: geometry.leaders,
            label: geometry.label,
            handle,
            watch,
        });
        log::debug!("selected {}", widget);
        self.request_repaint();
    }

    /// Drop hover and selection, releasing the selection watch.
    pub fn clear(&mut self, host: &mut impl HostView) {
        let had_any = self.hover.is_some() || self.selection.is_some();
        self.hover = None;
        self.deselect(host);
        if had_any {
            self.request_repaint();
        }
    }

    /// Apply a bounds-change notification for the watched selection target.
    ///
    /// A resize recomputes the full selection geometry and moves the handle
    /// with it. A pure move does not refresh the outline; it catches up on
    /// the next resize.
    pub fn target_moved_or_resized(&mut self, host: &mut impl HostView, change: BoundsChange) {
        if !self
            .selection
            .as_ref()
            .is_some_and(|s| s.target == change.id)
        {
            return;
        }
        if change.resized {
            match SelectionGeometry::compute(host, change.id, &self.style) {
                Some(geometry) => {
                    if let Some(selection) = self.selection.as_mut() {
                        selection.bounds = geometry.bounds;
                        selection.leaders = geometry.leaders;
                        selection.label = geometry.label;
                        selection.handle.set_bounds(geometry.bounds);
                    }
                    self.request_repaint();
                }
                None => {
                    self.deselect(host);
                    self.request_repaint();
                }
            }
        } else if change.moved {
            // The outline stays put on a pure move; the next resize
            // notification brings it back in sync.
        }
    }

    /// The overlay layer itself was resized; refresh the hover outline
    /// against the new geometry.
    pub fn overlay_resized(&mut self, host: &impl HostView) {
        let Some(hover) = self.hover else {
            return;
        };
        let bounds = host
            .bounds_in_parent(hover.target)
            .map(|b| geometry::outline_in_parent(b, HOVER_MARGIN))
            .and_then(|outline| host.rect_from_parent(hover.target, outline));
        self.hover = bounds.map(|bounds| HoverState {
            target: hover.target,
            bounds,
        });
        self.request_repaint();
    }

    /// Resize-handle zone under `point`, while the selection is alive.
    pub fn handle_zone_at(&self, host: &impl HostView, point: Point) -> Option<ResizeZone> {
        self.live_selection(host)
            .and_then(|s| s.handle.zone_at(point))
    }

    /// Start a border drag at `point`, if it lands on a live handle band.
    pub fn begin_handle_drag(&mut self, host: &impl HostView, point: Point) -> Option<ResizeZone> {
        let selection = self.selection.as_mut()?;
        if !host.is_alive(selection.target) {
            return None;
        }
        selection.handle.begin_drag(point)
    }

    /// Advance an active border drag.
    pub fn drag_handle_to(&mut self, host: &mut impl HostView, point: Point) {
        if let Some(selection) = self.selection.as_mut() {
            selection.handle.drag_to(host, point);
        }
    }

    pub fn end_handle_drag(&mut self) {
        if let Some(selection) = self.selection.as_mut() {
            selection.handle.end_drag();
        }
    }

    pub fn is_handle_dragging(&self) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|s| s.handle.is_dragging())
    }

    /// Zone of the border drag in progress, for cursor feedback.
    pub fn handle_drag_zone(&self) -> Option<ResizeZone> {
        self.selection.as_ref().and_then(|s| s.handle.drag_zone())
    }

    /// Build the display list for the current state.
    ///
    /// Pure read: dead targets are skipped, never cleaned up here. Paint
    /// order is hover outline, selection outline, leader lines, outer
    /// corner markers, inner corner markers, label plate, label text.
    pub fn scene(&self, host: &impl HostView) -> OverlayScene {
        let mut scene = OverlayScene::new();
        if let Some(hover) = &self.hover {
            if host.is_alive(hover.target) {
                scene.push(OverlayShape::StrokeRect {
                    rect: hover.bounds,
                    width: HOVER_STROKE,
                    color: self.style.accent_color(),
                });
            }
        }
        let Some(selection) = self.live_selection(host) else {
            return scene;
        };
        let accent = self.style.accent_color();
        scene.push(OverlayShape::StrokeRect {
            rect: selection.bounds,
            width: SELECTION_STROKE,
            color: accent,
        });
        for line in [selection.leaders.top, selection.leaders.left] {
            scene.push(OverlayShape::DashedLine {
                line,
                dash: LEADER_DASH,
                gap: LEADER_DASH,
                width: LEADER_STROKE,
                color: accent,
            });
        }
        for rect in geometry::corner_markers(selection.bounds, CORNER_MARKER_OUTER) {
            scene.push(OverlayShape::FillRect {
                rect,
                color: accent,
            });
        }
        for rect in geometry::corner_markers(selection.bounds, CORNER_MARKER_INNER) {
            scene.push(OverlayShape::FillRect {
                rect,
                color: self.style.marker_core_color(),
            });
        }
        if let Some(label) = &selection.label {
            scene.push(OverlayShape::RoundedRect {
                rect: geometry::label_plate(label.bounds),
                radius: LABEL_CORNER_RADIUS,
                color: self.style.label_fill_color(),
            });
            scene.push(OverlayShape::Text {
                rect: label.bounds,
                text: label.text.clone(),
                font_size: self.style.label_font_size,
                color: self.style.label_text_color(),
            });
        }
        scene
    }

    /// Whether something changed since the last [`Overlay::take_repaint`].
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Consume the repaint request.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    fn deselect(&mut self, host: &mut impl HostView) {
        if let Some(selection) = self.selection.take() {
            host.unwatch_bounds(selection.watch);
            log::debug!("deselected {}", selection.target);
        }
    }

    fn request_repaint(&mut self) {
        self.needs_repaint = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MemoryTree;

    const EPS: f64 = 1e-9;

    fn tree_with_widget() -> (MemoryTree, WidgetId, WidgetId) {
        let mut tree = MemoryTree::new(Rect::new(0.0, 0.0, 400.0, 400.0));
        let root = tree.insert(None, "root", Rect::new(0.0, 0.0, 400.0, 400.0));
        let widget = tree.insert(Some(root), "panel", Rect::new(100.0, 100.0, 150.0, 150.0));
        (tree, root, widget)
    }

    #[test]
    fn test_hover_outline_expands_widget_bounds() {
        let (tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.set_hover_target(&tree, widget);
        assert_eq!(overlay.hover_target(&tree), Some(widget));
        assert_eq!(
            overlay.hover_bounds(&tree),
            Some(Rect::new(98.0, 98.0, 152.0, 152.0))
        );
    }

    #[test]
    fn test_hover_is_idempotent_and_tracks_moves() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.set_hover_target(&tree, widget);
        overlay.set_hover_target(&tree, widget);
        assert_eq!(
            overlay.hover_bounds(&tree),
            Some(Rect::new(98.0, 98.0, 152.0, 152.0))
        );

        tree.set_bounds_in_parent(widget, Rect::new(110.0, 100.0, 160.0, 150.0))
            .unwrap();
        overlay.set_hover_target(&tree, widget);
        assert_eq!(
            overlay.hover_bounds(&tree),
            Some(Rect::new(108.0, 98.0, 162.0, 152.0))
        );
    }

    #[test]
    fn test_hover_switches_between_widgets() {
        let (mut tree, root, widget) = tree_with_widget();
        let other = tree.insert(Some(root), "other", Rect::new(10.0, 10.0, 40.0, 40.0));
        let mut overlay = Overlay::default();
        overlay.set_hover_target(&tree, widget);
        overlay.set_hover_target(&tree, other);
        assert_eq!(overlay.hover_target(&tree), Some(other));
        assert_eq!(
            overlay.hover_bounds(&tree),
            Some(Rect::new(8.0, 8.0, 42.0, 42.0))
        );
    }

    #[test]
    fn test_hovering_the_selection_clears_hover() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, widget);
        overlay.set_hover_target(&tree, widget);
        assert_eq!(overlay.hover_target(&tree), None);
        assert_eq!(overlay.selection_target(&tree), Some(widget));
    }

    #[test]
    fn test_hover_dead_widget_reports_absent() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.set_hover_target(&tree, widget);
        tree.remove(widget);
        assert_eq!(overlay.hover_target(&tree), None);
        assert_eq!(overlay.hover_bounds(&tree), None);

        // Hovering it again after death clears the stale state entirely.
        overlay.set_hover_target(&tree, widget);
        assert!(overlay.scene(&tree).is_empty());
    }

    #[test]
    fn test_selection_geometry_of_fifty_pixel_widget() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, widget);

        assert_eq!(
            overlay.selection_bounds(&tree),
            Some(Rect::new(99.0, 99.0, 151.0, 151.0))
        );
        let leaders = overlay.leader_lines(&tree).unwrap();
        assert_eq!(leaders.top.p0, Point::new(125.0, 99.0));
        assert_eq!(leaders.top.p1, Point::new(125.0, 0.0));
        assert_eq!(leaders.left.p0, Point::new(99.0, 125.0));
        assert_eq!(leaders.left.p1, Point::new(0.0, 125.0));

        // Handle covers the outline exactly.
        assert_eq!(
            overlay.handle().map(|h| h.bounds()),
            Some(Rect::new(99.0, 99.0, 151.0, 151.0))
        );

        let label = overlay.label(&tree).unwrap();
        assert_eq!(label.text, "50 × 50");
        assert!((label.bounds.y0 - 153.0).abs() < EPS);
        assert!((label.bounds.y1 - 168.0).abs() < EPS);
        assert!((label.bounds.center().x - 125.0).abs() < EPS);
    }

    #[test]
    fn test_leader_lines_in_nested_frames() {
        let mut tree = MemoryTree::new(Rect::new(0.0, 0.0, 400.0, 400.0));
        let root = tree.insert(None, "root", Rect::new(0.0, 0.0, 400.0, 400.0));
        let panel = tree.insert(Some(root), "panel", Rect::new(50.0, 40.0, 250.0, 240.0));
        let button = tree.insert(Some(panel), "button", Rect::new(100.0, 100.0, 150.0, 150.0));
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, button);

        // Outline in overlay coordinates carries the panel offset.
        assert_eq!(
            overlay.selection_bounds(&tree),
            Some(Rect::new(149.0, 139.0, 201.0, 191.0))
        );
        // Leaders run to the panel's edges, not the overlay's.
        let leaders = overlay.leader_lines(&tree).unwrap();
        assert_eq!(leaders.top.p0, Point::new(175.0, 139.0));
        assert_eq!(leaders.top.p1, Point::new(175.0, 40.0));
        assert_eq!(leaders.left.p0, Point::new(149.0, 175.0));
        assert_eq!(leaders.left.p1, Point::new(50.0, 175.0));
    }

    #[test]
    fn test_toggle_select_twice_restores_initial_state() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();

        overlay.toggle_select(&mut tree, widget);
        assert_eq!(overlay.selection_target(&tree), Some(widget));
        assert!(overlay.handle().is_some());

        overlay.toggle_select(&mut tree, widget);
        assert_eq!(overlay.selection_target(&tree), None);
        assert!(overlay.handle().is_none());
        assert!(overlay.label(&tree).is_none());

        // The watch was released: changes no longer queue notifications.
        tree.set_bounds_in_parent(widget, Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        assert!(tree.take_notifications().is_empty());
    }

    #[test]
    fn test_selecting_other_widget_releases_old_watch() {
        let (mut tree, root, first) = tree_with_widget();
        let second = tree.insert(Some(root), "second", Rect::new(10.0, 10.0, 40.0, 40.0));
        let mut overlay = Overlay::default();

        overlay.toggle_select(&mut tree, first);
        overlay.toggle_select(&mut tree, second);
        assert_eq!(overlay.selection_target(&tree), Some(second));

        tree.set_bounds_in_parent(first, Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        assert!(tree.take_notifications().is_empty());

        tree.set_bounds_in_parent(second, Rect::new(10.0, 10.0, 50.0, 40.0))
            .unwrap();
        assert_eq!(tree.take_notifications().len(), 1);
    }

    #[test]
    fn test_selecting_dead_widget_keeps_current_selection() {
        let (mut tree, root, widget) = tree_with_widget();
        let doomed = tree.insert(Some(root), "doomed", Rect::new(10.0, 10.0, 40.0, 40.0));
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, widget);
        tree.remove(doomed);

        overlay.toggle_select(&mut tree, doomed);
        assert_eq!(overlay.selection_target(&tree), Some(widget));

        // The surviving selection's watch is still live.
        tree.set_bounds_in_parent(widget, Rect::new(100.0, 100.0, 160.0, 150.0))
            .unwrap();
        assert_eq!(tree.take_notifications().len(), 1);
    }

    #[test]
    fn test_select_takes_over_hover() {
        let (mut tree, root, widget) = tree_with_widget();
        let other = tree.insert(Some(root), "other", Rect::new(10.0, 10.0, 40.0, 40.0));
        let mut overlay = Overlay::default();

        overlay.set_hover_target(&tree, widget);
        overlay.toggle_select(&mut tree, widget);
        assert_eq!(overlay.hover_target(&tree), None);
        assert_eq!(overlay.selection_target(&tree), Some(widget));

        // Hovering a different widget alongside the selection is fine.
        overlay.set_hover_target(&tree, other);
        assert_eq!(overlay.hover_target(&tree), Some(other));
        assert_eq!(overlay.selection_target(&tree), Some(widget));
    }

    #[test]
    fn test_resize_notification_recomputes_selection() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, widget);

        tree.set_bounds_in_parent(widget, Rect::new(100.0, 100.0, 180.0, 160.0))
            .unwrap();
        for change in tree.take_notifications() {
            overlay.target_moved_or_resized(&mut tree, change);
        }

        assert_eq!(
            overlay.selection_bounds(&tree),
            Some(Rect::new(99.0, 99.0, 181.0, 161.0))
        );
        assert_eq!(
            overlay.handle().map(|h| h.bounds()),
            Some(Rect::new(99.0, 99.0, 181.0, 161.0))
        );
        assert_eq!(overlay.label(&tree).unwrap().text, "80 × 60");
    }

    #[test]
    fn test_move_only_notification_keeps_bounds() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, widget);
        let before = overlay.selection_bounds(&tree);
        let leaders_before = overlay.leader_lines(&tree);

        tree.set_bounds_in_parent(widget, Rect::new(130.0, 120.0, 180.0, 170.0))
            .unwrap();
        for change in tree.take_notifications() {
            assert!(change.moved && !change.resized);
            overlay.target_moved_or_resized(&mut tree, change);
        }

        // Pure moves leave the cached outline untouched.
        assert_eq!(overlay.selection_bounds(&tree), before);
        assert_eq!(overlay.leader_lines(&tree), leaders_before);
    }

    #[test]
    fn test_dead_selection_reports_absent_everywhere() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, widget);
        tree.remove(widget);

        assert_eq!(overlay.selection_target(&tree), None);
        assert_eq!(overlay.selection_bounds(&tree), None);
        assert!(overlay.leader_lines(&tree).is_none());
        assert!(overlay.label(&tree).is_none());
        assert!(overlay.scene(&tree).is_empty());
        assert_eq!(overlay.handle_zone_at(&tree, Point::new(100.0, 100.0)), None);
        assert_eq!(overlay.begin_handle_drag(&tree, Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn test_scene_paint_order() {
        let (mut tree, root, widget) = tree_with_widget();
        let other = tree.insert(Some(root), "other", Rect::new(200.0, 30.0, 260.0, 70.0));
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, widget);
        overlay.set_hover_target(&tree, other);

        let scene = overlay.scene(&tree);
        let shapes = scene.shapes();
        assert_eq!(shapes.len(), 14);

        // Hover stroke first, then the selection cluster.
        assert!(matches!(
            shapes[0],
            OverlayShape::StrokeRect { width, .. } if width == HOVER_STROKE
        ));
        assert!(matches!(
            shapes[1],
            OverlayShape::StrokeRect { width, .. } if width == SELECTION_STROKE
        ));
        assert!(matches!(shapes[2], OverlayShape::DashedLine { dash, gap, .. } if dash == 2.0 && gap == 2.0));
        assert!(matches!(shapes[3], OverlayShape::DashedLine { .. }));
        for shape in &shapes[4..8] {
            assert!(matches!(
                shape,
                OverlayShape::FillRect { rect, .. } if (rect.width() - 8.0).abs() < EPS
            ));
        }
        for shape in &shapes[8..12] {
            assert!(matches!(
                shape,
                OverlayShape::FillRect { rect, .. } if (rect.width() - 6.0).abs() < EPS
            ));
        }
        let OverlayShape::RoundedRect { rect: plate, radius, .. } = &shapes[12] else {
            panic!("expected label plate, got {:?}", shapes[12]);
        };
        assert_eq!(*radius, LABEL_CORNER_RADIUS);
        let OverlayShape::Text { rect: label, text, .. } = &shapes[13] else {
            panic!("expected label text, got {:?}", shapes[13]);
        };
        assert_eq!(text, "50 × 50");
        // Plate is the label rect with its bottom extended.
        assert!((plate.y1 - label.y1 - 4.0).abs() < EPS);
        assert_eq!(plate.y0, label.y0);
    }

    #[test]
    fn test_label_omitted_near_overlay_bottom() {
        let (mut tree, root, _) = tree_with_widget();
        let low = tree.insert(Some(root), "low", Rect::new(100.0, 360.0, 180.0, 390.0));
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, low);

        assert!(overlay.selection_bounds(&tree).is_some());
        assert!(overlay.label(&tree).is_none());
        let has_text = overlay
            .scene(&tree)
            .iter()
            .any(|s| matches!(s, OverlayShape::Text { .. }));
        assert!(!has_text);
    }

    #[test]
    fn test_overlay_resized_refreshes_hover() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.set_hover_target(&tree, widget);

        // The widget changed while no watch was pointed at it (hover does
        // not subscribe); a relayout pass picks the change up.
        tree.set_bounds_in_parent(widget, Rect::new(20.0, 30.0, 80.0, 90.0))
            .unwrap();
        tree.set_overlay_bounds(Rect::new(0.0, 0.0, 300.0, 300.0));
        overlay.overlay_resized(&tree);

        assert_eq!(
            overlay.hover_bounds(&tree),
            Some(Rect::new(18.0, 28.0, 82.0, 92.0))
        );

        tree.remove(widget);
        overlay.overlay_resized(&tree);
        assert_eq!(overlay.hover_bounds(&tree), None);
    }

    #[test]
    fn test_clear_resets_everything_and_unwatches() {
        let (mut tree, root, widget) = tree_with_widget();
        let other = tree.insert(Some(root), "other", Rect::new(10.0, 10.0, 40.0, 40.0));
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, widget);
        overlay.set_hover_target(&tree, other);

        overlay.clear(&mut tree);
        assert_eq!(overlay.hover_target(&tree), None);
        assert_eq!(overlay.selection_target(&tree), None);
        assert!(overlay.scene(&tree).is_empty());

        tree.set_bounds_in_parent(widget, Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap();
        assert!(tree.take_notifications().is_empty());
    }

    #[test]
    fn test_repaint_flag_latches_until_taken() {
        let (tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        assert!(!overlay.needs_repaint());

        overlay.set_hover_target(&tree, widget);
        assert!(overlay.needs_repaint());
        assert!(overlay.take_repaint());
        assert!(!overlay.needs_repaint());
        assert!(!overlay.take_repaint());
    }

    #[test]
    fn test_border_drag_resyncs_through_notification() {
        let (mut tree, _, widget) = tree_with_widget();
        let mut overlay = Overlay::default();
        overlay.toggle_select(&mut tree, widget);

        let zone = overlay.begin_handle_drag(&tree, Point::new(150.0, 125.0));
        assert_eq!(zone, Some(ResizeZone::East));
        assert!(overlay.is_handle_dragging());

        overlay.drag_handle_to(&mut tree, Point::new(170.0, 125.0));
        // The widget moved in the host, but the overlay waits for the
        // notification to resync its cached geometry.
        assert_eq!(
            tree.bounds_in_parent(widget),
            Some(Rect::new(100.0, 100.0, 170.0, 150.0))
        );
        assert_eq!(
            overlay.selection_bounds(&tree),
            Some(Rect::new(99.0, 99.0, 151.0, 151.0))
        );

        for change in tree.take_notifications() {
            overlay.target_moved_or_resized(&mut tree, change);
        }
        assert_eq!(
            overlay.selection_bounds(&tree),
            Some(Rect::new(99.0, 99.0, 171.0, 151.0))
        );
        assert_eq!(
            overlay.handle().map(|h| h.bounds()),
            Some(Rect::new(99.0, 99.0, 171.0, 151.0))
        );

        overlay.end_handle_drag();
        assert!(!overlay.is_handle_dragging());
    }
}
