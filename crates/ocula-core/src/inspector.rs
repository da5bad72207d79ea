//! Pointer-event routing.
//!
//! [`MouseInspector`] is the passive half: it looks at the pointer events
//! the host forwards and decides which ones mean "hover this widget" or
//! "select this widget", without touching any state itself. [`Inspector`]
//! bundles it with an [`Overlay`] into the one-stop embedding surface: feed
//! it events and drained notifications, ask it for the scene.

use crate::event::{MouseButton, PointerEvent};
use crate::handle::ResizeZone;
use crate::host::{BoundsChange, HostView, WidgetId};
use crate::overlay::Overlay;
use crate::scene::OverlayScene;
use crate::style::InspectorStyle;
use kurbo::Point;

/// What a pointer event asks the overlay to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorAction {
    /// Point the hover outline at this widget.
    Hover(WidgetId),
    /// Toggle selection of this widget.
    Select(WidgetId),
}

/// Translates pointer events within a root's subtree into inspector actions.
///
/// The inspector listens deeply: events targeting the root or anything
/// below it count. Enter events hover, primary-button presses select, and
/// everything else passes through untouched for the host to handle.
#[derive(Debug, Clone, Copy)]
pub struct MouseInspector {
    root: WidgetId,
}

impl MouseInspector {
    pub fn new(root: WidgetId) -> Self {
        Self { root }
    }

    /// Root of the observed subtree.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Action for `event`, or `None` when the event is not the
    /// inspector's business.
    pub fn translate(&self, host: &impl HostView, event: &PointerEvent) -> Option<InspectorAction> {
        match *event {
            PointerEvent::Enter { widget, .. } if self.observes(host, widget) => {
                Some(InspectorAction::Hover(widget))
            }
            PointerEvent::Down {
                widget,
                button: MouseButton::Left,
                ..
            } if self.observes(host, widget) => Some(InspectorAction::Select(widget)),
            _ => None,
        }
    }

    fn observes(&self, host: &impl HostView, widget: WidgetId) -> bool {
        host.is_alive(widget) && host.is_descendant_of(widget, self.root)
    }
}

/// The full inspector: overlay state plus pointer routing plus an on/off
/// switch.
#[derive(Debug, Clone)]
pub struct Inspector {
    overlay: Overlay,
    mouse: MouseInspector,
    enabled: bool,
}

impl Inspector {
    /// Inspect the subtree under `root`, starting enabled.
    pub fn new(root: WidgetId, style: InspectorStyle) -> Self {
        Self {
            overlay: Overlay::new(style),
            mouse: MouseInspector::new(root),
            enabled: true,
        }
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }

    /// Root of the observed subtree.
    pub fn root(&self) -> WidgetId {
        self.mouse.root()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switch the inspector on or off. Turning it off ends any drag in
    /// progress and clears all overlay state, watches included.
    pub fn set_enabled(&mut self, host: &mut impl HostView, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.overlay.end_handle_drag();
            self.overlay.clear(host);
        }
        log::debug!("inspector {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn toggle_enabled(&mut self, host: &mut impl HostView) {
        self.set_enabled(host, !self.enabled);
    }

    /// Feed one pointer event through the inspector.
    ///
    /// The resize handle is the overlay's only interactive surface and gets
    /// first claim: a primary press on its border band starts a drag
    /// instead of selecting, and while a drag runs, moves steer it and
    /// enters are swallowed so crossing widgets cannot retarget the hover.
    pub fn handle_pointer_event(&mut self, host: &mut impl HostView, event: &PointerEvent) {
        if !self.enabled {
            return;
        }
        match *event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
                ..
            } => {
                if self.overlay.begin_handle_drag(host, position).is_some() {
                    return;
                }
            }
            PointerEvent::Move { position } if self.overlay.is_handle_dragging() => {
                self.overlay.drag_handle_to(host, position);
                return;
            }
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } if self.overlay.is_handle_dragging() => {
                self.overlay.end_handle_drag();
                return;
            }
            PointerEvent::Enter { .. } if self.overlay.is_handle_dragging() => {
                return;
            }
            _ => {}
        }
        match self.mouse.translate(host, event) {
            Some(InspectorAction::Hover(widget)) => self.overlay.set_hover_target(host, widget),
            Some(InspectorAction::Select(widget)) => self.overlay.toggle_select(host, widget),
            None => {}
        }
    }

    /// Forward one drained bounds-change notification.
    pub fn process_bounds_change(&mut self, host: &mut impl HostView, change: BoundsChange) {
        self.overlay.target_moved_or_resized(host, change);
    }

    /// The overlay layer was resized.
    pub fn overlay_resized(&mut self, host: &impl HostView) {
        self.overlay.overlay_resized(host);
    }

    /// Resize zone to show cursor feedback for: the active drag's zone
    /// wins over whatever band `point` currently rests on.
    pub fn resize_zone_at(&self, host: &impl HostView, point: Point) -> Option<ResizeZone> {
        if !self.enabled {
            return None;
        }
        self.overlay
            .handle_drag_zone()
            .or_else(|| self.overlay.handle_zone_at(host, point))
    }

    /// Drop hover and selection.
    pub fn clear(&mut self, host: &mut impl HostView) {
        self.overlay.end_handle_drag();
        self.overlay.clear(host);
    }

    /// Display list for this frame. Empty while disabled.
    pub fn scene(&self, host: &impl HostView) -> OverlayScene {
        if !self.enabled {
            return OverlayScene::new();
        }
        self.overlay.scene(host)
    }

    pub fn needs_repaint(&self) -> bool {
        self.overlay.needs_repaint()
    }

    pub fn take_repaint(&mut self) -> bool {
        self.overlay.take_repaint()
    }
}
