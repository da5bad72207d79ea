//! In-memory widget tree.
//!
//! Reference [`HostView`] implementation backing the demo app and the
//! tests. It is deliberately not a layout engine: bounds are whatever
//! callers set, children are not clipped to their parents, and hit testing
//! is plain front-to-back rectangle containment.

use crate::host::{BoundsChange, HostError, HostView, WatchId, WidgetId};
use kurbo::{Point, Rect};
use std::collections::HashMap;

/// One widget in the tree.
#[derive(Debug, Clone)]
struct Node {
    name: String,
    /// Bounds in the parent's frame.
    bounds: Rect,
    parent: Option<WidgetId>,
    /// Children, back to front.
    children: Vec<WidgetId>,
}

/// Mutable widget tree with watch-based change notifications.
///
/// Notifications queue up inside the tree; the embedding drains them with
/// [`MemoryTree::take_notifications`] once per frame and feeds them to the
/// inspector. Nothing is delivered re-entrantly from a mutation.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: HashMap<WidgetId, Node>,
    /// Roots, back to front.
    roots: Vec<WidgetId>,
    overlay_bounds: Rect,
    watches: HashMap<WatchId, WidgetId>,
    next_watch: WatchId,
    pending: Vec<BoundsChange>,
}

impl MemoryTree {
    pub fn new(overlay_bounds: Rect) -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            overlay_bounds,
            watches: HashMap::new(),
            next_watch: 0,
            pending: Vec::new(),
        }
    }

    /// Insert a widget under `parent`, or as a root when `parent` is `None`.
    /// An unknown parent is treated as `None`.
    pub fn insert(&mut self, parent: Option<WidgetId>, name: &str, bounds: Rect) -> WidgetId {
        let id = WidgetId::new_v4();
        let parent = parent.filter(|p| {
            let alive = self.nodes.contains_key(p);
            if !alive {
                log::warn!("inserting {name:?} under unknown parent {p}, adding as root");
            }
            alive
        });
        match parent {
            Some(parent_id) => {
                if let Some(node) = self.nodes.get_mut(&parent_id) {
                    node.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        self.nodes.insert(
            id,
            Node {
                name: name.to_string(),
                bounds,
                parent,
                children: Vec::new(),
            },
        );
        id
    }

    /// Remove a widget and its whole subtree. Returns `false` for unknown ids.
    pub fn remove(&mut self, id: WidgetId) -> bool {
        let Some(node) = self.nodes.remove(&id) else {
            return false;
        };
        match node.parent {
            Some(parent_id) => {
                if let Some(parent) = self.nodes.get_mut(&parent_id) {
                    parent.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
        let mut stack = node.children;
        while let Some(child) = stack.pop() {
            if let Some(removed) = self.nodes.remove(&child) {
                stack.extend(removed.children);
            }
        }
        true
    }

    /// Display name given at insertion.
    pub fn name(&self, id: WidgetId) -> Option<&str> {
        self.nodes.get(&id).map(|n| n.name.as_str())
    }

    /// Widget bounds in overlay coordinates.
    pub fn bounds_in_overlay(&self, id: WidgetId) -> Option<Rect> {
        let node = self.nodes.get(&id)?;
        let origin = self.parent_frame_origin(id)?;
        Some(node.bounds + origin.to_vec2())
    }

    /// All live widgets, parents before children, back to front.
    pub fn paint_order(&self) -> Vec<WidgetId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        for root in &self.roots {
            self.collect_subtree(*root, &mut order);
        }
        order
    }

    /// Resize the area the overlay covers.
    pub fn set_overlay_bounds(&mut self, bounds: Rect) {
        self.overlay_bounds = bounds;
    }

    /// Drain the queued bounds-change notifications.
    pub fn take_notifications(&mut self) -> Vec<BoundsChange> {
        std::mem::take(&mut self.pending)
    }

    fn collect_subtree(&self, id: WidgetId, order: &mut Vec<WidgetId>) {
        if let Some(node) = self.nodes.get(&id) {
            order.push(id);
            for child in &node.children {
                self.collect_subtree(*child, order);
            }
        }
    }

    /// Overlay-frame origin of the frame `id`'s bounds are expressed in.
    fn parent_frame_origin(&self, id: WidgetId) -> Option<Point> {
        let node = self.nodes.get(&id)?;
        let mut origin = Point::ZERO;
        let mut parent = node.parent;
        while let Some(parent_id) = parent {
            let parent_node = self.nodes.get(&parent_id)?;
            origin += parent_node.bounds.origin().to_vec2();
            parent = parent_node.parent;
        }
        Some(origin)
    }
}

impl HostView for MemoryTree {
    fn is_alive(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(&id)
    }

    fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(&id)?.parent
    }

    fn is_descendant_of(&self, id: WidgetId, ancestor: WidgetId) -> bool {
        if !self.nodes.contains_key(&ancestor) {
            return false;
        }
        let mut current = Some(id);
        while let Some(widget) = current {
            if widget == ancestor {
                return true;
            }
            current = self.nodes.get(&widget).and_then(|n| n.parent);
        }
        false
    }

    fn bounds_in_parent(&self, id: WidgetId) -> Option<Rect> {
        self.nodes.get(&id).map(|n| n.bounds)
    }

    fn rect_from_parent(&self, id: WidgetId, rect: Rect) -> Option<Rect> {
        let origin = self.parent_frame_origin(id)?;
        Some(rect + origin.to_vec2())
    }

    fn point_from_parent(&self, id: WidgetId, point: Point) -> Option<Point> {
        let origin = self.parent_frame_origin(id)?;
        Some(point + origin.to_vec2())
    }

    fn rect_to_parent(&self, id: WidgetId, rect: Rect) -> Option<Rect> {
        let origin = self.parent_frame_origin(id)?;
        Some(rect - origin.to_vec2())
    }

    fn overlay_bounds(&self) -> Rect {
        self.overlay_bounds
    }

    fn widget_at(&self, point: Point) -> Option<WidgetId> {
        self.paint_order()
            .into_iter()
            .rev()
            .find(|id| self.bounds_in_overlay(*id).is_some_and(|r| r.contains(point)))
    }

    fn set_bounds_in_parent(&mut self, id: WidgetId, bounds: Rect) -> Result<(), HostError> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(HostError::WidgetNotFound(id))?;
        let old = node.bounds;
        if old == bounds {
            return Ok(());
        }
        node.bounds = bounds;
        let moved = old.origin() != bounds.origin();
        let resized = old.size() != bounds.size();
        if self.watches.values().any(|watched| *watched == id) {
            self.pending.push(BoundsChange { id, moved, resized });
        }
        Ok(())
    }

    fn watch_bounds(&mut self, id: WidgetId) -> WatchId {
        let watch = self.next_watch;
        self.next_watch += 1;
        self.watches.insert(watch, id);
        watch
    }

    fn unwatch_bounds(&mut self, watch: WatchId) {
        self.watches.remove(&watch);
    }
}
