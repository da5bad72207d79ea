//! Demo widget tree painted behind the inspector overlay.

use egui::{Align2, Color32, CornerRadius, FontId, Stroke, StrokeKind, Vec2};
use kurbo::Rect;
use ocula_core::host::{HostView, WidgetId};
use ocula_core::tree::MemoryTree;
use ocula_egui::to_egui_rect;

/// Widgets the demo controls refer back to.
pub struct DemoIds {
    pub window: WidgetId,
    /// Removable widget, for poking at dead-target handling.
    pub card: WidgetId,
}

/// Fill colors by nesting depth.
const FILLS: [Color32; 4] = [
    Color32::from_rgb(40, 44, 52),
    Color32::from_rgb(55, 60, 70),
    Color32::from_rgb(72, 78, 92),
    Color32::from_rgb(92, 99, 115),
];

const OUTLINE: Color32 = Color32::from_rgb(30, 33, 39);
const NAME_TEXT: Color32 = Color32::from_rgb(171, 178, 191);

/// Builds a window-like layout with enough nesting to exercise the
/// inspector: a header, a sidebar of buttons, and a content area holding
/// a removable card.
pub fn build(tree: &mut MemoryTree) -> DemoIds {
    let window = tree.insert(None, "window", Rect::new(20.0, 20.0, 620.0, 440.0));

    let header = tree.insert(Some(window), "header", Rect::new(10.0, 10.0, 590.0, 50.0));
    tree.insert(Some(header), "title", Rect::new(8.0, 8.0, 180.0, 32.0));
    tree.insert(Some(header), "close", Rect::new(548.0, 8.0, 572.0, 32.0));

    let sidebar = tree.insert(Some(window), "sidebar", Rect::new(10.0, 60.0, 150.0, 410.0));
    tree.insert(Some(sidebar), "nav-home", Rect::new(8.0, 10.0, 132.0, 38.0));
    tree.insert(Some(sidebar), "nav-files", Rect::new(8.0, 46.0, 132.0, 74.0));
    tree.insert(Some(sidebar), "nav-settings", Rect::new(8.0, 82.0, 132.0, 110.0));

    let content = tree.insert(Some(window), "content", Rect::new(160.0, 60.0, 590.0, 410.0));
    let card = tree.insert(Some(content), "card", Rect::new(20.0, 20.0, 270.0, 160.0));
    tree.insert(Some(card), "card-title", Rect::new(10.0, 10.0, 240.0, 34.0));
    tree.insert(Some(card), "card-button", Rect::new(10.0, 96.0, 110.0, 128.0));
    tree.insert(Some(content), "footnote", Rect::new(20.0, 300.0, 410.0, 324.0));

    DemoIds { window, card }
}

/// Paints every widget as a flat plate with its name, back to front.
pub fn paint(painter: &egui::Painter, tree: &MemoryTree, offset: Vec2) {
    for id in tree.paint_order() {
        let Some(bounds) = tree.bounds_in_overlay(id) else {
            continue;
        };
        let rect = to_egui_rect(bounds).translate(offset);
        let fill = FILLS[depth(tree, id) % FILLS.len()];
        painter.rect_filled(rect, CornerRadius::same(3), fill);
        painter.rect_stroke(
            rect,
            CornerRadius::same(3),
            Stroke::new(1.0, OUTLINE),
            StrokeKind::Inside,
        );
        if let Some(name) = tree.name(id) {
            painter.text(
                rect.min + Vec2::new(6.0, 3.0),
                Align2::LEFT_TOP,
                name,
                FontId::proportional(11.0),
                NAME_TEXT,
            );
        }
    }
}

fn depth(tree: &MemoryTree, id: WidgetId) -> usize {
    let mut depth = 0;
    let mut cursor = id;
    while let Some(parent) = tree.parent_of(cursor) {
        depth += 1;
        cursor = parent;
    }
    depth
}
