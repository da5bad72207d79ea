//! kurbo/peniko to egui type conversions.

use egui::{Color32, Pos2, pos2};
use kurbo::{Point, Rect};
use peniko::Color;

pub fn to_pos2(point: Point) -> Pos2 {
    pos2(point.x as f32, point.y as f32)
}

pub fn from_pos2(pos: Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

pub fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        pos2(rect.x0 as f32, rect.y0 as f32),
        pos2(rect.x1 as f32, rect.y1 as f32),
    )
}

pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}
