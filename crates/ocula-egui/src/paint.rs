//! Scene replay onto an egui painter.

use crate::convert::{to_color32, to_egui_rect, to_pos2};
use egui::{Align2, CornerRadius, CursorIcon, FontId, Painter, Stroke, StrokeKind, Vec2};
use ocula_core::handle::ResizeZone;
use ocula_core::scene::{OverlayScene, OverlayShape};

/// Replay `scene` onto `painter`.
///
/// `offset` is the screen position of the overlay's origin; every shape is
/// shifted by it so the inspector can draw inside any egui panel.
pub fn paint_scene(painter: &Painter, scene: &OverlayScene, offset: Vec2) {
    for shape in scene {
        match shape {
            OverlayShape::StrokeRect { rect, width, color } => {
                painter.rect_stroke(
                    to_egui_rect(*rect).translate(offset),
                    CornerRadius::ZERO,
                    Stroke::new(*width as f32, to_color32(*color)),
                    StrokeKind::Inside,
                );
            }
            OverlayShape::FillRect { rect, color } => {
                painter.rect_filled(
                    to_egui_rect(*rect).translate(offset),
                    CornerRadius::ZERO,
                    to_color32(*color),
                );
            }
            OverlayShape::RoundedRect {
                rect,
                radius,
                color,
            } => {
                painter.rect_filled(
                    to_egui_rect(*rect).translate(offset),
                    CornerRadius::same(radius.round() as u8),
                    to_color32(*color),
                );
            }
            OverlayShape::DashedLine {
                line,
                dash,
                gap,
                width,
                color,
            } => {
                let points = [to_pos2(line.p0) + offset, to_pos2(line.p1) + offset];
                let stroke = Stroke::new(*width as f32, to_color32(*color));
                painter.extend(egui::Shape::dashed_line(
                    &points,
                    stroke,
                    *dash as f32,
                    *gap as f32,
                ));
            }
            OverlayShape::Text {
                rect,
                text,
                font_size,
                color,
            } => {
                painter.text(
                    to_egui_rect(*rect).translate(offset).center(),
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(*font_size as f32),
                    to_color32(*color),
                );
            }
        }
    }
}

/// Cursor icon matching a resize zone.
pub fn zone_cursor(zone: ResizeZone) -> CursorIcon {
    match zone {
        ResizeZone::North | ResizeZone::South => CursorIcon::ResizeVertical,
        ResizeZone::East | ResizeZone::West => CursorIcon::ResizeHorizontal,
        ResizeZone::NorthEast | ResizeZone::SouthWest => CursorIcon::ResizeNeSw,
        ResizeZone::NorthWest | ResizeZone::SouthEast => CursorIcon::ResizeNwSe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_cursor_pairs_opposite_zones() {
        assert_eq!(zone_cursor(ResizeZone::North), zone_cursor(ResizeZone::South));
        assert_eq!(zone_cursor(ResizeZone::East), zone_cursor(ResizeZone::West));
        assert_eq!(
            zone_cursor(ResizeZone::NorthEast),
            zone_cursor(ResizeZone::SouthWest)
        );
        assert_ne!(
            zone_cursor(ResizeZone::NorthEast),
            zone_cursor(ResizeZone::NorthWest)
        );
    }
}
