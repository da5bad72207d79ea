//! Inspector demo application.

use egui::Sense;
use kurbo::{Point, Rect, Size};
use ocula_core::host::HostView;
use ocula_core::inspector::Inspector;
use ocula_core::style::InspectorStyle;
use ocula_core::tree::MemoryTree;
use ocula_egui::{paint_scene, zone_cursor, PointerFrame, PointerTranslator};

use crate::demo::{self, DemoIds};

const STYLE_FILE: &str = "ocula-style.json";

/// eframe shell around a [`MemoryTree`] of demo widgets and the inspector.
pub struct OculaApp {
    tree: MemoryTree,
    inspector: Inspector,
    translator: PointerTranslator,
    demo: DemoIds,
}

impl OculaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut tree = MemoryTree::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let demo = demo::build(&mut tree);
        let inspector = Inspector::new(demo.window, load_style());
        Self {
            tree,
            inspector,
            translator: PointerTranslator::new(),
            demo,
        }
    }

    /// eframe options for the demo window.
    pub fn options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 560.0])
                .with_min_inner_size([640.0, 480.0])
                .with_title("Ocula"),
            ..Default::default()
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Ocula");
        ui.label("Click a widget to inspect it. Drag the selection border to resize.");
        ui.separator();

        let mut enabled = self.inspector.is_enabled();
        if ui.checkbox(&mut enabled, "Inspector enabled").changed() {
            self.inspector.set_enabled(&mut self.tree, enabled);
        }
        if ui.button("Clear selection").clicked() {
            self.inspector.clear(&mut self.tree);
        }
        let card_alive = self.tree.is_alive(self.demo.card);
        if ui
            .add_enabled(card_alive, egui::Button::new("Remove card"))
            .clicked()
        {
            self.tree.remove(self.demo.card);
        }
        ui.separator();

        let overlay = self.inspector.overlay();
        let hover = overlay
            .hover_target(&self.tree)
            .and_then(|id| self.tree.name(id))
            .unwrap_or("none");
        ui.label(format!("Hover: {hover}"));
        match overlay.selection_target(&self.tree) {
            Some(id) => {
                ui.label(format!(
                    "Selected: {}",
                    self.tree.name(id).unwrap_or("unnamed")
                ));
                if let Some(bounds) = self.tree.bounds_in_parent(id) {
                    ui.label(format!(
                        "{:.0} x {:.0} at ({:.0}, {:.0})",
                        bounds.width(),
                        bounds.height(),
                        bounds.x0,
                        bounds.y0
                    ));
                }
            }
            None => {
                ui.label("Selected: none");
            }
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas = response.rect;

        let size = Size::new(canvas.width() as f64, canvas.height() as f64);
        if self.tree.overlay_bounds().size() != size {
            self.tree
                .set_overlay_bounds(Rect::from_origin_size(Point::ZERO, size));
            self.inspector.overlay_resized(&self.tree);
        }

        let frame = ctx.input(|i| PointerFrame::from_egui(i, canvas));
        for event in self.translator.translate_frame(&self.tree, frame) {
            self.inspector.handle_pointer_event(&mut self.tree, &event);
        }
        for change in self.tree.take_notifications() {
            self.inspector.process_bounds_change(&mut self.tree, change);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.inspector.clear(&mut self.tree);
        }

        let offset = canvas.min.to_vec2();
        demo::paint(&painter, &self.tree, offset);
        paint_scene(&painter, &self.inspector.scene(&self.tree), offset);

        if let Some(position) = frame.position {
            if let Some(zone) = self.inspector.resize_zone_at(&self.tree, position) {
                ctx.output_mut(|o| o.cursor_icon = zone_cursor(zone));
            }
        }
    }
}

impl eframe::App for OculaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(210.0)
            .show(ctx, |ui| self.controls(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui, ctx));

        if self.inspector.take_repaint() {
            ctx.request_repaint();
        }
    }
}

/// Load the overlay style from [`STYLE_FILE`] in the working directory,
/// falling back to the built-in defaults.
fn load_style() -> InspectorStyle {
    match std::fs::read_to_string(STYLE_FILE) {
        Ok(json) => match InspectorStyle::from_json(&json) {
            Ok(style) => {
                log::info!("Loaded style from {STYLE_FILE}");
                style
            }
            Err(e) => {
                log::error!("Failed to parse {STYLE_FILE}: {e}");
                InspectorStyle::default()
            }
        },
        Err(_) => InspectorStyle::default(),
    }
}
