//! Ocula egui binding.
//!
//! Bridges [`ocula_core`] to egui: coordinate and color conversion, a
//! pointer-event translator, and a painter for overlay scenes.

pub mod convert;
pub mod input;
pub mod paint;

pub use convert::{from_pos2, to_color32, to_egui_rect, to_pos2};
pub use input::{PointerFrame, PointerTranslator};
pub use paint::{paint_scene, zone_cursor};
