//! Ocula Core Library
//!
//! Host-agnostic state and geometry for the Ocula widget inspector overlay.

pub mod constrain;
pub mod event;
pub mod geometry;
pub mod handle;
pub mod host;
pub mod inspector;
pub mod overlay;
pub mod scene;
pub mod style;
pub mod tree;

pub use constrain::BoundsConstrainer;
pub use event::{Modifiers, MouseButton, PointerEvent};
pub use geometry::LeaderLines;
pub use handle::{HANDLE_BORDER, ResizeHandle, ResizeZone};
pub use host::{BoundsChange, HostError, HostView, WatchId, WidgetId};
pub use inspector::{Inspector, InspectorAction, MouseInspector};
pub use overlay::{DimensionLabel, HoverState, Overlay};
pub use scene::{OverlayScene, OverlayShape};
pub use style::{InspectorStyle, Rgba};
pub use tree::MemoryTree;
