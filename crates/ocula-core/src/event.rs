//! Pointer events forwarded from the host framework.

use crate::host::WidgetId;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers. `Left` is the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A pointer event, tagged with the widget the host delivered it to.
///
/// Positions are in overlay coordinates. The host decides which widget an
/// event targets (its own hit testing, including z-order and clipping); the
/// inspector only consumes the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// The pointer entered `widget`.
    Enter { widget: WidgetId, position: Point },
    /// A button went down over `widget`.
    Down {
        widget: WidgetId,
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// A button was released.
    Up { position: Point, button: MouseButton },
    /// The pointer moved without changing widgets.
    Move { position: Point },
}

impl PointerEvent {
    /// Position of the event in overlay coordinates.
    pub fn position(&self) -> Point {
        match self {
            Self::Enter { position, .. }
            | Self::Down { position, .. }
            | Self::Up { position, .. }
            | Self::Move { position } => *position,
        }
    }
}
