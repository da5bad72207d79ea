//! egui input to inspector pointer events.

use crate::convert::from_pos2;
use egui::PointerButton;
use kurbo::Point;
use ocula_core::event::{Modifiers, MouseButton, PointerEvent};
use ocula_core::host::{HostView, WidgetId};

/// One frame of pointer input, already rebased to overlay coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerFrame {
    /// Pointer position, or `None` when egui has no pointer this frame.
    pub position: Option<Point>,
    pub primary_pressed: bool,
    pub primary_released: bool,
    pub secondary_pressed: bool,
    pub middle_pressed: bool,
    pub modifiers: Modifiers,
}

impl PointerFrame {
    /// Read this frame's pointer state from egui.
    ///
    /// `canvas` is the overlay area in screen coordinates; positions are
    /// rebased to its origin and may fall outside it (negative or past the
    /// far edge) while the pointer is over other panels.
    pub fn from_egui(input: &egui::InputState, canvas: egui::Rect) -> Self {
        let position = input
            .pointer
            .latest_pos()
            .map(|pos| from_pos2((pos - canvas.min).to_pos2()));
        Self {
            position,
            primary_pressed: input.pointer.button_pressed(PointerButton::Primary),
            primary_released: input.pointer.button_released(PointerButton::Primary),
            secondary_pressed: input.pointer.button_pressed(PointerButton::Secondary),
            middle_pressed: input.pointer.button_pressed(PointerButton::Middle),
            modifiers: Modifiers {
                shift: input.modifiers.shift,
                ctrl: input.modifiers.ctrl,
                alt: input.modifiers.alt,
                meta: input.modifiers.mac_cmd,
            },
        }
    }
}

/// Turns per-frame pointer state into the widget-tagged events the
/// inspector consumes.
///
/// egui reports a position and button flanks each frame; the inspector
/// wants enter/down/up/move events tagged with the widget under the
/// cursor. The translator hit-tests through the host and remembers the
/// last widget to synthesize enter events on crossings.
#[derive(Debug, Clone, Default)]
pub struct PointerTranslator {
    last_widget: Option<WidgetId>,
    last_position: Option<Point>,
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the tracked widget, so the next contact emits a fresh enter.
    pub fn reset(&mut self) {
        self.last_widget = None;
        self.last_position = None;
    }

    /// Events for this frame, in delivery order: move, enter, downs, up.
    pub fn translate_frame(
        &mut self,
        host: &impl HostView,
        frame: PointerFrame,
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let Some(position) = frame.position else {
            // Pointer is gone; release a held primary button at the last
            // known spot so drags cannot get stuck.
            if frame.primary_released {
                if let Some(last) = self.last_position {
                    events.push(PointerEvent::Up {
                        position: last,
                        button: MouseButton::Left,
                    });
                }
            }
            self.reset();
            return events;
        };

        if self.last_position != Some(position) {
            events.push(PointerEvent::Move { position });
        }

        let hit = host.widget_at(position);
        if hit != self.last_widget {
            if let Some(widget) = hit {
                events.push(PointerEvent::Enter { widget, position });
            }
        }

        if let Some(widget) = hit {
            if frame.primary_pressed {
                events.push(PointerEvent::Down {
                    widget,
                    position,
                    button: MouseButton::Left,
                    modifiers: frame.modifiers,
                });
            }
            if frame.secondary_pressed {
                events.push(PointerEvent::Down {
                    widget,
                    position,
                    button: MouseButton::Right,
                    modifiers: frame.modifiers,
                });
            }
            if frame.middle_pressed {
                events.push(PointerEvent::Down {
                    widget,
                    position,
                    button: MouseButton::Middle,
                    modifiers: frame.modifiers,
                });
            }
        }

        if frame.primary_released {
            events.push(PointerEvent::Up {
                position,
                button: MouseButton::Left,
            });
        }

        self.last_widget = hit;
        self.last_position = Some(position);
        events
    }
}
