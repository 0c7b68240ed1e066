//! Input model: modifier keys, mouse buttons, the wire-draw state machine,
//! and the continuous pointer gestures.
//!
//! `WireState` is the two-click connect gesture. It is independent of
//! `Gesture`, which tracks whichever continuous pointer interaction (pan,
//! component drag, catalog drop) currently owns the pointer. The two can be
//! active at the same time: a user may arm a wire, pan, then finish the wire.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::catalog::PartSnapshot;
use crate::consts::{WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use crate::graph::{ComponentId, WireEnd};
use crate::viewport::Point;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Whether a pointer-down with this button and these modifiers pans.
///
/// Middle button always pans; the primary button pans while Shift is held.
#[must_use]
pub fn starts_pan(button: Button, modifiers: Modifiers) -> bool {
    match button {
        Button::Middle => true,
        Button::Primary => modifiers.shift,
        Button::Secondary => false,
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down, toward the user).
    pub dy: f64,
}

impl WheelDelta {
    /// Zoom multiplier for this scroll step, or `None` when there is no
    /// vertical motion.
    #[must_use]
    pub fn zoom_factor(self) -> Option<f64> {
        if self.dy > 0.0 {
            Some(WHEEL_ZOOM_OUT)
        } else if self.dy < 0.0 {
            Some(WHEEL_ZOOM_IN)
        } else {
            None
        }
    }
}

// =============================================================
// Wire-draw state machine
// =============================================================

/// State of the two-click connect gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WireState {
    /// No connection in progress.
    #[default]
    Idle,
    /// A source pin was clicked; the next pin click decides the wire.
    AwaitingSecondPin {
        /// The first pin clicked.
        source: WireEnd,
    },
}

/// Outcome of feeding a pin click into [`WireState::click_pin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinClick {
    /// The clicked pin became the pending source.
    Armed(WireEnd),
    /// The clicked pin is on the source's own component; nothing connects.
    Rejected,
    /// Two pins on different components were picked; connect them.
    Connect { from: WireEnd, to: WireEnd },
}

impl WireState {
    /// Advance the machine with a pin click. Always ends in `Idle` unless
    /// the click armed a new source.
    pub fn click_pin(&mut self, pin: WireEnd) -> PinClick {
        match std::mem::take(self) {
            Self::Idle => {
                *self = Self::AwaitingSecondPin { source: pin.clone() };
                PinClick::Armed(pin)
            }
            Self::AwaitingSecondPin { source } => {
                if source.component_id == pin.component_id {
                    PinClick::Rejected
                } else {
                    PinClick::Connect { from: source, to: pin }
                }
            }
        }
    }

    /// The pending source pin, if a connection is in progress.
    #[must_use]
    pub fn pending(&self) -> Option<&WireEnd> {
        match self {
            Self::Idle => None,
            Self::AwaitingSecondPin { source } => Some(source),
        }
    }

    /// Reset to `Idle` if the pending connection starts on `component_id`.
    /// Returns whether anything was cancelled.
    pub fn cancel_if_involves(&mut self, component_id: &str) -> bool {
        if self.pending().is_some_and(|s| s.component_id == component_id) {
            *self = Self::Idle;
            return true;
        }
        false
    }

    /// Reset to `Idle`. Returns whether a connection was pending.
    pub fn cancel(&mut self) -> bool {
        matches!(std::mem::take(self), Self::AwaitingSecondPin { .. })
    }
}

// =============================================================
// Continuous gestures
// =============================================================

/// The continuous pointer gesture currently in progress.
///
/// Only one of these owns the pointer at a time.
#[derive(Debug, Clone, Default)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Panning the canvas. `anchor` is the pointer position minus the pan
    /// offset at pointer-down, so `pan = pointer - anchor` on every move.
    Panning { anchor: Point },
    /// Moving an already-placed component with the pointer.
    DraggingComponent { id: ComponentId },
    /// Carrying a catalog part toward the canvas.
    PlacingPart { part: PartSnapshot },
}

impl Gesture {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
