//! Shared numeric constants for the circuit designer.

// ── Footprint ───────────────────────────────────────────────────

/// Width of every placed component's footprint, in logical units.
pub const FOOTPRINT_WIDTH: f64 = 120.0;

/// Height of every placed component's footprint, in logical units.
pub const FOOTPRINT_HEIGHT: f64 = 80.0;

/// Distance from the footprint's leading edge to the first pin on a side.
pub const PIN_INSET: f64 = 20.0;

/// Distance between consecutive pins on the same side.
pub const PIN_SPACING: f64 = 20.0;

// ── Viewport ────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.2;

/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom multiplier for a wheel step away from the user (scroll up).
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Zoom multiplier for a wheel step toward the user (scroll down).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Zoom multiplier for the toolbar zoom-in button.
pub const BUTTON_ZOOM_IN: f64 = 1.2;

/// Zoom multiplier for the toolbar zoom-out button.
pub const BUTTON_ZOOM_OUT: f64 = 0.8;

// ── Document defaults ───────────────────────────────────────────

/// Circuit name used until the user renames it.
pub const DEFAULT_CIRCUIT_NAME: &str = "New Circuit";

/// Platform tag attached to saved circuits.
pub const DEFAULT_PLATFORM: &str = "Mixed";

/// Number of catalog parts requested from the backend on connect.
pub const DEFAULT_PARTS_LIMIT: u32 = 500;
