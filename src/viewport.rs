//! Viewport transform between screen pixels and logical canvas units.
//!
//! The mapping is affine: `screen = logical * zoom + pan` and its inverse
//! `logical = (screen - pan) / zoom`. Zoom is always kept inside
//! [`MIN_ZOOM`, `MAX_ZOOM`] and is anchored at the screen origin, so changing
//! it never touches `pan`.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state of the canvas.
///
/// `pan` is in screen pixels and is applied after scaling.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0, pan: Point::default() }
    }
}

/// Clamp a zoom factor into the allowed range. Idempotent.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

impl Viewport {
    /// Build a viewport, clamping `zoom` into range.
    #[must_use]
    pub fn new(zoom: f64, pan: Point) -> Self {
        let zoom = if zoom.is_finite() { clamp_zoom(zoom) } else { 1.0 };
        Self { zoom, pan }
    }

    /// Convert a screen-space point (pixels) to logical canvas coordinates.
    #[must_use]
    pub fn to_logical(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan.x) / self.zoom,
            y: (screen.y - self.pan.y) / self.zoom,
        }
    }

    /// Convert a logical canvas point to screen coordinates (pixels).
    #[must_use]
    pub fn to_screen(&self, logical: Point) -> Point {
        Point {
            x: logical.x * self.zoom + self.pan.x,
            y: logical.y * self.zoom + self.pan.y,
        }
    }

    /// Return a copy with zoom multiplied by `factor` and clamped.
    ///
    /// Non-positive or non-finite factors leave the viewport unchanged.
    #[must_use]
    pub fn zoom_by(self, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return self;
        }
        Self { zoom: clamp_zoom(self.zoom * factor), ..self }
    }

    /// Return a copy with the given pan offset.
    #[must_use]
    pub fn with_pan(self, pan: Point) -> Self {
        Self { pan, ..self }
    }
}
