//! Pin anchor geometry.
//!
//! Pure functions of a component's position and a pin's side/offset. Nothing
//! here knows about drawing; the presentation layer asks for anchors in
//! logical units and maps them through the viewport itself.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{FOOTPRINT_HEIGHT, FOOTPRINT_WIDTH, PIN_INSET, PIN_SPACING};
use crate::graph::{PlacedComponent, PlacementGraph, Wire};
use crate::pins::{Pin, PinSide};
use crate::viewport::Point;

/// Anchor point of `pin` on `component`, in logical canvas units.
///
/// Unrecognized sides anchor at the footprint's top-left corner.
#[must_use]
pub fn pin_anchor(component: &PlacedComponent, pin: &Pin) -> Point {
    let Point { x, y } = component.position;
    let along = PIN_INSET + f64::from(pin.offset) * PIN_SPACING;
    match pin.side {
        PinSide::Left => Point::new(x, y + along),
        PinSide::Right => Point::new(x + FOOTPRINT_WIDTH, y + along),
        PinSide::Top => Point::new(x + along, y),
        PinSide::Bottom => Point::new(x + along, y + FOOTPRINT_HEIGHT),
        PinSide::Other(_) => Point::new(x, y),
    }
}

/// Both anchors of a wire, or `None` if either endpoint does not resolve.
#[must_use]
pub fn wire_segment(graph: &PlacementGraph, wire: &Wire) -> Option<(Point, Point)> {
    let (from_comp, from_pin) = graph.resolve(&wire.from)?;
    let (to_comp, to_pin) = graph.resolve(&wire.to)?;
    Some((pin_anchor(from_comp, from_pin), pin_anchor(to_comp, to_pin)))
}
