#![allow(clippy::float_cmp)]

use super::*;
use crate::catalog::PartSnapshot;
use crate::graph::WireEnd;
use crate::pins::{ElectricalClass, generate_pins};

fn component_at(x: f64, y: f64) -> PlacedComponent {
    let part = PartSnapshot::new(1_i64, "Arduino Uno", Some("Board"), None);
    PlacedComponent { id: "c".into(), pins: generate_pins(&part), part, position: Point::new(x, y), rotation: 0.0 }
}

fn pin(side: PinSide, offset: u32) -> Pin {
    Pin { id: "p".into(), label: "P".into(), class: ElectricalClass::Signal, side, offset }
}

#[test]
fn left_side_anchor() {
    let c = component_at(10.0, 20.0);
    assert_eq!(pin_anchor(&c, &pin(PinSide::Left, 0)), Point::new(10.0, 40.0));
    assert_eq!(pin_anchor(&c, &pin(PinSide::Left, 2)), Point::new(10.0, 80.0));
}

#[test]
fn right_side_anchor() {
    let c = component_at(10.0, 20.0);
    assert_eq!(pin_anchor(&c, &pin(PinSide::Right, 1)), Point::new(130.0, 60.0));
}

#[test]
fn top_side_anchor() {
    let c = component_at(10.0, 20.0);
    assert_eq!(pin_anchor(&c, &pin(PinSide::Top, 0)), Point::new(30.0, 20.0));
    assert_eq!(pin_anchor(&c, &pin(PinSide::Top, 3)), Point::new(90.0, 20.0));
}

#[test]
fn bottom_side_anchor() {
    let c = component_at(10.0, 20.0);
    assert_eq!(pin_anchor(&c, &pin(PinSide::Bottom, 1)), Point::new(50.0, 100.0));
}

#[test]
fn unknown_side_falls_back_to_top_left() {
    let c = component_at(-5.0, 7.5);
    assert_eq!(pin_anchor(&c, &pin(PinSide::Other("center".into()), 4)), Point::new(-5.0, 7.5));
}

#[test]
fn board_pins_at_100_100() {
    let c = component_at(100.0, 100.0);
    let anchors: Vec<Point> = c.pins.iter().map(|p| pin_anchor(&c, p)).collect();
    assert_eq!(
        anchors,
        [
            Point::new(100.0, 120.0),
            Point::new(100.0, 140.0),
            Point::new(100.0, 160.0),
            Point::new(220.0, 120.0),
            Point::new(220.0, 140.0),
            Point::new(220.0, 160.0),
        ]
    );
}

#[test]
fn anchor_ignores_rotation() {
    let mut c = component_at(0.0, 0.0);
    let before = pin_anchor(&c, &c.pins[3]);
    c.rotation = 90.0;
    assert_eq!(pin_anchor(&c, &c.pins[3]), before);
}

#[test]
fn anchor_tracks_position() {
    let mut c = component_at(0.0, 0.0);
    c.position = Point::new(50.0, 50.0);
    assert_eq!(pin_anchor(&c, &c.pins[0]), Point::new(50.0, 70.0));
}

#[test]
fn wire_segment_resolves_both_ends() {
    let part = PartSnapshot::new(2_i64, "Resistor", None, None);
    let mut graph = PlacementGraph::new();
    let a = graph.add_component(&part, Point::new(0.0, 0.0));
    let b = graph.add_component(&part, Point::new(200.0, 100.0));
    let id = graph.add_wire(WireEnd::new(&a, "pin-out"), WireEnd::new(&b, "pin-in")).unwrap();
    let w = graph.wire(&id).unwrap();
    assert_eq!(wire_segment(&graph, w), Some((Point::new(120.0, 20.0), Point::new(200.0, 120.0))));
}

#[test]
fn wire_segment_none_for_foreign_wire() {
    let graph = PlacementGraph::new();
    let w = Wire {
        id: "w".into(),
        from: WireEnd::new("x", "pin-out"),
        to: WireEnd::new("y", "pin-in"),
        color: "#888888".into(),
    };
    assert!(wire_segment(&graph, &w).is_none());
}
