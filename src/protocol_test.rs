use serde_json::json;

use super::*;
use crate::document::serialize;
use crate::graph::PlacementGraph;
use crate::viewport::{Point, Viewport};

// =============================================================
// Outbound
// =============================================================

#[test]
fn list_parts_request_shape() {
    let text = encode_outbound(&OutboundMessage::ListParts { limit: 500 }).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, json!({ "type": PARTS_LIST, "limit": 500 }));
}

#[test]
fn save_request_flattens_document_beside_type() {
    let mut graph = PlacementGraph::new();
    graph.add_component(&PartSnapshot::new(5_i64, "LED", Some("Output"), None), Point::new(1.0, 2.0));
    let doc = serialize(&graph, &Viewport::default(), "Blinky", "Mixed");

    let value = serde_json::to_value(OutboundMessage::SaveCircuit(doc)).unwrap();
    assert_eq!(value["type"], CIRCUITS_SAVE);
    assert_eq!(value["name"], "Blinky");
    assert_eq!(value["platform"], "Mixed");
    assert_eq!(value["description"], "Circuit with 1 parts");
    assert_eq!(value["layout"]["zoom"], 1.0);
    assert_eq!(value["layout"]["components"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["parts"], json!([{ "id": 5, "quantity": 1 }]));
}

#[test]
fn load_request_shape() {
    let value = serde_json::to_value(OutboundMessage::LoadCircuit { id: RecordId::Number(3) }).unwrap();
    assert_eq!(value, json!({ "type": CIRCUITS_LOAD, "id": 3 }));
}

// =============================================================
// Inbound
// =============================================================

#[test]
fn decode_parts_list() {
    let text = json!({
        "type": "hardware/parts/list",
        "parts": [
            { "id": 1, "name": "Arduino Uno", "category": "Board", "platform": "Arduino", "source": "seed" },
            { "id": 2, "name": "DHT22", "category": "Sensor", "platform": "Arduino" }
        ],
        "meta": { "limit": 500, "total": 2 }
    })
    .to_string();
    let InboundMessage::PartsList { parts } = decode_inbound(&text).unwrap() else {
        panic!("expected parts list");
    };
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].extra.get("source"), Some(&json!("seed")));
}

#[test]
fn decode_parts_list_without_parts_is_empty() {
    let msg = decode_inbound(r#"{"type":"hardware/parts/list"}"#).unwrap();
    assert_eq!(msg, InboundMessage::PartsList { parts: Vec::new() });
}

#[test]
fn decode_saved_ack() {
    let text = json!({
        "type": "hardware/circuits/saved",
        "circuit": { "id": 9, "name": "Blinky", "layout": null },
        "circuits": []
    })
    .to_string();
    let InboundMessage::CircuitSaved { circuit } = decode_inbound(&text).unwrap() else {
        panic!("expected saved ack");
    };
    assert_eq!(circuit.map(|c| c.id), Some(RecordId::Number(9)));
}

#[test]
fn decode_loaded_circuit_with_layout() {
    let text = json!({
        "type": "hardware/circuits/loaded",
        "circuit": {
            "id": 9,
            "name": "Blinky",
            "platform": "Mixed",
            "layout": { "components": [], "wires": [], "zoom": 1.5, "pan": { "x": 3, "y": 4 } }
        }
    })
    .to_string();
    let InboundMessage::CircuitLoaded { circuit } = decode_inbound(&text).unwrap() else {
        panic!("expected loaded circuit");
    };
    let layout = circuit.layout.unwrap();
    assert!((layout.zoom - 1.5).abs() < f64::EPSILON);
    assert_eq!(layout.pan, Point::new(3.0, 4.0));
}

#[test]
fn decode_error_message() {
    let msg = decode_inbound(r#"{"type":"hardware/error","message":"Circuit not found"}"#).unwrap();
    assert_eq!(msg, InboundMessage::Error { message: "Circuit not found".into() });
}

#[test]
fn decode_rejects_invalid_json() {
    assert!(matches!(decode_inbound("{not json"), Err(ProtocolError::Json(_))));
}

#[test]
fn decode_rejects_missing_type() {
    assert!(matches!(decode_inbound(r#"{"parts":[]}"#), Err(ProtocolError::MissingType)));
    assert!(matches!(decode_inbound(r#"{"type":7}"#), Err(ProtocolError::MissingType)));
}

#[test]
fn decode_reports_unknown_type() {
    let err = decode_inbound(r#"{"type":"notes/list","notes":[]}"#).unwrap_err();
    assert!(matches!(&err, ProtocolError::UnknownType(t) if t == "notes/list"));
    assert_eq!(err.to_string(), "unhandled message type: notes/list");
}

#[test]
fn decode_rejects_bad_payload_for_known_type() {
    let text = r#"{"type":"hardware/circuits/loaded","circuit":"nope"}"#;
    assert!(matches!(decode_inbound(text), Err(ProtocolError::Json(_))));
}
