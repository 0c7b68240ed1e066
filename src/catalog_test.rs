use serde_json::json;

use super::*;

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        PartSnapshot::new(1_i64, "Arduino Uno", Some("Board"), Some("Arduino")),
        PartSnapshot::new(2_i64, "DHT22", Some("Sensor"), Some("Arduino")),
        PartSnapshot::new(3_i64, "SG90 Servo", Some("Actuator"), None),
        PartSnapshot::new(4_i64, "Resistor 220R", None, None),
    ])
}

#[test]
fn search_empty_query_returns_all() {
    let catalog = sample_catalog();
    assert_eq!(catalog.search("").len(), 4);
}

#[test]
fn search_matches_name_case_insensitively() {
    let catalog = sample_catalog();
    let hits = catalog.search("ARDUINO");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Arduino Uno");
}

#[test]
fn search_matches_category() {
    let catalog = sample_catalog();
    let hits = catalog.search("sens");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, RecordId::Number(2));
}

#[test]
fn search_skips_missing_category() {
    let catalog = sample_catalog();
    assert!(catalog.search("board").iter().all(|p| p.category.is_some()));
}

#[test]
fn search_no_match_is_empty() {
    assert!(sample_catalog().search("flux capacitor").is_empty());
}

#[test]
fn replace_swaps_snapshot() {
    let mut catalog = sample_catalog();
    catalog.replace(vec![PartSnapshot::new("x1", "LED", Some("Output"), None)]);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get(&RecordId::Number(1)).is_none());
    assert!(catalog.get(&RecordId::from("x1")).is_some());
}

#[test]
fn default_catalog_is_empty() {
    assert!(Catalog::default().is_empty());
}

#[test]
fn part_snapshot_preserves_unknown_fields() {
    let raw = json!({
        "id": 7,
        "name": "HC-SR04",
        "category": "Sensor",
        "platform": "Arduino",
        "description": "Ultrasonic distance sensor",
        "specs": { "range_cm": 400 },
    });
    let part: PartSnapshot = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(part.id, RecordId::Number(7));
    assert_eq!(part.extra.get("specs"), Some(&json!({ "range_cm": 400 })));

    let back = serde_json::to_value(&part).unwrap();
    assert_eq!(back, raw);
}

#[test]
fn part_snapshot_tolerates_missing_optional_fields() {
    let part: PartSnapshot = serde_json::from_value(json!({ "id": "abc" })).unwrap();
    assert_eq!(part.id, RecordId::Text("abc".into()));
    assert_eq!(part.name, "");
    assert!(part.category.is_none());
    assert!(part.platform.is_none());
}

#[test]
fn record_id_display() {
    assert_eq!(RecordId::Number(42).to_string(), "42");
    assert_eq!(RecordId::from("c-9").to_string(), "c-9");
}
