//! Electrical pins and the per-part pin-set generator.
//!
//! The hardware catalog carries no pin metadata, so every placed component
//! gets a pin set derived from its part's category and name at the moment it
//! is placed. The set is never regenerated afterwards.

#[cfg(test)]
#[path = "pins_test.rs"]
mod pins_test;

use serde::{Deserialize, Serialize};

use crate::catalog::PartSnapshot;

/// Electrical class of a pin. Drives the wire color.
///
/// `Other` only appears on documents loaded from the backend that carry a
/// class this crate does not know; it is kept verbatim so it round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElectricalClass {
    Power,
    Ground,
    Digital,
    Analog,
    Signal,
    Other(String),
}

impl ElectricalClass {
    /// Wire/pin color as a CSS hex string.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Power => "#ff4444",
            Self::Ground => "#333333",
            Self::Digital => "#44ff44",
            Self::Analog => "#4444ff",
            Self::Signal => "#ffff44",
            Self::Other(_) => "#888888",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Power => "power",
            Self::Ground => "ground",
            Self::Digital => "digital",
            Self::Analog => "analog",
            Self::Signal => "signal",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ElectricalClass {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "power" => Self::Power,
            "ground" => Self::Ground,
            "digital" => Self::Digital,
            "analog" => Self::Analog,
            "signal" => Self::Signal,
            _ => Self::Other(raw),
        }
    }
}

impl From<ElectricalClass> for String {
    fn from(class: ElectricalClass) -> Self {
        match class {
            ElectricalClass::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// Side of the footprint a pin sits on.
///
/// `Other` is an unrecognized side from a loaded document; its anchor falls
/// back to the footprint's top-left corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PinSide {
    Left,
    Right,
    Top,
    Bottom,
    Other(String),
}

impl From<String> for PinSide {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "left" => Self::Left,
            "right" => Self::Right,
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            _ => Self::Other(raw),
        }
    }
}

impl From<PinSide> for String {
    fn from(side: PinSide) -> Self {
        match side {
            PinSide::Left => "left".into(),
            PinSide::Right => "right".into(),
            PinSide::Top => "top".into(),
            PinSide::Bottom => "bottom".into(),
            PinSide::Other(raw) => raw,
        }
    }
}

/// A named connection point on a placed component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// Unique within the owning component.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Electrical class. Serialized under `type`.
    #[serde(rename = "type")]
    pub class: ElectricalClass,
    pub side: PinSide,
    /// Rank along `side`, used for spacing.
    pub offset: u32,
}

impl Pin {
    fn new(id: &str, label: &str, class: ElectricalClass, side: PinSide, offset: u32) -> Self {
        Self { id: id.into(), label: label.into(), class, side, offset }
    }
}

/// Derive the pin set for a catalog part.
///
/// Matching is a case-insensitive substring test; the first rule that
/// matches wins and unrecognized parts get a plain `IN`/`OUT` pair.
#[must_use]
pub fn generate_pins(part: &PartSnapshot) -> Vec<Pin> {
    use ElectricalClass::{Analog, Digital, Power, Signal};
    use PinSide::{Left, Right};

    let category = part.category.as_deref().unwrap_or_default().to_lowercase();
    let name = part.name.to_lowercase();

    if category.contains("board") || name.contains("arduino") || name.contains("raspberry") {
        vec![
            Pin::new("pin-gnd", "GND", Power, Left, 0),
            Pin::new("pin-5v", "5V", Power, Left, 1),
            Pin::new("pin-3v3", "3.3V", Power, Left, 2),
            Pin::new("pin-d0", "D0", Digital, Right, 0),
            Pin::new("pin-d1", "D1", Digital, Right, 1),
            Pin::new("pin-a0", "A0", Analog, Right, 2),
        ]
    } else if category.contains("sensor") {
        vec![
            Pin::new("pin-vcc", "VCC", Power, Left, 0),
            Pin::new("pin-gnd", "GND", Power, Left, 1),
            Pin::new("pin-out", "OUT", Signal, Right, 0),
        ]
    } else if category.contains("motor") || category.contains("actuator") {
        vec![
            Pin::new("pin-pos", "+", Power, Left, 0),
            Pin::new("pin-neg", "-", Power, Left, 1),
            Pin::new("pin-ctrl", "CTRL", Signal, Right, 0),
        ]
    } else {
        vec![Pin::new("pin-in", "IN", Signal, Left, 0), Pin::new("pin-out", "OUT", Signal, Right, 0)]
    }
}
