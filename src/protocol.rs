//! Messages exchanged with the backend over the shell's message channel.
//!
//! Every message is a JSON object with a `type` discriminator such as
//! `"hardware/parts/list"`. The channel is shared with other modules of the
//! shell, so inbound messages of types this crate does not handle are
//! normal; [`decode_inbound`] reports them as [`ProtocolError::UnknownType`]
//! and the caller decides whether that matters.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{PartSnapshot, RecordId};
use crate::document::{CircuitDocument, SavedCircuit};

pub const PARTS_LIST: &str = "hardware/parts/list";
pub const CIRCUITS_SAVE: &str = "hardware/circuits/save";
pub const CIRCUITS_SAVED: &str = "hardware/circuits/saved";
pub const CIRCUITS_LOAD: &str = "hardware/circuits/load";
pub const CIRCUITS_LOADED: &str = "hardware/circuits/loaded";
pub const HARDWARE_ERROR: &str = "hardware/error";

const INBOUND_TYPES: [&str; 4] = [PARTS_LIST, CIRCUITS_SAVED, CIRCUITS_LOADED, HARDWARE_ERROR];

/// Error returned by [`decode_inbound`] and [`encode_outbound`].
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The text is not valid JSON or does not match the message shape.
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),
    /// The message has no string `type` field.
    #[error("message has no type")]
    MissingType,
    /// The message type is not one the designer handles.
    #[error("unhandled message type: {0}")]
    UnknownType(String),
}

/// Messages the designer sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    /// Ask for the parts catalog.
    #[serde(rename = "hardware/parts/list")]
    ListParts { limit: u32 },
    /// Persist a circuit. Fire-and-forget.
    #[serde(rename = "hardware/circuits/save")]
    SaveCircuit(CircuitDocument),
    /// Ask for a saved circuit by id.
    #[serde(rename = "hardware/circuits/load")]
    LoadCircuit { id: RecordId },
}

/// Messages the designer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    /// A new catalog snapshot.
    #[serde(rename = "hardware/parts/list")]
    PartsList {
        #[serde(default)]
        parts: Vec<PartSnapshot>,
    },
    /// Acknowledgement of a save.
    #[serde(rename = "hardware/circuits/saved")]
    CircuitSaved {
        #[serde(default)]
        circuit: Option<SavedCircuit>,
    },
    /// A circuit requested with `hardware/circuits/load`.
    #[serde(rename = "hardware/circuits/loaded")]
    CircuitLoaded { circuit: SavedCircuit },
    /// The backend could not complete a hardware request.
    #[serde(rename = "hardware/error")]
    Error {
        #[serde(default)]
        message: String,
    },
}

/// Parse an inbound message.
///
/// # Errors
///
/// Returns [`ProtocolError::Json`] for malformed text or payloads,
/// [`ProtocolError::MissingType`] when there is no string `type`, and
/// [`ProtocolError::UnknownType`] for types the designer does not handle.
pub fn decode_inbound(text: &str) -> Result<InboundMessage, ProtocolError> {
    let value: Value = serde_json::from_str(text)?;
    let Some(kind) = value.get("type").and_then(Value::as_str) else {
        return Err(ProtocolError::MissingType);
    };
    if !INBOUND_TYPES.contains(&kind) {
        return Err(ProtocolError::UnknownType(kind.to_owned()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Render an outbound message as JSON text.
///
/// # Errors
///
/// Returns [`ProtocolError::Json`] if serialization fails.
pub fn encode_outbound(message: &OutboundMessage) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(message)?)
}
