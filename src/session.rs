//! Designer session: binds the editor to the shell's message channel.
//!
//! DESIGN
//! ======
//! The shell owns the connection and its reconnect loop. It tells the
//! session when the link comes up or drops, hands it every inbound text
//! message, and drains `OutboundMessage`s from the receiving end of the
//! channel. Sends never block and nothing waits for an acknowledgement, so
//! the user can keep editing while a save is in flight.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, RecordId};
use crate::config::DesignerConfig;
use crate::document::{CircuitDocument, SavedCircuit, serialize};
use crate::engine::{Action, EditorCore};
use crate::protocol::{InboundMessage, OutboundMessage, ProtocolError, decode_inbound};

pub struct DesignerSession {
    pub editor: EditorCore,
    config: DesignerConfig,
    circuit_name: String,
    connected: bool,
    outbound: mpsc::UnboundedSender<OutboundMessage>,
}

impl DesignerSession {
    /// Create a disconnected session with an initial catalog snapshot.
    #[must_use]
    pub fn new(config: DesignerConfig, catalog: Catalog, outbound: mpsc::UnboundedSender<OutboundMessage>) -> Self {
        let circuit_name = config.circuit_name.clone();
        Self { editor: EditorCore::new(catalog), config, circuit_name, connected: false, outbound }
    }

    // --- Connection lifecycle ---

    /// The link is up: request a fresh parts catalog.
    pub fn connected(&mut self) {
        self.connected = true;
        info!(limit = self.config.parts_limit, "designer connected; requesting parts");
        self.send(OutboundMessage::ListParts { limit: self.config.parts_limit });
    }

    /// The link dropped. Editing continues; saving is disabled.
    pub fn disconnected(&mut self) {
        self.connected = false;
        info!("designer disconnected");
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    // --- Circuit name ---

    #[must_use]
    pub fn circuit_name(&self) -> &str {
        &self.circuit_name
    }

    pub fn set_circuit_name(&mut self, name: impl Into<String>) {
        self.circuit_name = name.into();
    }

    // --- Save / load ---

    /// Whether the save action should be offered.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.connected && !self.editor.graph.is_empty()
    }

    /// Snapshot the current editor state as a document.
    #[must_use]
    pub fn document(&self) -> CircuitDocument {
        serialize(&self.editor.graph, &self.editor.viewport, &self.circuit_name, &self.config.platform)
    }

    /// Send the current circuit to the backend. Returns false when saving
    /// is not possible right now.
    pub fn save(&mut self) -> bool {
        if !self.can_save() {
            debug!(connected = self.connected, components = self.editor.graph.len(), "save skipped");
            return false;
        }
        let document = self.document();
        info!(name = %document.name, components = document.layout.components.len(), wires = document.layout.wires.len(), "saving circuit");
        self.send(OutboundMessage::SaveCircuit(document));
        true
    }

    /// Ask the backend for a saved circuit. Returns false while disconnected.
    pub fn load(&mut self, id: RecordId) -> bool {
        if !self.connected {
            debug!(circuit_id = %id, "load skipped: disconnected");
            return false;
        }
        info!(circuit_id = %id, "requesting circuit");
        self.send(OutboundMessage::LoadCircuit { id });
        true
    }

    // --- Inbound ---

    /// Decode and apply one inbound text message.
    ///
    /// # Errors
    ///
    /// Returns the [`ProtocolError`] from decoding; the editor is untouched
    /// in that case. Types handled by other shell modules come back as
    /// [`ProtocolError::UnknownType`].
    pub fn handle_text(&mut self, text: &str) -> Result<Vec<Action>, ProtocolError> {
        match decode_inbound(text) {
            Ok(message) => Ok(self.handle_message(message)),
            Err(ProtocolError::UnknownType(kind)) => {
                debug!(%kind, "ignoring message for another module");
                Err(ProtocolError::UnknownType(kind))
            }
            Err(e) => {
                warn!(error = %e, "dropping undecodable message");
                Err(e)
            }
        }
    }

    /// Apply one decoded inbound message.
    pub fn handle_message(&mut self, message: InboundMessage) -> Vec<Action> {
        match message {
            InboundMessage::PartsList { parts } => {
                info!(count = parts.len(), "parts catalog received");
                self.editor.set_catalog(parts);
                vec![Action::RenderNeeded]
            }
            InboundMessage::CircuitSaved { circuit } => {
                match circuit {
                    Some(c) => info!(circuit_id = %c.id, name = %c.name, "circuit saved"),
                    None => info!("circuit saved"),
                }
                Vec::new()
            }
            InboundMessage::CircuitLoaded { circuit } => self.apply_loaded(circuit),
            InboundMessage::Error { message } => {
                warn!(%message, "backend reported hardware error");
                Vec::new()
            }
        }
    }

    // --- Internals ---

    fn apply_loaded(&mut self, circuit: SavedCircuit) -> Vec<Action> {
        let Some(layout) = circuit.layout else {
            warn!(circuit_id = %circuit.id, "loaded circuit has no layout");
            return Vec::new();
        };
        let (graph, viewport) = layout.restore();
        info!(circuit_id = %circuit.id, components = graph.len(), wires = graph.wires().len(), "circuit loaded");
        if !circuit.name.is_empty() {
            self.circuit_name = circuit.name;
        }
        self.editor.load(graph, viewport)
    }

    fn send(&self, message: OutboundMessage) {
        if let Err(e) = self.outbound.send(message) {
            warn!(error = %e, "outbound channel closed; message dropped");
        }
    }
}
