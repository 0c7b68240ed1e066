//! Circuit documents: the snapshot exchanged with the backend.
//!
//! A document is built on demand from the live graph and viewport at save
//! time and never cached. Loading goes the other way: the backend hands back
//! a saved circuit whose `layout` becomes the editor's initial state.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::RecordId;
use crate::graph::{PlacedComponent, PlacementGraph, Wire};
use crate::viewport::{Point, Viewport};

/// Editor state that round-trips through the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub components: Vec<PlacedComponent>,
    #[serde(default)]
    pub wires: Vec<Wire>,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default)]
    pub pan: Point,
}

fn default_zoom() -> f64 {
    1.0
}

impl Layout {
    /// Rebuild the graph and viewport described by this layout.
    ///
    /// Invalid wires are pruned and the zoom is clamped, so a hand-edited or
    /// stale document still yields a consistent editor state.
    #[must_use]
    pub fn restore(self) -> (PlacementGraph, Viewport) {
        let graph = PlacementGraph::from_parts(self.components, self.wires);
        (graph, Viewport::new(self.zoom, self.pan))
    }
}

/// Bill-of-materials entry. One per placed component, quantity always 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRef {
    pub id: RecordId,
    pub quantity: u32,
}

/// The document sent with `hardware/circuits/save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitDocument {
    pub name: String,
    pub platform: String,
    pub description: String,
    pub layout: Layout,
    pub parts: Vec<PartRef>,
}

/// Flatten the graph and viewport into a document.
///
/// Repeated parts are listed once per placement; nothing is aggregated.
#[must_use]
pub fn serialize(graph: &PlacementGraph, viewport: &Viewport, name: &str, platform: &str) -> CircuitDocument {
    let components = graph.components().to_vec();
    let parts = components
        .iter()
        .map(|c| PartRef { id: c.part.id.clone(), quantity: 1 })
        .collect();

    CircuitDocument {
        name: name.to_owned(),
        platform: platform.to_owned(),
        description: format!("Circuit with {} parts", components.len()),
        layout: Layout { components, wires: graph.wires().to_vec(), zoom: viewport.zoom, pan: viewport.pan },
        parts,
    }
}

/// A circuit as stored by the backend and returned by load/save replies.
///
/// `layout` is absent for circuits created without the designer. Columns the
/// editor does not use (notes, timestamps, parts summary) stay in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCircuit {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
