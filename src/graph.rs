//! Placement graph: placed components, the wires between their pins, and
//! the referential-integrity rules that tie them together.
//!
//! The graph is the only owner of components and wires during an editing
//! session. Every mutation leaves it in a state where each wire's two
//! endpoints resolve to an existing component and one of that component's
//! pins, and no wire connects a component to itself. Operations on unknown
//! ids are no-ops rather than errors.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::PartSnapshot;
use crate::pins::{Pin, generate_pins};
use crate::viewport::Point;

/// Identifier of a placed component (`comp-<n>` when generated here).
pub type ComponentId = String;

/// Identifier of a wire (`wire-<n>` when generated here).
pub type WireId = String;

/// One catalog part placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub id: ComponentId,
    /// Copy of the catalog part taken at placement time.
    pub part: PartSnapshot,
    /// Top-left of the footprint in logical units. Serialized as flat `x`/`y`.
    #[serde(flatten)]
    pub position: Point,
    /// Degrees. Stored and rendered only; geometry ignores it.
    #[serde(default)]
    pub rotation: f64,
    pub pins: Vec<Pin>,
}

impl PlacedComponent {
    #[must_use]
    pub fn pin(&self, pin_id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == pin_id)
    }
}

/// One end of a wire: a pin on a specific component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireEnd {
    pub component_id: ComponentId,
    pub pin_id: String,
}

impl WireEnd {
    #[must_use]
    pub fn new(component_id: &str, pin_id: &str) -> Self {
        Self { component_id: component_id.to_owned(), pin_id: pin_id.to_owned() }
    }
}

/// An electrical connection between pins on two different components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    pub id: WireId,
    pub from: WireEnd,
    pub to: WireEnd,
    /// Taken from the `from` pin's class when the wire is created.
    pub color: String,
}

impl Wire {
    /// Whether either end sits on `component_id`.
    #[must_use]
    pub fn touches(&self, component_id: &str) -> bool {
        self.from.component_id == component_id || self.to.component_id == component_id
    }
}

/// What [`PlacementGraph::remove_component`] took out of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedComponent {
    pub component: PlacedComponent,
    /// Wires that referenced the component, in their original order.
    pub wires: Vec<Wire>,
}

/// Owner of all placed components and wires for one editing session.
#[derive(Debug, Clone, Default)]
pub struct PlacementGraph {
    components: Vec<PlacedComponent>,
    wires: Vec<Wire>,
    component_seq: u64,
    wire_seq: u64,
}

impl PlacementGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from previously saved collections.
    ///
    /// Components with a duplicate id are dropped (first one wins), then any
    /// wire that would dangle or connect a component to itself is pruned.
    /// Freshly generated ids never collide with the loaded ones.
    #[must_use]
    pub fn from_parts(components: Vec<PlacedComponent>, wires: Vec<Wire>) -> Self {
        let mut graph = Self::new();
        for component in components {
            if graph.component(&component.id).is_some() {
                debug!(component_id = %component.id, "dropping duplicate component on load");
                continue;
            }
            graph.components.push(component);
        }
        for wire in wires {
            if graph.wire(&wire.id).is_some() {
                debug!(wire_id = %wire.id, "dropping duplicate wire on load");
                continue;
            }
            graph.wires.push(wire);
        }
        let pruned = graph.prune_wires();
        if pruned > 0 {
            debug!(pruned, "dropped invalid wires on load");
        }
        graph
    }

    // --- Mutations ---

    /// Place a copy of `part` at `position` and return the new component id.
    ///
    /// Pins are generated here, once, from the part's category and name.
    pub fn add_component(&mut self, part: &PartSnapshot, position: Point) -> ComponentId {
        let id = self.next_component_id();
        let component = PlacedComponent {
            id: id.clone(),
            part: part.clone(),
            position,
            rotation: 0.0,
            pins: generate_pins(part),
        };
        debug!(component_id = %id, part = %part.name, x = position.x, y = position.y, "component placed");
        self.components.push(component);
        id
    }

    /// Move a component. Returns false (and does nothing) for an unknown id.
    pub fn move_component(&mut self, id: &str, position: Point) -> bool {
        let Some(component) = self.components.iter_mut().find(|c| c.id == id) else {
            debug!(component_id = %id, "move ignored: unknown component");
            return false;
        };
        component.position = position;
        true
    }

    /// Remove a component together with every wire attached to it.
    pub fn remove_component(&mut self, id: &str) -> Option<RemovedComponent> {
        let index = self.components.iter().position(|c| c.id == id)?;
        let component = self.components.remove(index);

        let (wires, kept): (Vec<Wire>, Vec<Wire>) = std::mem::take(&mut self.wires)
            .into_iter()
            .partition(|w| w.touches(id));
        self.wires = kept;

        debug!(component_id = %id, wires = wires.len(), "component removed");
        Some(RemovedComponent { component, wires })
    }

    /// Connect two pins on different components.
    ///
    /// Returns `None` without touching the graph when both ends are on the
    /// same component or either end does not resolve.
    pub fn add_wire(&mut self, from: WireEnd, to: WireEnd) -> Option<WireId> {
        if from.component_id == to.component_id {
            debug!(component_id = %from.component_id, "wire rejected: self-connection");
            return None;
        }
        let color = {
            let Some((_, from_pin)) = self.resolve(&from) else {
                debug!(component_id = %from.component_id, pin_id = %from.pin_id, "wire rejected: unresolved source");
                return None;
            };
            if self.resolve(&to).is_none() {
                debug!(component_id = %to.component_id, pin_id = %to.pin_id, "wire rejected: unresolved target");
                return None;
            }
            from_pin.class.color().to_owned()
        };

        let id = self.next_wire_id();
        debug!(wire_id = %id, from = %from.component_id, to = %to.component_id, "wire created");
        self.wires.push(Wire { id: id.clone(), from, to, color });
        Some(id)
    }

    /// Remove a wire by id.
    pub fn remove_wire(&mut self, id: &str) -> Option<Wire> {
        let index = self.wires.iter().position(|w| w.id == id)?;
        Some(self.wires.remove(index))
    }

    /// Remove every component and wire. Id counters keep counting.
    pub fn clear(&mut self) {
        self.components.clear();
        self.wires.clear();
    }

    // --- Queries ---

    #[must_use]
    pub fn components(&self) -> &[PlacedComponent] {
        &self.components
    }

    #[must_use]
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    #[must_use]
    pub fn component(&self, id: &str) -> Option<&PlacedComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn wire(&self, id: &str) -> Option<&Wire> {
        self.wires.iter().find(|w| w.id == id)
    }

    /// Resolve a wire end to its component and pin.
    #[must_use]
    pub fn resolve(&self, end: &WireEnd) -> Option<(&PlacedComponent, &Pin)> {
        let component = self.component(&end.component_id)?;
        let pin = component.pin(&end.pin_id)?;
        Some((component, pin))
    }

    /// Number of placed components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if no components are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    // --- Internals ---

    /// Drop wires whose endpoints no longer resolve or that loop back onto
    /// their own component. Returns how many were dropped.
    fn prune_wires(&mut self) -> usize {
        let before = self.wires.len();
        let wires = std::mem::take(&mut self.wires);
        self.wires = wires
            .into_iter()
            .filter(|w| {
                let valid = w.from.component_id != w.to.component_id
                    && self.resolve(&w.from).is_some()
                    && self.resolve(&w.to).is_some();
                if !valid {
                    debug!(wire_id = %w.id, "pruning dangling wire");
                }
                valid
            })
            .collect();
        before - self.wires.len()
    }

    fn next_component_id(&mut self) -> ComponentId {
        loop {
            self.component_seq += 1;
            let id = format!("comp-{}", self.component_seq);
            if self.component(&id).is_none() {
                return id;
            }
        }
    }

    fn next_wire_id(&mut self) -> WireId {
        loop {
            self.wire_seq += 1;
            let id = format!("wire-{}", self.wire_seq);
            if self.wire(&id).is_none() {
                return id;
            }
        }
    }
}
