//! Editor core: turns pointer, wheel and toolbar events into graph and
//! viewport mutations, and reports what changed as a list of [`Action`]s.
//!
//! The presentation layer does its own hit-testing (it knows which DOM node
//! or widget was clicked) and calls the matching handler here. Nothing in
//! this module draws; renderers read the graph through the query methods.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::catalog::{Catalog, PartSnapshot, RecordId};
use crate::consts::{BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT};
use crate::geometry::wire_segment;
use crate::graph::{ComponentId, PlacementGraph, Wire, WireEnd, WireId};
use crate::input::{Button, Gesture, Modifiers, PinClick, WheelDelta, WireState, starts_pan};
use crate::viewport::{Point, Viewport};

/// What the pointer went down on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty canvas.
    Canvas,
    /// The body of a placed component.
    Component(ComponentId),
}

/// Changes reported back to the host after each event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ComponentPlaced(ComponentId),
    ComponentMoved { id: ComponentId, position: Point },
    ComponentRemoved { id: ComponentId, wires: Vec<WireId> },
    WireCreated(WireId),
    WireRemoved(WireId),
    /// A source pin is now highlighted, awaiting the second click.
    WirePending(WireEnd),
    /// The pending connection ended without creating a wire.
    WireCancelled,
    SelectionChanged(Option<ComponentId>),
    ViewportChanged(Viewport),
    GraphCleared,
    SetCursor(String),
    RenderNeeded,
}

/// All editor state for one session.
#[derive(Debug, Default)]
pub struct EditorCore {
    pub graph: PlacementGraph,
    pub viewport: Viewport,
    pub wire: WireState,
    pub gesture: Gesture,
    pub catalog: Catalog,
    pub selected: Option<ComponentId>,
}

impl EditorCore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the catalog snapshot. Placed components are unaffected.
    pub fn set_catalog(&mut self, parts: Vec<PartSnapshot>) {
        self.catalog.replace(parts);
    }

    /// Replace the whole editing state with a loaded graph and viewport.
    pub fn load(&mut self, graph: PlacementGraph, viewport: Viewport) -> Vec<Action> {
        self.graph = graph;
        self.viewport = viewport;
        self.wire = WireState::Idle;
        self.gesture = Gesture::Idle;
        self.selected = None;
        vec![Action::ViewportChanged(viewport), Action::SelectionChanged(None), Action::RenderNeeded]
    }

    // --- Catalog drag-place ---

    /// Begin dragging a catalog part. Returns false if the id is not in the
    /// current catalog.
    pub fn start_catalog_drag(&mut self, part_id: &RecordId) -> bool {
        let Some(part) = self.catalog.get(part_id) else {
            debug!(part_id = %part_id, "catalog drag ignored: unknown part");
            return false;
        };
        self.gesture = Gesture::PlacingPart { part: part.clone() };
        true
    }

    /// Abandon a catalog drag that left without dropping.
    pub fn cancel_catalog_drag(&mut self) {
        if matches!(self.gesture, Gesture::PlacingPart { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    /// Drop the dragged catalog part at a screen position.
    pub fn drop_on_canvas(&mut self, screen_pt: Point) -> Vec<Action> {
        let Gesture::PlacingPart { part } = std::mem::take(&mut self.gesture) else {
            return Vec::new();
        };
        let logical = self.viewport.to_logical(screen_pt);
        let id = self.graph.add_component(&part, logical);
        vec![Action::ComponentPlaced(id), Action::RenderNeeded]
    }

    // --- Pointer ---

    pub fn on_pointer_down(
        &mut self,
        screen_pt: Point,
        target: PointerTarget,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        if !self.gesture.is_idle() {
            return Vec::new();
        }

        if starts_pan(button, modifiers) {
            let anchor = Point::new(screen_pt.x - self.viewport.pan.x, screen_pt.y - self.viewport.pan.y);
            self.gesture = Gesture::Panning { anchor };
            return vec![Action::SetCursor("grabbing".into())];
        }

        match (target, button) {
            (PointerTarget::Component(id), Button::Primary) if self.graph.component(&id).is_some() => {
                let mut actions = self.select(Some(id.clone()));
                self.gesture = Gesture::DraggingComponent { id };
                actions.push(Action::SetCursor("move".into()));
                actions
            }
            _ => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match &self.gesture {
            Gesture::Panning { anchor } => {
                let pan = Point::new(screen_pt.x - anchor.x, screen_pt.y - anchor.y);
                self.viewport = self.viewport.with_pan(pan);
                vec![Action::ViewportChanged(self.viewport), Action::RenderNeeded]
            }
            Gesture::DraggingComponent { id } => {
                let position = self.viewport.to_logical(screen_pt);
                if self.graph.move_component(id, position) {
                    vec![Action::ComponentMoved { id: id.clone(), position }, Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            Gesture::Idle | Gesture::PlacingPart { .. } => Vec::new(),
        }
    }

    /// End a pan or component drag. A catalog drag is left alone; it ends
    /// on drop or cancel.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match self.gesture {
            Gesture::Panning { .. } | Gesture::DraggingComponent { .. } => {
                self.gesture = Gesture::Idle;
                vec![Action::SetCursor("default".into())]
            }
            Gesture::Idle | Gesture::PlacingPart { .. } => Vec::new(),
        }
    }

    /// The pointer left the canvas. Same as a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        match delta.zoom_factor() {
            Some(factor) => self.zoom_by(factor),
            None => Vec::new(),
        }
    }

    // --- Wiring ---

    /// Feed a pin click into the wire-draw state machine.
    pub fn on_pin_click(&mut self, pin: WireEnd) -> Vec<Action> {
        match self.wire.click_pin(pin) {
            PinClick::Armed(source) => vec![Action::WirePending(source), Action::RenderNeeded],
            PinClick::Rejected => vec![Action::WireCancelled, Action::RenderNeeded],
            PinClick::Connect { from, to } => match self.graph.add_wire(from, to) {
                Some(id) => vec![Action::WireCreated(id), Action::RenderNeeded],
                None => vec![Action::WireCancelled, Action::RenderNeeded],
            },
        }
    }

    /// Drop a pending connection, e.g. on Escape. Clicking empty canvas does
    /// not call this.
    pub fn cancel_pending_wire(&mut self) -> Vec<Action> {
        if self.wire.cancel() {
            vec![Action::WireCancelled, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Clicking a wire deletes it.
    pub fn on_wire_click(&mut self, id: &str) -> Vec<Action> {
        match self.graph.remove_wire(id) {
            Some(wire) => vec![Action::WireRemoved(wire.id), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Toolbar / commands ---

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.zoom_by(BUTTON_ZOOM_IN)
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.zoom_by(BUTTON_ZOOM_OUT)
    }

    /// Remove a component, its wires, and any pending connection or drag
    /// that started on it.
    pub fn delete_component(&mut self, id: &str) -> Vec<Action> {
        let Some(removed) = self.graph.remove_component(id) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if self.wire.cancel_if_involves(id) {
            actions.push(Action::WireCancelled);
        }
        if matches!(&self.gesture, Gesture::DraggingComponent { id: dragged } if dragged == id) {
            self.gesture = Gesture::Idle;
            actions.push(Action::SetCursor("default".into()));
        }
        if self.selected.as_deref() == Some(id) {
            actions.extend(self.select(None));
        }
        actions.push(Action::ComponentRemoved {
            id: removed.component.id,
            wires: removed.wires.into_iter().map(|w| w.id).collect(),
        });
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove everything from the canvas.
    pub fn clear(&mut self) -> Vec<Action> {
        self.graph.clear();
        self.wire = WireState::Idle;
        if matches!(self.gesture, Gesture::DraggingComponent { .. }) {
            self.gesture = Gesture::Idle;
        }
        let mut actions = self.select(None);
        actions.push(Action::GraphCleared);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Change the selected component. Unknown ids select nothing.
    pub fn select(&mut self, id: Option<ComponentId>) -> Vec<Action> {
        let id = id.filter(|id| self.graph.component(id).is_some());
        if self.selected == id {
            return Vec::new();
        }
        self.selected.clone_from(&id);
        vec![Action::SelectionChanged(id)]
    }

    // --- Queries ---

    /// The highlighted source pin while a connection is pending.
    #[must_use]
    pub fn pending_source(&self) -> Option<&WireEnd> {
        self.wire.pending()
    }

    /// Every drawable wire with its two anchors in logical coordinates.
    #[must_use]
    pub fn wire_segments(&self) -> Vec<(&Wire, Point, Point)> {
        self.graph
            .wires()
            .iter()
            .filter_map(|w| wire_segment(&self.graph, w).map(|(a, b)| (w, a, b)))
            .collect()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    // --- Internals ---

    fn zoom_by(&mut self, factor: f64) -> Vec<Action> {
        let next = self.viewport.zoom_by(factor);
        if next == self.viewport {
            return Vec::new();
        }
        self.viewport = next;
        vec![Action::ViewportChanged(next), Action::RenderNeeded]
    }
}
