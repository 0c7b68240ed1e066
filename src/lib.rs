//! Editing core for the hardware circuit designer.
//!
//! The crate holds everything the designer does between a UI shell and the
//! backend: placing catalog parts on an infinite canvas, wiring pins
//! together, pan/zoom, and turning the result into the save/load documents
//! exchanged over the `hardware/*` message channel. The shell forwards raw
//! pointer, wheel and button events to [`engine::EditorCore`], renders from
//! its state, and drains outbound messages produced by
//! [`session::DesignerSession`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Connection lifecycle, save/load, inbound message handling |
//! | [`engine`] | Testable [`engine::EditorCore`] returning [`engine::Action`]s |
//! | [`graph`] | Placed components and wires with referential integrity |
//! | [`input`] | Modifiers, wheel deltas, gesture and wire-creation state |
//! | [`viewport`] | Pan/zoom viewport and coordinate conversions |
//! | [`pins`] | Pin types, colors and pin generation from part snapshots |
//! | [`geometry`] | Pin anchors and wire segment endpoints |
//! | [`catalog`] | Part snapshots and catalog search |
//! | [`document`] | Circuit save documents and layout restore |
//! | [`protocol`] | `hardware/*` wire messages and decoding |
//! | [`config`] | Environment-driven defaults |
//! | [`consts`] | Shared numeric constants (zoom limits, footprint, etc.) |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod document;
pub mod engine;
pub mod geometry;
pub mod graph;
pub mod input;
pub mod pins;
pub mod protocol;
pub mod session;
pub mod viewport;
