//! Fault-tree diagram core.
//!
//! Headless model of fault-tree-analysis diagrams: typed event nodes and
//! directed links ([`event`]), a scene graph with adjacency and geometry
//! queries ([`scene`]), a deterministic two-phase layout ([`layout`]), and a
//! selection engine that highlights a node's full upstream causal chain
//! ([`select`]). Rendering is a consumer concern; the core only produces
//! positions, geometry, and highlight transitions.

#![forbid(unsafe_code)]

pub mod event;
pub mod geom;
pub mod layout;
pub mod sample;
pub mod scene;
pub mod select;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown event id: {id}")]
    UnknownEvent { id: String },
    #[error("duplicate event id: {id}")]
    DuplicateEvent { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub use event::{Event, EventKind, Link, SourceTap, TargetAnchor};
pub use geom::{Point, Rect, Size};
pub use layout::{ROOT_CENTER, run_layout};
pub use scene::FaultTree;
pub use select::{Highlighter, Selection};
