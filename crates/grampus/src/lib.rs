//! Deterministic layered DAG layout.
//!
//! A compact pipeline in the shape of dagre: break cycles, assign ranks by
//! longest path, reduce crossings with barycenter sweeps, then assign
//! coordinates honoring the requested rank direction. Given the same graph
//! built in the same order, the output is identical every time.

#![forbid(unsafe_code)]

pub use grampus_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod acyclic;
pub mod coordinate_system;
mod model;
pub mod order;
pub mod position;
pub mod rank;
mod util;

pub use model::{EdgeLabel, GraphLabel, NodeLabel, Point, RankDir};

use graphlib::Graph;

/// Lay out `g` in place: fills `x`/`y` (node centers), `rank`, and `order`
/// on every node label. The layout's top-left corner lands at
/// `(marginx, marginy)`.
pub fn layout(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    coordinate_system::adjust(g);
    let fas = acyclic::feedback_arcs(g);
    rank::rank(g, &fas);
    order::order(g, &fas);
    position::position(g);
    coordinate_system::undo(g);
    util::translate_to_margins(g);
}
