//! Shared pipeline helpers.

use crate::{EdgeLabel, GraphLabel, NodeLabel};
use grampus_graphlib::Graph;
use rustc_hash::FxHashSet;

/// The graph's edges with feedback arcs flipped, as `(v, w, minlen)`.
/// Self-loops are dropped; they neither constrain ranks nor cross layers.
pub(crate) fn oriented_edges(
    g: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
    fas: &FxHashSet<(String, String)>,
) -> Vec<(String, String, usize)> {
    let mut out = Vec::with_capacity(g.edge_count());
    for (key, label) in g.edges() {
        if key.v == key.w {
            continue;
        }
        if fas.contains(&(key.v.clone(), key.w.clone())) {
            out.push((key.w.clone(), key.v.clone(), label.minlen));
        } else {
            out.push((key.v.clone(), key.w.clone(), label.minlen));
        }
    }
    out
}

/// Translate all node centers so the layout's top-left corner sits at
/// `(marginx, marginy)`.
pub(crate) fn translate_to_margins(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    for id in g.node_ids() {
        let Some(n) = g.node(&id) else {
            continue;
        };
        let (Some(x), Some(y)) = (n.x, n.y) else {
            continue;
        };
        min_x = min_x.min(x - n.width / 2.0);
        min_y = min_y.min(y - n.height / 2.0);
    }
    if !min_x.is_finite() || !min_y.is_finite() {
        return;
    }

    let (marginx, marginy) = (g.graph().marginx, g.graph().marginy);
    let (dx, dy) = (marginx - min_x, marginy - min_y);
    for id in g.node_ids() {
        if let Some(n) = g.node_mut(&id) {
            n.x = n.x.map(|x| x + dx);
            n.y = n.y.map(|y| y + dy);
        }
    }
}
