//! Feedback-arc detection.
//!
//! A DFS over the graph in insertion order collects every edge that points
//! back to a node on the current stack. Treating those edges as reversed
//! makes the remaining orientation acyclic, which is all the ranking and
//! ordering passes need. The graph itself is never mutated.

use crate::{EdgeLabel, GraphLabel, NodeLabel};
use grampus_graphlib::Graph;
use rustc_hash::FxHashSet;

pub fn feedback_arcs(g: &Graph<NodeLabel, EdgeLabel, GraphLabel>) -> FxHashSet<(String, String)> {
    fn dfs(
        g: &Graph<NodeLabel, EdgeLabel, GraphLabel>,
        v: &str,
        visited: &mut FxHashSet<String>,
        stack: &mut FxHashSet<String>,
        fas: &mut FxHashSet<(String, String)>,
    ) {
        if !visited.insert(v.to_string()) {
            return;
        }
        stack.insert(v.to_string());
        for e in g.out_edges(v) {
            if e.v == e.w {
                // Self-loops cannot be fixed by reversal; ranking ignores them.
                fas.insert((e.v, e.w));
                continue;
            }
            if stack.contains(&e.w) {
                fas.insert((e.v, e.w));
            } else {
                dfs(g, &e.w, visited, stack, fas);
            }
        }
        stack.remove(v);
    }

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut stack: FxHashSet<String> = FxHashSet::default();
    let mut fas: FxHashSet<(String, String)> = FxHashSet::default();
    for v in g.node_ids() {
        dfs(g, &v, &mut visited, &mut stack, &mut fas);
    }
    fas
}
