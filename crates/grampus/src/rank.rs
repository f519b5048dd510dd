//! Rank assignment (longest path).
//!
//! A deterministic Kahn traversal over the acyclic orientation assigns each
//! node the longest-path rank from the sources, respecting per-edge `minlen`.
//! Ranks are then normalized so the smallest is zero.

use crate::{EdgeLabel, GraphLabel, NodeLabel, util};
use grampus_graphlib::Graph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

pub fn rank(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>, fas: &FxHashSet<(String, String)>) {
    let node_ids = g.node_ids();
    let edges = util::oriented_edges(g, fas);

    let mut indegree: FxHashMap<&str, usize> =
        node_ids.iter().map(|id| (id.as_str(), 0)).collect();
    for (_, w, _) in &edges {
        if let Some(d) = indegree.get_mut(w.as_str()) {
            *d += 1;
        }
    }

    // Initial nodes in insertion order keeps the traversal deterministic.
    let mut queue: VecDeque<&str> = node_ids
        .iter()
        .map(String::as_str)
        .filter(|id| indegree.get(*id).copied().unwrap_or(0) == 0)
        .collect();

    let mut ranks: FxHashMap<&str, i32> = FxHashMap::default();
    while let Some(v) = queue.pop_front() {
        let v_rank = ranks.get(v).copied().unwrap_or(0);
        for (ev, ew, minlen) in &edges {
            if ev != v {
                continue;
            }
            let candidate = v_rank + *minlen as i32;
            let entry = ranks.entry(ew.as_str()).or_insert(candidate);
            if *entry < candidate {
                *entry = candidate;
            }
            let d = indegree
                .get_mut(ew.as_str())
                .expect("oriented edge endpoints are graph nodes");
            *d -= 1;
            if *d == 0 {
                queue.push_back(ew.as_str());
            }
        }
    }

    let min_rank = node_ids
        .iter()
        .map(|id| ranks.get(id.as_str()).copied().unwrap_or(0))
        .min()
        .unwrap_or(0);

    let assigned: Vec<(String, i32)> = node_ids
        .iter()
        .map(|id| {
            let r = ranks.get(id.as_str()).copied().unwrap_or(0);
            (id.clone(), r - min_rank)
        })
        .collect();
    for (id, r) in assigned {
        if let Some(label) = g.node_mut(&id) {
            label.rank = Some(r);
        }
    }
}
