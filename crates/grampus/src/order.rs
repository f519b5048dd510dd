//! Node ordering / crossing reduction.
//!
//! Alternating barycenter sweeps over the ranked layers. A node's barycenter
//! is the mean in-layer index of its neighbors in already-swept ranks; nodes
//! without such neighbors keep their current index. Sorting is stable, so
//! ties preserve the previous order and the result is deterministic.

use crate::{EdgeLabel, GraphLabel, NodeLabel, util};
use grampus_graphlib::Graph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;

const SWEEPS: usize = 4;

pub fn order(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>, fas: &FxHashSet<(String, String)>) {
    let mut layers: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for id in g.node_ids() {
        let rank = g.node(&id).and_then(|n| n.rank).unwrap_or(0);
        layers.entry(rank).or_default().push(id);
    }

    let mut preds: FxHashMap<String, Vec<String>> = FxHashMap::default();
    let mut succs: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for (v, w, _) in util::oriented_edges(g, fas) {
        preds.entry(w.clone()).or_default().push(v.clone());
        succs.entry(v).or_default().push(w);
    }

    let ranks: Vec<i32> = layers.keys().copied().collect();
    for sweep in 0..SWEEPS {
        let downward = sweep % 2 == 0;
        let visit: Vec<i32> = if downward {
            ranks.iter().copied().skip(1).collect()
        } else {
            ranks.iter().rev().copied().skip(1).collect()
        };

        for rank in visit {
            let index_of = layer_indices(&layers);
            let layer = layers.get_mut(&rank).expect("rank key from layer map");
            let neighbor_map = if downward { &preds } else { &succs };

            let mut keyed: Vec<(f64, String)> = Vec::with_capacity(layer.len());
            for (i, id) in layer.iter().enumerate() {
                let bc = barycenter(id, neighbor_map, &index_of).unwrap_or(i as f64);
                keyed.push((bc, id.clone()));
            }
            keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
            *layer = keyed.into_iter().map(|(_, id)| id).collect();
        }
    }

    let mut assigned: Vec<(String, usize)> = Vec::new();
    for layer in layers.values() {
        for (i, id) in layer.iter().enumerate() {
            assigned.push((id.clone(), i));
        }
    }
    for (id, i) in assigned {
        if let Some(label) = g.node_mut(&id) {
            label.order = Some(i);
        }
    }
}

fn layer_indices(layers: &BTreeMap<i32, Vec<String>>) -> FxHashMap<String, usize> {
    let mut out = FxHashMap::default();
    for layer in layers.values() {
        for (i, id) in layer.iter().enumerate() {
            out.insert(id.clone(), i);
        }
    }
    out
}

fn barycenter(
    id: &str,
    neighbors: &FxHashMap<String, Vec<String>>,
    index_of: &FxHashMap<String, usize>,
) -> Option<f64> {
    let ns = neighbors.get(id)?;
    let indices: Vec<usize> = ns.iter().filter_map(|n| index_of.get(n).copied()).collect();
    if indices.is_empty() {
        return None;
    }
    Some(indices.iter().sum::<usize>() as f64 / indices.len() as f64)
}
