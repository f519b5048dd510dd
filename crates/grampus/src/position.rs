//! Coordinate assignment.
//!
//! Ranks become horizontal rows (in the graph's internal top-to-bottom
//! frame): each row is vertically centered on the tallest node in it, rows
//! are separated by `ranksep`, nodes within a row by `nodesep`, and every
//! row is centered on the common vertical axis.

use crate::{EdgeLabel, GraphLabel, NodeLabel};
use grampus_graphlib::Graph;
use std::collections::BTreeMap;

pub fn position(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let mut rows: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for id in g.node_ids() {
        let Some(n) = g.node(&id) else {
            continue;
        };
        let rank = n.rank.unwrap_or(0);
        rows.entry(rank).or_default().push(id);
    }
    for ids in rows.values_mut() {
        ids.sort_by_key(|id| g.node(id).and_then(|n| n.order).unwrap_or(usize::MAX));
    }

    let node_sep = g.graph().nodesep;
    let rank_sep = g.graph().ranksep;

    let mut prev_y: f64 = 0.0;
    for ids in rows.values() {
        let max_h = ids
            .iter()
            .filter_map(|id| g.node(id).map(|n| n.height))
            .fold(0.0_f64, f64::max);

        let row_width: f64 = ids
            .iter()
            .filter_map(|id| g.node(id).map(|n| n.width))
            .sum::<f64>()
            + node_sep * (ids.len().saturating_sub(1)) as f64;

        // Center the row about x = 0; a final translation pass applies margins.
        let mut x_cursor = -row_width / 2.0;
        for id in ids {
            if let Some(n) = g.node_mut(id) {
                n.x = Some(x_cursor + n.width / 2.0);
                n.y = Some(prev_y + max_h / 2.0);
                x_cursor += n.width + node_sep;
            }
        }
        prev_y += max_h + rank_sep;
    }
}
