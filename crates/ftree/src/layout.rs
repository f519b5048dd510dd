//! Two-phase layout orchestration.
//!
//! Non-hidden events are partitioned by kind: everything except conditioning
//! events goes through the automatic layered layout; conditioning events are
//! then placed beside their first inbound neighbor. Finally the whole scene
//! is rigidly translated so the first source's center lands at
//! [`ROOT_CENTER`].

use crate::geom::Point;
use crate::scene::FaultTree;
use grampus::graphlib::Graph;
use grampus::{EdgeLabel, GraphLabel, NodeLabel, RankDir};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Fixed canvas point the root (first source) is centered on after layout.
pub const ROOT_CENTER: Point = Point { x: 500.0, y: 100.0 };

const NODE_SEP: f64 = 40.0;
const RANK_SEP: f64 = 60.0;
const MANUAL_GAP_X: f64 = 20.0;
const MANUAL_GAP_Y: f64 = 15.0;

/// Lay out the tree in place. Total over well-formed trees: an empty auto
/// partition, a manual event without an inbound neighbor, and a sourceless
/// (cyclic) graph each degrade to skipping that step.
pub fn run_layout(tree: &mut FaultTree) {
    let mut auto_ids: Vec<String> = Vec::new();
    let mut manual_ids: Vec<String> = Vec::new();
    for ev in tree.events() {
        if ev.hidden {
            continue;
        }
        if ev.kind.manual_layout() {
            manual_ids.push(ev.id.clone());
        } else {
            auto_ids.push(ev.id.clone());
        }
    }
    debug!(
        auto = auto_ids.len(),
        manual = manual_ids.len(),
        "layout partition"
    );

    if !auto_ids.is_empty() {
        auto_layout(tree, &auto_ids);
    }

    for id in &manual_ids {
        place_beside_neighbor(tree, id);
    }

    anchor_root(tree);
}

/// Layered layout over the induced subtree, top-to-bottom ranks; results are
/// written back as top-left positions.
fn auto_layout(tree: &mut FaultTree, auto_ids: &[String]) {
    let keep: FxHashSet<&str> = auto_ids.iter().map(String::as_str).collect();
    let sub = tree.subgraph(|ev| keep.contains(ev.id.as_str()));

    let mut g: Graph<NodeLabel, EdgeLabel, GraphLabel> = Graph::new();
    g.set_graph(GraphLabel {
        rankdir: RankDir::TB,
        nodesep: NODE_SEP,
        ranksep: RANK_SEP,
        ..Default::default()
    });
    for ev in sub.events() {
        g.set_node(
            ev.id.clone(),
            NodeLabel {
                width: ev.size.width,
                height: ev.size.height,
                ..Default::default()
            },
        );
    }
    for link in sub.links() {
        g.set_edge_with_label(link.source.clone(), link.target.clone(), EdgeLabel::default());
    }

    grampus::layout(&mut g);

    for id in g.node_ids() {
        let Some(n) = g.node(&id) else {
            continue;
        };
        let (Some(cx), Some(cy)) = (n.x, n.y) else {
            continue;
        };
        tree.set_position(&id, Point::new(cx - n.width / 2.0, cy - n.height / 2.0));
    }
}

/// Offset a manual event against its first inbound neighbor's bottom-right
/// corner; an event with no inbound neighbor keeps its default position.
fn place_beside_neighbor(tree: &mut FaultTree, id: &str) {
    let Some(neighbor_id) = tree.neighbors_in(id).first().map(|ev| ev.id.clone()) else {
        debug!(event = %id, "manual event has no inbound neighbor; skipping");
        return;
    };
    let Some(neighbor_box) = tree.bbox(&neighbor_id) else {
        return;
    };
    let Some(height) = tree.event(id).map(|ev| ev.size.height) else {
        return;
    };
    let corner = neighbor_box.bottom_right();
    tree.set_position(
        id,
        Point::new(
            corner.x + MANUAL_GAP_X,
            corner.y - height / 2.0 - MANUAL_GAP_Y,
        ),
    );
}

/// Rigidly translate the scene so the first source is centered on
/// [`ROOT_CENTER`]. A sourceless graph (a cycle) leaves the layout where the
/// previous steps put it.
fn anchor_root(tree: &mut FaultTree) {
    let Some((position, size)) = tree
        .sources()
        .first()
        .map(|root| (root.position, root.size))
    else {
        debug!("no source event; skipping root anchoring");
        return;
    };
    let desired = Point::new(
        ROOT_CENTER.x - size.width / 2.0,
        ROOT_CENTER.y - size.height / 2.0,
    );
    tree.translate_all(desired.x - position.x, desired.y - position.y);
}
