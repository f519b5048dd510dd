//! Rank-direction handling.
//!
//! The pipeline always computes a top-to-bottom layout. For LR/RL the node
//! dimensions are swapped before ranking and the coordinates swapped back
//! afterwards; for BT/RL the relevant axis is reflected.

use crate::{EdgeLabel, GraphLabel, NodeLabel, RankDir};
use grampus_graphlib::Graph;

pub fn adjust(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let rankdir = g.graph().rankdir;
    if matches!(rankdir, RankDir::LR | RankDir::RL) {
        swap_dimensions(g);
    }
}

pub fn undo(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    let rankdir = g.graph().rankdir;
    match rankdir {
        RankDir::TB => {}
        RankDir::BT => reflect_y(g),
        RankDir::LR => {
            swap_dimensions(g);
            swap_axes(g);
        }
        RankDir::RL => {
            swap_dimensions(g);
            swap_axes(g);
            reflect_x(g);
        }
    }
}

fn swap_dimensions(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    for id in g.node_ids() {
        if let Some(n) = g.node_mut(&id) {
            std::mem::swap(&mut n.width, &mut n.height);
        }
    }
}

fn swap_axes(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    for id in g.node_ids() {
        if let Some(n) = g.node_mut(&id) {
            std::mem::swap(&mut n.x, &mut n.y);
        }
    }
}

fn reflect_x(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    for id in g.node_ids() {
        if let Some(n) = g.node_mut(&id) {
            n.x = n.x.map(|x| -x);
        }
    }
}

fn reflect_y(g: &mut Graph<NodeLabel, EdgeLabel, GraphLabel>) {
    for id in g.node_ids() {
        if let Some(n) = g.node_mut(&id) {
            n.y = n.y.map(|y| -y);
        }
    }
}
