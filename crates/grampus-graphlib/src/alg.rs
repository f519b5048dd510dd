//! Graph algorithms over [`Graph`](crate::Graph).

use crate::Graph;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Transitive predecessors of `v` (ancestors), excluding `v` itself, in BFS
/// discovery order. Safe on cyclic graphs; `v` is reported if it is its own
/// ancestor through a cycle.
pub fn ancestors<N, E, G>(g: &Graph<N, E, G>, v: &str) -> Vec<String>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut out: Vec<String> = Vec::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(v.to_string());

    while let Some(cur) = queue.pop_front() {
        for p in g.predecessors(&cur) {
            if seen.insert(p.to_string()) {
                out.push(p.to_string());
                queue.push_back(p.to_string());
            }
        }
    }
    out
}

/// Transitive successors of `v` (descendants), excluding `v` itself, in BFS
/// discovery order.
pub fn descendants<N, E, G>(g: &Graph<N, E, G>, v: &str) -> Vec<String>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut out: Vec<String> = Vec::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(v.to_string());

    while let Some(cur) = queue.pop_front() {
        for s in g.successors(&cur) {
            if seen.insert(s.to_string()) {
                out.push(s.to_string());
                queue.push_back(s.to_string());
            }
        }
    }
    out
}
