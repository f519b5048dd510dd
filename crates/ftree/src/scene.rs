//! The fault-tree scene graph.
//!
//! `FaultTree` owns the events and links and answers the adjacency and
//! geometry queries the selection engine and layout orchestrator need.
//! Events and links are created once during construction; afterwards only
//! positions change. All multi-result queries iterate in insertion order, so
//! "the first inbound neighbor" and "the first source" are deterministic.

use crate::event::{Event, Link};
use crate::geom::{Point, Rect};
use crate::{Error, Result};
use grampus_graphlib::{Graph, alg};

#[derive(Debug, Clone, Default)]
pub struct FaultTree {
    graph: Graph<Event, Link, ()>,
}

impl FaultTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, event: Event) -> Result<()> {
        if self.graph.has_node(&event.id) {
            return Err(Error::DuplicateEvent {
                id: event.id.clone(),
            });
        }
        self.graph.set_node(event.id.clone(), event);
        Ok(())
    }

    /// Connect `source` to `target` with a link whose tap and anchor follow
    /// from the endpoint kinds. Both events must already exist.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<()> {
        let (Some(s), Some(t)) = (self.graph.node(source), self.graph.node(target)) else {
            let missing = if self.graph.has_node(source) {
                target
            } else {
                source
            };
            return Err(Error::UnknownEvent {
                id: missing.to_string(),
            });
        };
        let link = Link::between(s, t);
        self.graph.set_edge_with_label(source, target, link);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.graph.has_node(id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.graph.node(id)
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.graph.node_entries().map(|(_, ev)| ev)
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.graph.edges().map(|(_, link)| link)
    }

    pub fn event_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Transitive predecessors of `id`, in BFS discovery order.
    pub fn ancestors(&self, id: &str) -> Vec<&Event> {
        alg::ancestors(&self.graph, id)
            .iter()
            .filter_map(|a| self.graph.node(a))
            .collect()
    }

    /// Direct inbound neighbors of `id`, in link insertion order.
    pub fn neighbors_in(&self, id: &str) -> Vec<&Event> {
        self.graph
            .predecessors(id)
            .into_iter()
            .filter_map(|p| self.graph.node(p))
            .collect()
    }

    /// Events with no incoming links, in insertion order.
    pub fn sources(&self) -> Vec<&Event> {
        self.graph
            .sources()
            .into_iter()
            .filter_map(|s| self.graph.node(s))
            .collect()
    }

    /// Induced subtree over the events matching `keep`, with every link whose
    /// endpoints both survive.
    pub fn subgraph(&self, keep: impl Fn(&Event) -> bool) -> FaultTree {
        FaultTree {
            graph: self.graph.filter_nodes(|_, ev| keep(ev)),
        }
    }

    pub fn bbox(&self, id: &str) -> Option<Rect> {
        self.graph.node(id).map(Event::bbox)
    }

    /// Bounding box of the whole scene, or `None` for an empty tree.
    pub fn graph_bbox(&self) -> Option<Rect> {
        let mut acc: Option<Rect> = None;
        for ev in self.events() {
            let b = ev.bbox();
            acc = Some(match acc {
                Some(r) => r.union(&b),
                None => b,
            });
        }
        acc
    }

    pub fn set_position(&mut self, id: &str, position: Point) -> bool {
        match self.graph.node_mut(id) {
            Some(ev) => {
                ev.position = position;
                true
            }
            None => false,
        }
    }

    /// Rigidly translate every event (hidden ones included).
    pub fn translate_all(&mut self, dx: f64, dy: f64) {
        for id in self.graph.node_ids() {
            if let Some(ev) = self.graph.node_mut(&id) {
                ev.position = ev.position.translated(dx, dy);
            }
        }
    }
}
