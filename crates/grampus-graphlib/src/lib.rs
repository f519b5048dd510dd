//! Directed-graph container APIs used by `grampus`.
//!
//! Nodes and edges are stored in insertion order and every query that returns
//! more than one item iterates in that order. Callers that take "the first
//! neighbor" or "the first source" therefore get a deterministic answer.

use rustc_hash::FxBuildHasher;

pub mod alg;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Identity of a directed edge: source node id `v`, target node id `w`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    label: E,
}

/// A simple directed graph with one label per node, per edge, and for the
/// graph itself. At most one edge may exist per `(v, w)` pair.
#[derive(Debug, Clone)]
pub struct Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    graph_label: G,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<(String, String), usize>,
}

impl<N, E, G> Default for Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default + 'static,
    E: Default + 'static,
    G: Default,
{
    pub fn new() -> Self {
        Self {
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        self.set_node(id, N::default())
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Node ids with their labels, in insertion order.
    pub fn node_entries(&self) -> impl Iterator<Item = (&str, &N)> {
        self.nodes.iter().map(|n| (n.id.as_str(), &n.label))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges with their labels, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, &E)> {
        self.edges.iter().map(|e| (&e.key, &e.label))
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().map(|e| e.key.clone()).collect()
    }

    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.set_edge_with_label(v, w, E::default())
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        let v = v.into();
        let w = w.into();
        self.ensure_node(v.clone());
        self.ensure_node(w.clone());

        if let Some(&idx) = self.edge_index.get(&(v.clone(), w.clone())) {
            self.edges[idx].label = label;
            return self;
        }

        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: EdgeKey::new(v.clone(), w.clone()),
            label,
        });
        self.edge_index.insert((v, w), idx);
        self
    }

    pub fn set_path(&mut self, nodes: &[&str]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_index
            .contains_key(&(v.to_string(), w.to_string()))
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        self.edge_index
            .get(&(v.to_string(), w.to_string()))
            .map(|&idx| &self.edges[idx].label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str) -> Option<&mut E> {
        self.edge_index
            .get(&(v.to_string(), w.to_string()))
            .copied()
            .map(move |idx| &mut self.edges[idx].label)
    }

    pub fn remove_edge(&mut self, v: &str, w: &str) -> bool {
        let Some(idx) = self.edge_index.remove(&(v.to_string(), w.to_string())) else {
            return false;
        };
        self.edges.remove(idx);
        self.edge_index.clear();
        for (i, e) in self.edges.iter().enumerate() {
            self.edge_index.insert((e.key.v.clone(), e.key.w.clone()), i);
        }
        true
    }

    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(idx) = self.node_index.remove(id) else {
            return false;
        };
        self.nodes.remove(idx);
        self.node_index.clear();
        for (i, n) in self.nodes.iter().enumerate() {
            self.node_index.insert(n.id.clone(), i);
        }

        let incident: Vec<(String, String)> = self
            .edges
            .iter()
            .filter(|e| e.key.v == id || e.key.w == id)
            .map(|e| (e.key.v.clone(), e.key.w.clone()))
            .collect();
        for (v, w) in incident {
            let _ = self.remove_edge(&v, &w);
        }
        true
    }

    /// Direct successors of `v`, in edge insertion order.
    pub fn successors(&self, v: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.key.v == v)
            .map(|e| e.key.w.as_str())
            .collect()
    }

    /// Direct predecessors of `v`, in edge insertion order.
    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.key.w == v)
            .map(|e| e.key.v.as_str())
            .collect()
    }

    /// Direct successors then predecessors of `v`, deduplicated.
    pub fn neighbors(&self, v: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for w in self.successors(v) {
            if !out.contains(&w) {
                out.push(w);
            }
        }
        for u in self.predecessors(v) {
            if !out.contains(&u) {
                out.push(u);
            }
        }
        out
    }

    pub fn out_edges(&self, v: &str) -> Vec<EdgeKey> {
        self.edges
            .iter()
            .filter(|e| e.key.v == v)
            .map(|e| e.key.clone())
            .collect()
    }

    pub fn in_edges(&self, w: &str) -> Vec<EdgeKey> {
        self.edges
            .iter()
            .filter(|e| e.key.w == w)
            .map(|e| e.key.clone())
            .collect()
    }

    /// Nodes with no incoming edges, in node insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| !self.edges.iter().any(|e| e.key.w == n.id))
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Nodes with no outgoing edges, in node insertion order.
    pub fn sinks(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| !self.edges.iter().any(|e| e.key.v == n.id))
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Induced subgraph over the nodes matching `keep`: kept nodes plus every
    /// edge whose endpoints are both kept. The graph label is cloned.
    pub fn filter_nodes(&self, keep: impl Fn(&str, &N) -> bool) -> Self
    where
        N: Clone,
        E: Clone,
        G: Clone,
    {
        let mut out = Self::new();
        out.graph_label = self.graph_label.clone();
        for n in &self.nodes {
            if keep(&n.id, &n.label) {
                out.set_node(n.id.clone(), n.label.clone());
            }
        }
        for e in &self.edges {
            if out.has_node(&e.key.v) && out.has_node(&e.key.w) {
                out.set_edge_with_label(e.key.v.clone(), e.key.w.clone(), e.label.clone());
            }
        }
        out
    }
}
