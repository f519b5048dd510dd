//! Layout label types and geometry primitives.
//!
//! These are intentionally lightweight and `Clone`-friendly so callers can
//! build throwaway layout graphs per pass.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

#[derive(Debug, Clone)]
pub struct GraphLabel {
    pub rankdir: RankDir,
    pub nodesep: f64,
    pub ranksep: f64,
    pub marginx: f64,
    pub marginy: f64,
}

impl Default for GraphLabel {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            nodesep: 50.0,
            ranksep: 50.0,
            marginx: 0.0,
            marginy: 0.0,
        }
    }
}

/// Per-node layout state. `width`/`height` are inputs; `x`/`y` (the node
/// center), `rank`, and `order` are produced by [`layout`](crate::layout).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub minlen: usize,
    pub weight: f64,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            minlen: 1,
            weight: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
