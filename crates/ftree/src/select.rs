//! Selection engine.
//!
//! At most one event is selected at a time. Selecting an event highlights it
//! and every link on some path from an ancestor down to it (the
//! predecessor-closure edge set); switching or clearing the selection first
//! reverses the previous visual state completely, so no stale highlight can
//! survive an earlier pass that over-highlighted.

use crate::scene::FaultTree;
use crate::{Error, Result};
use indexmap::IndexSet;
use tracing::debug;

/// Visual-marker toggles on the rendering surface. Implementations must be
/// idempotent: highlighting an already-highlighted entity (or unhighlighting
/// a clean one) is a no-op.
pub trait Highlighter {
    /// Mark an event's body as selected.
    fn highlight_event(&mut self, id: &str);
    fn unhighlight_event(&mut self, id: &str);
    /// Mark a link's line as selected.
    fn highlight_link(&mut self, source: &str, target: &str);
    fn unhighlight_link(&mut self, source: &str, target: &str);
}

/// Links of the induced subgraph over `{id} ∪ ancestors(id)`: exactly the
/// links lying on some directed path from an ancestor to `id`.
pub fn predecessor_closure_links(tree: &FaultTree, id: &str) -> Vec<(String, String)> {
    let mut keep: IndexSet<String> = IndexSet::new();
    keep.insert(id.to_string());
    for ev in tree.ancestors(id) {
        keep.insert(ev.id.clone());
    }
    tree.subgraph(|ev| keep.contains(&ev.id))
        .links()
        .map(|l| (l.source.clone(), l.target.clone()))
        .collect()
}

/// Session-owned selection state.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Apply a click: `Some(id)` selects an event, `None` (blank click)
    /// deselects. Re-selecting the current event is a no-op. Fails with
    /// [`Error::UnknownEvent`] before touching any visual state if `id` is
    /// not in the tree.
    pub fn select(
        &mut self,
        tree: &FaultTree,
        target: Option<&str>,
        highlighter: &mut dyn Highlighter,
    ) -> Result<()> {
        if self.current.as_deref() == target {
            return Ok(());
        }
        if let Some(id) = target {
            if !tree.contains(id) {
                return Err(Error::UnknownEvent { id: id.to_string() });
            }
        }

        if let Some(prev) = self.current.take() {
            debug!(previous = %prev, "clearing selection");
            highlighter.unhighlight_event(&prev);
            // Full reset, not just the links touching the old selection.
            for link in tree.links() {
                highlighter.unhighlight_link(&link.source, &link.target);
            }
        }

        let Some(id) = target else {
            return Ok(());
        };

        highlighter.highlight_event(id);
        let closure = predecessor_closure_links(tree, id);
        debug!(selected = %id, links = closure.len(), "selection applied");
        for (source, target) in &closure {
            highlighter.highlight_link(source, target);
        }
        self.current = Some(id.to_string());
        Ok(())
    }
}
