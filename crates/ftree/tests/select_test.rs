use ftree::{Error, Event, EventKind, FaultTree, Highlighter, Selection};
use std::collections::BTreeSet;

/// Tracks the set of visible highlight markers like a renderer would.
#[derive(Debug, Default, PartialEq)]
struct Markers {
    events: BTreeSet<String>,
    links: BTreeSet<(String, String)>,
}

impl Highlighter for Markers {
    fn highlight_event(&mut self, id: &str) {
        self.events.insert(id.to_string());
    }

    fn unhighlight_event(&mut self, id: &str) {
        self.events.remove(id);
    }

    fn highlight_link(&mut self, source: &str, target: &str) {
        self.links.insert((source.to_string(), target.to_string()));
    }

    fn unhighlight_link(&mut self, source: &str, target: &str) {
        self.links
            .remove(&(source.to_string(), target.to_string()));
    }
}

fn link_set(pairs: &[(&str, &str)]) -> BTreeSet<(String, String)> {
    pairs
        .iter()
        .map(|(v, w)| (v.to_string(), w.to_string()))
        .collect()
}

fn chain() -> FaultTree {
    let mut tree = FaultTree::new();
    for id in ["a", "b", "c"] {
        tree.add_event(Event::new(id, EventKind::Basic, id)).unwrap();
    }
    tree.connect("a", "b").unwrap();
    tree.connect("b", "c").unwrap();
    tree
}

fn diamond() -> FaultTree {
    let mut tree = FaultTree::new();
    for id in ["a", "b", "c", "d", "other"] {
        tree.add_event(Event::new(id, EventKind::Basic, id)).unwrap();
    }
    tree.connect("a", "b").unwrap();
    tree.connect("a", "c").unwrap();
    tree.connect("b", "d").unwrap();
    tree.connect("c", "d").unwrap();
    tree.connect("a", "other").unwrap();
    tree
}

#[test]
fn selecting_a_leaf_highlights_the_full_upstream_chain() {
    let tree = chain();
    let mut sel = Selection::new();
    let mut hl = Markers::default();
    sel.select(&tree, Some("c"), &mut hl).unwrap();
    assert_eq!(sel.current(), Some("c"));
    assert_eq!(hl.events, BTreeSet::from(["c".to_string()]));
    assert_eq!(hl.links, link_set(&[("a", "b"), ("b", "c")]));
}

#[test]
fn selecting_a_root_highlights_no_links() {
    let tree = chain();
    let mut sel = Selection::new();
    let mut hl = Markers::default();
    sel.select(&tree, Some("a"), &mut hl).unwrap();
    assert_eq!(hl.events, BTreeSet::from(["a".to_string()]));
    assert!(hl.links.is_empty());
}

#[test]
fn closure_is_the_induced_subgraph_not_a_single_path() {
    let tree = diamond();
    let mut sel = Selection::new();
    let mut hl = Markers::default();
    sel.select(&tree, Some("d"), &mut hl).unwrap();
    // Both branches of the diamond are upstream of d; the unrelated edge
    // a -> other is not, even though a is an ancestor.
    assert_eq!(
        hl.links,
        link_set(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")])
    );
}

#[test]
fn reselecting_the_same_event_is_a_noop() {
    let tree = chain();
    let mut sel = Selection::new();
    let mut hl = Markers::default();
    sel.select(&tree, Some("c"), &mut hl).unwrap();
    let before = Markers {
        events: hl.events.clone(),
        links: hl.links.clone(),
    };
    sel.select(&tree, Some("c"), &mut hl).unwrap();
    assert_eq!(hl, before);
    assert_eq!(sel.current(), Some("c"));
}

#[test]
fn switching_selection_reverses_the_previous_state_first() {
    let tree = diamond();
    let mut sel = Selection::new();
    let mut hl = Markers::default();
    sel.select(&tree, Some("d"), &mut hl).unwrap();
    sel.select(&tree, Some("other"), &mut hl).unwrap();
    assert_eq!(sel.current(), Some("other"));
    assert_eq!(hl.events, BTreeSet::from(["other".to_string()]));
    assert_eq!(hl.links, link_set(&[("a", "other")]));
}

#[test]
fn blank_click_clears_everything() {
    let tree = chain();
    let mut sel = Selection::new();
    let mut hl = Markers::default();
    sel.select(&tree, Some("c"), &mut hl).unwrap();
    sel.select(&tree, None, &mut hl).unwrap();
    assert_eq!(sel.current(), None);
    assert_eq!(hl, Markers::default());
}

#[test]
fn blank_click_without_selection_is_a_noop() {
    let tree = chain();
    let mut sel = Selection::new();
    let mut hl = Markers::default();
    sel.select(&tree, None, &mut hl).unwrap();
    assert_eq!(sel.current(), None);
    assert_eq!(hl, Markers::default());
}

#[test]
fn unknown_target_fails_before_touching_highlights() {
    let tree = chain();
    let mut sel = Selection::new();
    let mut hl = Markers::default();
    sel.select(&tree, Some("c"), &mut hl).unwrap();
    let before = Markers {
        events: hl.events.clone(),
        links: hl.links.clone(),
    };
    let err = sel.select(&tree, Some("ghost"), &mut hl).unwrap_err();
    assert!(matches!(err, Error::UnknownEvent { id } if id == "ghost"));
    assert_eq!(hl, before);
    assert_eq!(sel.current(), Some("c"));
}
