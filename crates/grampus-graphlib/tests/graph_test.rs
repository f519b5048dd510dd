use grampus_graphlib::{Graph, alg};

type TestGraph = Graph<u32, &'static str, String>;

fn diamond() -> TestGraph {
    let mut g = TestGraph::new();
    g.set_edge("a", "b");
    g.set_edge("a", "c");
    g.set_edge("b", "d");
    g.set_edge("c", "d");
    g
}

#[test]
fn nodes_iterate_in_insertion_order() {
    let mut g = TestGraph::new();
    g.set_node("z", 1);
    g.set_node("a", 2);
    g.set_node("m", 3);
    let ids: Vec<&str> = g.nodes().collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn set_node_overwrites_label_without_reordering() {
    let mut g = TestGraph::new();
    g.set_node("a", 1);
    g.set_node("b", 2);
    g.set_node("a", 10);
    assert_eq!(g.node("a"), Some(&10));
    let ids: Vec<&str> = g.nodes().collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(g.node_count(), 2);
}

#[test]
fn set_edge_creates_missing_endpoints() {
    let mut g = TestGraph::new();
    g.set_edge("a", "b");
    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
    assert!(g.has_edge("a", "b"));
    assert!(!g.has_edge("b", "a"));
}

#[test]
fn edges_iterate_in_insertion_order_with_labels() {
    let mut g = TestGraph::new();
    g.set_edge_with_label("a", "b", "first");
    g.set_edge_with_label("a", "c", "second");
    let got: Vec<(String, String, &'static str)> = g
        .edges()
        .map(|(k, l)| (k.v.clone(), k.w.clone(), *l))
        .collect();
    assert_eq!(
        got,
        vec![
            ("a".to_string(), "b".to_string(), "first"),
            ("a".to_string(), "c".to_string(), "second"),
        ]
    );
}

#[test]
fn set_path_links_consecutive_nodes() {
    let mut g = TestGraph::new();
    g.set_path(&["a", "b", "c"]);
    assert!(g.has_edge("a", "b"));
    assert!(g.has_edge("b", "c"));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn successors_and_predecessors_are_direct_only() {
    let g = diamond();
    assert_eq!(g.successors("a"), vec!["b", "c"]);
    assert_eq!(g.predecessors("d"), vec!["b", "c"]);
    assert_eq!(g.predecessors("a"), Vec::<&str>::new());
}

#[test]
fn neighbors_deduplicates_both_directions() {
    let mut g = TestGraph::new();
    g.set_edge("a", "b");
    g.set_edge("b", "a");
    assert_eq!(g.neighbors("a"), vec!["b"]);
}

#[test]
fn sources_and_sinks_in_insertion_order() {
    let mut g = TestGraph::new();
    g.set_node("late-root", 0);
    g.set_edge("r1", "x");
    g.set_edge("r2", "x");
    // "late-root" was inserted first, so it is the first source.
    assert_eq!(g.sources(), vec!["late-root", "r1", "r2"]);
    assert_eq!(g.sinks(), vec!["late-root", "x"]);
}

#[test]
fn remove_node_drops_incident_edges() {
    let mut g = diamond();
    assert!(g.remove_node("b"));
    assert!(!g.has_node("b"));
    assert!(!g.has_edge("a", "b"));
    assert!(!g.has_edge("b", "d"));
    assert!(g.has_edge("c", "d"));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn remove_edge_keeps_nodes() {
    let mut g = diamond();
    assert!(g.remove_edge("a", "b"));
    assert!(!g.remove_edge("a", "b"));
    assert!(g.has_node("a"));
    assert!(g.has_node("b"));
}

#[test]
fn filter_nodes_induces_internal_edges_and_clones_graph_label() {
    let mut g = diamond();
    g.set_graph("label".to_string());
    let sub = g.filter_nodes(|id, _| id != "c");
    let ids: Vec<&str> = sub.nodes().collect();
    assert_eq!(ids, vec!["a", "b", "d"]);
    assert!(sub.has_edge("a", "b"));
    assert!(sub.has_edge("b", "d"));
    assert!(!sub.has_edge("c", "d"));
    assert_eq!(sub.edge_count(), 2);
    assert_eq!(*sub.graph(), "label");
}

#[test]
fn ancestors_are_transitive() {
    let mut g = TestGraph::new();
    g.set_path(&["a", "b", "c"]);
    g.set_edge("x", "b");
    assert_eq!(alg::ancestors(&g, "c"), vec!["b", "a", "x"]);
    assert_eq!(alg::ancestors(&g, "a"), Vec::<String>::new());
}

#[test]
fn ancestors_terminate_on_cycles() {
    let mut g = TestGraph::new();
    g.set_path(&["a", "b", "a"]);
    let anc = alg::ancestors(&g, "a");
    assert!(anc.contains(&"b".to_string()));
    assert!(anc.contains(&"a".to_string()));
    assert_eq!(anc.len(), 2);
}

#[test]
fn descendants_are_transitive() {
    let g = diamond();
    assert_eq!(alg::descendants(&g, "a"), vec!["b", "c", "d"]);
    assert_eq!(alg::descendants(&g, "d"), Vec::<String>::new());
}
