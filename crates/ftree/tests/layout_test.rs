use ftree::{Event, EventKind, FaultTree, Point, ROOT_CENTER, run_layout, sample};

#[test]
fn the_first_source_is_centered_on_the_root_anchor() {
    let mut tree = sample::scaffolding_fall();
    run_layout(&mut tree);
    let root = tree.event("fall").unwrap();
    assert_eq!(root.center(), ROOT_CENTER);
}

#[test]
fn every_event_gets_a_concrete_position() {
    let mut tree = sample::scaffolding_fall();
    run_layout(&mut tree);
    // Ranks descend from the root; the root row sits above its inputs.
    let root_y = tree.event("fall").unwrap().position.y;
    for id in ["unprotected", "scaffold", "belt", "takeoff", "upholder"] {
        assert!(
            tree.event(id).unwrap().position.y > root_y,
            "{id} should lie below the root"
        );
    }
}

#[test]
fn conditioning_events_sit_beside_their_inbound_neighbor() {
    let mut tree = sample::scaffolding_fall();
    run_layout(&mut tree);
    let neighbor = tree.bbox("unprotected").unwrap();
    let harness = tree.event("harness").unwrap();
    let corner = neighbor.bottom_right();
    assert_eq!(
        harness.position,
        Point::new(
            corner.x + 20.0,
            corner.y - harness.size.height / 2.0 - 15.0
        )
    );
}

#[test]
fn layout_is_deterministic() {
    let mut t1 = sample::scaffolding_fall();
    let mut t2 = sample::scaffolding_fall();
    run_layout(&mut t1);
    run_layout(&mut t2);
    for ev in t1.events() {
        assert_eq!(
            ev.position,
            t2.event(&ev.id).unwrap().position,
            "{} moved between runs",
            ev.id
        );
    }
}

#[test]
fn anchoring_is_a_rigid_translation() {
    // Relative displacement between any two auto-laid events must survive
    // any further rigid translation of the scene.
    let mut tree = sample::scaffolding_fall();
    run_layout(&mut tree);
    let d_before = delta(&tree, "unprotected", "scaffold");

    let mut shifted = sample::scaffolding_fall();
    run_layout(&mut shifted);
    shifted.translate_all(33.0, -11.0);
    let d_after = delta(&shifted, "unprotected", "scaffold");
    assert_eq!(d_before, d_after);
}

fn delta(tree: &FaultTree, a: &str, b: &str) -> Point {
    let pa = tree.event(a).unwrap().position;
    let pb = tree.event(b).unwrap().position;
    Point::new(pb.x - pa.x, pb.y - pa.y)
}

#[test]
fn hidden_events_are_skipped_by_the_partition() {
    let mut tree = FaultTree::new();
    tree.add_event(Event::new("root", EventKind::Basic, "root"))
        .unwrap();
    tree.add_event(Event::new("ghost", EventKind::Basic, "ghost").hidden(true))
        .unwrap();
    tree.connect("root", "ghost").unwrap();
    run_layout(&mut tree);

    // The auto pass never saw the hidden event, so it only moved with the
    // final translation: root landed at its anchor-derived corner and the
    // hidden event is offset from the origin by exactly the same delta.
    let root = tree.event("root").unwrap();
    let expected_delta = Point::new(
        ROOT_CENTER.x - root.size.width / 2.0,
        ROOT_CENTER.y - root.size.height / 2.0,
    );
    assert_eq!(root.position, expected_delta);
    assert_eq!(tree.event("ghost").unwrap().position, expected_delta);
}

#[test]
fn manual_event_without_inbound_neighbor_keeps_its_default_position() {
    let mut tree = FaultTree::new();
    tree.add_event(Event::new("root", EventKind::Basic, "root"))
        .unwrap();
    tree.add_event(Event::new("floating", EventKind::Conditioning, "floating"))
        .unwrap();
    run_layout(&mut tree);

    // No inbound neighbor: the conditioning event stays at the origin until
    // the whole-scene translation shifts it by the anchor delta.
    let root = tree.event("root").unwrap();
    let expected_delta = Point::new(
        ROOT_CENTER.x - root.size.width / 2.0,
        ROOT_CENTER.y - root.size.height / 2.0,
    );
    assert_eq!(
        tree.event("floating").unwrap().position,
        expected_delta
    );
}

#[test]
fn sourceless_graphs_skip_root_anchoring() {
    let mut tree = FaultTree::new();
    for id in ["a", "b", "c"] {
        tree.add_event(Event::new(id, EventKind::Basic, id)).unwrap();
    }
    tree.connect("a", "b").unwrap();
    tree.connect("b", "c").unwrap();
    tree.connect("c", "a").unwrap();
    run_layout(&mut tree);

    // Every event still gets a concrete position from the auto pass, and the
    // unanchored layout keeps its top-left corner at the origin.
    let bbox = tree.graph_bbox().unwrap();
    assert_eq!((bbox.x, bbox.y), (0.0, 0.0));
}

#[test]
fn empty_auto_partition_is_a_noop() {
    let mut tree = FaultTree::new();
    tree.add_event(Event::new("lone", EventKind::Conditioning, "lone"))
        .unwrap();
    run_layout(&mut tree);
    // Sole event is manual with no neighbor and is itself the first source,
    // so anchoring centers it.
    assert_eq!(tree.event("lone").unwrap().center(), ROOT_CENTER);
}
