//! The demonstration fault tree.
//!
//! A small scaffolding-accident tree covering every event kind, including a
//! conditioning event that exercises the manual-placement pass.

use crate::event::{Event, EventKind};
use crate::scene::FaultTree;

/// Build the demo tree. Infallible by construction: ids are unique and every
/// link references events added above it.
pub fn scaffolding_fall() -> FaultTree {
    let mut tree = FaultTree::new();

    let events = [
        Event::new("fall", EventKind::Intermediate, "Fall from Height"),
        Event::new("unprotected", EventKind::Intermediate, "Fall Protection Fails"),
        Event::new("scaffold", EventKind::Intermediate, "Scaffolding Gives Way"),
        Event::new("belt", EventKind::Basic, "Safety Belt Broken"),
        Event::new("upholder", EventKind::Undeveloped, "Upholder Broken"),
        Event::new("takeoff", EventKind::External, "Take off When Walking"),
        Event::new("anchor", EventKind::Basic, "Anchor Point Loose"),
        Event::new("planks", EventKind::Undeveloped, "Planks Overloaded"),
        Event::new("harness", EventKind::Conditioning, "Harness Unhooked"),
    ];
    for ev in events {
        tree.add_event(ev).expect("sample ids are unique");
    }

    for (source, target) in [
        ("fall", "unprotected"),
        ("fall", "scaffold"),
        ("unprotected", "belt"),
        ("unprotected", "takeoff"),
        ("unprotected", "harness"),
        ("scaffold", "anchor"),
        ("scaffold", "planks"),
        ("belt", "upholder"),
    ] {
        tree.connect(source, target).expect("sample links reference sample events");
    }

    tree
}
