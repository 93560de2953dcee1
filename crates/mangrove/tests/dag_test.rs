use mangrove::{DagDraft, Error};

#[test]
fn insert_is_idempotent() {
    let mut draft = DagDraft::new();
    let a = draft.insert("a");
    let again = draft.insert("a");

    assert_eq!(a, again);
    assert_eq!(draft.node_count(), 1);
}

#[test]
fn single_node_dag() {
    let mut draft = DagDraft::new();
    let a = draft.insert("a");
    let dag = draft.seal().unwrap();

    assert_eq!(dag.node_count(), 1);
    assert_eq!(dag.roots(), &[a]);
    assert_eq!(dag.depth_count(), 1);
    assert_eq!(dag.longest_path_len(), 0);
    assert!(dag.is_end_of_path(a));
    assert_eq!(dag.max_length_to_end_of_path(a), 0);
}

#[test]
fn chain_depths_and_distances() {
    let mut draft = DagDraft::new();
    let a = draft.insert("a");
    let b = draft.insert("b");
    let c = draft.insert("c");
    draft.add_child(a, b);
    draft.add_child(b, c);
    let dag = draft.seal().unwrap();

    assert_eq!(dag.longest_path_len(), 2);
    assert_eq!(dag.nodes_at_depth(0), &[a]);
    assert_eq!(dag.nodes_at_depth(1), &[b]);
    assert_eq!(dag.nodes_at_depth(2), &[c]);

    assert_eq!(dag.max_distance(a, a), Some(0));
    assert_eq!(dag.max_distance(a, c), Some(2));
    assert_eq!(dag.max_distance(c, a), None);

    assert_eq!(dag.max_length_to_end_of_path(a), 2);
    assert_eq!(dag.max_length_to_end_of_path(c), 0);
    assert!(dag.is_end_of_path(c));
    assert!(!dag.is_end_of_path(a));
}

#[test]
fn longest_path_wins_over_a_shortcut() {
    // a -> d directly, and a -> b -> d: d sits at depth 2 and the distance
    // from a is the longer of the two routes.
    let mut draft = DagDraft::new();
    let a = draft.insert("a");
    let b = draft.insert("b");
    let c = draft.insert("c");
    let d = draft.insert("d");
    draft.add_child(a, b);
    draft.add_child(a, c);
    draft.add_child(b, d);
    draft.add_child(c, d);
    draft.add_child(a, d);
    let dag = draft.seal().unwrap();

    assert_eq!(dag.nodes_at_depth(2), &[d]);
    assert_eq!(dag.max_distance(a, d), Some(2));
    assert_eq!(dag.descendant_count(a), 3);
}

#[test]
fn descendants_are_cached() {
    let mut draft = DagDraft::new();
    let a = draft.insert("a");
    let b = draft.insert("b");
    let c = draft.insert("c");
    draft.add_child(a, b);
    draft.add_child(b, c);
    let dag = draft.seal().unwrap();

    let first = dag.descendants(a);
    assert!(first.contains(&b));
    assert!(first.contains(&c));
    assert_eq!(first.len(), 2);

    // Repeated queries return the same cached set.
    assert!(std::ptr::eq(first, dag.descendants(a)));
}

#[test]
fn seal_rejects_a_cyclic_draft() {
    let mut draft = DagDraft::new();
    let a = draft.insert("a");
    let b = draft.insert("b");
    draft.add_child(a, b);
    draft.add_child(b, a);

    let err = draft.seal().unwrap_err();
    assert!(matches!(err, Error::StructuralViolation { .. }));
}

#[test]
fn seal_rejects_a_cycle_hanging_off_a_root() {
    let mut draft = DagDraft::new();
    let r = draft.insert("r");
    let a = draft.insert("a");
    let b = draft.insert("b");
    draft.add_child(r, a);
    draft.add_child(a, b);
    draft.add_child(b, a);

    let err = draft.seal().unwrap_err();
    assert!(matches!(err, Error::StructuralViolation { node_id } if node_id == "a"));
}

#[test]
fn multiple_roots_share_a_component() {
    let mut draft = DagDraft::new();
    let a = draft.insert("a");
    let b = draft.insert("b");
    let c = draft.insert("c");
    draft.add_child(a, c);
    draft.add_child(b, c);
    let dag = draft.seal().unwrap();

    assert_eq!(dag.roots(), &[a, b]);
    assert_eq!(dag.nodes_at_depth(0), &[a, b]);
    assert_eq!(dag.nodes_at_depth(1), &[c]);
    assert_eq!(dag.max_distance(b, c), Some(1));
}

#[test]
fn node_refs_resolve_back_to_layout_ids() {
    let mut draft = DagDraft::new();
    let a = draft.insert("a");
    let dag = draft.seal().unwrap();

    assert_eq!(dag.layout_id(a), "a");
    assert_eq!(dag.node_ref("a"), Some(a));
    assert_eq!(dag.node_ref("missing"), None);
}
