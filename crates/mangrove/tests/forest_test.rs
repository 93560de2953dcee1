use mangrove::{Error, forest};
use mangrove_graph::{LayoutGraph, LayoutNode, Size};
use rustc_hash::FxHashSet;

fn graph(ids: &[&str], edges: &[(&str, &str)]) -> LayoutGraph {
    let mut g = LayoutGraph::new(Size::new(100.0, 100.0));
    for id in ids {
        g.set_node(*id, LayoutNode::default());
    }
    for (v, w) in edges {
        g.add_edge(*v, *w).unwrap();
    }
    g
}

fn excluded(ids: &[&str]) -> FxHashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn ids_at_depth(dag: &mangrove::Dag, depth: usize) -> Vec<&str> {
    dag.nodes_at_depth(depth)
        .iter()
        .map(|&n| dag.layout_id(n))
        .collect()
}

#[test]
fn empty_graph_yields_no_trees() {
    let g = graph(&[], &[]);
    let dags = forest::build_forest(&g, &excluded(&[])).unwrap();
    assert!(dags.is_empty());
}

#[test]
fn disjoint_components_come_out_in_insertion_order() {
    let g = graph(&["a", "b", "c", "d"], &[("a", "b"), ("c", "d")]);
    let dags = forest::build_forest(&g, &excluded(&[])).unwrap();

    assert_eq!(dags.len(), 2);
    assert_eq!(ids_at_depth(&dags[0], 0), vec!["a"]);
    assert_eq!(ids_at_depth(&dags[0], 1), vec!["b"]);
    assert_eq!(ids_at_depth(&dags[1], 0), vec!["c"]);
    assert_eq!(ids_at_depth(&dags[1], 1), vec!["d"]);
}

#[test]
fn excluded_nodes_play_no_role_in_tree_structure() {
    // a and b form a cycle; the edge b -> c must not make c a child of
    // anything once b is excluded.
    let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "a"), ("b", "c")]);
    let dags = forest::build_forest(&g, &excluded(&["a", "b"])).unwrap();

    assert_eq!(dags.len(), 1);
    assert_eq!(dags[0].node_count(), 1);
    assert_eq!(ids_at_depth(&dags[0], 0), vec!["c"]);
    assert_eq!(dags[0].longest_path_len(), 0);
}

#[test]
fn a_component_left_cyclic_is_rejected() {
    let g = graph(&["a", "b"], &[("a", "b"), ("b", "a")]);
    let err = forest::build_forest(&g, &excluded(&[])).unwrap_err();
    assert!(matches!(err, Error::StructuralViolation { .. }));
}

#[test]
fn multiple_sources_root_one_tree() {
    let g = graph(&["a", "b", "c"], &[("a", "c"), ("b", "c")]);
    let dags = forest::build_forest(&g, &excluded(&[])).unwrap();

    assert_eq!(dags.len(), 1);
    assert_eq!(ids_at_depth(&dags[0], 0), vec!["a", "b"]);
    assert_eq!(ids_at_depth(&dags[0], 1), vec!["c"]);
}

#[test]
fn parallel_edges_collapse_to_one_child_link() {
    let g = graph(&["a", "b"], &[("a", "b"), ("a", "b")]);
    let dags = forest::build_forest(&g, &excluded(&[])).unwrap();

    let dag = &dags[0];
    let a = dag.node_ref("a").unwrap();
    assert_eq!(dag.children(a).len(), 1);
}
