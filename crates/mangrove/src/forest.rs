//! Splits the acyclic portion of a graph into sealed [`Dag`] components.

use mangrove_graph::LayoutGraph;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::dag::{Dag, DagDraft};
use crate::error::Result;

/// Builds one [`Dag`] per weakly connected component of the subgraph induced
/// by the non-excluded nodes.
///
/// Excluded nodes (the ones anchored because they lie on a cycle) contribute
/// neither vertices nor edge endpoints. The returned order follows the
/// graph's node insertion order, which decides the secondary-axis band each
/// tree receives. A component that is still cyclic after exclusion violates
/// the builder precondition and is rejected.
pub fn build_forest(g: &LayoutGraph, excluded: &FxHashSet<String>) -> Result<Vec<Dag>> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut dags: Vec<Dag> = Vec::new();

    for start in g.node_ids() {
        if excluded.contains(&start) || !seen.insert(start.clone()) {
            continue;
        }

        // Component discovery: undirected BFS over the induced subgraph.
        let mut component: FxHashSet<String> = FxHashSet::default();
        let mut queue: VecDeque<String> = VecDeque::new();
        component.insert(start.clone());
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            for w in g.successors(&v).into_iter().chain(g.predecessors(&v)) {
                if excluded.contains(w) || component.contains(w) {
                    continue;
                }
                seen.insert(w.to_string());
                component.insert(w.to_string());
                queue.push_back(w.to_string());
            }
        }

        // Drafting in graph insertion order keeps refs, and therefore every
        // depth row downstream, deterministic.
        let mut draft = DagDraft::new();
        for id in g.node_ids() {
            if component.contains(&id) {
                draft.insert(id);
            }
        }
        let mut linked: FxHashSet<(usize, usize)> = FxHashSet::default();
        for edge in g.edges() {
            if !component.contains(&edge.source) || !component.contains(&edge.target) {
                continue;
            }
            let parent = draft.insert(edge.source.clone());
            let child = draft.insert(edge.target.clone());
            // Parallel edges collapse to a single child link.
            if linked.insert((parent, child)) {
                draft.add_child(parent, child);
            }
        }

        dags.push(draft.seal()?);
    }

    Ok(dags)
}
