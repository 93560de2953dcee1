//! Cycle detection over a [`LayoutGraph`].
//!
//! Strongly connected components (Tarjan). Two nodes belong to the same
//! [`Cycle`] iff they lie on a common cycle: an SCC with more than one
//! member, or a single node carrying a self-loop. Output ordering is fully
//! determined by the graph's insertion order so that band assignment
//! downstream is reproducible.

use indexmap::IndexSet;
use mangrove_graph::LayoutGraph;
use rustc_hash::{FxHashMap, FxHashSet};

/// One cyclic structure: an ordered set of node ids.
#[derive(Debug, Clone)]
pub struct Cycle {
    members: IndexSet<String>,
}

impl Cycle {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Members in graph insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|s| s.as_str())
    }
}

/// Result of one detection run: the set of nodes on any cycle, and the
/// partition of that set into disjoint cycles.
#[derive(Debug, Default)]
pub struct CycleReport {
    nodes: FxHashSet<String>,
    cycles: Vec<Cycle>,
}

impl CycleReport {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    /// Every node that lies on some cycle.
    pub fn nodes_in_cycles(&self) -> &FxHashSet<String> {
        &self.nodes
    }
}

/// Finds all cycles in `g`.
///
/// Self-loops and parallel edges are both valid degenerate cycles and must
/// not cause non-termination; Tarjan visits every edge once.
pub fn detect(g: &LayoutGraph) -> CycleReport {
    let node_ids = g.node_ids();
    let mut index: usize = 0;
    let mut stack: Vec<String> = Vec::new();
    let mut on_stack: FxHashSet<String> = FxHashSet::default();
    let mut indices: FxHashMap<String, usize> = FxHashMap::default();
    let mut lowlink: FxHashMap<String, usize> = FxHashMap::default();
    let mut sccs: Vec<Vec<String>> = Vec::new();

    fn strongconnect(
        g: &LayoutGraph,
        v: &str,
        index: &mut usize,
        stack: &mut Vec<String>,
        on_stack: &mut FxHashSet<String>,
        indices: &mut FxHashMap<String, usize>,
        lowlink: &mut FxHashMap<String, usize>,
        sccs: &mut Vec<Vec<String>>,
    ) {
        indices.insert(v.to_string(), *index);
        lowlink.insert(v.to_string(), *index);
        *index += 1;
        stack.push(v.to_string());
        on_stack.insert(v.to_string());

        for w in g.successors(v) {
            if !indices.contains_key(w) {
                strongconnect(g, w, index, stack, on_stack, indices, lowlink, sccs);
                let v_low = lowlink[v];
                let w_low = lowlink[w];
                lowlink.insert(v.to_string(), v_low.min(w_low));
            } else if on_stack.contains(w) {
                let v_low = lowlink[v];
                let w_idx = indices[w];
                lowlink.insert(v.to_string(), v_low.min(w_idx));
            }
        }

        if lowlink[v] == indices[v] {
            let mut scc: Vec<String> = Vec::new();
            loop {
                let w = stack.pop().expect("tarjan stack underflow");
                on_stack.remove(&w);
                scc.push(w.clone());
                if w == v {
                    break;
                }
            }
            sccs.push(scc);
        }
    }

    for v in &node_ids {
        if !indices.contains_key(v.as_str()) {
            strongconnect(
                g,
                v,
                &mut index,
                &mut stack,
                &mut on_stack,
                &mut indices,
                &mut lowlink,
                &mut sccs,
            );
        }
    }

    let insertion: FxHashMap<&str, usize> = node_ids
        .iter()
        .enumerate()
        .map(|(i, v)| (v.as_str(), i))
        .collect();

    let mut cyclic: Vec<Vec<String>> = Vec::new();
    for mut scc in sccs {
        if scc.len() > 1 {
            scc.sort_by_key(|v| insertion.get(v.as_str()).copied().unwrap_or(usize::MAX));
            cyclic.push(scc);
        } else if g.has_edge(&scc[0], &scc[0]) {
            cyclic.push(scc);
        }
    }
    cyclic.sort_by_key(|scc| {
        scc.iter()
            .map(|v| insertion.get(v.as_str()).copied().unwrap_or(usize::MAX))
            .min()
            .unwrap_or(usize::MAX)
    });

    let mut report = CycleReport::default();
    for scc in cyclic {
        report.nodes.extend(scc.iter().cloned());
        report.cycles.push(Cycle {
            members: scc.into_iter().collect(),
        });
    }
    report
}
