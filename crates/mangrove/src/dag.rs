//! Directed-acyclic-graph components, built in two phases.
//!
//! A [`DagDraft`] is the only stage where structure may be attached; sealing
//! it produces a [`Dag`] that answers queries but cannot be mutated, so the
//! lazily cached descendant sets can never go stale. Sealing also validates
//! the acyclicity precondition every query below relies on.

use std::cell::OnceCell;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{Error, Result};

/// Index of a node within its [`Dag`] (and the [`DagDraft`] it came from).
pub type NodeRef = usize;

/// Mutable construction stage: register nodes, attach children, then `seal`.
#[derive(Debug, Default)]
pub struct DagDraft {
    ids: Vec<String>,
    index: FxHashMap<String, NodeRef>,
    children: Vec<Vec<NodeRef>>,
}

impl DagDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the layout node `id`, returning its ref. Idempotent.
    pub fn insert(&mut self, id: impl Into<String>) -> NodeRef {
        let id = id.into();
        if let Some(&n) = self.index.get(&id) {
            return n;
        }
        let n = self.ids.len();
        self.ids.push(id.clone());
        self.children.push(Vec::new());
        self.index.insert(id, n);
        n
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Appends `child` to `parent`'s ordered child list.
    pub fn add_child(&mut self, parent: NodeRef, child: NodeRef) {
        self.children[parent].push(child);
    }

    /// Consumes the draft: identifies roots, layers every node at its longest
    /// distance from any root, and caches the longest root-to-leaf path.
    ///
    /// Fails with [`Error::StructuralViolation`] if the draft contains a
    /// cycle (equivalently, a non-empty draft with no source node).
    pub fn seal(self) -> Result<Dag> {
        let count = self.ids.len();

        let mut in_degree: Vec<usize> = vec![0; count];
        for children in &self.children {
            for &c in children {
                in_degree[c] += 1;
            }
        }

        let roots: Vec<NodeRef> = (0..count).filter(|&n| in_degree[n] == 0).collect();
        if roots.is_empty() && count > 0 {
            return Err(Error::StructuralViolation {
                node_id: self.ids[0].clone(),
            });
        }

        // Longest distance from any root, via Kahn's ordering. Any node left
        // unprocessed sits on a cycle.
        let mut depth: Vec<usize> = vec![0; count];
        let mut remaining = in_degree;
        let mut queue: std::collections::VecDeque<NodeRef> = roots.iter().copied().collect();
        let mut processed = 0usize;
        while let Some(n) = queue.pop_front() {
            processed += 1;
            for &c in &self.children[n] {
                if depth[c] < depth[n] + 1 {
                    depth[c] = depth[n] + 1;
                }
                remaining[c] -= 1;
                if remaining[c] == 0 {
                    queue.push_back(c);
                }
            }
        }
        if processed < count {
            let stuck = (0..count)
                .find(|&n| remaining[n] > 0)
                .expect("unprocessed node must remain");
            return Err(Error::StructuralViolation {
                node_id: self.ids[stuck].clone(),
            });
        }

        let max_depth = depth.iter().copied().max().unwrap_or(0);
        let mut depths: Vec<Vec<NodeRef>> = vec![Vec::new(); if count == 0 { 0 } else { max_depth + 1 }];
        for n in 0..count {
            depths[depth[n]].push(n);
        }

        let descendants = (0..count).map(|_| OnceCell::new()).collect();
        Ok(Dag {
            ids: self.ids,
            index: self.index,
            children: self.children,
            roots,
            depths,
            descendants,
        })
    }
}

/// One sealed acyclic component: an ordered forest view with a depth index.
///
/// Every traversal below assumes acyclicity; `seal` established it, so no
/// query needs a cycle guard. Work stacks are still bounded by visited
/// tracking and nothing here recurses, so deep chains cannot overflow the
/// call stack.
#[derive(Debug)]
pub struct Dag {
    ids: Vec<String>,
    index: FxHashMap<String, NodeRef>,
    children: Vec<Vec<NodeRef>>,
    roots: Vec<NodeRef>,
    depths: Vec<Vec<NodeRef>>,
    descendants: Vec<OnceCell<FxHashSet<NodeRef>>>,
}

impl Dag {
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Id of the wrapped layout node.
    pub fn layout_id(&self, n: NodeRef) -> &str {
        &self.ids[n]
    }

    pub fn node_ref(&self, id: &str) -> Option<NodeRef> {
        self.index.get(id).copied()
    }

    /// Source nodes, in insertion order.
    pub fn roots(&self) -> &[NodeRef] {
        &self.roots
    }

    /// Ordered children of `n`.
    pub fn children(&self, n: NodeRef) -> &[NodeRef] {
        &self.children[n]
    }

    /// True iff `n` has no children.
    pub fn is_end_of_path(&self, n: NodeRef) -> bool {
        self.children[n].is_empty()
    }

    /// Number of depth rows; equals the node count of the longest
    /// root-to-leaf path.
    pub fn depth_count(&self) -> usize {
        self.depths.len()
    }

    /// Edge count of the longest root-to-leaf path.
    pub fn longest_path_len(&self) -> usize {
        self.depths.len().saturating_sub(1)
    }

    /// Nodes whose longest distance from a root is `depth`, in insertion
    /// order.
    pub fn nodes_at_depth(&self, depth: usize) -> &[NodeRef] {
        self.depths.get(depth).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All nodes transitively reachable from `n` via children. Computed once,
    /// lazily; repeated calls return the same cached set.
    pub fn descendants(&self, n: NodeRef) -> &FxHashSet<NodeRef> {
        self.descendants[n].get_or_init(|| {
            let mut seen: FxHashSet<NodeRef> = FxHashSet::default();
            let mut stack: Vec<NodeRef> = self.children[n].clone();
            while let Some(m) = stack.pop() {
                if seen.insert(m) {
                    stack.extend(self.children[m].iter().copied());
                }
            }
            seen
        })
    }

    pub fn descendant_count(&self, n: NodeRef) -> usize {
        self.descendants(n).len()
    }

    /// Longest path length in edges from `from` to `to`.
    ///
    /// `Some(0)` when `from == to`; `None` when `to` is unreachable from
    /// `from` via children links.
    pub fn max_distance(&self, from: NodeRef, to: NodeRef) -> Option<usize> {
        // The depth index is a topological order: a child is always deeper
        // than each of its parents, so one forward sweep suffices.
        let mut dist: Vec<Option<usize>> = vec![None; self.ids.len()];
        dist[from] = Some(0);
        for row in &self.depths {
            for &n in row {
                let Some(d) = dist[n] else { continue };
                for &c in &self.children[n] {
                    if dist[c].is_none_or(|cur| cur < d + 1) {
                        dist[c] = Some(d + 1);
                    }
                }
            }
        }
        dist[to]
    }

    /// Longest distance in edges from `n` to a node at the end of a path in
    /// its subtree; 0 when `n` is itself a leaf.
    pub fn max_length_to_end_of_path(&self, n: NodeRef) -> usize {
        let mut longest: Vec<usize> = vec![0; self.ids.len()];
        for row in self.depths.iter().rev() {
            for &m in row {
                longest[m] = self.children[m]
                    .iter()
                    .map(|&c| longest[c] + 1)
                    .max()
                    .unwrap_or(0);
            }
        }
        longest[n]
    }
}
