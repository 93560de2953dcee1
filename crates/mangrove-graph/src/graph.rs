use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::geom::{Point, Size};

/// Per-node state the layout engine reads and writes.
///
/// `x`/`y` are the node's centre. `anchored` nodes must not be moved by a
/// layout pass. `kind` is a free-form type tag carried for clients (styling,
/// filtering); the engine itself never interprets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub anchored: bool,
    pub kind: Option<String>,
}

impl LayoutNode {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A directed edge between two node ids. Parallel edges and self-loops are
/// representable; both read as degenerate cycles to the layout engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone)]
struct NodeEntry {
    id: String,
    node: LayoutNode,
}

/// Insertion-ordered node/edge storage plus the bounds of the layout area.
#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    bounds: Size,
    nodes: Vec<NodeEntry>,
    node_index: FxHashMap<String, usize>,
    edges: Vec<Edge>,
}

impl LayoutGraph {
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            ..Default::default()
        }
    }

    /// Width and height of the area the layout may use.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts a node, or replaces its state if the id already exists.
    /// Insertion order is preserved across replacement.
    pub fn set_node(&mut self, id: impl Into<String>, node: LayoutNode) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].node = node;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            node,
        });
        self.node_index.insert(id, idx);
        self
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].node)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut LayoutNode> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&str, &LayoutNode)> {
        self.nodes.iter().map(|n| (n.id.as_str(), &n.node))
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Adds a directed edge. Both endpoints must already be present.
    pub fn add_edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> Result<()> {
        let source = source.into();
        let target = target.into();
        for endpoint in [&source, &target] {
            if !self.has_node(endpoint) {
                return Err(Error::MissingEndpoint {
                    id: endpoint.clone(),
                });
            }
        }
        self.edges.push(Edge { source, target });
        Ok(())
    }

    /// Adds an edge between each consecutive pair of ids.
    pub fn add_path(&mut self, ids: &[&str]) -> Result<()> {
        for pair in ids.windows(2) {
            self.add_edge(pair[0], pair[1])?;
        }
        Ok(())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    /// Targets of out-edges of `id`, in edge insertion order. Parallel edges
    /// produce repeated entries.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.source == id)
            .map(|e| e.target.as_str())
            .collect()
    }

    /// Sources of in-edges of `id`, in edge insertion order.
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.target == id)
            .map(|e| e.source.as_str())
            .collect()
    }
}
