//! One layout pass: cycle isolation, forest construction, band allocation,
//! depth-ordered coordinate assignment, cycle placement.

use mangrove_graph::LayoutGraph;
use tracing::{debug, trace};

use crate::animate::NodeAnimator;
use crate::cycle::{self, CycleReport};
use crate::dag::Dag;
use crate::error::{Error, Result};
use crate::forest;
use crate::orientation::Orientation;

/// Knobs for a tree layout pass.
#[derive(Debug, Clone)]
pub struct TreeLayoutOptions {
    pub orientation: Orientation,
    /// Walking the depth rows normally puts the root at the near end of the
    /// primary axis (arrows pointing up for a vertical tree, left for a
    /// horizontal one). Set `reversed` to walk leaf-to-root instead, which
    /// flips the tree end-for-end along the primary axis.
    pub reversed: bool,
    pub animation_ms: u64,
}

impl Default for TreeLayoutOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            reversed: false,
            animation_ms: 1000,
        }
    }
}

/// Completion notification for one pass.
#[derive(Debug)]
pub enum PassOutcome {
    /// The pass ran to the end. `continuing` is always false for the tree
    /// layout: one invocation does all the work.
    Finished { continuing: bool },
    /// The computation was stopped before it ran.
    Aborted,
    /// The pass failed; anchoring has been rolled back.
    Failed(Error),
}

impl PassOutcome {
    /// Whether the scheduler should run another iteration.
    pub fn continuing(&self) -> bool {
        matches!(self, PassOutcome::Finished { continuing: true })
    }

    pub fn was_aborted(&self) -> bool {
        matches!(self, PassOutcome::Aborted)
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            PassOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Aborted, or an error was captured.
    pub fn had_failure(&self) -> bool {
        self.was_aborted() || self.error().is_some()
    }
}

/// A one-shot tree layout computation, driven by an external scheduler.
///
/// Calls are serialized by contract: no two passes run concurrently against
/// the same graph, and nothing else mutates the graph while a pass executes.
#[derive(Debug, Default)]
pub struct TreeLayoutComputation {
    options: TreeLayoutOptions,
    stopped: bool,
}

impl TreeLayoutComputation {
    pub fn new(options: TreeLayoutOptions) -> Self {
        Self {
            options,
            stopped: false,
        }
    }

    /// Asks a not-yet-run computation to abort instead of running.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Runs one pass. Failures are caught here, at the pass boundary, and
    /// reported through the outcome; anchoring set during the pass is rolled
    /// back on every exit path.
    pub fn run(&mut self, graph: &mut LayoutGraph, animator: &mut dyn NodeAnimator) -> PassOutcome {
        if self.stopped {
            return PassOutcome::Aborted;
        }
        match compute_pass(graph, animator, &self.options) {
            Ok(continuing) => PassOutcome::Finished { continuing },
            Err(e) => PassOutcome::Failed(e),
        }
    }
}

/// Convenience wrapper: build a computation and run it once.
pub fn run_pass(
    graph: &mut LayoutGraph,
    animator: &mut dyn NodeAnimator,
    options: TreeLayoutOptions,
) -> PassOutcome {
    TreeLayoutComputation::new(options).run(graph, animator)
}

/// Scoped anchoring of cycle nodes. Only flags the guard itself set are
/// restored, so client-anchored nodes stay anchored through the pass; the
/// restore runs on every exit path, unwinding included.
struct AnchorGuard<'g> {
    graph: &'g mut LayoutGraph,
    flipped: Vec<String>,
}

impl<'g> AnchorGuard<'g> {
    fn anchor(graph: &'g mut LayoutGraph, report: &CycleReport) -> Self {
        let mut flipped: Vec<String> = Vec::new();
        for id in graph.node_ids() {
            if !report.contains(&id) {
                continue;
            }
            let node = graph.node_mut(&id).expect("cycle member missing from graph");
            if !node.anchored {
                node.anchored = true;
                flipped.push(id);
            }
        }
        Self { graph, flipped }
    }
}

impl Drop for AnchorGuard<'_> {
    fn drop(&mut self) {
        for id in &self.flipped {
            if let Some(node) = self.graph.node_mut(id) {
                node.anchored = false;
            }
        }
    }
}

fn compute_pass(
    graph: &mut LayoutGraph,
    animator: &mut dyn NodeAnimator,
    options: &TreeLayoutOptions,
) -> Result<bool> {
    let bounds = graph.bounds();
    let orientation = options.orientation;

    let report = cycle::detect(graph);
    let guard = AnchorGuard::anchor(graph, &report);

    let forest = forest::build_forest(guard.graph, report.nodes_in_cycles())?;

    let band_count = forest.len() + report.cycle_count();
    debug!(
        trees = forest.len(),
        cycles = report.cycle_count(),
        "tree layout pass"
    );
    if band_count == 0 {
        return Ok(false);
    }

    let secondary_band = orientation.secondary_extent(bounds) / band_count as f64;
    let primary_extent = orientation.primary_extent(bounds);

    for (tree_index, dag) in forest.iter().enumerate() {
        let rows = dag.depth_count();
        // A single node would otherwise divide by one and land on the far
        // primary edge; give it half the extent so it sits centred.
        let divisor = if dag.node_count() == 1 { 2 } else { rows };
        let spacing = primary_extent / divisor as f64;
        let mut primary = spacing;

        let walk: Vec<usize> = if options.reversed {
            (0..rows).rev().collect()
        } else {
            (0..rows).collect()
        };
        for depth in walk {
            place_depth_row(
                guard.graph,
                animator,
                options,
                dag,
                depth,
                tree_index,
                secondary_band,
                primary,
            );
            primary += spacing;
        }
    }

    // Restore anchoring before the cycles themselves are placed.
    drop(guard);

    for (cycle_index, cycle) in report.cycles().iter().enumerate() {
        // Each cycle gets the band after all the trees, its members strung
        // in a line along the primary axis at the band's centre.
        let secondary =
            secondary_band * (forest.len() + cycle_index) as f64 + secondary_band / 2.0;
        let spacing = primary_extent / cycle.len() as f64;
        let mut primary = spacing;
        for id in cycle.iter() {
            let node = graph.node(id).expect("cycle member missing from graph");
            if !node.anchored {
                let target = orientation.top_left_for_center(primary, secondary, node.size());
                animator.animate(id, target, options.animation_ms);
            }
            primary += spacing;
        }
    }

    Ok(false)
}

fn place_depth_row(
    graph: &LayoutGraph,
    animator: &mut dyn NodeAnimator,
    options: &TreeLayoutOptions,
    dag: &Dag,
    depth: usize,
    tree_index: usize,
    band: f64,
    primary: f64,
) {
    let row = dag.nodes_at_depth(depth);
    let spacing = band / (row.len() + 1) as f64;
    let mut secondary = tree_index as f64 * band + spacing;
    trace!(tree = tree_index, depth, nodes = row.len(), "placing depth row");
    for &n in row {
        let id = dag.layout_id(n);
        let node = graph.node(id).expect("dag node missing from graph");
        if !node.anchored {
            let target = options
                .orientation
                .top_left_for_center(primary, secondary, node.size());
            animator.animate(id, target, options.animation_ms);
        }
        secondary += spacing;
    }
}
