#![forbid(unsafe_code)]

//! Headless tree/DAG layout for directed graphs.
//!
//! Positions the nodes of a [`mangrove_graph::LayoutGraph`] so that the
//! graph reads as a tree: depth from root grows along a primary axis,
//! siblings spread along a secondary axis, and cyclic substructures are
//! detected, isolated, and placed in their own bands instead of breaking the
//! traversal. One call to [`run_pass`] does all the work; the layout is not
//! iterative and holds no state between passes.
//!
//! Rendering, interaction, and scheduling live in the client: the engine
//! only emits one fire-and-forget [`NodeAnimator::animate`] request per node
//! it wants moved.

pub mod animate;
pub mod computation;
pub mod cycle;
pub mod dag;
pub mod error;
pub mod forest;
pub mod orientation;

pub use animate::{AnimationRequest, NodeAnimator, RecordingAnimator};
pub use computation::{PassOutcome, TreeLayoutComputation, TreeLayoutOptions, run_pass};
pub use cycle::{Cycle, CycleReport};
pub use dag::{Dag, DagDraft, NodeRef};
pub use error::{Error, Result};
pub use orientation::Orientation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
