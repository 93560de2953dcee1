#![forbid(unsafe_code)]

//! Graph container APIs used by `mangrove`.
//!
//! Holds the node/edge structure a layout pass operates on, along with the
//! per-node state the engine reads and writes: position, size, and the
//! anchored flag. Storage is insertion-ordered so that every traversal a
//! layout pass performs is deterministic.

pub mod error;
pub mod geom;
pub mod graph;

pub use error::{Error, Result};
pub use geom::{Point, Size};
pub use graph::{Edge, LayoutGraph, LayoutNode};
