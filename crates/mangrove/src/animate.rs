//! Animation handoff.
//!
//! The layout pass never moves a node itself; it hands each target position
//! to the client's animator and moves on. Requests are fire-and-forget: the
//! pass does not wait for one animation before issuing the next, and the
//! client may run all of a pass's animations concurrently.

use mangrove_graph::Point;

pub trait NodeAnimator {
    /// Requests an animated move of `node_id` so that its top-left corner
    /// ends at `target`. Implementations must not block the pass.
    fn animate(&mut self, node_id: &str, target: Point, duration_ms: u64);
}

/// One recorded [`NodeAnimator::animate`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    pub node_id: String,
    pub target: Point,
    pub duration_ms: u64,
}

/// Records every request in order. Useful in tests and in headless clients
/// that apply positions themselves.
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    requests: Vec<AnimationRequest>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[AnimationRequest] {
        &self.requests
    }

    pub fn into_requests(self) -> Vec<AnimationRequest> {
        self.requests
    }
}

impl NodeAnimator for RecordingAnimator {
    fn animate(&mut self, node_id: &str, target: Point, duration_ms: u64) {
        self.requests.push(AnimationRequest {
            node_id: node_id.to_string(),
            target,
            duration_ms,
        });
    }
}
