//! Axis strategy for the tree layout.
//!
//! The computation works in (primary, secondary) space: depth grows along
//! the primary axis, siblings spread along the secondary axis. The
//! orientation value maps that space onto concrete coordinates, so the
//! vertical and horizontal variants share all of the spacing math.

use mangrove_graph::{Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Depth grows along y; siblings spread along x.
    #[default]
    Vertical,
    /// Depth grows along x; siblings spread along y.
    Horizontal,
}

impl Orientation {
    /// Length of the primary axis within `bounds`.
    pub fn primary_extent(self, bounds: Size) -> f64 {
        match self {
            Orientation::Vertical => bounds.height,
            Orientation::Horizontal => bounds.width,
        }
    }

    /// Length of the secondary axis within `bounds`.
    pub fn secondary_extent(self, bounds: Size) -> f64 {
        match self {
            Orientation::Vertical => bounds.width,
            Orientation::Horizontal => bounds.height,
        }
    }

    /// Top-left corner that centres a node of `size` at the given
    /// (primary, secondary) coordinates.
    pub fn top_left_for_center(self, primary: f64, secondary: f64, size: Size) -> Point {
        match self {
            Orientation::Vertical => {
                Point::new(secondary - size.width / 2.0, primary - size.height / 2.0)
            }
            Orientation::Horizontal => {
                Point::new(primary - size.width / 2.0, secondary - size.height / 2.0)
            }
        }
    }
}
