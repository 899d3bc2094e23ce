//! Concentrated loads

use std::fmt;

use serde::{Deserialize, Serialize};

/// A concentrated force on the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left end
    pub x: f64,
    /// Force, downward positive
    pub w: f64,
}

impl PointLoad {
    /// Create a new point load
    pub fn new(x: f64, w: f64) -> Self {
        Self { x, w }
    }
}

/// Handle to a point load stored on a beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointLoadId(pub(crate) u64);

impl fmt::Display for PointLoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
