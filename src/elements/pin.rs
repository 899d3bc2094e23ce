//! Pin (simple) supports

use std::fmt;

use serde::{Deserialize, Serialize};

/// A simple support: one vertical reaction, no bending restraint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Distance from the left end
    pub x: f64,
}

impl Pin {
    pub fn new(x: f64) -> Self {
        Self { x }
    }
}

/// Handle to a pin stored on a beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinId(pub(crate) u64);

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
