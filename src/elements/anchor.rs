//! End conditions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BeamError;

/// Condition at one end of the beam
///
/// Simple supports are expressed as pins placed at the end coordinate, not as
/// an anchor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// No restraint: shear and moment vanish at the end
    #[default]
    Free,
    /// Clamped: deflection and slope vanish at the end
    Fixed,
}

impl Anchor {
    /// Check if the end is clamped
    pub fn is_fixed(self) -> bool {
        self == Anchor::Fixed
    }

    /// Number of reaction unknowns (moment and force) this end contributes
    pub fn dofs(self) -> usize {
        if self.is_fixed() {
            2
        } else {
            0
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Free => "free",
            Anchor::Fixed => "fixed",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = BeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Anchor::Free),
            "fixed" => Ok(Anchor::Fixed),
            "simple" => Err(BeamError::configuration(
                "anchor",
                "'simple' is not an end condition; add a pin at the end instead",
            )),
            other => Err(BeamError::configuration(
                "anchor",
                format!("must be one of free, fixed (got '{other}')"),
            )),
        }
    }
}
