//! Result types for beam analysis

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::grid::Side;

/// An unknown of the assembled system
///
/// Variants are listed in system column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unknown {
    /// Reaction moment at a fixed left end (m0)
    LeftMoment,
    /// Reaction force at a fixed left end (p0)
    LeftForce,
    /// Reaction of the i-th pin in ascending x
    Pin(usize),
    /// Reaction moment at a fixed right end (mL)
    RightMoment,
    /// Reaction force at a fixed right end (pL)
    RightForce,
    /// Slope integration constant
    C3,
    /// Deflection integration constant
    C4,
}

impl Unknown {
    pub fn name(&self) -> String {
        match self {
            Unknown::LeftMoment => "m0".to_string(),
            Unknown::LeftForce => "p0".to_string(),
            Unknown::Pin(i) => format!("pin_{i}"),
            Unknown::RightMoment => "mL".to_string(),
            Unknown::RightForce => "pL".to_string(),
            Unknown::C3 => "c3".to_string(),
            Unknown::C4 => "c4".to_string(),
        }
    }

    /// Parse a name produced by [`Unknown::name`]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "m0" => Some(Unknown::LeftMoment),
            "p0" => Some(Unknown::LeftForce),
            "mL" => Some(Unknown::RightMoment),
            "pL" => Some(Unknown::RightForce),
            "c3" => Some(Unknown::C3),
            "c4" => Some(Unknown::C4),
            _ => name
                .strip_prefix("pin_")
                .and_then(|i| i.parse().ok())
                .map(Unknown::Pin),
        }
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name())
    }
}

/// Solved values of the reaction unknowns and integration constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    entries: Vec<(Unknown, f64)>,
    pin_locations: Vec<f64>,
}

impl Solution {
    pub(crate) fn new(entries: Vec<(Unknown, f64)>, pin_locations: Vec<f64>) -> Self {
        Self {
            entries,
            pin_locations,
        }
    }

    /// Value of an unknown, if it exists for this beam
    pub fn get(&self, unknown: Unknown) -> Option<f64> {
        self.entries
            .iter()
            .find(|(u, _)| *u == unknown)
            .map(|(_, value)| *value)
    }

    /// Value of an unknown by name ("m0", "p0", "pin_0", "mL", "pL", "c3", "c4")
    pub fn by_name(&self, name: &str) -> Option<f64> {
        Unknown::from_name(name).and_then(|u| self.get(u))
    }

    /// Reaction of the pin located exactly at `x`
    pub fn pin_reaction_at(&self, x: f64) -> Option<f64> {
        let index = self.pin_locations.iter().position(|&p| p == x)?;
        self.get(Unknown::Pin(index))
    }

    /// Distinct pin locations in ascending order, indexed like [`Unknown::Pin`]
    pub fn pin_locations(&self) -> &[f64] {
        &self.pin_locations
    }

    pub fn iter(&self) -> impl Iterator<Item = (Unknown, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Name-keyed copy of the solution
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.entries
            .iter()
            .map(|(u, value)| (u.name(), *value))
            .collect()
    }
}

/// Final field values at one grid point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPoint {
    /// Distance from the left end
    pub x: f64,
    /// Side of the discontinuity at `x`, if any
    pub side: Option<Side>,
    /// Shear force
    pub shear: f64,
    /// Bending moment
    pub moment: f64,
    /// Slope
    pub slope: f64,
    /// Deflection, positive in the load direction
    pub deflection: f64,
}

/// Output of a solve: final fields on the grid plus the solved unknowns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamSolution {
    pub grid: Vec<FieldPoint>,
    pub solution: Solution,
}

impl BeamSolution {
    /// Deflection at `x`, interpolated linearly between grid points
    pub fn deflection_at(&self, x: f64) -> Option<f64> {
        if let [only] = self.grid.as_slice() {
            return (only.x == x).then_some(only.deflection);
        }
        self.grid.windows(2).find_map(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            if x < a.x || x > b.x {
                None
            } else if b.x == a.x {
                Some(a.deflection)
            } else {
                let t = (x - a.x) / (b.x - a.x);
                Some(a.deflection + t * (b.deflection - a.deflection))
            }
        })
    }

    /// Grid points located exactly at `x` (two for a discontinuity, else one)
    pub fn points_at(&self, x: f64) -> impl Iterator<Item = &FieldPoint> + '_ {
        self.grid.iter().filter(move |p| p.x == x)
    }

    /// Summarize the extreme values over the grid
    pub fn summary(&self) -> AnalysisSummary {
        let mut summary = AnalysisSummary {
            num_grid_points: self.grid.len(),
            num_unknowns: self.solution.len(),
            ..AnalysisSummary::default()
        };

        for point in &self.grid {
            if point.shear.abs() > summary.max_shear.abs() {
                summary.max_shear = point.shear;
                summary.max_shear_x = point.x;
            }
            if point.moment.abs() > summary.max_moment.abs() {
                summary.max_moment = point.moment;
                summary.max_moment_x = point.x;
            }
            if point.deflection.abs() > summary.max_deflection.abs() {
                summary.max_deflection = point.deflection;
                summary.max_deflection_x = point.x;
            }
        }

        summary
    }
}

/// Summary of analysis results
///
/// Extremes are taken by magnitude and reported with their sign.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Largest shear force
    pub max_shear: f64,
    /// Location of the largest shear force
    pub max_shear_x: f64,
    /// Largest bending moment
    pub max_moment: f64,
    /// Location of the largest bending moment
    pub max_moment_x: f64,
    /// Largest deflection
    pub max_deflection: f64,
    /// Location of the largest deflection
    pub max_deflection_x: f64,
    /// Total number of grid points
    pub num_grid_points: usize,
    /// Size of the solved system
    pub num_unknowns: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, deflection: f64) -> FieldPoint {
        FieldPoint {
            x,
            side: None,
            shear: 0.0,
            moment: 0.0,
            slope: 0.0,
            deflection,
        }
    }

    #[test]
    fn test_unknown_names_roundtrip() {
        for u in [
            Unknown::LeftMoment,
            Unknown::LeftForce,
            Unknown::Pin(3),
            Unknown::RightMoment,
            Unknown::RightForce,
            Unknown::C3,
            Unknown::C4,
        ] {
            assert_eq!(Unknown::from_name(&u.name()), Some(u));
        }
        assert_eq!(Unknown::from_name("pin_x"), None);
    }

    #[test]
    fn test_solution_lookup() {
        let solution = Solution::new(
            vec![(Unknown::Pin(0), 60.0), (Unknown::Pin(1), 40.0), (Unknown::C3, 1.5)],
            vec![0.0, 10.0],
        );
        assert_eq!(solution.by_name("pin_1"), Some(40.0));
        assert_eq!(solution.pin_reaction_at(0.0), Some(60.0));
        assert_eq!(solution.pin_reaction_at(5.0), None);
        assert_eq!(solution.get(Unknown::LeftMoment), None);
        assert_eq!(solution.to_map().len(), 3);
    }

    #[test]
    fn test_deflection_interpolation_and_summary() {
        let result = BeamSolution {
            grid: vec![point(0.0, 0.0), point(1.0, -2.0), point(2.0, 0.0)],
            solution: Solution::default(),
        };
        assert_eq!(result.deflection_at(0.5), Some(-1.0));
        assert_eq!(result.deflection_at(3.0), None);

        let summary = result.summary();
        assert_eq!(summary.max_deflection, -2.0);
        assert_eq!(summary.max_deflection_x, 1.0);
        assert_eq!(summary.num_grid_points, 3);
    }
}
