//! Analysis options and the solve pipeline
//!
//! grid -> particular solution -> equation assembly -> linear solve ->
//! superposition. Every stage works on state local to one call.

pub mod assemble;
pub mod grid;
pub mod integrate;
pub mod solver;

use serde::{Deserialize, Serialize};

use crate::error::BeamResult;
use crate::model::Beam;
use crate::results::{BeamSolution, FieldPoint};

use self::assemble::UnknownLayout;

/// Options for beam analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Number of evenly spaced intervals before features are inserted
    pub num_grid_pts: usize,
    /// Reciprocal condition number below which the system is rejected
    pub condition_tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            num_grid_pts: 100,
            condition_tolerance: 1e-12,
        }
    }
}

impl AnalysisOptions {
    /// Default options with the given grid resolution
    pub fn with_grid_points(num_grid_pts: usize) -> Self {
        Self {
            num_grid_pts,
            ..Self::default()
        }
    }

    /// Set the conditioning threshold
    pub fn with_condition_tolerance(mut self, tol: f64) -> Self {
        self.condition_tolerance = tol;
        self
    }
}

/// Compute shear, moment, slope and deflection for a beam
///
/// Pure: the beam is only read, and the returned grid is built fresh.
pub fn solve(beam: &Beam, options: &AnalysisOptions) -> BeamResult<BeamSolution> {
    let ei = assemble::flexural_rigidity(beam.modulus(), beam.moment_of_inertia())?;

    let point_loads: Vec<_> = beam.point_loads().collect();
    let pins: Vec<_> = beam.pins().collect();

    let mut points = grid::build_grid(
        beam.length(),
        options.num_grid_pts,
        &point_loads,
        &pins,
        beam.anchor_left(),
        beam.anchor_right(),
    )?;

    integrate::integrate_particular(&mut points, beam.continuous_load(), ei)?;

    let layout = UnknownLayout::new(beam.length(), &pins, beam.anchor_left(), beam.anchor_right());
    let system = assemble::assemble(&points, &layout, ei)?;
    let values = solver::solve_system(&system, options.condition_tolerance)?;
    solver::superpose(&mut points, &layout, &values, ei);

    let solution = layout.solution(&values);
    for (unknown, value) in solution.iter() {
        log::debug!("{unknown} = {value}");
    }

    let grid = points
        .iter()
        .map(|p| FieldPoint {
            x: p.x,
            side: p.side(),
            shear: p.fields.v,
            moment: p.fields.m,
            slope: p.fields.theta,
            deflection: p.fields.y,
        })
        .collect();

    Ok(BeamSolution { grid, solution })
}
