//! Linear solve and superposition of the unknowns onto the grid

use crate::analysis::assemble::{LinearSystem, UnknownLayout};
use crate::analysis::grid::{Fields, GridPoint, Side};
use crate::error::{BeamError, BeamResult};
use crate::math::{self, Vector};

/// Solve the assembled system, rejecting singular or ill-conditioned ones
///
/// Conditioning is judged on the dimensionless system (columns multiplied
/// by [`LinearSystem::scales`]), so stiff or long beams are not rejected for
/// their units alone.
pub fn solve_system(system: &LinearSystem, condition_tolerance: f64) -> BeamResult<Vector> {
    let mut a = system.a.clone();
    for (j, scale) in system.scales.iter().enumerate() {
        a.column_mut(j).scale_mut(*scale);
    }

    let rcond = math::reciprocal_condition(&a);
    if rcond < condition_tolerance {
        return Err(BeamError::Solve(format!(
            "system is singular or ill-conditioned (rcond = {rcond:.3e}); \
             the beam has insufficient or redundant supports"
        )));
    }
    if rcond < condition_tolerance * 1e3 {
        log::warn!("system is poorly conditioned (rcond = {rcond:.3e})");
    }

    let values = math::solve_linear_system(&a, &system.b)
        .ok_or_else(|| BeamError::Solve("LU factorization found a zero pivot".to_string()))?
        .component_mul(&system.scales);

    if values.iter().any(|v| !v.is_finite()) {
        return Err(BeamError::Solve("solution contains non-finite values".to_string()));
    }

    Ok(values)
}

/// Write the final fields on every grid point
///
/// Reactions at or before each point contribute; at a discontinuity the
/// minus side excludes the reaction located there.
pub fn superpose(points: &mut [GridPoint], layout: &UnknownLayout, values: &Vector, ei: f64) {
    for point in points.iter_mut() {
        let include_at_x = point.side() != Some(Side::Minus);
        let inf = layout.influence(point.x, include_at_x, ei);
        point.fields = Fields {
            v: point.bar.v + inf.v.dot(values),
            m: point.bar.m + inf.m.dot(values),
            theta: point.bar.theta + inf.theta.dot(values),
            y: point.bar.y + inf.y.dot(values),
        };
    }
}
