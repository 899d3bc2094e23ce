//! Assembly of the reaction / integration-constant system
//!
//! Columns follow [`Unknown`] order: `[m0, p0]` for a fixed left end, one
//! reaction per distinct pin location in ascending x, `[mL, pL]` for a fixed
//! right end, then `[c3, c4]`. The shear and moment constants are zero since
//! every force acting at x = 0 is an explicit reaction unknown.

use crate::analysis::grid::GridPoint;
use crate::elements::{Anchor, Pin};
use crate::error::{BeamError, BeamResult};
use crate::math::{Mat, Vector};
use crate::results::{Solution, Unknown};

/// Combine the section and modulus factors into EI
pub fn flexural_rigidity(modulus: f64, moment_of_inertia: f64) -> BeamResult<f64> {
    if modulus.is_nan() || modulus <= 0.0 || moment_of_inertia.is_nan() || moment_of_inertia <= 0.0 {
        return Err(BeamError::Physical(format!(
            "flexural rigidity factors must be positive (E = {modulus}, I = {moment_of_inertia})"
        )));
    }
    let ei = modulus * moment_of_inertia;
    if !ei.is_finite() || ei <= 0.0 {
        return Err(BeamError::Physical(format!("EI = {ei} is not a usable rigidity")));
    }
    Ok(ei)
}

/// Which unknowns exist for a beam and where their reactions act
#[derive(Debug, Clone)]
pub struct UnknownLayout {
    unknowns: Vec<Unknown>,
    pins: Vec<f64>,
    length: f64,
    anchor_left: Anchor,
    anchor_right: Anchor,
}

impl UnknownLayout {
    pub fn new(length: f64, pins: &[Pin], anchor_left: Anchor, anchor_right: Anchor) -> Self {
        let mut locations: Vec<f64> = pins.iter().map(|p| p.x).collect();
        locations.sort_by(f64::total_cmp);
        locations.dedup();

        let mut unknowns = Vec::with_capacity(anchor_left.dofs() + locations.len() + anchor_right.dofs() + 2);
        if anchor_left.is_fixed() {
            unknowns.extend([Unknown::LeftMoment, Unknown::LeftForce]);
        }
        unknowns.extend((0..locations.len()).map(Unknown::Pin));
        if anchor_right.is_fixed() {
            unknowns.extend([Unknown::RightMoment, Unknown::RightForce]);
        }
        unknowns.extend([Unknown::C3, Unknown::C4]);

        Self {
            unknowns,
            pins: locations,
            length,
            anchor_left,
            anchor_right,
        }
    }

    pub fn len(&self) -> usize {
        self.unknowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unknowns.is_empty()
    }

    pub fn unknowns(&self) -> &[Unknown] {
        &self.unknowns
    }

    /// Distinct pin locations in ascending order
    pub fn pin_locations(&self) -> &[f64] {
        &self.pins
    }

    /// Characteristic size of every unknown: `EI/L` for the end moments,
    /// `EI/L²` for the reactions, 1 for `c3` and `L` for `c4`
    ///
    /// Dividing each column of the system by its scale leaves coefficients
    /// that depend only on `x / L`.
    pub fn scales(&self, ei: f64) -> Vector {
        let l = self.length;
        Vector::from_iterator(
            self.len(),
            self.unknowns.iter().map(|unknown| match unknown {
                Unknown::LeftMoment | Unknown::RightMoment => ei / l,
                Unknown::LeftForce | Unknown::RightForce | Unknown::Pin(_) => ei / (l * l),
                Unknown::C3 => 1.0,
                Unknown::C4 => l,
            }),
        )
    }

    /// Pair solved values with their unknowns
    pub fn solution(&self, values: &Vector) -> Solution {
        let entries = self
            .unknowns
            .iter()
            .zip(values.iter())
            .map(|(u, value)| (*u, *value))
            .collect();
        Solution::new(entries, self.pins.clone())
    }

    /// Coefficients of every unknown in the shear, moment, slope and
    /// deflection at `x`
    ///
    /// A reaction located exactly at `x` is counted only when
    /// `include_at_x` is set (the plus side of a discontinuity, or a plain
    /// point). Its contribution to slope and deflection is zero either way.
    pub(crate) fn influence(&self, x: f64, include_at_x: bool, ei: f64) -> Influence {
        let n = self.len();
        let mut inf = Influence {
            v: Vector::zeros(n),
            m: Vector::zeros(n),
            theta: Vector::zeros(n),
            y: Vector::zeros(n),
        };
        let acts = |xr: f64| xr < x || (xr == x && include_at_x);

        for (col, unknown) in self.unknowns.iter().enumerate() {
            let (location, is_moment) = match unknown {
                Unknown::LeftMoment => (0.0, true),
                Unknown::LeftForce => (0.0, false),
                Unknown::Pin(i) => (self.pins[*i], false),
                Unknown::RightMoment => (self.length, true),
                Unknown::RightForce => (self.length, false),
                Unknown::C3 => {
                    inf.theta[col] = 1.0;
                    inf.y[col] = x;
                    continue;
                }
                Unknown::C4 => {
                    inf.y[col] = 1.0;
                    continue;
                }
            };

            if !acts(location) {
                continue;
            }
            let d = x - location;
            if is_moment {
                inf.m[col] = 1.0;
                inf.theta[col] = d / ei;
                inf.y[col] = d * d / (2.0 * ei);
            } else {
                inf.v[col] = -1.0;
                inf.m[col] = -d;
                inf.theta[col] = -d * d / (2.0 * ei);
                inf.y[col] = -d * d * d / (6.0 * ei);
            }
        }

        inf
    }
}

/// Per-field coefficient rows at one location
#[derive(Debug, Clone)]
pub(crate) struct Influence {
    pub v: Vector,
    pub m: Vector,
    pub theta: Vector,
    pub y: Vector,
}

/// The square system `a · x = b`
#[derive(Debug, Clone)]
pub struct LinearSystem {
    pub a: Mat,
    pub b: Vector,
    /// Column scales making the system dimensionless, see [`UnknownLayout::scales`]
    pub scales: Vector,
}

impl LinearSystem {
    pub fn dim(&self) -> usize {
        self.b.len()
    }
}

/// Build the boundary/support equations from the particular solution
pub fn assemble(points: &[GridPoint], layout: &UnknownLayout, ei: f64) -> BeamResult<LinearSystem> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(BeamError::InternalInvariant("empty grid".to_string()));
    };
    if last.x != layout.length {
        return Err(BeamError::InternalInvariant(format!(
            "grid ends at {} instead of the beam length {}",
            last.x, layout.length
        )));
    }

    let mut rows: Vec<(Vector, f64)> = Vec::with_capacity(layout.len());

    if layout.anchor_left.is_fixed() {
        let inf = layout.influence(first.x, false, ei);
        rows.push((inf.y, 0.0));
        rows.push((inf.theta, 0.0));
    }

    for &x in layout.pin_locations() {
        let point = points.iter().find(|p| p.x == x).ok_or_else(|| {
            BeamError::InternalInvariant(format!("no grid point at pin location {x}"))
        })?;
        let inf = layout.influence(x, false, ei);
        rows.push((inf.y, -point.bar.y));
    }

    let end = layout.influence(layout.length, true, ei);

    if layout.anchor_right.is_fixed() {
        rows.push((end.y.clone(), -last.bar.y));
        rows.push((end.theta.clone(), -last.bar.theta));
    }

    rows.push((end.m, -last.bar.m));
    rows.push((end.v, -last.bar.v));

    let n = layout.len();
    if rows.len() != n {
        return Err(BeamError::InternalInvariant(format!(
            "{} equations for {} unknowns",
            rows.len(),
            n
        )));
    }

    let mut a = Mat::zeros(n, n);
    let mut b = Vector::zeros(n);
    for (i, (coefficients, rhs)) in rows.into_iter().enumerate() {
        a.set_row(i, &coefficients.transpose());
        b[i] = rhs;
    }

    log::debug!(
        "assembled {n}x{n} system: {} pins, left {}, right {}",
        layout.pin_locations().len(),
        layout.anchor_left,
        layout.anchor_right
    );

    Ok(LinearSystem {
        a,
        b,
        scales: layout.scales(ei),
    })
}
