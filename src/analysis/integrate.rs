//! Particular ("bar") solution from the applied loads alone
//!
//! Shear and moment are accumulated with a 4-step composite trapezoid on each
//! positive-width interval, slope with two Simpson panels (one per half) and
//! deflection with a single Simpson panel using the half-point slope.

use crate::analysis::grid::{Discontinuity, Fields, GridPoint, Side};
use crate::error::{BeamError, BeamResult};
use crate::loads::ContinuousLoad;
use crate::math::{simpson, trapezoid};

/// Sub-steps per positive-width interval
const SUBDIVISIONS: usize = 4;

/// Fill `bar` on every grid point, starting from zero at the first point
pub fn integrate_particular(
    points: &mut [GridPoint],
    load: &ContinuousLoad,
    ei: f64,
) -> BeamResult<()> {
    let Some(first) = points.first_mut() else {
        return Ok(());
    };
    first.bar = Fields::default();

    for k in 1..points.len() {
        let (done, rest) = points.split_at_mut(k);
        let a = &done[k - 1];
        let b = &mut rest[0];
        b.bar = step(a, b.x, load, ei)?;
    }

    Ok(())
}

fn step(a: &GridPoint, xb: f64, load: &ContinuousLoad, ei: f64) -> BeamResult<Fields> {
    if xb < a.x {
        return Err(BeamError::InternalInvariant(format!(
            "grid is not sorted: {} follows {}",
            xb, a.x
        )));
    }

    if xb > a.x {
        return Ok(integrate_interval(a.x, xb, a.bar, load, ei));
    }

    match a.feature {
        Some(Discontinuity {
            side: Side::Minus,
            point_load: Some(w),
            ..
        }) => Ok(Fields {
            v: a.bar.v + w,
            ..a.bar
        }),
        Some(Discontinuity {
            side: Side::Minus,
            pin,
            fixed_anchor,
            ..
        }) if pin || fixed_anchor => Ok(a.bar),
        _ => Err(BeamError::InternalInvariant(format!(
            "zero-width interval at x = {} is not a point load, pin or fixed anchor",
            a.x
        ))),
    }
}

fn integrate_interval(xa: f64, xb: f64, start: Fields, load: &ContinuousLoad, ei: f64) -> Fields {
    let h = xb - xa;
    let q = h / SUBDIVISIONS as f64;

    let w: [f64; SUBDIVISIONS + 1] = std::array::from_fn(|k| {
        if k == SUBDIVISIONS {
            load.at(xb)
        } else {
            load.at(xa + k as f64 * q)
        }
    });

    let mut v = [start.v; SUBDIVISIONS + 1];
    let mut m = [start.m; SUBDIVISIONS + 1];
    for k in 1..=SUBDIVISIONS {
        v[k] = v[k - 1] + trapezoid(q, w[k - 1], w[k]);
        m[k] = m[k - 1] + trapezoid(q, v[k - 1], v[k]);
    }

    let theta_mid = start.theta + simpson(2.0 * q, m[0], m[1], m[2]) / ei;
    let theta_end = theta_mid + simpson(2.0 * q, m[2], m[3], m[4]) / ei;
    let y_end = start.y + simpson(h, start.theta, theta_mid, theta_end);

    log::trace!(
        "interval [{xa}, {xb}]: v={}, m={}, theta={theta_end}, y={y_end}",
        v[SUBDIVISIONS],
        m[SUBDIVISIONS]
    );

    Fields {
        v: v[SUBDIVISIONS],
        m: m[SUBDIVISIONS],
        theta: theta_end,
        y: y_end,
    }
}
