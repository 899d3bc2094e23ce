//! Mathematical utilities for beam calculations

use nalgebra::{DMatrix, DVector};

pub type Mat = DMatrix<f64>;
pub type Vector = DVector<f64>;

/// Trapezoidal rule over a step of width `h`
pub fn trapezoid(h: f64, fa: f64, fb: f64) -> f64 {
    h * (fa + fb) / 2.0
}

/// Simpson's 1/3 rule over an interval of width `h` with midpoint value `fm`
pub fn simpson(h: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    h * (fa + 4.0 * fm + fb) / 6.0
}

/// Solve a linear system using LU decomposition with partial pivoting
pub fn solve_linear_system(a: &Mat, b: &Vector) -> Option<Vector> {
    a.clone().lu().solve(b)
}

/// Estimate the reciprocal condition number of a square matrix
///
/// Rows and then columns are scaled to unit max-norm before taking the ratio
/// of extreme singular values, so that unknowns with very different units
/// (moments, forces, integration constants) do not read as ill-conditioning.
/// Returns 0.0 for a matrix with a zero row or column.
pub fn reciprocal_condition(a: &Mat) -> f64 {
    let (nrows, ncols) = a.shape();
    if nrows == 0 || ncols == 0 {
        return 0.0;
    }

    let mut scaled = a.clone();

    for i in 0..nrows {
        let max = (0..ncols).map(|j| scaled[(i, j)].abs()).fold(0.0, f64::max);
        if max == 0.0 {
            return 0.0;
        }
        for j in 0..ncols {
            scaled[(i, j)] /= max;
        }
    }

    for j in 0..ncols {
        let max = (0..nrows).map(|i| scaled[(i, j)].abs()).fold(0.0, f64::max);
        if max == 0.0 {
            return 0.0;
        }
        for i in 0..nrows {
            scaled[(i, j)] /= max;
        }
    }

    let singular = scaled.singular_values();
    let max = singular.iter().copied().fold(0.0, f64::max);
    let min = singular.iter().copied().fold(f64::INFINITY, f64::min);

    if max == 0.0 || !min.is_finite() {
        0.0
    } else {
        min / max
    }
}
