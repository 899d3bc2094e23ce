//! Continuous load density along the beam

use std::fmt;
use std::sync::Arc;

type DensityFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

#[derive(Clone)]
enum Density {
    Zero,
    Uniform(f64),
    /// Coefficients in ascending powers of x
    Polynomial(Vec<f64>),
    Custom(DensityFn),
}

/// Load density w(x) in force per unit length, downward positive
#[derive(Clone)]
pub struct ContinuousLoad {
    density: Density,
}

impl ContinuousLoad {
    /// No distributed load
    pub fn zero() -> Self {
        Self {
            density: Density::Zero,
        }
    }

    /// Constant density over the whole span
    pub fn uniform(w: f64) -> Self {
        Self {
            density: Density::Uniform(w),
        }
    }

    /// w(x) = c[0] + c[1]·x + c[2]·x² + ...
    pub fn polynomial(coefficients: Vec<f64>) -> Self {
        if coefficients.iter().all(|c| *c == 0.0) {
            return Self::zero();
        }
        Self {
            density: Density::Polynomial(coefficients),
        }
    }

    /// Arbitrary caller-supplied density function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            density: Density::Custom(Arc::new(f)),
        }
    }

    /// Evaluate the density at `x`
    pub fn at(&self, x: f64) -> f64 {
        match &self.density {
            Density::Zero => 0.0,
            Density::Uniform(w) => *w,
            // Horner
            Density::Polynomial(c) => c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci),
            Density::Custom(f) => f(x),
        }
    }

    /// Check if the density is known to vanish everywhere
    pub fn is_zero(&self) -> bool {
        matches!(self.density, Density::Zero)
    }
}

impl Default for ContinuousLoad {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for ContinuousLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.density {
            Density::Zero => f.write_str("ContinuousLoad::Zero"),
            Density::Uniform(w) => write!(f, "ContinuousLoad::Uniform({w})"),
            Density::Polynomial(c) => write!(f, "ContinuousLoad::Polynomial({c:?})"),
            Density::Custom(_) => f.write_str("ContinuousLoad::Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polynomial_evaluation() {
        // 1 + 2x + 3x^2 at x = 2 -> 17
        let load = ContinuousLoad::polynomial(vec![1.0, 2.0, 3.0]);
        assert_eq!(load.at(2.0), 17.0);
    }

    #[test]
    fn test_zero_polynomial_collapses() {
        assert!(ContinuousLoad::polynomial(vec![0.0, 0.0]).is_zero());
        assert!(ContinuousLoad::default().is_zero());
        assert_eq!(ContinuousLoad::zero().at(3.0), 0.0);
    }

    #[test]
    fn test_custom_density() {
        let load = ContinuousLoad::from_fn(|x| x * x);
        assert_eq!(load.at(10.0), 100.0);
        assert!(!load.is_zero());
        assert_eq!(format!("{load:?}"), "ContinuousLoad::Custom(..)");
    }
}
