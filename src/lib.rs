//! Beam Deflection - Euler-Bernoulli static beam solver
//!
//! Computes shear, bending moment, slope and deflection of a straight elastic
//! beam under any combination of:
//! - Point loads and a continuous load density w(x)
//! - Pin (simple) supports anywhere along the span
//! - Free or fixed end conditions
//!
//! The loads are integrated numerically into a particular solution on a
//! discontinuity-aware grid; the support reactions and integration constants
//! then come from a small dense linear system.
//!
//! Sign convention: loads and deflection are positive downward, reactions
//! positive upward.
//!
//! ## Example
//! ```rust
//! use beam_deflection::prelude::*;
//!
//! // 10 m cantilever, EI = 100, 100 N at midspan
//! let mut beam = Beam::new(10.0, 1.0, 100.0).unwrap()
//!     .with_anchors(Anchor::Fixed, Anchor::Free);
//! beam.add_point_load(5.0, 100.0).unwrap();
//!
//! let result = beam.solve(&AnalysisOptions::with_grid_points(20)).unwrap();
//! let m0 = result.solution.get(Unknown::LeftMoment).unwrap();
//! assert!((m0 - 500.0).abs() < 1e-6);
//! ```

pub mod analysis;
pub mod definition;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::grid::Side;
    pub use crate::analysis::{solve, AnalysisOptions};
    pub use crate::definition::BeamDefinition;
    pub use crate::elements::{Anchor, Pin, PinId};
    pub use crate::error::{BeamError, BeamResult};
    pub use crate::loads::{ContinuousLoad, PointLoad, PointLoadId};
    pub use crate::model::Beam;
    pub use crate::results::{AnalysisSummary, BeamSolution, FieldPoint, Solution, Unknown};
}
