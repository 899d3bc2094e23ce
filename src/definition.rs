//! JSON beam descriptions

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisOptions;
use crate::elements::{Anchor, Pin};
use crate::error::BeamResult;
use crate::loads::{ContinuousLoad, PointLoad};
use crate::model::Beam;

/// Serializable description of a beam and its loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamDefinition {
    pub length: f64,
    pub modulus: f64,
    pub moment_of_inertia: f64,
    #[serde(default)]
    pub anchor_left: Anchor,
    #[serde(default)]
    pub anchor_right: Anchor,
    /// Polynomial coefficients of the load density in ascending powers of x
    #[serde(default)]
    pub continuous_load: Vec<f64>,
    #[serde(default)]
    pub point_loads: Vec<PointLoad>,
    #[serde(default)]
    pub pins: Vec<Pin>,
    #[serde(default)]
    pub options: AnalysisOptions,
}

impl BeamDefinition {
    pub fn from_json(json: &str) -> BeamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a validated beam
    pub fn to_beam(&self) -> BeamResult<Beam> {
        let mut beam = Beam::new(self.length, self.modulus, self.moment_of_inertia)?
            .with_anchors(self.anchor_left, self.anchor_right);
        beam.set_continuous_load(ContinuousLoad::polynomial(self.continuous_load.clone()));
        beam.set_point_loads(&self.point_loads)?;
        beam.set_pins(&self.pins)?;
        Ok(beam)
    }
}
