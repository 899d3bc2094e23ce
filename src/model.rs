//! Beam - validated configuration container

use crate::analysis::{self, AnalysisOptions};
use crate::elements::{Anchor, Pin, PinId};
use crate::error::{BeamError, BeamResult};
use crate::loads::{ContinuousLoad, PointLoad, PointLoadId};
use crate::results::BeamSolution;

/// A one-dimensional elastic beam and its loading
///
/// Every setter validates its input and fails immediately; a successful
/// mutation discards the stored solution.
#[derive(Debug, Clone)]
pub struct Beam {
    length: f64,
    modulus: f64,
    moment_of_inertia: f64,
    anchor_left: Anchor,
    anchor_right: Anchor,
    continuous_load: ContinuousLoad,
    point_loads: Vec<(PointLoadId, PointLoad)>,
    pins: Vec<(PinId, Pin)>,
    next_id: u64,

    /// Result of the last `analyze` since the most recent mutation
    solution: Option<BeamSolution>,
}

fn positive(field: &str, value: f64) -> BeamResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BeamError::configuration(
            field,
            format!("must be a positive number (got {value})"),
        ))
    }
}

impl Beam {
    /// Create a free-free beam with no loads or supports
    pub fn new(length: f64, modulus: f64, moment_of_inertia: f64) -> BeamResult<Self> {
        Ok(Self {
            length: positive("length", length)?,
            modulus: positive("modulus", modulus)?,
            moment_of_inertia: positive("moment_of_inertia", moment_of_inertia)?,
            anchor_left: Anchor::Free,
            anchor_right: Anchor::Free,
            continuous_load: ContinuousLoad::zero(),
            point_loads: Vec::new(),
            pins: Vec::new(),
            next_id: 0,
            solution: None,
        })
    }

    /// Set both end conditions
    pub fn with_anchors(mut self, left: Anchor, right: Anchor) -> Self {
        self.set_anchor_left(left);
        self.set_anchor_right(right);
        self
    }

    // ========================
    // Properties
    // ========================

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Set the length; fails if a load or pin would fall beyond the new end
    pub fn set_length(&mut self, length: f64) -> BeamResult<()> {
        let length = positive("length", length)?;
        let furthest = self
            .point_loads
            .iter()
            .map(|(_, p)| p.x)
            .chain(self.pins.iter().map(|(_, p)| p.x))
            .fold(0.0, f64::max);
        if furthest > length {
            return Err(BeamError::configuration(
                "length",
                format!("{length} is shorter than a feature positioned at {furthest}"),
            ));
        }
        self.length = length;
        self.invalidate();
        Ok(())
    }

    /// Modulus of elasticity (E)
    pub fn modulus(&self) -> f64 {
        self.modulus
    }

    pub fn set_modulus(&mut self, modulus: f64) -> BeamResult<()> {
        self.modulus = positive("modulus", modulus)?;
        self.invalidate();
        Ok(())
    }

    /// Second moment of area (I)
    pub fn moment_of_inertia(&self) -> f64 {
        self.moment_of_inertia
    }

    pub fn set_moment_of_inertia(&mut self, moment_of_inertia: f64) -> BeamResult<()> {
        self.moment_of_inertia = positive("moment_of_inertia", moment_of_inertia)?;
        self.invalidate();
        Ok(())
    }

    /// Flexural rigidity E·I
    pub fn flexural_rigidity(&self) -> f64 {
        self.modulus * self.moment_of_inertia
    }

    pub fn anchor_left(&self) -> Anchor {
        self.anchor_left
    }

    pub fn set_anchor_left(&mut self, anchor: Anchor) {
        self.anchor_left = anchor;
        self.invalidate();
    }

    pub fn anchor_right(&self) -> Anchor {
        self.anchor_right
    }

    pub fn set_anchor_right(&mut self, anchor: Anchor) {
        self.anchor_right = anchor;
        self.invalidate();
    }

    pub fn continuous_load(&self) -> &ContinuousLoad {
        &self.continuous_load
    }

    pub fn set_continuous_load(&mut self, load: ContinuousLoad) {
        self.continuous_load = load;
        self.invalidate();
    }

    // ========================
    // Point loads and pins
    // ========================

    fn position(&self, field: &str, x: f64) -> BeamResult<f64> {
        if !x.is_finite() || x < 0.0 || x > self.length {
            return Err(BeamError::configuration(
                field,
                format!("x must lie within [0, {}] (got {x})", self.length),
            ));
        }
        // normalizes -0.0
        Ok(x + 0.0)
    }

    fn point_load_record(&self, x: f64, w: f64) -> BeamResult<PointLoad> {
        let x = self.position("point_load", x)?;
        if !w.is_finite() {
            return Err(BeamError::configuration(
                "point_load",
                format!("w must be a finite number (got {w})"),
            ));
        }
        Ok(PointLoad::new(x, w))
    }

    fn next_handle(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a downward force `w` at distance `x` from the left end
    pub fn add_point_load(&mut self, x: f64, w: f64) -> BeamResult<PointLoadId> {
        let load = self.point_load_record(x, w)?;
        let id = PointLoadId(self.next_handle());
        self.point_loads.push((id, load));
        self.invalidate();
        Ok(id)
    }

    /// Remove a point load previously returned by [`Beam::add_point_load`]
    pub fn remove_point_load(&mut self, id: PointLoadId) -> BeamResult<PointLoad> {
        let index = self
            .point_loads
            .iter()
            .position(|(stored, _)| *stored == id)
            .ok_or(BeamError::PointLoadNotFound(id.0))?;
        let (_, load) = self.point_loads.remove(index);
        self.invalidate();
        Ok(load)
    }

    /// Replace all point loads; nothing changes if any record is invalid
    pub fn set_point_loads(&mut self, loads: &[PointLoad]) -> BeamResult<Vec<PointLoadId>> {
        let records = loads
            .iter()
            .map(|l| self.point_load_record(l.x, l.w))
            .collect::<BeamResult<Vec<_>>>()?;

        self.point_loads.clear();
        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            let id = PointLoadId(self.next_handle());
            self.point_loads.push((id, record));
            ids.push(id);
        }
        self.invalidate();
        Ok(ids)
    }

    pub fn point_load(&self, id: PointLoadId) -> Option<PointLoad> {
        self.point_loads
            .iter()
            .find(|(stored, _)| *stored == id)
            .map(|(_, load)| *load)
    }

    /// Point loads in insertion order
    pub fn point_loads(&self) -> impl Iterator<Item = PointLoad> + '_ {
        self.point_loads.iter().map(|(_, load)| *load)
    }

    /// Add a pin support at distance `x` from the left end
    pub fn add_pin(&mut self, x: f64) -> BeamResult<PinId> {
        let x = self.position("pin", x)?;
        let id = PinId(self.next_handle());
        self.pins.push((id, Pin::new(x)));
        self.invalidate();
        Ok(id)
    }

    /// Remove a pin previously returned by [`Beam::add_pin`]
    pub fn remove_pin(&mut self, id: PinId) -> BeamResult<Pin> {
        let index = self
            .pins
            .iter()
            .position(|(stored, _)| *stored == id)
            .ok_or(BeamError::PinNotFound(id.0))?;
        let (_, pin) = self.pins.remove(index);
        self.invalidate();
        Ok(pin)
    }

    /// Replace all pins; nothing changes if any record is invalid
    pub fn set_pins(&mut self, pins: &[Pin]) -> BeamResult<Vec<PinId>> {
        let records = pins
            .iter()
            .map(|p| self.position("pin", p.x).map(Pin::new))
            .collect::<BeamResult<Vec<_>>>()?;

        self.pins.clear();
        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            let id = PinId(self.next_handle());
            self.pins.push((id, record));
            ids.push(id);
        }
        self.invalidate();
        Ok(ids)
    }

    pub fn pin(&self, id: PinId) -> Option<Pin> {
        self.pins
            .iter()
            .find(|(stored, _)| *stored == id)
            .map(|(_, pin)| *pin)
    }

    /// Pins in insertion order
    pub fn pins(&self) -> impl Iterator<Item = Pin> + '_ {
        self.pins.iter().map(|(_, pin)| *pin)
    }

    // ========================
    // Analysis
    // ========================

    fn invalidate(&mut self) {
        self.solution = None;
    }

    /// Solve without touching the stored solution
    pub fn solve(&self, options: &AnalysisOptions) -> BeamResult<BeamSolution> {
        analysis::solve(self, options)
    }

    /// Solve and store the result until the next mutation
    pub fn analyze(&mut self, options: &AnalysisOptions) -> BeamResult<&BeamSolution> {
        let solution = analysis::solve(self, options)?;
        Ok(self.solution.insert(solution))
    }

    /// Check if a solution is stored for the current configuration
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    pub fn solution(&self) -> Option<&BeamSolution> {
        self.solution.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beam() -> Beam {
        Beam::new(10.0, 1.0, 100.0).unwrap()
    }

    fn solved_beam() -> Beam {
        let mut b = beam();
        b.add_pin(0.0).unwrap();
        b.add_pin(10.0).unwrap();
        b.analyze(&AnalysisOptions::with_grid_points(4)).unwrap();
        assert!(b.is_solved());
        b
    }

    #[test]
    fn test_new_beam_defaults() {
        let b = beam();
        assert_eq!(b.length(), 10.0);
        assert_eq!(b.flexural_rigidity(), 100.0);
        assert_eq!(b.anchor_left(), Anchor::Free);
        assert_eq!(b.anchor_right(), Anchor::Free);
        assert!(b.continuous_load().is_zero());
        assert_eq!(b.point_loads().count(), 0);
        assert!(!b.is_solved());
    }

    #[test]
    fn test_rejects_non_positive_properties() {
        assert!(matches!(
            Beam::new(-5.0, 1.0, 1.0),
            Err(BeamError::Configuration { .. })
        ));
        assert!(Beam::new(5.0, 0.0, 1.0).is_err());
        assert!(Beam::new(5.0, 1.0, f64::NAN).is_err());

        let mut b = beam();
        assert!(b.set_length(0.0).is_err());
        assert!(b.set_modulus(-1.0).is_err());
        assert!(b.set_moment_of_inertia(f64::INFINITY).is_err());
        assert_eq!(b.length(), 10.0);
    }

    #[test]
    fn test_add_and_remove_point_load() {
        let mut b = beam();
        let p1 = b.add_point_load(10.0, 20.0).unwrap();
        let p2 = b.add_point_load(5.0, 30.0).unwrap();
        assert_eq!(
            b.point_loads().collect::<Vec<_>>(),
            vec![PointLoad::new(10.0, 20.0), PointLoad::new(5.0, 30.0)]
        );

        assert_eq!(b.remove_point_load(p1).unwrap(), PointLoad::new(10.0, 20.0));
        assert_eq!(b.point_loads().collect::<Vec<_>>(), vec![PointLoad::new(5.0, 30.0)]);
        assert!(matches!(
            b.remove_point_load(p1),
            Err(BeamError::PointLoadNotFound(_))
        ));
        assert_eq!(b.point_load(p2), Some(PointLoad::new(5.0, 30.0)));
    }

    #[test]
    fn test_equal_records_have_distinct_handles() {
        let mut b = beam();
        let p1 = b.add_point_load(4.0, 5.0).unwrap();
        let p2 = b.add_point_load(4.0, 5.0).unwrap();
        assert_ne!(p1, p2);
        b.remove_point_load(p2).unwrap();
        assert_eq!(b.point_load(p1), Some(PointLoad::new(4.0, 5.0)));
    }

    #[test]
    fn test_feature_positions_are_validated() {
        let mut b = beam();
        assert!(b.add_point_load(11.0, 1.0).is_err());
        assert!(b.add_point_load(-1.0, 1.0).is_err());
        assert!(b.add_point_load(1.0, f64::NAN).is_err());
        assert!(b.add_pin(f64::NAN).is_err());

        b.add_pin(8.0).unwrap();
        assert!(b.set_length(6.0).is_err());
        assert!(b.set_length(8.0).is_ok());
    }

    #[test]
    fn test_set_collections_is_all_or_nothing() {
        let mut b = beam();
        b.set_point_loads(&[PointLoad::new(4.0, 5.0), PointLoad::new(6.0, 3.0)])
            .unwrap();
        assert!(b
            .set_point_loads(&[PointLoad::new(4.0, 5.0), PointLoad::new(60.0, 3.0)])
            .is_err());
        assert_eq!(b.point_loads().count(), 2);

        let ids = b.set_pins(&[Pin::new(0.0), Pin::new(10.0)]).unwrap();
        assert_eq!(b.remove_pin(ids[0]).unwrap(), Pin::new(0.0));
        assert!(matches!(b.remove_pin(ids[0]), Err(BeamError::PinNotFound(_))));
        assert_eq!(b.pin(ids[1]), Some(Pin::new(10.0)));
    }

    #[test]
    fn test_mutations_discard_solution() {
        let mut b = solved_beam();
        b.set_length(12.0).unwrap();
        assert!(!b.is_solved());

        let mut b = solved_beam();
        b.set_anchor_left(Anchor::Fixed);
        assert!(!b.is_solved());

        let mut b = solved_beam();
        b.set_continuous_load(ContinuousLoad::from_fn(|x| x * x));
        assert!(!b.is_solved());

        let mut b = solved_beam();
        let id = b.add_point_load(5.0, 1.0).unwrap();
        assert!(!b.is_solved());
        b.analyze(&AnalysisOptions::with_grid_points(4)).unwrap();
        b.remove_point_load(id).unwrap();
        assert!(!b.is_solved());
    }

    #[test]
    fn test_failed_mutation_keeps_solution() {
        let mut b = solved_beam();
        assert!(b.set_modulus(-3.0).is_err());
        assert!(b.is_solved());
    }

    #[test]
    fn test_failed_analysis_leaves_unsolved() {
        let mut b = beam();
        assert!(b.analyze(&AnalysisOptions::default()).is_err());
        assert!(!b.is_solved());
    }
}
