//! Discontinuity-aware grid construction
//!
//! The grid starts as evenly spaced plain points. Every point load, pin and
//! fixed end is then represented by a zero-width pair of points at the same
//! `x`: the [`Side::Minus`] point carries the values just left of the
//! discontinuity and the [`Side::Plus`] point the values just right of it.
//! Colocation is decided with exact floating-point equality.

use serde::{Deserialize, Serialize};

use crate::elements::{Anchor, Pin};
use crate::error::{BeamError, BeamResult};
use crate::loads::PointLoad;

/// Side of a zero-width discontinuity a grid point sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Minus,
    Plus,
}

impl Side {
    /// -1 for the minus side, +1 for the plus side
    pub fn relation(self) -> i8 {
        match self {
            Side::Minus => -1,
            Side::Plus => 1,
        }
    }
}

/// Feature tags on one side of a discontinuity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discontinuity {
    pub side: Side,
    /// Summed magnitude of the point loads at this location
    pub point_load: Option<f64>,
    pub pin: bool,
    pub fixed_anchor: bool,
}

/// Shear, moment, slope and deflection at a point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fields {
    pub v: f64,
    pub m: f64,
    pub theta: f64,
    pub y: f64,
}

/// A point of the solution grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub feature: Option<Discontinuity>,
    /// Particular solution from the applied loads alone
    pub bar: Fields,
    /// Final values after superposition of the solved unknowns
    pub fields: Fields,
}

impl GridPoint {
    fn plain(x: f64) -> Self {
        Self {
            x,
            feature: None,
            bar: Fields::default(),
            fields: Fields::default(),
        }
    }

    fn pair(x: f64, point_load: Option<f64>, pin: bool, fixed_anchor: bool) -> [Self; 2] {
        [Side::Minus, Side::Plus].map(|side| Self {
            feature: Some(Discontinuity {
                side,
                point_load,
                pin,
                fixed_anchor,
            }),
            ..Self::plain(x)
        })
    }

    pub fn side(&self) -> Option<Side> {
        self.feature.map(|f| f.side)
    }

    pub fn is_plain(&self) -> bool {
        self.feature.is_none()
    }

    pub fn is_point_load(&self) -> bool {
        self.feature.is_some_and(|f| f.point_load.is_some())
    }

    pub fn is_pin(&self) -> bool {
        self.feature.is_some_and(|f| f.pin)
    }

    pub fn is_fixed_anchor(&self) -> bool {
        self.feature.is_some_and(|f| f.fixed_anchor)
    }

}

/// Everything that acts at one discontinuity location
#[derive(Debug, Clone, Copy)]
struct Feature {
    x: f64,
    point_load: Option<f64>,
    pin: bool,
    fixed_anchor: bool,
}

impl Feature {
    fn pair(self) -> [GridPoint; 2] {
        GridPoint::pair(self.x, self.point_load, self.pin, self.fixed_anchor)
    }
}

/// Sort the point loads and pins by position and fold colocated ones together
///
/// Loads at the same `x` sum their magnitudes; a pin on a load marks that load.
fn collect_features(point_loads: &[PointLoad], pins: &[Pin]) -> Vec<Feature> {
    let mut features: Vec<Feature> = point_loads
        .iter()
        .map(|load| Feature {
            x: load.x,
            point_load: Some(load.w),
            pin: false,
            fixed_anchor: false,
        })
        .chain(pins.iter().map(|pin| Feature {
            x: pin.x,
            point_load: None,
            pin: true,
            fixed_anchor: false,
        }))
        .collect();
    features.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut merged: Vec<Feature> = Vec::with_capacity(features.len() + 2);
    for feature in features {
        match merged.last_mut() {
            Some(last) if last.x == feature.x => {
                last.point_load = match (last.point_load, feature.point_load) {
                    (Some(a), Some(b)) => Some(a + b),
                    (a, b) => a.or(b),
                };
                last.pin |= feature.pin;
            }
            _ => merged.push(feature),
        }
    }
    merged
}

/// Build the x-sorted grid for a beam
///
/// Features are sorted once and merged with the uniform mesh in a single
/// pass; a mesh point colocated with a feature collapses into its pair.
pub fn build_grid(
    length: f64,
    num_grid_pts: usize,
    point_loads: &[PointLoad],
    pins: &[Pin],
    anchor_left: Anchor,
    anchor_right: Anchor,
) -> BeamResult<Vec<GridPoint>> {
    if num_grid_pts == 0 {
        return Err(BeamError::GridConstruction(
            "num_grid_pts must be a positive integer".to_string(),
        ));
    }

    let mut features = collect_features(point_loads, pins);

    // A fixed end already covered by a load or pin pair keeps that pair
    for (anchor, end) in [(anchor_left, 0.0), (anchor_right, length)] {
        if !anchor.is_fixed() {
            continue;
        }
        let index = features.partition_point(|f| f.x < end);
        if features.get(index).map_or(true, |f| f.x != end) {
            features.insert(
                index,
                Feature {
                    x: end,
                    point_load: None,
                    pin: false,
                    fixed_anchor: true,
                },
            );
        }
    }

    let mut points = Vec::with_capacity(num_grid_pts + 1 + 2 * features.len());
    let mut pending = features.into_iter().peekable();

    for i in 0..=num_grid_pts {
        // Multiply before dividing; the last point is pinned to `length` exactly
        let x = if i == num_grid_pts {
            length
        } else {
            length * i as f64 / num_grid_pts as f64
        };

        while let Some(feature) = pending.next_if(|f| f.x < x) {
            points.extend(feature.pair());
        }
        if pending.peek().is_some_and(|f| f.x == x) {
            continue;
        }
        points.push(GridPoint::plain(x));
    }
    points.extend(pending.flat_map(Feature::pair));

    log::debug!(
        "built grid of {} points ({} requested intervals)",
        points.len(),
        num_grid_pts
    );

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_at(points: &[GridPoint], x: f64) -> usize {
        points.iter().filter(|p| p.x == x).count()
    }

    #[test]
    fn test_plain_grid() {
        let points = build_grid(10.0, 4, &[], &[], Anchor::Free, Anchor::Free).unwrap();
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert!(points.iter().all(GridPoint::is_plain));
    }

    #[test]
    fn test_last_point_is_exact_length() {
        let points = build_grid(0.3, 7, &[], &[], Anchor::Free, Anchor::Free).unwrap();
        assert_eq!(points.last().unwrap().x, 0.3);
    }

    #[test]
    fn test_zero_grid_points_rejected() {
        let err = build_grid(10.0, 0, &[], &[], Anchor::Free, Anchor::Free).unwrap_err();
        assert!(matches!(err, BeamError::GridConstruction(_)));
    }

    #[test]
    fn test_point_load_replaces_plain_node() {
        let loads = [PointLoad::new(5.0, 100.0)];
        let points = build_grid(10.0, 4, &loads, &[], Anchor::Free, Anchor::Free).unwrap();
        // 5 plain - 1 collapsed + 2
        assert_eq!(points.len(), 6);
        assert_eq!(count_at(&points, 5.0), 2);

        let at: Vec<&GridPoint> = points.iter().filter(|p| p.x == 5.0).collect();
        assert_eq!(at[0].side(), Some(Side::Minus));
        assert_eq!(at[1].side(), Some(Side::Plus));
        assert!(at.iter().all(|p| p.is_point_load()));
    }

    #[test]
    fn test_point_load_between_nodes() {
        let loads = [PointLoad::new(4.0, 100.0)];
        let points = build_grid(10.0, 4, &loads, &[], Anchor::Free, Anchor::Free).unwrap();
        assert_eq!(points.len(), 7);
        assert_eq!(points[2].x, 4.0);
        assert_eq!(points[3].x, 4.0);
        assert_eq!(points[4].x, 5.0);
    }

    #[test]
    fn test_duplicate_point_loads_are_summed() {
        let loads = [PointLoad::new(4.0, 100.0), PointLoad::new(4.0, 25.0)];
        let points = build_grid(10.0, 4, &loads, &[], Anchor::Free, Anchor::Free).unwrap();
        assert_eq!(count_at(&points, 4.0), 2);
        for p in points.iter().filter(|p| p.x == 4.0) {
            assert_eq!(p.feature.unwrap().point_load, Some(125.0));
        }
    }

    #[test]
    fn test_pin_coincident_with_point_load_is_marked() {
        let loads = [PointLoad::new(4.0, 100.0)];
        let pins = [Pin::new(4.0), Pin::new(4.0), Pin::new(0.0)];
        let points = build_grid(10.0, 4, &loads, &pins, Anchor::Free, Anchor::Free).unwrap();
        assert_eq!(count_at(&points, 4.0), 2);
        assert!(points.iter().filter(|p| p.x == 4.0).all(|p| p.is_pin() && p.is_point_load()));
        assert_eq!(count_at(&points, 0.0), 2);
        // 5 plain + 2 (load) + 2 (pin at 0) - 1 (collapse at 0)
        assert_eq!(points.len(), 8);
    }

    #[test]
    fn test_fixed_ends_become_pairs() {
        let points = build_grid(10.0, 4, &[], &[], Anchor::Fixed, Anchor::Fixed).unwrap();
        assert_eq!(points.len(), 7);
        assert!(points[0].is_fixed_anchor() && points[1].is_fixed_anchor());
        assert_eq!(points[0].side(), Some(Side::Minus));
        assert_eq!(points[1].side(), Some(Side::Plus));
        assert!(points[5].is_fixed_anchor() && points[6].is_fixed_anchor());
    }

    #[test]
    fn test_fixed_end_with_existing_pin_pair() {
        let pins = [Pin::new(10.0)];
        let points = build_grid(10.0, 4, &[], &pins, Anchor::Free, Anchor::Fixed).unwrap();
        assert_eq!(count_at(&points, 10.0), 2);
        assert!(!points.last().unwrap().is_fixed_anchor());
    }

    #[test]
    fn test_unsorted_features_merge_into_sorted_grid() {
        let loads = [PointLoad::new(7.3, 1.0), PointLoad::new(2.5, 4.0), PointLoad::new(7.3, 2.0)];
        let pins = [Pin::new(5.0), Pin::new(2.5)];
        let points = build_grid(10.0, 4, &loads, &pins, Anchor::Free, Anchor::Free).unwrap();

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.5, 2.5, 5.0, 5.0, 7.3, 7.3, 7.5, 10.0]);
        for pair in points.windows(2).filter(|w| w[0].x == w[1].x) {
            assert_eq!(pair[0].side(), Some(Side::Minus));
            assert_eq!(pair[1].side(), Some(Side::Plus));
        }
        assert!(points[1].is_pin() && points[1].feature.unwrap().point_load == Some(4.0));
        assert!(points[3].is_pin() && !points[3].is_point_load());
        assert_eq!(points[5].feature.unwrap().point_load, Some(3.0));
    }

    #[test]
    fn test_grid_point_count_formula() {
        let loads = [PointLoad::new(1.0, 1.0), PointLoad::new(5.0, 1.0), PointLoad::new(1.0, 2.0)];
        let pins = [Pin::new(0.0), Pin::new(7.0)];
        let n = 10;
        let points = build_grid(10.0, n, &loads, &pins, Anchor::Free, Anchor::Fixed).unwrap();
        // (n + 1) + 2 * 2 loads + 2 * 2 pins + 2 fixed end, minus 5 collapses (1, 5, 0, 7, 10)
        assert_eq!(points.len(), (n + 1) + 4 + 4 + 2 - 5);
        assert!(points.windows(2).all(|w| w[0].x <= w[1].x));
    }
}
