//! EPA penetration resolution
//!
//! Expands the GJK terminal simplex into a polytope hugging the
//! Minkowski-difference boundary, until the polytope edge nearest the
//! origin stops moving outward. That edge's normal and distance are the
//! minimum-translation vector.

use log::{trace, warn};

use crate::config::NarrowPhaseConfig;
use crate::foundation::math::{normalize_or_zero, perp, Vec2};
use super::error::CollisionError;
use super::shape::{minkowski_support, Shape};
use super::simplex::Simplex;

/// Growable cyclic vertex list approximating the Minkowski-difference
/// boundary, live for one EPA call
#[derive(Debug)]
struct Polytope {
    points: Vec<Vec2>,
    cap: usize,
}

impl Polytope {
    fn from_simplex(simplex: &Simplex, cap: usize) -> Self {
        Self {
            points: simplex.points().to_vec(),
            cap,
        }
    }

    /// Splits an edge by inserting `point` before `index`, preserving the
    /// cyclic ordering
    fn insert(&mut self, index: usize, point: Vec2) -> Result<(), CollisionError> {
        if self.points.len() >= self.cap {
            return Err(CollisionError::PolytopeOverflow { cap: self.cap });
        }
        self.points.insert(index, point);
        Ok(())
    }

    /// Edge of the polytope closest to the origin
    ///
    /// Normals are sign-corrected to face away from the origin, distances
    /// to be non-negative. The insertion index is the edge's far endpoint.
    fn nearest_edge(&self) -> NearestEdge {
        let mut best = NearestEdge {
            distance: f32::INFINITY,
            normal: Vec2::zeros(),
            index: 0,
        };
        for i in 0..self.points.len() {
            let j = (i + 1) % self.points.len();
            let edge = self.points[j] - self.points[i];
            let mut normal = normalize_or_zero(perp(edge));
            let mut distance = normal.dot(&self.points[i]);
            if distance < 0.0 {
                distance = -distance;
                normal = -normal;
            }
            if distance < best.distance {
                best = NearestEdge {
                    distance,
                    normal,
                    index: j,
                };
            }
        }
        best
    }
}

#[derive(Debug, Clone, Copy)]
struct NearestEdge {
    distance: f32,
    normal: Vec2,
    index: usize,
}

/// Extracts the minimum-translation vector for an intersecting pair
///
/// `simplex` must be a GJK terminal simplex known to enclose the origin.
/// The result is `normal * (depth + tolerance)`; translating shape `a` by
/// its negation separates the pair, with the tolerance bias leaving a
/// hairline gap so the same contact is not re-detected next tick.
///
/// # Errors
///
/// [`CollisionError::PolytopeOverflow`] when expansion exceeds the vertex
/// cap, [`CollisionError::EpaDidNotConverge`] at the iteration cap.
pub(crate) fn penetration_vector(
    a: &Shape,
    b: &Shape,
    simplex: &Simplex,
    config: &NarrowPhaseConfig,
) -> Result<Vec2, CollisionError> {
    let mut polytope = Polytope::from_simplex(simplex, config.max_polytope_points);

    for iteration in 0..config.epa_max_iterations {
        let edge = polytope.nearest_edge();
        let support = minkowski_support(a, b, edge.normal);
        let support_distance = support.dot(&edge.normal);
        if support_distance - edge.distance < config.tolerance {
            // The nearest edge already lies on the difference boundary.
            trace!(
                "EPA converged after {} iterations, depth {}",
                iteration,
                edge.distance
            );
            return Ok(edge.normal * (edge.distance + config.tolerance));
        }
        polytope.insert(edge.index, support)?;
    }

    warn!(
        "EPA hit the iteration cap ({}) without settling on a boundary edge",
        config.epa_max_iterations
    );
    Err(CollisionError::EpaDidNotConverge {
        iterations: config.epa_max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::gjk;
    use approx::assert_relative_eq;

    fn resolve(a: &Shape, b: &Shape) -> Result<Option<Vec2>, CollisionError> {
        let config = NarrowPhaseConfig::default();
        match gjk::find_intersection(a, b, &config)? {
            Some(simplex) => penetration_vector(a, b, &simplex, &config).map(Some),
            None => Ok(None),
        }
    }

    #[test]
    fn test_rect_overlap_depth_and_axis() {
        let a = Shape::rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Shape::rect(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        let v = resolve(&a, &b).unwrap().expect("rects overlap");
        // Overlap is 5 along both axes; EPA must report the (biased)
        // shallower-axis depth along a single axis.
        assert_relative_eq!(v.norm(), 5.0 + 0.001, epsilon = 1e-3);
        assert_relative_eq!(v.x.abs().min(v.y.abs()), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_uneven_overlap_picks_shallow_axis() {
        // 2 deep in x, 8 deep in y: the minimum translation is along x.
        let a = Shape::rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Shape::rect(Vec2::new(8.0, 2.0), Vec2::new(20.0, 12.0));
        let v = resolve(&a, &b).unwrap().expect("rects overlap");
        assert_relative_eq!(v.x, 2.0 + 0.001, epsilon = 1e-3);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_circle_overlap_depth() {
        // Centers 6 apart, radii sum 10: depth 4 along +x.
        let a = Shape::circle(Vec2::new(0.0, 0.0), 5.0);
        let b = Shape::circle(Vec2::new(6.0, 0.0), 5.0);
        let v = resolve(&a, &b).unwrap().expect("circles overlap");
        assert_relative_eq!(v.norm(), 4.0 + 0.001, epsilon = 0.01);
        assert!(v.x > 0.0);
        // The polytope approximates the curved boundary by chords, so the
        // converged normal can be tilted by up to the chord half-angle.
        assert_relative_eq!(v.y, 0.0, epsilon = 0.1);
    }

    #[test]
    fn test_resolve_is_antisymmetric() {
        let a = Shape::rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Shape::rect(Vec2::new(8.0, 2.0), Vec2::new(20.0, 12.0));
        let ab = resolve(&a, &b).unwrap().unwrap();
        let ba = resolve(&b, &a).unwrap().unwrap();
        assert_relative_eq!(ab.norm(), ba.norm(), epsilon = 1e-3);
        assert_relative_eq!((ab + ba).norm(), 0.0, epsilon = 1e-2);
    }

    #[test]
    fn test_separated_pair_resolves_to_none() {
        let a = Shape::circle(Vec2::new(0.0, 0.0), 1.0);
        let b = Shape::circle(Vec2::new(10.0, 0.0), 1.0);
        assert_eq!(resolve(&a, &b), Ok(None));
    }

    #[test]
    fn test_polytope_insert_respects_cap() {
        let mut simplex = Simplex::new(Vec2::new(1.0, 0.0));
        simplex.push(Vec2::new(-1.0, 1.0));
        simplex.push(Vec2::new(-1.0, -1.0));
        let mut polytope = Polytope::from_simplex(&simplex, 4);
        assert!(polytope.insert(1, Vec2::new(0.0, 1.0)).is_ok());
        assert_eq!(
            polytope.insert(1, Vec2::new(0.0, -1.0)),
            Err(CollisionError::PolytopeOverflow { cap: 4 })
        );
    }
}
