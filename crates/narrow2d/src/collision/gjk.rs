//! GJK intersection test
//!
//! Determines whether the Minkowski difference of two convex shapes
//! contains the origin by iteratively growing a simplex toward it. In
//! exact arithmetic the loop always terminates; in floating point a cap
//! bounds it so near-degenerate inputs surface as a typed error instead
//! of a hang.

use log::{trace, warn};

use crate::config::NarrowPhaseConfig;
use crate::foundation::math::normalize_or_zero;
use super::error::CollisionError;
use super::shape::{minkowski_support, Shape};
use super::simplex::Simplex;

/// Runs GJK on a shape pair
///
/// `Ok(Some(simplex))` carries the terminal 3-point simplex for EPA
/// seeding; `Ok(None)` means the shapes are separated.
///
/// # Errors
///
/// Propagates shape capacity violations from [`Shape::validate`] and
/// returns [`CollisionError::GjkDidNotConverge`] at the iteration cap.
pub(crate) fn find_intersection(
    a: &Shape,
    b: &Shape,
    config: &NarrowPhaseConfig,
) -> Result<Option<Simplex>, CollisionError> {
    a.validate()?;
    b.validate()?;

    let mut dir = normalize_or_zero(b.center() - a.center());
    let first = minkowski_support(a, b, dir);
    let mut simplex = Simplex::new(first);
    dir = -first;

    for iteration in 0..config.gjk_max_iterations {
        let point = minkowski_support(a, b, dir);
        if point.dot(&dir) < 0.0 {
            // The origin lies beyond the supporting hyperplane on this
            // axis, so the difference cannot contain it.
            trace!("GJK separated after {} iterations", iteration);
            return Ok(None);
        }
        simplex.push(point);
        if simplex.evolve(&mut dir) {
            trace!("GJK intersection after {} iterations", iteration);
            return Ok(Some(simplex));
        }
    }

    warn!(
        "GJK hit the iteration cap ({}) on a near-degenerate pair",
        config.gjk_max_iterations
    );
    Err(CollisionError::GjkDidNotConverge {
        iterations: config.gjk_max_iterations,
    })
}
