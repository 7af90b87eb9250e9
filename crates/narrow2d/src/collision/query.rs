//! Query façade over GJK and EPA
//!
//! The two entry points the physics-tick driver calls once per candidate
//! pair. Both are pure functions of their shape arguments; the module
//! holds no state between calls, so independent pairs can be queried
//! from any thread without locking.

use crate::config::NarrowPhaseConfig;
use crate::foundation::math::Vec2;
use super::epa;
use super::error::CollisionError;
use super::gjk;
use super::shape::Shape;

/// Narrow-phase query runner carrying its tuning parameters
///
/// Construct one per tuning profile and reuse it; it is `Copy`-cheap to
/// clone and never accumulates state.
#[derive(Debug, Clone, Default)]
pub struct NarrowPhase {
    config: NarrowPhaseConfig,
}

impl NarrowPhase {
    /// Creates a query runner with the given tuning parameters
    pub fn new(config: NarrowPhaseConfig) -> Self {
        Self { config }
    }

    /// The active tuning parameters
    pub fn config(&self) -> &NarrowPhaseConfig {
        &self.config
    }

    /// Tests whether two convex shapes overlap
    ///
    /// Symmetric: `intersects(a, b) == intersects(b, a)`.
    ///
    /// # Errors
    ///
    /// Shape capacity violations and GJK non-convergence; see
    /// [`CollisionError`].
    pub fn intersects(&self, a: &Shape, b: &Shape) -> Result<bool, CollisionError> {
        gjk::find_intersection(a, b, &self.config).map(|simplex| simplex.is_some())
    }

    /// Computes the penetration vector for an overlapping pair
    ///
    /// Returns `Ok(None)` for disjoint shapes without allocating any
    /// polytope state. For an overlapping pair, returns the raw minimum
    /// separating vector (biased outward by the configured tolerance);
    /// how to split the correction between bodies is the caller's policy.
    /// Translating `a` by the negated vector separates the pair.
    ///
    /// # Errors
    ///
    /// Shape capacity violations, polytope overflow, and GJK/EPA
    /// non-convergence; see [`CollisionError`].
    pub fn resolve(&self, a: &Shape, b: &Shape) -> Result<Option<Vec2>, CollisionError> {
        match gjk::find_intersection(a, b, &self.config)? {
            Some(simplex) => epa::penetration_vector(a, b, &simplex, &self.config).map(Some),
            None => Ok(None),
        }
    }
}

/// [`NarrowPhase::intersects`] with default tuning
///
/// # Errors
///
/// See [`NarrowPhase::intersects`].
pub fn intersects(a: &Shape, b: &Shape) -> Result<bool, CollisionError> {
    NarrowPhase::default().intersects(a, b)
}

/// [`NarrowPhase::resolve`] with default tuning
///
/// # Errors
///
/// See [`NarrowPhase::resolve`].
pub fn resolve(a: &Shape, b: &Shape) -> Result<Option<Vec2>, CollisionError> {
    NarrowPhase::default().resolve(a, b)
}
