//! Typed failure modes of the narrow phase

use thiserror::Error;

/// Errors surfaced by collision queries
///
/// Geometric degeneracies (zero-length directions) are absorbed locally by
/// the zero-vector normalize policy and never reach the caller; only
/// capacity violations and non-convergence do. A well-behaved caller
/// treats any of these as "no correction this tick" rather than aborting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// A polygon carries more vertices than the support scan allows
    #[error("polygon has {count} vertices, limit is {limit}")]
    ShapeTooComplex {
        /// Vertex count of the offending polygon
        count: usize,
        /// Maximum supported vertex count
        limit: usize,
    },

    /// A polygon with no vertices has no support point
    #[error("polygon has no vertices")]
    EmptyPolygon,

    /// The EPA polytope grew past its vertex cap; the inputs are too close
    /// to degenerate or non-convex for the algorithm
    #[error("EPA polytope exceeded {cap} vertices")]
    PolytopeOverflow {
        /// Configured polytope vertex cap
        cap: usize,
    },

    /// The GJK simplex loop hit its iteration cap without deciding
    #[error("GJK did not converge within {iterations} iterations")]
    GjkDidNotConverge {
        /// Configured iteration cap
        iterations: usize,
    },

    /// The EPA expansion loop hit its iteration cap without the nearest
    /// edge reaching the Minkowski-difference boundary
    #[error("EPA did not converge within {iterations} iterations")]
    EpaDidNotConverge {
        /// Configured iteration cap
        iterations: usize,
    },
}
