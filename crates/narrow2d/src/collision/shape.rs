//! Convex collision shapes and their support mappings
//!
//! Shapes are immutable world-space snapshots, rebuilt by the caller each
//! tick from live actor state. The collision engine never mutates or owns
//! them beyond the duration of a query.

use crate::foundation::math::{constants::TAU, normalize_or_zero, Vec2};
use super::error::CollisionError;

/// Maximum vertex count for a convex polygon
pub const MAX_POLYGON_POINTS: usize = 10;

/// A convex collision shape in world space
///
/// The shape set is closed and known at compile time, so GJK/EPA stay
/// shape-agnostic through match dispatch rather than dynamic dispatch.
/// Every variant answers the same two questions: where is its center, and
/// which of its points is farthest along a given direction.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle spanning `min` to `max`
    /// (invariant: `min.x <= max.x`, `min.y <= max.y`)
    Rect {
        /// Lower-left corner
        min: Vec2,
        /// Upper-right corner
        max: Vec2,
    },
    /// Circle (invariant: `radius >= 0`)
    Circle {
        /// Center position
        center: Vec2,
        /// Radius
        radius: f32,
    },
    /// Convex polygon with local-space vertices around an origin
    /// (invariant: `1 <= points.len() <= MAX_POLYGON_POINTS`, consistent
    /// winding, no self-intersection)
    Polygon {
        /// Vertices in local space; world vertex `i` is `origin + points[i]`
        points: Vec<Vec2>,
        /// World-space position of the polygon
        origin: Vec2,
    },
    /// Swept circle between two endpoints (invariant: `radius >= 0`)
    Capsule {
        /// First endpoint
        a: Vec2,
        /// Second endpoint
        b: Vec2,
        /// Radius of the sweep
        radius: f32,
    },
}

impl Shape {
    /// Creates an axis-aligned rectangle from its corners
    pub fn rect(min: Vec2, max: Vec2) -> Self {
        Self::Rect { min, max }
    }

    /// Creates a circle with the given center and radius
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::Circle { center, radius }
    }

    /// Creates a capsule between two endpoints
    pub fn capsule(a: Vec2, b: Vec2, radius: f32) -> Self {
        Self::Capsule { a, b, radius }
    }

    /// Creates a convex polygon from local-space vertices
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError::EmptyPolygon`] for zero vertices and
    /// [`CollisionError::ShapeTooComplex`] past [`MAX_POLYGON_POINTS`].
    pub fn polygon(points: Vec<Vec2>, origin: Vec2) -> Result<Self, CollisionError> {
        let shape = Self::Polygon { points, origin };
        shape.validate()?;
        Ok(shape)
    }

    /// Creates a regular `sides`-gon of the given circumradius, rotated by
    /// `offset_angle` radians
    ///
    /// # Errors
    ///
    /// Same capacity rules as [`Shape::polygon`].
    pub fn regular_polygon(
        origin: Vec2,
        sides: usize,
        radius: f32,
        offset_angle: f32,
    ) -> Result<Self, CollisionError> {
        #[allow(clippy::cast_precision_loss)]
        let points = (0..sides)
            .map(|i| {
                let angle = offset_angle + TAU * i as f32 / sides as f32;
                Vec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self::polygon(points, origin)
    }

    /// Checks the capacity invariants that queries rely on
    ///
    /// # Errors
    ///
    /// Returns the same typed errors as [`Shape::polygon`]. Queries call
    /// this on entry so that shapes built through the enum directly are
    /// still rejected instead of producing garbage support points.
    pub fn validate(&self) -> Result<(), CollisionError> {
        if let Self::Polygon { points, .. } = self {
            if points.is_empty() {
                return Err(CollisionError::EmptyPolygon);
            }
            if points.len() > MAX_POLYGON_POINTS {
                return Err(CollisionError::ShapeTooComplex {
                    count: points.len(),
                    limit: MAX_POLYGON_POINTS,
                });
            }
        }
        Ok(())
    }

    /// Center of the shape, used to seed the GJK search direction
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Rect { min, max } => (min + max) / 2.0,
            Self::Circle { center, .. } => *center,
            Self::Polygon { origin, .. } => *origin,
            Self::Capsule { a, b, .. } => (a + b) / 2.0,
        }
    }

    /// Farthest point of the shape along `dir`, in world space
    ///
    /// Maximizes `dot(point, dir)`. A zero `dir` is tolerated and yields
    /// a fixed (geometrically meaningless) point per variant rather than
    /// NaN; see [`normalize_or_zero`].
    pub fn support(&self, dir: Vec2) -> Vec2 {
        match self {
            Self::Rect { min, max } => Vec2::new(
                if dir.x > 0.0 { max.x } else { min.x },
                if dir.y > 0.0 { max.y } else { min.y },
            ),
            Self::Circle { center, radius } => center + normalize_or_zero(dir) * *radius,
            Self::Polygon { points, origin } => {
                // Strict > keeps the lowest index on ties, which pins the
                // simplex shape on degenerate inputs for replay determinism.
                let mut best = 0;
                let mut max_dot = points.first().map_or(0.0, |p| p.dot(&dir));
                for (i, p) in points.iter().enumerate().skip(1) {
                    let d = p.dot(&dir);
                    if d > max_dot {
                        max_dot = d;
                        best = i;
                    }
                }
                origin + points.get(best).copied().unwrap_or_else(Vec2::zeros)
            }
            Self::Capsule { a, b, radius } => {
                let end = if b.dot(&dir) > a.dot(&dir) { b } else { a };
                end + normalize_or_zero(dir) * *radius
            }
        }
    }

    /// Returns a copy of the shape translated by `delta`
    ///
    /// Convenience for applying a penetration correction to a snapshot.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        match self {
            Self::Rect { min, max } => Self::Rect {
                min: min + delta,
                max: max + delta,
            },
            Self::Circle { center, radius } => Self::Circle {
                center: center + delta,
                radius: *radius,
            },
            Self::Polygon { points, origin } => Self::Polygon {
                points: points.clone(),
                origin: origin + delta,
            },
            Self::Capsule { a, b, radius } => Self::Capsule {
                a: a + delta,
                b: b + delta,
                radius: *radius,
            },
        }
    }
}

/// Support point of the Minkowski difference `A - B` along `dir`
///
/// This is the only support form GJK and EPA consume. Exposed for tests
/// and for building custom Minkowski-difference queries.
pub fn minkowski_support(a: &Shape, b: &Shape, dir: Vec2) -> Vec2 {
    a.support(dir) - b.support(-dir)
}
