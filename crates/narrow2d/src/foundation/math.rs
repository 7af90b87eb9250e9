//! Math utilities and types
//!
//! Provides the fundamental 2D math types for collision detection.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Normalize a vector, yielding the zero vector for zero-length input.
///
/// This is deliberate policy, not a fallback: degenerate directions arise
/// from coincident points (e.g. two shapes sharing a center) and must not
/// propagate NaN through the simplex search. Callers tolerate the
/// occasional geometrically meaningless support point this produces.
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.norm();
    if len > 0.0 {
        v / len
    } else {
        Vec2::zeros()
    }
}

/// Vector triple product `(a x b) x c` with all inputs in the z = 0 plane,
/// projected back to 2D.
///
/// Expanded via the identity `(a x b) x c = b(c . a) - a(c . b)`. GJK uses
/// this to build an edge perpendicular that points toward the origin.
pub fn triple_product(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
    let z = a.perp(&b);
    Vec2::new(-z * c.y, z * c.x)
}

/// Clockwise perpendicular of a 2D vector.
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;
}

/// Math utility functions
pub mod utils {
    use super::Vec2;

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Linear interpolation between two points
    pub fn lerp_vec(a: Vec2, b: Vec2, t: f32) -> Vec2 {
        a + (b - a) * t
    }
}
