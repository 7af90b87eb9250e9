//! GJK working simplex
//!
//! An ordered set of 1-3 points in Minkowski-difference space, produced
//! and consumed entirely within one GJK call. The most recent point is
//! always last.

use crate::foundation::math::{perp, triple_product, Vec2};

/// Fixed-capacity simplex (1-3 points)
#[derive(Debug, Clone)]
pub(crate) struct Simplex {
    points: [Vec2; 3],
    len: usize,
}

impl Simplex {
    pub fn new(first: Vec2) -> Self {
        Self {
            points: [first, Vec2::zeros(), Vec2::zeros()],
            len: 1,
        }
    }

    pub fn push(&mut self, point: Vec2) {
        debug_assert!(self.len < 3);
        self.points[self.len] = point;
        self.len += 1;
    }

    /// Live points, oldest first
    pub fn points(&self) -> &[Vec2] {
        &self.points[..self.len]
    }

    /// One evolution step against the origin
    ///
    /// Returns `true` when the simplex is a triangle containing the
    /// origin (intersection confirmed). Otherwise updates `dir` to the
    /// next search direction, shrinking the simplex back to an edge when
    /// the origin lies outside one of the triangle's edges.
    pub fn evolve(&mut self, dir: &mut Vec2) -> bool {
        if self.len == 2 {
            let (b, a) = (self.points[0], self.points[1]);
            let ab = b - a;
            let ao = -a;
            let mut ab_perp = triple_product(ab, ao, ab);
            if ab_perp == Vec2::zeros() {
                // Origin sits on the edge's carrier line; any
                // perpendicular keeps the search moving.
                ab_perp = perp(ab);
            }
            *dir = ab_perp;
            // An edge never decides containment on its own.
            return false;
        }

        let (c, b, a) = (self.points[0], self.points[1], self.points[2]);
        let ab = b - a;
        let ac = c - a;
        let ao = -a;
        let ab_perp = triple_product(ab, ao, ab);
        let ac_perp = triple_product(ac, ao, ac);
        if ab_perp.dot(dir) > 0.0 {
            // Origin is outside edge ab: drop c, keep {b, a}.
            self.points[0] = self.points[1];
            self.points[1] = self.points[2];
            self.len = 2;
            *dir = ab_perp;
            false
        } else if ac_perp.dot(dir) > 0.0 {
            // Origin is outside edge ac: drop b, keep {c, a}.
            self.points[1] = self.points[2];
            self.len = 2;
            *dir = ac_perp;
            false
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_case_directs_toward_origin() {
        // Edge from (1, -1) to (1, 1) sits right of the origin; the next
        // search direction must point back in -x.
        let mut simplex = Simplex::new(Vec2::new(1.0, -1.0));
        simplex.push(Vec2::new(1.0, 1.0));
        let mut dir = Vec2::new(0.0, 1.0);
        assert!(!simplex.evolve(&mut dir));
        assert!(dir.x < 0.0);
        assert_eq!(simplex.points().len(), 2);
    }

    #[test]
    fn test_edge_through_origin_gets_perpendicular_direction() {
        // Both points on the line y = x through the origin; the triple
        // product collapses to zero and the fallback perpendicular must
        // still be non-zero and orthogonal to the edge.
        let mut simplex = Simplex::new(Vec2::new(2.0, 2.0));
        simplex.push(Vec2::new(-3.0, -3.0));
        let mut dir = Vec2::new(-1.0, -1.0);
        assert!(!simplex.evolve(&mut dir));
        assert_ne!(dir, Vec2::zeros());
        assert_eq!(dir.dot(&Vec2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_triangle_containing_origin_terminates() {
        let mut simplex = Simplex::new(Vec2::new(0.0, 2.0));
        simplex.push(Vec2::new(-2.0, -2.0));
        simplex.push(Vec2::new(2.0, -2.0));
        // Search direction that produced the last point.
        let mut dir = Vec2::new(1.0, -1.0);
        assert!(simplex.evolve(&mut dir));
        assert_eq!(simplex.points().len(), 3);
    }

    #[test]
    fn test_triangle_drops_far_vertex_when_origin_outside() {
        // Triangle well above the origin; evolving must shrink back to an
        // edge and redirect the search downward.
        let mut simplex = Simplex::new(Vec2::new(-1.0, 3.0));
        simplex.push(Vec2::new(3.0, 3.0));
        simplex.push(Vec2::new(1.0, 1.0));
        let mut dir = Vec2::new(0.0, -1.0);
        let contained = simplex.evolve(&mut dir);
        if !contained {
            assert_eq!(simplex.points().len(), 2);
            // Most recent point survives the shrink.
            assert_eq!(simplex.points()[1], Vec2::new(1.0, 1.0));
        }
    }
}
