//! Circle–circle intersection, the single geometric primitive behind every
//! driven vertex.
//!
//! Purpose
//! - Resolve a point constrained by two fixed distances to known points as
//!   the intersection of two circles, in a canonical order that branch
//!   hints index into.
//!
//! Numerics
//! - `eps` opens a feasibility band around tangency: pairs separated or
//!   nested by less than `eps` snap to the tangent point instead of
//!   failing, which keeps momentarily flat parallelogram cells alive
//!   during a sweep.

use nalgebra::Vector2;
use thiserror::Error;

/// Why a circle pair has no intersection.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum IntersectError {
    /// Centers further apart than the radii span, or one circle strictly
    /// nested inside the other.
    #[error("circles do not intersect: center distance {dist}")]
    Infeasible { dist: f64 },
    /// Same center and same radius: every point of the circle qualifies.
    #[error("concentric circles of equal radius")]
    Concentric,
}

/// Both intersection points of the circles `(c1, r1)` and `(c2, r2)`.
///
/// With `d = |c2 − c1|`, `a = (r1² − r2² + d²) / 2d` and `h = √(r1² − a²)`,
/// the points sit at the chord midpoint offset by ±h perpendicular to the
/// center line: index 0 on the left of `c1 → c2`, index 1 on the right.
/// Tangent configurations inside the `eps` band return the chord point
/// twice.
pub fn circle_intersections(
    c1: Vector2<f64>,
    r1: f64,
    c2: Vector2<f64>,
    r2: f64,
    eps: f64,
) -> Result<[Vector2<f64>; 2], IntersectError> {
    let d = (c2 - c1).norm();
    if d > r1 + r2 + eps || d + eps < (r1 - r2).abs() {
        return Err(IntersectError::Infeasible { dist: d });
    }
    if d <= eps && (r1 - r2).abs() <= eps {
        return Err(IntersectError::Concentric);
    }
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let u = (c2 - c1) / d;
    let mid = c1 + u * a;
    let perp = Vector2::new(-u.y, u.x);
    Ok([mid + perp * h, mid - perp * h])
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
