//! Prebuilt demo mechanisms.
//!
//! A small catalog of classic linkages: literal vertex arrays for the
//! textbook mechanisms and builder compositions for the
//! mechanical-calculator curves. Callers pick a constructor directly;
//! there is no name-based dispatch.

use std::f64::consts::PI;

use crate::builder::LinkageBuilder;
use crate::linkage::{Linkage, LinkageError, Vertex, VertexId};

/// Grashof four-bar linkage: crank of the given radius, coupler 7,
/// rocker 6 between ground pivots 5 apart.
pub fn four_bar(radius: f64) -> Result<Linkage, LinkageError> {
    Linkage::new(
        vec![
            Vertex::fixed(0.0, 0.0),
            Vertex::fixed(5.0, 0.0),
            Vertex::driver((0.0, 0.0), radius, 0.0, 2.0 * PI),
            Vertex::driven(VertexId(1), 7.0, VertexId(2), 6.0, 1),
        ],
        vec![(VertexId(0), VertexId(1)), (VertexId(0), VertexId(2))],
        vec![],
        vec![VertexId(3)],
        Some(VertexId(2)),
    )
}

/// Peaucellier straight-line mechanism; the tracked vertex runs along
/// `y = 0`. The crank circle passes through the inversion pole.
pub fn peaucellier() -> Result<Linkage, LinkageError> {
    Linkage::new(
        vec![
            Vertex::fixed(3.0, -7.5),
            Vertex::fixed(3.0, -4.5),
            Vertex::driver((3.0, -4.5), 3.0, 0.8, 2.25),
            Vertex::driven(VertexId(0), 7.0, VertexId(2), 2.0, 0),
            Vertex::driven(VertexId(0), 7.0, VertexId(2), 2.0, 1),
            Vertex::driven(VertexId(3), 2.0, VertexId(4), 2.0, 0),
        ],
        vec![(VertexId(1), VertexId(2))],
        vec![],
        vec![VertexId(5)],
        Some(VertexId(2)),
    )
}

/// The line `y = kx`: a straight-line input, its perpendicular copy, a
/// zoomer for the slope, and an adder tracing the graph point.
pub fn y_equals_kx(k: f64) -> Result<Linkage, LinkageError> {
    let mut b = LinkageBuilder::new();
    let x = b.add_straight_line(None, None)?;
    let o = b.add_fixed(0.0, 0.0, None)?;
    let y = b.add_axes(o, x, None)?;
    let ky = b.add_zoomer(o, y, k, None)?;
    let p = b.add_adder(o, x, ky, None)?;
    b.track(&[p])?;
    b.add_display_edges(&[(o, x), (o, y), (o, p)])?;
    b.build()
}

/// The reciprocal curve `y = 3/x` over `x ∈ [0.35, 6]`.
pub fn reciprocal() -> Result<Linkage, LinkageError> {
    let mut b = LinkageBuilder::new();
    let o = b.add_fixed(0.0, 0.0, None)?;
    let x = b.add_straight_line(Some((0.35, 6.0)), None)?;
    let inv = b.add_inverter(o, x, None)?;
    let y = b.add_axes(o, inv, None)?;
    let p = b.add_adder(o, x, y, None)?;
    b.set_color(p, [1.0, 0.0, 0.0])?;
    b.track(&[p])?;
    b.build()
}

/// The parabola `y = x²` over `x ∈ [1.5, 3]`: squares the input, copies
/// the square onto the perpendicular axis, and traces `(x, x²)`.
pub fn squarer() -> Result<Linkage, LinkageError> {
    let mut b = LinkageBuilder::new();
    let o = b.add_fixed(0.0, 0.0, Some([1.0, 1.0, 1.0]))?;
    let x = b.add_straight_line(Some((1.5, 3.0)), None)?;
    let squared = b.add_squarer(o, x, None)?;
    let y = b.add_axes(o, squared, None)?;
    let p = b.add_adder(o, x, y, None)?;
    b.set_color(p, [0.0, 1.0, 0.0])?;
    b.set_color(x, [1.0, 0.0, 0.0])?;
    b.set_color(y, [1.0, 0.0, 0.0])?;
    b.add_display_edges(&[(p, x), (p, y)])?;
    b.build()
}
