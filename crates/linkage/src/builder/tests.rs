use nalgebra::Vector2;

use super::*;
use crate::linkage::{Linkage, LinkageError, VertexId};

/// One full driver period: the default sweep spans 1.2 rad, walked at
/// 0.01 rad per frame, there and back.
const FULL_SWEEP: u64 = 240;

fn max_sweep_err<F>(linkage: &mut Linkage, frames: u64, err_at: F) -> f64
where
    F: Fn(&[Vector2<f64>]) -> f64,
{
    let mut worst = 0.0_f64;
    for frame in 0..frames {
        linkage
            .try_advance(frame)
            .expect("sweep should stay feasible");
        worst = worst.max(err_at(linkage.positions()));
    }
    worst
}

#[test]
fn straight_line_output_stays_on_its_axis() {
    let mut b = LinkageBuilder::new();
    let x = b.add_straight_line(None, None).unwrap();
    let mut l = b.build().unwrap();
    let err = max_sweep_err(&mut l, FULL_SWEEP, |p| p[x.index()].y.abs());
    assert!(err < 1e-3, "deviation from the axis: {err}");
}

#[test]
fn straight_line_interval_bounds_the_output() {
    let mut b = LinkageBuilder::new();
    let x = b.add_straight_line(Some((1.5, 3.0)), None).unwrap();
    let mut l = b.build().unwrap();
    for frame in 0..FULL_SWEEP {
        l.try_advance(frame).unwrap();
        let p = l.positions()[x.index()];
        assert!(p.y.abs() < 1e-3);
        assert!(p.x > 1.5 - 1e-3 && p.x < 3.0 + 1e-3);
    }
}

#[test]
fn axes_rotates_a_quarter_turn() {
    let mut b = LinkageBuilder::new();
    let x = b.add_straight_line(None, None).unwrap();
    let o = b.add_fixed(0.0, 0.0, None).unwrap();
    let y = b.add_axes(o, x, None).unwrap();
    let mut l = b.build().unwrap();
    let err = max_sweep_err(&mut l, FULL_SWEEP, |p| {
        let ox = p[x.index()] - p[o.index()];
        let oy = p[y.index()] - p[o.index()];
        ox.dot(&oy).abs().max((ox.norm() - oy.norm()).abs())
    });
    assert!(err < 1e-6, "axes deviation: {err}");
}

#[test]
fn zoomer_scales_about_the_origin() {
    for k in [0.5, 2.0, -1.0] {
        let mut b = LinkageBuilder::new();
        let x = b.add_straight_line(None, None).unwrap();
        let o = b.add_fixed(0.0, 0.0, None).unwrap();
        let z = b.add_zoomer(o, x, k, None).unwrap();
        let mut l = b.build().unwrap();
        let err = max_sweep_err(&mut l, 201, |p| {
            let want = p[o.index()] + (p[x.index()] - p[o.index()]) * k;
            (p[z.index()] - want).norm()
        });
        assert!(err < 1e-4, "zoom by {k} deviates by {err}");
    }
}

#[test]
fn adder_realizes_the_vector_sum() {
    let mut b = LinkageBuilder::new();
    let x = b.add_straight_line(None, None).unwrap();
    let o = b.add_fixed(0.0, 0.0, None).unwrap();
    let y = b.add_axes(o, x, None).unwrap();
    let sum = b.add_adder(o, x, y, None).unwrap();
    let mut l = b.build().unwrap();
    let err = max_sweep_err(&mut l, 201, |p| {
        let want = p[x.index()] + p[y.index()] - p[o.index()];
        (p[sum.index()] - want).norm()
    });
    assert!(err < 1e-4, "adder deviation: {err}");
}

#[test]
fn suber_realizes_the_difference() {
    let mut b = LinkageBuilder::new();
    let x = b.add_straight_line(None, None).unwrap();
    let o = b.add_fixed(0.0, 0.0, None).unwrap();
    let y = b.add_axes(o, x, None).unwrap();
    let diff = b.add_suber(o, x, y, None).unwrap();
    let mut l = b.build().unwrap();
    let err = max_sweep_err(&mut l, 201, |p| {
        let want = p[o.index()] + p[x.index()] - p[y.index()];
        (p[diff.index()] - want).norm()
    });
    assert!(err < 1e-4, "suber deviation: {err}");
}

#[test]
fn collinear_operands_keep_the_adder_accurate() {
    // All three operands on the x-axis, the adder's flat direction.
    let mut b = LinkageBuilder::new();
    let o = b.add_fixed(0.0, 0.0, None).unwrap();
    let p1 = b.add_fixed(1.0, 0.0, None).unwrap();
    let half = b.add_fixed(0.5, 0.0, None).unwrap();
    let sum = b.add_adder(half, p1, o, None).unwrap();
    let mut l = b.build().unwrap();
    l.try_advance(0).unwrap();
    let got = l.positions()[sum.index()];
    assert!((got - Vector2::new(0.5, 0.0)).norm() < 1e-4);
}

#[test]
fn mover_translates_by_a_constant() {
    let mut b = LinkageBuilder::new();
    let x = b.add_straight_line(None, None).unwrap();
    let moved = b.add_mover(x, 1.25, -2.0, None).unwrap();
    let mut l = b.build().unwrap();
    let err = max_sweep_err(&mut l, 201, |p| {
        let want = p[x.index()] + Vector2::new(1.25, -2.0);
        (p[moved.index()] - want).norm()
    });
    assert!(err < 1e-4, "mover deviation: {err}");
}

#[test]
fn mover_output_ignores_the_gauge_seed() {
    let run = |seed: u64| {
        let mut b = LinkageBuilder::with_seed(seed);
        let x = b.add_straight_line(None, None).unwrap();
        let moved = b.add_mover(x, 1.25, -2.0, None).unwrap();
        let mut l = b.build().unwrap();
        let mut out = Vec::new();
        for frame in 0..201 {
            l.try_advance(frame).unwrap();
            out.push(l.positions()[moved.index()]);
        }
        out
    };
    let a = run(1);
    let b = run(99);
    let worst = a
        .iter()
        .zip(&b)
        .map(|(p, q)| (p - q).norm())
        .fold(0.0_f64, f64::max);
    assert!(worst < 1e-6, "gauge position leaked into the output: {worst}");
}

#[test]
fn inverter_holds_the_product_constant() {
    let mut b = LinkageBuilder::new();
    let o = b.add_fixed(0.0, 0.0, None).unwrap();
    let x = b.add_straight_line(Some((0.35, 6.0)), None).unwrap();
    let t = b.add_inverter(o, x, None).unwrap();
    let mut l = b.build().unwrap();
    let err = max_sweep_err(&mut l, FULL_SWEEP, |p| {
        let din = (p[x.index()] - p[o.index()]).norm();
        let dout = (p[t.index()] - p[o.index()]).norm();
        (din * dout - 3.0).abs()
    });
    assert!(err < 1e-4, "inversion constant drift: {err}");
}

#[test]
fn squarer_squares_the_abscissa() {
    let mut b = LinkageBuilder::new();
    let o = b.add_fixed(0.0, 0.0, None).unwrap();
    let x = b.add_straight_line(Some((1.5, 3.0)), None).unwrap();
    let sq = b.add_squarer(o, x, None).unwrap();
    let mut l = b.build().unwrap();
    let err = max_sweep_err(&mut l, FULL_SWEEP, |p| {
        let want = p[x.index()].x * p[x.index()].x;
        (p[sq.index()].x - want).abs() + p[sq.index()].y.abs()
    });
    assert!(err < 1e-3, "squarer deviation: {err}");
}

#[test]
fn same_seed_rebuilds_the_same_graph() {
    let build = |seed: u64| {
        let mut b = LinkageBuilder::with_seed(seed);
        let x = b.add_straight_line(None, None).unwrap();
        let _ = b.add_mover(x, 2.0, 1.0, None).unwrap();
        b
    };
    let a = build(7);
    let b = build(7);
    assert_eq!(a.vertices, b.vertices);
    let c = build(8);
    assert_ne!(a.vertices, c.vertices);
}

#[test]
fn operator_inputs_must_exist() {
    let mut b = LinkageBuilder::new();
    let o = b.add_fixed(0.0, 0.0, None).unwrap();
    let err = b.add_adder(o, VertexId(99), o, None).unwrap_err();
    assert_eq!(
        err,
        LinkageError::ConstructionOrderViolation {
            vertex: VertexId(1),
            reference: VertexId(99),
        }
    );
}

#[test]
fn degenerate_operator_parameters_are_rejected() {
    let mut b = LinkageBuilder::new();
    let o = b.add_fixed(0.0, 0.0, None).unwrap();
    let x = b.add_fixed(1.0, 0.0, None).unwrap();
    assert!(matches!(
        b.add_zoomer(o, x, 0.0, None),
        Err(LinkageError::InvalidVertexParams { .. })
    ));
    assert!(matches!(
        b.add_mover(x, 0.0, 0.0, None),
        Err(LinkageError::InvalidVertexParams { .. })
    ));
    assert!(matches!(
        b.add_straight_line(Some((2.0, 2.0)), None),
        Err(LinkageError::InvalidVertexParams { .. })
    ));
}

#[test]
fn straight_line_registers_driver_and_tracking() {
    let mut b = LinkageBuilder::new();
    let first = b.vertex_count();
    let x = b.add_straight_line(None, None).unwrap();
    let l = b.build().unwrap();
    assert_eq!(l.driver_id(), Some(VertexId(first + 2)));
    assert!(l.tracked_ids().contains(&x));
    // The anchor-to-crank display bar plus two edges per driven vertex.
    assert_eq!(l.edges().len(), 1 + 3 * 2);
    assert_eq!(l.colors().len(), l.len());
}
