//! Operator constructors.
//!
//! Each operator appends a fixed block of vertices whose link lengths
//! realize an algebraic relation on plane points. Lengths are exact:
//! momentarily tangent cells rely on the evaluator's feasibility band
//! rather than biased radii, which keeps the realized relations accurate
//! to rounding across a sweep. Anti-hints re-select parallelogram branches
//! every frame.

use std::f64::consts::FRAC_PI_2;

use rand::Rng;

use crate::linkage::{Color, LinkageError, Vertex, VertexId};

use super::LinkageBuilder;

/// Arm length of the axes rotation cell and the inversor cells.
const INVERSOR_ARM: f64 = 12.8;
/// Constant of inversion `|o,t|·|o,x|` realized by `add_inverter`.
const INVERSION_K2: f64 = 3.0;
/// Link length of the adder parallelogram chain.
const ADDER_ARM: f64 = 6.0;
/// Arm length of the mover gauge cell.
const MOVER_ARM: f64 = 24.8;

impl LinkageBuilder {
    /// Emit an immovable reference point.
    pub fn add_fixed(
        &mut self,
        x: f64,
        y: f64,
        color: Option<Color>,
    ) -> Result<VertexId, LinkageError> {
        let n = self.vertex_count();
        let id = self.push(Vertex::fixed(x, y))?;
        self.register_color(n, color);
        Ok(id)
    }

    /// Emit an oscillating driver plus a Peaucellier inversor cell whose
    /// output runs along `y = 0`, `x ∈ [start, end]` (default
    /// `[0.68, 5.32]`).
    ///
    /// The driver circle passes through the inversion pole, so the cell
    /// maps it onto a straight line. Registers the driver and tracks the
    /// output.
    pub fn add_straight_line(
        &mut self,
        interval: Option<(f64, f64)>,
        color: Option<Color>,
    ) -> Result<VertexId, LinkageError> {
        let n = self.vertex_count();
        let (mid, scale) = match interval {
            None => (3.0, 1.0),
            Some((start, end)) => {
                if !(start.is_finite() && end.is_finite()) || end <= start {
                    return Err(LinkageError::InvalidVertexParams {
                        vertex: VertexId(n),
                        reason: "straight-line interval must be non-empty",
                    });
                }
                let mid = (start + end) / 2.0;
                (mid, (mid - start) / 2.32)
            }
        };
        let pole = self.push(Vertex::fixed(mid, -7.5 * scale))?;
        let anchor = self.push(Vertex::fixed(mid, -4.5 * scale))?;
        let crank = self.push(Vertex::driver(
            (mid, -4.5 * scale),
            3.0 * scale,
            FRAC_PI_2 - 0.6,
            FRAC_PI_2 + 0.6,
        ))?;
        let upper = self.push(Vertex::driven(pole, 7.0 * scale, crank, 2.0 * scale, 0))?;
        let lower = self.push(Vertex::driven(pole, 7.0 * scale, crank, 2.0 * scale, 1))?;
        let out = self.push(Vertex::driven(upper, 2.0 * scale, lower, 2.0 * scale, 0))?;
        self.add_display_edges(&[(anchor, crank)])?;
        self.driver = Some(crank);
        self.register_color(n, color);
        self.track(&[out])?;
        Ok(out)
    }

    /// Emit the point `o + R(90°)·(x − o)`: the perpendicular axis through
    /// `o`, scale-consistent with `x`.
    pub fn add_axes(
        &mut self,
        o: VertexId,
        x: VertexId,
        color: Option<Color>,
    ) -> Result<VertexId, LinkageError> {
        self.check_input(o)?;
        self.check_input(x)?;
        let n = self.vertex_count();
        let arm = INVERSOR_ARM;
        let apex_l = self.push(Vertex::driven(o, arm, x, arm, 1))?;
        let apex_r = self.push(Vertex::driven(o, arm, x, arm, 0))?;
        let mid_l = self.push(Vertex::driven(o, arm, apex_l, arm * 2.0_f64.sqrt(), 0))?;
        let mid_r = self.push(Vertex::driven(o, arm, apex_r, arm * 2.0_f64.sqrt(), 0))?;
        let out = self.push(Vertex::driven(mid_l, arm, mid_r, arm, 1))?;
        self.register_color(n, color);
        self.track(&[out])?;
        Ok(out)
    }

    /// Emit the point `o + k·(x − o)`.
    ///
    /// Positive factors compose two inversor cells: inverting with
    /// constant K and then with K·k scales by k exactly. Negative factors
    /// append a half-turn built from two axes cells. `k = 0` would need a
    /// zero-length link and is rejected.
    pub fn add_zoomer(
        &mut self,
        o: VertexId,
        x: VertexId,
        k: f64,
        color: Option<Color>,
    ) -> Result<VertexId, LinkageError> {
        self.check_input(o)?;
        self.check_input(x)?;
        let n = self.vertex_count();
        if !k.is_finite() || k == 0.0 {
            return Err(LinkageError::InvalidVertexParams {
                vertex: VertexId(n),
                reason: "zoom factor must be finite and nonzero",
            });
        }
        let out = if k > 0.0 {
            let unit = self.inverter_cell(o, x, INVERSION_K2)?;
            self.inverter_cell(o, unit, INVERSION_K2 * k)?
        } else {
            let scaled = if k == -1.0 {
                x
            } else {
                self.add_zoomer(o, x, -k, color)?
            };
            let quarter = self.add_axes(o, scaled, color)?;
            self.add_axes(o, quarter, color)?
        };
        self.register_color(n, color);
        self.track(&[out])?;
        Ok(out)
    }

    /// Emit the vector sum `o + (a − o) + (b − o)`.
    ///
    /// Two apex points open parallelograms over `o→a` and `o→b`; the chain
    /// closes them back onto the sum. Both apexes are taken on the same
    /// side of the operand line, so collinear operands keep the cell away
    /// from its flat configuration.
    pub fn add_adder(
        &mut self,
        o: VertexId,
        a: VertexId,
        b: VertexId,
        color: Option<Color>,
    ) -> Result<VertexId, LinkageError> {
        self.check_input(o)?;
        self.check_input(a)?;
        self.check_input(b)?;
        let n = self.vertex_count();
        let arm = ADDER_ARM;
        let apex_a = self.push(Vertex::driven(o, arm, a, arm, 1))?;
        let apex_b = self.push(Vertex::driven(b, arm, o, arm, 1))?;
        let across = self.push(Vertex::driven_anti(apex_a, arm, apex_b, arm, 0, o))?;
        let shift_a = self.push(Vertex::driven_anti(a, arm, across, arm, 1, apex_a))?;
        let shift_b = self.push(Vertex::driven_anti(across, arm, b, arm, 1, apex_b))?;
        let out = self.push(Vertex::driven_anti(shift_a, arm, shift_b, arm, 1, across))?;
        self.register_color(n, color);
        self.track(&[out])?;
        Ok(out)
    }

    /// Emit `a − b` anchored at `o`, i.e. `o + (a − b)`.
    ///
    /// The difference translated to start at `o` is the sum of `b→a` and
    /// `b→o` anchored at `b`, so the subtractor is the adder with permuted
    /// roles.
    pub fn add_suber(
        &mut self,
        o: VertexId,
        a: VertexId,
        b: VertexId,
        color: Option<Color>,
    ) -> Result<VertexId, LinkageError> {
        let n = self.vertex_count();
        let out = self.add_adder(b, a, o, color)?;
        self.register_color(n, color);
        Ok(out)
    }

    /// Emit the point `x + (dx, dy)`.
    ///
    /// Two gauge points a link `(dx, dy)` apart carry the offset; a
    /// parallelogram chain copies it onto `x`. The gauge location is drawn
    /// from the builder's seeded RNG and cancels out of the output.
    pub fn add_mover(
        &mut self,
        x: VertexId,
        dx: f64,
        dy: f64,
        color: Option<Color>,
    ) -> Result<VertexId, LinkageError> {
        self.check_input(x)?;
        let n = self.vertex_count();
        let d = (dx * dx + dy * dy).sqrt();
        if !d.is_finite() || d == 0.0 {
            return Err(LinkageError::InvalidVertexParams {
                vertex: VertexId(n),
                reason: "mover offset must be finite and nonzero",
            });
        }
        let arm = MOVER_ARM;
        let gx = self.rng.gen_range(-5.0..0.0);
        let gy = self.rng.gen_range(-5.0..0.0);
        let gauge = self.push(Vertex::fixed(gx, gy))?;
        let gauge_off = self.push(Vertex::fixed(gx + dx, gy + dy))?;
        let apex = self.push(Vertex::driven(x, arm, gauge, arm, 0))?;
        let carried = self.push(Vertex::driven_anti(gauge_off, arm, apex, d, 0, gauge))?;
        let out = self.push(Vertex::driven_anti(carried, arm, x, d, 1, apex))?;
        self.add_display_edges(&[(gauge, gauge_off)])?;
        self.register_color(n, color);
        self.track(&[out])?;
        Ok(out)
    }

    /// Emit the geometric inversion of `x` about `o`:
    /// `|o, out| · |o, x| = 3`, output on the ray `o → x`.
    pub fn add_inverter(
        &mut self,
        o: VertexId,
        x: VertexId,
        color: Option<Color>,
    ) -> Result<VertexId, LinkageError> {
        self.check_input(o)?;
        self.check_input(x)?;
        let n = self.vertex_count();
        let out = self.inverter_cell(o, x, INVERSION_K2)?;
        self.register_color(n, color);
        self.track(&[out])?;
        Ok(out)
    }

    /// Emit the square of `x` about `o`: for `o` at the origin and `x` on
    /// the x-axis at abscissa p, the output sits at `(p², 0)`.
    ///
    /// Uses the identity `p² = 2 / (1/(p−1) − 1/(p+1)) + 1`; every stage
    /// is one of the other operators.
    pub fn add_squarer(
        &mut self,
        o: VertexId,
        x: VertexId,
        color: Option<Color>,
    ) -> Result<VertexId, LinkageError> {
        self.check_input(o)?;
        self.check_input(x)?;
        let n = self.vertex_count();
        let minus_one = self.add_mover(x, -1.0, 0.0, None)?;
        let plus_one = self.add_mover(x, 1.0, 0.0, None)?;
        let inv_minus = self.add_inverter(o, minus_one, Some([1.0, 1.0, 0.0]))?;
        let inv_plus = self.add_inverter(o, plus_one, Some([1.0, 1.0, 0.0]))?;
        let diff = self.add_suber(o, inv_minus, inv_plus, None)?;
        let recip = self.add_inverter(o, diff, None)?;
        let doubled = self.add_zoomer(o, recip, 2.0, None)?;
        let out = self.add_mover(doubled, 1.0, 0.0, None)?;
        self.register_color(n, color);
        Ok(out)
    }

    /// Rhombus inversor: `|o, out| · |o, x| = ksq`, output on the ray
    /// `o → x`. Shared by `add_inverter` and `add_zoomer`.
    fn inverter_cell(
        &mut self,
        o: VertexId,
        x: VertexId,
        ksq: f64,
    ) -> Result<VertexId, LinkageError> {
        let n = self.vertex_count();
        let arm = INVERSOR_ARM;
        if !(ksq > 0.0 && ksq < arm * arm) {
            return Err(LinkageError::InvalidVertexParams {
                vertex: VertexId(n),
                reason: "inversion constant out of range for the arm length",
            });
        }
        let cross = (arm * arm - ksq).sqrt();
        let cell_l = self.push(Vertex::driven(o, arm, x, cross, 0))?;
        let cell_r = self.push(Vertex::driven(o, arm, x, cross, 1))?;
        self.push(Vertex::driven_anti(cell_l, cross, cell_r, cross, 0, x))
    }
}
