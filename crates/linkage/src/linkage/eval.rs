//! Per-frame position resolution.

use nalgebra::Vector2;

use crate::geom::{circle_intersections, parallelogram_area, IntersectError};

use super::error::LinkageError;
use super::types::{Color, EvalCfg, Vertex, VertexId, DEFAULT_COLOR};

/// An instantiated mechanism: immutable topology plus a per-frame position
/// buffer.
///
/// Construction validates the ordering invariant, so evaluation is a
/// single ascending pass. A frame is a pure function of the graph and the
/// frame index; nothing else is read or written, so seeking and replay are
/// exact.
#[derive(Clone, Debug)]
pub struct Linkage {
    vertices: Vec<Vertex>,
    edges: Vec<(VertexId, VertexId)>,
    colors: Vec<Color>,
    tracked: Vec<VertexId>,
    driver: Option<VertexId>,
    cfg: EvalCfg,
    positions: Vec<Vector2<f64>>,
}

impl Linkage {
    /// Build a linkage from explicit parts.
    ///
    /// `extra_edges` are display-only bars on top of the two edges every
    /// driven vertex contributes. `colors` may be shorter than the vertex
    /// array; missing entries get the default color.
    pub fn new(
        vertices: Vec<Vertex>,
        extra_edges: Vec<(VertexId, VertexId)>,
        mut colors: Vec<Color>,
        tracked: Vec<VertexId>,
        driver: Option<VertexId>,
    ) -> Result<Self, LinkageError> {
        let n = vertices.len();
        for (i, v) in vertices.iter().enumerate() {
            v.validate(VertexId(i))?;
        }
        let known = |id: VertexId| -> Result<(), LinkageError> {
            if id.index() >= n {
                Err(LinkageError::UnknownVertex { reference: id })
            } else {
                Ok(())
            }
        };
        for &(a, b) in &extra_edges {
            known(a)?;
            known(b)?;
        }
        for &t in &tracked {
            known(t)?;
        }
        if let Some(d) = driver {
            known(d)?;
        }
        let mut edges = extra_edges;
        for (i, v) in vertices.iter().enumerate() {
            if let Vertex::Driven { refs, .. } = v {
                edges.push((VertexId(i), refs.0));
                edges.push((VertexId(i), refs.1));
            }
        }
        colors.resize(n, DEFAULT_COLOR);
        Ok(Self {
            positions: vec![Vector2::zeros(); n],
            vertices,
            edges,
            colors,
            tracked,
            driver,
            cfg: EvalCfg::default(),
        })
    }

    /// Replace the evaluation configuration.
    pub fn with_cfg(mut self, cfg: EvalCfg) -> Self {
        self.cfg = cfg;
        self
    }

    /// Recompute every vertex position for `frame`, in ascending id order.
    ///
    /// Transient geometry failures are logged with vertex and frame
    /// context and the affected vertex holds its previous position, so a
    /// long-running animation survives a momentarily infeasible pose.
    pub fn advance(&mut self, frame: u64) {
        for i in 0..self.vertices.len() {
            match self.resolve(i, frame) {
                Ok(p) => self.positions[i] = p,
                Err(err) => {
                    tracing::warn!(vertex = i, frame, error = %err, "holding previous position");
                }
            }
        }
    }

    /// Strict variant of `advance`: stops at the first geometry failure.
    ///
    /// On error the buffer holds the positions resolved before the failing
    /// vertex and the previous values from there on.
    pub fn try_advance(&mut self, frame: u64) -> Result<(), LinkageError> {
        for i in 0..self.vertices.len() {
            self.positions[i] = self.resolve(i, frame)?;
        }
        Ok(())
    }

    fn resolve(&self, i: usize, frame: u64) -> Result<Vector2<f64>, LinkageError> {
        match &self.vertices[i] {
            Vertex::Fixed { pos } => Ok(*pos),
            Vertex::Driver {
                center,
                radius,
                theta0,
                theta1,
            } => {
                let theta = sweep_angle(*theta0, *theta1, frame as f64 * self.cfg.driver_speed);
                Ok(*center + Vector2::new(theta.cos(), theta.sin()) * *radius)
            }
            Vertex::Driven {
                refs,
                radii,
                hint,
                anti_hint,
            } => {
                let p1 = self.positions[refs.0.index()];
                let p2 = self.positions[refs.1.index()];
                let pts = circle_intersections(p1, radii.0, p2, radii.1, self.cfg.eps_feas)
                    .map_err(|e| match e {
                        IntersectError::Infeasible { dist } => LinkageError::GeometryInfeasible {
                            vertex: VertexId(i),
                            frame,
                            dist,
                            r1: radii.0,
                            r2: radii.1,
                        },
                        IntersectError::Concentric => LinkageError::ConcentricCircles {
                            vertex: VertexId(i),
                            frame,
                        },
                    })?;
                let mut pick = *hint;
                if let Some(anti) = anti_hint {
                    // Pure per-frame branch correction: nothing is written
                    // back to the graph, so seeking to any frame replays
                    // identically.
                    let a = self.positions[anti.index()];
                    let score = |p: Vector2<f64>| parallelogram_area(p1 - a, p - p2).abs();
                    if score(pts[1 - pick]) + self.cfg.anti_hint_margin < score(pts[pick]) {
                        pick = 1 - pick;
                    }
                }
                Ok(pts[pick])
            }
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Resolved position of every vertex, indexed by id.
    pub fn positions(&self) -> &[Vector2<f64>] {
        &self.positions
    }

    /// Resolved position of one vertex.
    pub fn position(&self, id: VertexId) -> Vector2<f64> {
        self.positions[id.index()]
    }

    /// All bars to draw: explicit display edges plus two per driven vertex.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Vertices whose trail the renderer should draw.
    pub fn tracked_ids(&self) -> &[VertexId] {
        &self.tracked
    }

    /// The actuated vertex, if any.
    pub fn driver_id(&self) -> Option<VertexId> {
        self.driver
    }

    /// Display colors, one per vertex.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Declaration of one vertex.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Evaluation configuration.
    pub fn cfg(&self) -> EvalCfg {
        self.cfg
    }
}

/// Triangle-wave sweep over `[theta0, theta1]`: rises from `theta0` to
/// `theta1`, then falls back, with period `2·(theta1 − theta0)` in `t`.
/// A degenerate zero-width sweep stays at `theta0`.
#[inline]
pub(super) fn sweep_angle(theta0: f64, theta1: f64, t: f64) -> f64 {
    let cycle = theta1 - theta0;
    if cycle <= 0.0 {
        return theta0;
    }
    cycle - (cycle - t.rem_euclid(2.0 * cycle)).abs() + theta0
}
