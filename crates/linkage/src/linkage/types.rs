//! Vertex model and evaluation configuration.

use nalgebra::Vector2;

use super::error::LinkageError;

/// Identifier of a vertex: its dense index in the linkage's vertex array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display color, RGB in [0, 1]. Cosmetic only.
pub type Color = [f32; 3];

/// Color for vertices without an explicit hint.
pub const DEFAULT_COLOR: Color = [0.28, 0.68, 0.99];

/// Resolution rule for one vertex.
#[derive(Clone, Debug, PartialEq)]
pub enum Vertex {
    /// Pinned to an absolute position.
    Fixed { pos: Vector2<f64> },
    /// Actuated: sweeps back and forth over the arc `[theta0, theta1]` of
    /// the circle `(center, radius)`.
    Driver {
        center: Vector2<f64>,
        radius: f64,
        theta0: f64,
        theta1: f64,
    },
    /// Fully determined by two distance constraints to earlier vertices.
    Driven {
        refs: (VertexId, VertexId),
        radii: (f64, f64),
        /// Which of the two circle intersections to take (0 or 1).
        hint: usize,
        /// When set, prefer the branch that keeps `refs.0 − anti` parallel
        /// to `pos − refs.1`, closing the parallelogram through `anti`.
        anti_hint: Option<VertexId>,
    },
}

impl Vertex {
    /// Fixed vertex at `(x, y)`.
    pub fn fixed(x: f64, y: f64) -> Self {
        Vertex::Fixed {
            pos: Vector2::new(x, y),
        }
    }

    /// Driver sweeping `[theta0, theta1]` on the circle `(center, radius)`.
    pub fn driver(center: (f64, f64), radius: f64, theta0: f64, theta1: f64) -> Self {
        Vertex::Driver {
            center: Vector2::new(center.0, center.1),
            radius,
            theta0,
            theta1,
        }
    }

    /// Driven vertex with a plain branch hint.
    pub fn driven(id1: VertexId, r1: f64, id2: VertexId, r2: f64, hint: usize) -> Self {
        Vertex::Driven {
            refs: (id1, id2),
            radii: (r1, r2),
            hint,
            anti_hint: None,
        }
    }

    /// Driven vertex with parallelogram disambiguation against `anti`.
    pub fn driven_anti(
        id1: VertexId,
        r1: f64,
        id2: VertexId,
        r2: f64,
        hint: usize,
        anti: VertexId,
    ) -> Self {
        Vertex::Driven {
            refs: (id1, id2),
            radii: (r1, r2),
            hint,
            anti_hint: Some(anti),
        }
    }

    /// Construction-time validation for the vertex at index `own`.
    pub(crate) fn validate(&self, own: VertexId) -> Result<(), LinkageError> {
        let invalid = |reason: &'static str| LinkageError::InvalidVertexParams {
            vertex: own,
            reason,
        };
        match self {
            Vertex::Fixed { pos } => {
                if !(pos.x.is_finite() && pos.y.is_finite()) {
                    return Err(invalid("non-finite position"));
                }
            }
            Vertex::Driver {
                center,
                radius,
                theta0,
                theta1,
            } => {
                if !(center.x.is_finite()
                    && center.y.is_finite()
                    && radius.is_finite()
                    && theta0.is_finite()
                    && theta1.is_finite())
                {
                    return Err(invalid("non-finite driver parameters"));
                }
                if *radius <= 0.0 {
                    return Err(invalid("non-positive driver radius"));
                }
                if theta1 < theta0 {
                    return Err(invalid("sweep upper bound below lower bound"));
                }
            }
            Vertex::Driven {
                refs,
                radii,
                hint,
                anti_hint,
            } => {
                for r in [refs.0, refs.1] {
                    if r >= own {
                        return Err(LinkageError::ConstructionOrderViolation {
                            vertex: own,
                            reference: r,
                        });
                    }
                }
                if let Some(a) = anti_hint {
                    if *a >= own {
                        return Err(LinkageError::ConstructionOrderViolation {
                            vertex: own,
                            reference: *a,
                        });
                    }
                }
                if !(radii.0.is_finite() && radii.1.is_finite())
                    || radii.0 <= 0.0
                    || radii.1 <= 0.0
                {
                    return Err(invalid("non-positive link length"));
                }
                if *hint > 1 {
                    return Err(invalid("branch hint must be 0 or 1"));
                }
            }
        }
        Ok(())
    }
}

/// Evaluation configuration: sweep speed and tolerances.
#[derive(Clone, Copy, Debug)]
pub struct EvalCfg {
    /// Radians a driver's sweep parameter advances per frame.
    pub driver_speed: f64,
    /// Feasibility band for circle intersections; near-tangent pairs snap
    /// to the tangent point instead of failing.
    pub eps_feas: f64,
    /// How decisively the alternate branch must beat the hinted one before
    /// the parallelogram check overrides it.
    pub anti_hint_margin: f64,
}

impl Default for EvalCfg {
    fn default() -> Self {
        Self {
            driver_speed: 0.01,
            eps_feas: 1e-4,
            anti_hint_margin: 1e-3,
        }
    }
}
