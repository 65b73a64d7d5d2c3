//! Builder state and bookkeeping.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::linkage::{Color, Linkage, LinkageError, Vertex, VertexId, DEFAULT_COLOR};

/// Growable linkage under construction.
///
/// Operators append vertices through the checked `push`; gauge points and
/// any other construction-time randomness come from a seeded RNG, so the
/// same seed rebuilds an identical graph.
#[derive(Clone, Debug)]
pub struct LinkageBuilder {
    pub(super) vertices: Vec<Vertex>,
    pub(super) extra_edges: Vec<(VertexId, VertexId)>,
    pub(super) colors: Vec<Color>,
    pub(super) tracked: Vec<VertexId>,
    pub(super) driver: Option<VertexId>,
    pub(super) global_color: Color,
    pub(super) rng: StdRng,
}

impl Default for LinkageBuilder {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl LinkageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with a specific gauge-point seed. The seed never influences
    /// operator outputs, only the internal gauge geometry of `add_mover`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            vertices: Vec::new(),
            extra_edges: Vec::new(),
            colors: Vec::new(),
            tracked: Vec::new(),
            driver: None,
            global_color: DEFAULT_COLOR,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Default color for vertices emitted without an explicit hint.
    pub fn with_global_color(mut self, color: Color) -> Self {
        self.global_color = color;
        self
    }

    /// Number of vertices emitted so far; also the id the next vertex gets.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Append one vertex after validating it against the current length.
    pub(super) fn push(&mut self, v: Vertex) -> Result<VertexId, LinkageError> {
        let id = VertexId(self.vertices.len());
        v.validate(id)?;
        self.vertices.push(v);
        Ok(id)
    }

    /// Reject operator inputs that have not been emitted yet.
    pub(super) fn check_input(&self, id: VertexId) -> Result<(), LinkageError> {
        if id.index() >= self.vertices.len() {
            return Err(LinkageError::ConstructionOrderViolation {
                vertex: VertexId(self.vertices.len()),
                reference: id,
            });
        }
        Ok(())
    }

    fn check_known(&self, id: VertexId) -> Result<(), LinkageError> {
        if id.index() >= self.vertices.len() {
            return Err(LinkageError::UnknownVertex { reference: id });
        }
        Ok(())
    }

    /// Color every vertex from `old_n` up with `hint` (or the global
    /// default), padding any earlier gap the same way.
    pub(super) fn register_color(&mut self, old_n: usize, hint: Option<Color>) {
        let color = hint.unwrap_or(self.global_color);
        let n = self.vertices.len();
        if self.colors.len() < n {
            self.colors.resize(n, color);
        }
        for c in &mut self.colors[old_n..n] {
            *c = color;
        }
    }

    /// Flag vertices for trail rendering.
    pub fn track(&mut self, ids: &[VertexId]) -> Result<(), LinkageError> {
        for &id in ids {
            self.check_known(id)?;
        }
        self.tracked.extend_from_slice(ids);
        Ok(())
    }

    /// Display-only bars on top of the edges driven vertices imply.
    pub fn add_display_edges(&mut self, pairs: &[(VertexId, VertexId)]) -> Result<(), LinkageError> {
        for &(a, b) in pairs {
            self.check_known(a)?;
            self.check_known(b)?;
        }
        self.extra_edges.extend_from_slice(pairs);
        Ok(())
    }

    /// Override the color of one vertex.
    pub fn set_color(&mut self, id: VertexId, color: Color) -> Result<(), LinkageError> {
        self.check_known(id)?;
        if self.colors.len() <= id.index() {
            self.colors.resize(id.index() + 1, self.global_color);
        }
        self.colors[id.index()] = color;
        Ok(())
    }

    /// Finalize into an evaluator-ready linkage.
    pub fn build(self) -> Result<Linkage, LinkageError> {
        Linkage::new(
            self.vertices,
            self.extra_edges,
            self.colors,
            self.tracked,
            self.driver,
        )
    }
}
