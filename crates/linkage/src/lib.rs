//! Planar linkage kinematics: constraint graphs of rigid links, resolved
//! frame by frame through closed-form circle intersections.
//!
//! Layout
//! - `geom`: the circle–circle intersection primitive.
//! - `linkage`: the vertex model and the per-frame evaluator.
//! - `builder`: compositional operator library (straight lines, axes,
//!   zoomers, adders, subtractors, movers, inverters, squarers).
//! - `mechanisms`: prebuilt demo mechanisms.
//!
//! A mechanism is a dense array of vertices where every driven vertex
//! references only strictly earlier ids, so one ascending pass per frame
//! resolves all positions without a topological sort. Rendering is not
//! part of this crate; callers consume `positions()`, `edges()`, and the
//! tracking/color bookkeeping.

pub mod builder;
pub mod geom;
pub mod linkage;
pub mod mechanisms;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::builder::LinkageBuilder;
    pub use crate::geom::{circle_intersections, parallelogram_area, IntersectError};
    pub use crate::linkage::{Color, EvalCfg, Linkage, LinkageError, Vertex, VertexId};
    pub use nalgebra::Vector2 as Vec2;
}
