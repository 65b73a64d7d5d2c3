//! Linkage graphs and the per-frame evaluator.
//!
//! Purpose
//! - Represent a mechanism as a dense array of vertices, each carrying its
//!   own resolution rule (fixed, driver, or driven), plus the display
//!   bookkeeping an external renderer consumes.
//! - Resolve all positions for a frame in one ascending pass; the
//!   construction-time ordering invariant (driven vertices reference only
//!   strictly smaller ids) makes topological sorting unnecessary.
//!
//! Error policy
//! - Construction problems (ordering violations, invalid parameters,
//!   unknown references) fail the constructor.
//! - Per-frame geometry failures are recoverable: `advance` logs them and
//!   holds the previous position, `try_advance` surfaces them.

mod error;
mod eval;
mod types;

pub use error::LinkageError;
pub use eval::Linkage;
pub use types::{Color, EvalCfg, Vertex, VertexId, DEFAULT_COLOR};
