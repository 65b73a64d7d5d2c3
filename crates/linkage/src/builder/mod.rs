//! Compositional mechanism construction.
//!
//! Purpose
//! - Emit reusable operator sub-graphs (straight-line generators, axes,
//!   zoomers, adders, subtractors, movers, inverters, squarers), each a
//!   fixed block of vertices referencing only earlier ids, wired so that
//!   rigid-link distance constraints enforce the target algebraic
//!   relation.
//! - Compose operators into mechanical calculators by feeding one
//!   operator's output id into the next, in the tradition of Peaucellier
//!   inversors and Kempe linkage arithmetic.
//!
//! Every operator validates its input ids and returns the id of its
//! principal output vertex. Feasibility of all intersections across the
//! operating sweep of the inputs is the operator author's responsibility;
//! ranges that leave an operator's working envelope surface as geometry
//! errors at evaluation time.

mod ops;
mod state;

pub use state::LinkageBuilder;

#[cfg(test)]
mod tests;
