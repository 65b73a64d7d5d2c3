//! Error taxonomy for construction and evaluation.

use thiserror::Error;

use super::types::VertexId;

/// Errors raised while building or evaluating a linkage.
///
/// The construction-time kinds (`ConstructionOrderViolation`,
/// `InvalidVertexParams`, `UnknownVertex`) are fatal and fail the build
/// call. The evaluation-time kinds (`GeometryInfeasible`,
/// `ConcentricCircles`) are recoverable by policy: `advance` logs them
/// with vertex and frame context and holds the previous position, while
/// `try_advance` returns them to the caller.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LinkageError {
    /// The two constraint circles of a driven vertex do not intersect at
    /// this frame.
    #[error(
        "vertex {vertex} has no feasible position at frame {frame}: \
         center distance {dist}, radii {r1} and {r2}"
    )]
    GeometryInfeasible {
        vertex: VertexId,
        frame: u64,
        dist: f64,
        r1: f64,
        r2: f64,
    },

    /// Both references of a driven vertex coincide with equal radii.
    #[error("vertex {vertex} is underdetermined at frame {frame}: concentric equal-radius circles")]
    ConcentricCircles { vertex: VertexId, frame: u64 },

    /// A driven vertex references an id that is not strictly earlier.
    #[error("vertex {vertex} references {reference}, which is not created before it")]
    ConstructionOrderViolation {
        vertex: VertexId,
        reference: VertexId,
    },

    /// Parameters invalid for the vertex kind.
    #[error("invalid parameters for vertex {vertex}: {reason}")]
    InvalidVertexParams {
        vertex: VertexId,
        reason: &'static str,
    },

    /// A display edge, tracked id, color target, or driver id lies outside
    /// the vertex array.
    #[error("reference to unknown vertex {reference}")]
    UnknownVertex { reference: VertexId },
}
