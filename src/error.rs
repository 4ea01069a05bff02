use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

/// Errors raised while building or reading a graph, or when a graph handed to the
/// matching algorithm is malformed.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge ({u}, {v}) references vertex {vertex}, but the graph has {vertex_count} vertices")]
    UnknownVertex { u: VertexId, v: VertexId, vertex: VertexId, vertex_count: usize },

    #[error("edge ({u}, {v}) has a NaN weight")]
    NanWeight { u: VertexId, v: VertexId },

    #[error("found edge before p-line")]
    MissingHeader,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons why a set of edges is not a valid matching of a graph.
#[derive(Debug, Error, PartialEq)]
pub enum CheckError {
    #[error("edge {0} does not exist in the graph")]
    UnknownEdge(EdgeId),

    #[error("edge {edge} references vertex {vertex} outside the graph")]
    UnknownVertex { edge: EdgeId, vertex: VertexId },

    #[error("edge {0} is a self-loop")]
    SelfLoop(EdgeId),

    #[error("edges {first} and {second} share vertex {vertex}")]
    SharedVertex { vertex: VertexId, first: EdgeId, second: EdgeId },

    #[error("reported weight {reported} differs from edge weight sum {actual}")]
    WeightMismatch { reported: f64, actual: f64 },
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("ILP solver stopped with status {status}")]
    NotOptimal { status: String },
}
