pub mod error;
pub mod graph;
pub mod view;
pub mod heuristic;
pub mod matching;
pub mod path_growing;
pub mod check;
pub mod exact;
pub mod generators;

// Re-exports to flatten the crate.
pub use graph::{WeightedGraph, WeightedAdjacency, VertexId, EdgeId};
pub use matching::{Matching, DEFAULT_EPSILON};
pub use path_growing::compute_matching;
pub use error::{GraphError, CheckError, SolverError};
