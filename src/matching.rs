use crate::graph::{EdgeId, VertexId};

/// Tolerance for comparing matching weights computed by different summation orders.
/// The algorithms themselves compare weights exactly.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// A set of edges of some graph together with their total weight.
///
/// Edges are kept in the order they were added, and the weight is accumulated in that
/// same order, so equal inputs give bit-identical weights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matching {
    edges: Vec<EdgeId>,
    pairs: Vec<(VertexId, VertexId)>,
    weight: f64,
}

impl Matching {
    pub fn new() -> Matching {
        Matching::default()
    }

    /// Appends edge `e` with endpoints `(u, v)` and weight `w`. Does not check the
    /// matching property, see `check::check_matching`.
    pub fn push(&mut self, e: EdgeId, (u, v): (VertexId, VertexId), w: f64) {
        self.edges.push(e);
        self.pairs.push((u, v));
        self.weight += w;
    }

    /// Ids of the matched edges in the original graph.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Endpoints of the matched edges, as stored in the original graph.
    pub fn pairs(&self) -> &[(VertexId, VertexId)] {
        &self.pairs
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
