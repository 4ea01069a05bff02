use std::cmp::Ordering;
use bit_set::BitSet;
use crate::error::GraphError;
use crate::graph::{EdgeId, VertexId, WeightedAdjacency};

/// One end of a non-loop edge as seen from a vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Incidence {
    pub edge: EdgeId,
    pub neighbor: VertexId,
    pub weight: f64,
}

/// Heaviest first; equal weights go to the lower neighbor, then to the lower edge id.
fn heaviest_first(a: &Incidence, b: &Incidence) -> Ordering {
    b.weight.total_cmp(&a.weight)
        .then(a.neighbor.cmp(&b.neighbor))
        .then(a.edge.cmp(&b.edge))
}

/// Mutable view over a borrowed graph in which vertices can be deactivated.
///
/// Self-loops are dropped when the view is built, parallel edges are kept as separate
/// incidences and edge direction is ignored. An edge stays selectable as long as both of
/// its endpoints are active. The graph itself is never modified.
pub struct WorkingGraph<'g, G: WeightedAdjacency> {
    graph: &'g G,
    active: BitSet,
    incidences: Vec<Vec<Incidence>>, // sorted with heaviest_first
    cursor: Vec<usize>,              // incidences[v][..cursor[v]] lead to inactive vertices
    degree: Vec<usize>,
}

impl<'g, G: WeightedAdjacency> WorkingGraph<'g, G> {
    /// Builds the view with all vertices active. Fails if an edge references a vertex
    /// outside the graph or carries a NaN weight.
    pub fn new(graph: &'g G) -> Result<Self, GraphError> {
        let n = graph.vertex_count();
        let mut incidences: Vec<Vec<Incidence>> = Vec::with_capacity(n);
        for v in 0..n {
            let mut list = Vec::with_capacity(graph.incident_edges(v).len());
            for e in graph.incident_edges(v).iter().cloned() {
                let (a, b) = graph.endpoints(e);
                if let Some(&vertex) = [a, b].iter().find(|&&x| x >= n) {
                    return Err(GraphError::UnknownVertex { u: a, v: b, vertex, vertex_count: n });
                }
                let weight = graph.weight(e);
                if weight.is_nan() {
                    return Err(GraphError::NanWeight { u: a, v: b });
                }
                if a == b {
                    continue;
                }
                let neighbor = if a == v { b } else { a };
                list.push(Incidence { edge: e, neighbor, weight });
            }
            list.sort_by(heaviest_first);
            incidences.push(list);
        }
        let degree = incidences.iter().map(|l| l.len()).collect();
        let mut active = BitSet::with_capacity(n);
        active.extend(0..n);
        Ok(WorkingGraph { graph, active, incidences, cursor: vec![0; n], degree })
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.incidences.len()
    }

    #[inline]
    pub fn is_active(&self, v: VertexId) -> bool {
        self.active.contains(v)
    }

    #[inline]
    pub fn has_active_edge(&self, v: VertexId) -> bool {
        self.degree[v] > 0
    }

    /// Number of active edges at `v`, parallel edges counted separately.
    pub fn active_degree(&self, v: VertexId) -> usize {
        self.degree[v]
    }

    /// Sum of the weights of the active edges at `v`, added up heaviest first. Summed
    /// afresh on every call so equal edge sets always give bit-identical values.
    pub fn weighted_degree(&self, v: VertexId) -> f64 {
        self.active_edges(v).map(|inc| inc.weight).sum()
    }

    pub fn active_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.active.iter()
    }

    /// Active edges at `v`, heaviest first.
    pub fn active_edges(&self, v: VertexId) -> impl Iterator<Item = Incidence> + '_ {
        let alive = self.is_active(v);
        self.incidences[v][self.cursor[v]..]
            .iter()
            .filter(move |inc| alive && self.is_active(inc.neighbor))
            .cloned()
    }

    /// Heaviest active edge at `v`, if any.
    pub fn heaviest_edge(&mut self, v: VertexId) -> Option<Incidence> {
        if !self.has_active_edge(v) {
            return None;
        }
        // neighbors never come back, so skipped entries stay skipped
        let list = &self.incidences[v];
        let mut c = self.cursor[v];
        while c < list.len() && !self.active.contains(list[c].neighbor) {
            c += 1;
        }
        self.cursor[v] = c;
        list.get(c).cloned()
    }

    /// Removes `v` and all edges incident to it from further consideration.
    pub fn deactivate(&mut self, v: VertexId) {
        if !self.active.remove(v) {
            return;
        }
        for inc in self.incidences[v][self.cursor[v]..].iter() {
            let u = inc.neighbor;
            if !self.active.contains(u) {
                continue;
            }
            self.degree[u] -= 1;
        }
        self.degree[v] = 0;
        self.cursor[v] = self.incidences[v].len();
    }
}
