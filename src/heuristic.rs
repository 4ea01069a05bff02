use crate::graph::{VertexId, WeightedAdjacency};
use crate::view::WorkingGraph;

/// How the next path start is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartRule {
    /// Lowest index vertex that still has an active edge.
    FirstActive,
    /// Vertex with the largest sum of active edge weights, ties to the lowest index.
    MaxWeightedDegree,
}

/// Picks the start vertex of every path. Both rules only ever return vertices that
/// still have an active edge, so the path growing loop is the same for either.
pub struct StartSelector {
    pub rule: StartRule,
    next: VertexId,
}

impl StartSelector {
    pub fn new(heuristics: bool) -> StartSelector {
        let rule = if heuristics { StartRule::MaxWeightedDegree } else { StartRule::FirstActive };
        StartSelector { rule, next: 0 }
    }

    pub fn next_start<G: WeightedAdjacency>(&mut self, state: &WorkingGraph<G>) -> Option<VertexId> {
        match self.rule {
            StartRule::FirstActive => {
                // vertices never regain edges, so the cursor only moves forward
                while self.next < state.vertex_count() {
                    if state.has_active_edge(self.next) {
                        return Some(self.next);
                    }
                    self.next += 1;
                }
                None
            }
            StartRule::MaxWeightedDegree => max_weighted_degree(state),
        }
    }
}

fn max_weighted_degree<G: WeightedAdjacency>(state: &WorkingGraph<G>) -> Option<VertexId> {
    let mut best: Option<(VertexId, f64)> = None;
    for v in state.active_vertices() {
        if !state.has_active_edge(v) {
            continue;
        }
        let wd = state.weighted_degree(v);
        match best {
            Some((_, mx)) if wd.total_cmp(&mx).is_le() => {}
            _ => best = Some((v, wd)),
        }
    }
    best.map(|(v, _)| v)
}
