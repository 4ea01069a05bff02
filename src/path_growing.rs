use log::{debug, trace};
use crate::error::GraphError;
use crate::graph::WeightedAdjacency;
use crate::heuristic::StartSelector;
use crate::matching::Matching;
use crate::view::WorkingGraph;

/// Computes a matching of at least half the maximum weight (for non-negative weights)
/// with the [path growing algorithm] of Drake and Hougardy.
///
/// Starting from some vertex, a path is grown by repeatedly following the heaviest edge
/// to a still active vertex and deactivating the vertex it was left from. The edges of
/// the path are assigned alternately to two matchings. When the path cannot be extended
/// a new one is started, continuing the alternation, until no edges remain. The heavier
/// of both matchings is returned; together they weigh at least as much as an optimum
/// matching.
///
/// Self-loops are ignored, parallel edges compete individually and edge direction plays
/// no role. Negative weights are not filtered out, an edge of negative weight is chosen if
/// it is the heaviest one left at the current vertex.
///
/// With `heuristics` set, every path starts at the vertex of maximum weighted degree
/// instead of the lowest-index vertex that still has an edge. The running time is
/// O(m log m) without and O(paths * (n + m) + m log m) with heuristics.
///
/// Fails only if `g` is malformed (an edge referencing a vertex out of range or with NaN
/// weight).
///
/// [path growing algorithm]: https://doi.org/10.1016/S0020-0190(02)00393-9
pub fn compute_matching<G: WeightedAdjacency>(g: &G, heuristics: bool) -> Result<Matching, GraphError> {
    let mut state = WorkingGraph::new(g)?;
    let mut selector = StartSelector::new(heuristics);
    let mut sides = [Matching::new(), Matching::new()];
    let mut i = 0;
    let mut paths = 0;

    while let Some(start) = selector.next_start(&state) {
        let mut x = start;
        let mut len = 0;
        while let Some(inc) = state.heaviest_edge(x) {
            sides[i].push(inc.edge, state.graph().endpoints(inc.edge), inc.weight);
            state.deactivate(x);
            i = 1 - i;
            x = inc.neighbor;
            len += 1;
        }
        state.deactivate(x);
        paths += 1;
        trace!("path {} grown from vertex {} to vertex {} with {} edges", paths, start, x, len);
    }

    let [m0, m1] = sides;
    debug!(
        "path growing on {} vertices, {} edges: {} paths, weights {} ({} edges) and {} ({} edges)",
        g.vertex_count(), g.edge_count(), paths, m0.weight(), m0.len(), m1.weight(), m1.len()
    );
    Ok(if m1.weight() > m0.weight() { m1 } else { m0 })
}
