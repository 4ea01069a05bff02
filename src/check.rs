use crate::error::CheckError;
use crate::graph::{EdgeId, WeightedAdjacency};
use crate::matching::{Matching, DEFAULT_EPSILON};

/// Checks that `edges` is a matching of `g`: every edge exists and lies inside the graph,
/// none is a self-loop and no two edges share a vertex.
pub fn check_edges<G: WeightedAdjacency>(g: &G, edges: &[EdgeId]) -> Result<(), CheckError> {
    let mut owner: Vec<Option<EdgeId>> = vec![None; g.vertex_count()];
    for e in edges.iter().cloned() {
        if e >= g.edge_count() {
            return Err(CheckError::UnknownEdge(e));
        }
        let (u, v) = g.endpoints(e);
        if let Some(&vertex) = [u, v].iter().find(|&&x| x >= owner.len()) {
            return Err(CheckError::UnknownVertex { edge: e, vertex });
        }
        if u == v {
            return Err(CheckError::SelfLoop(e));
        }
        for x in [u, v] {
            if let Some(first) = owner[x] {
                return Err(CheckError::SharedVertex { vertex: x, first, second: e });
            }
            owner[x] = Some(e);
        }
    }
    Ok(())
}

/// Like `check_edges`, and additionally checks that the reported weight is the sum of the
/// edge weights up to `DEFAULT_EPSILON`.
pub fn check_matching<G: WeightedAdjacency>(g: &G, m: &Matching) -> Result<(), CheckError> {
    check_edges(g, m.edges())?;
    let actual: f64 = m.edges().iter().map(|&e| g.weight(e)).sum();
    if (actual - m.weight()).abs() > DEFAULT_EPSILON {
        return Err(CheckError::WeightMismatch { reported: m.weight(), actual });
    }
    Ok(())
}
