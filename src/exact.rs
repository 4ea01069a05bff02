use highs::{HighsModelStatus, RowProblem, Sense};
use itertools::Itertools;
use crate::error::SolverError;
use crate::graph::{EdgeId, WeightedAdjacency};

/// Weight of a maximum weight matching of `g`, computed with the trivial ILP formulation
/// using the highs solver: one binary column per edge and one row per vertex limiting its
/// matched edges to one. Self-loops and non-positive edges can never improve a matching
/// and are left out.
///
/// Meant as a reference for judging approximate matchings, not for large graphs.
pub fn max_weight<G: WeightedAdjacency>(g: &G) -> Result<f64, SolverError> {
    let (_, weight) = max_weight_matching(g)?;
    Ok(weight)
}

/// Like `max_weight`, but also returns the edges of the optimum matching.
pub fn max_weight_matching<G: WeightedAdjacency>(g: &G) -> Result<(Vec<EdgeId>, f64), SolverError> {
    let candidates = (0..g.edge_count())
        .filter(|&e| {
            let (u, v) = g.endpoints(e);
            u != v && g.weight(e) > 0.0
        })
        .collect_vec();
    if candidates.is_empty() {
        return Ok((Vec::new(), 0.0));
    }

    let mut problem = RowProblem::new();
    let cols = candidates.iter()
        .map(|&e| problem.add_integer_column(g.weight(e), 0..=1))
        .collect_vec();

    let mut rows = vec![Vec::new(); g.vertex_count()];
    for (i, &e) in candidates.iter().enumerate() {
        let (u, v) = g.endpoints(e);
        rows[u].push((cols[i], 1.0));
        rows[v].push((cols[i], 1.0));
    }
    for row in rows.iter().filter(|r| r.len() > 1) {
        problem.add_row(..=1, row);
    }

    let mut model = problem.optimise(Sense::Maximise);
    model.set_option("output_flag", false);
    model.set_option("parallel", "off");
    model.set_option("threads", 1);

    let solved_model = model.solve();
    let status = solved_model.status();
    if status != HighsModelStatus::Optimal {
        return Err(SolverError::NotOptimal { status: format!("{:?}", status) });
    }
    let vals = solved_model.get_solution().columns().to_vec();
    let matched = candidates.iter().cloned()
        .zip(vals)
        .filter(|(_, x)| *x > 0.5)
        .map(|(e, _)| e)
        .collect_vec();
    let weight = matched.iter().map(|&e| g.weight(e)).sum();
    Ok((matched, weight))
}
