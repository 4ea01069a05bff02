#![allow(dead_code)]

use pathgrow::{WeightedAdjacency, WeightedGraph};

pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Two disjoint 4-cycles 0-1-2-3 and 4-5-6-7 with unit weights.
pub fn two_four_cycles(directed: bool) -> WeightedGraph {
    let edges = vec![
        (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0),
        (4, 5, 1.0), (5, 6, 1.0), (6, 7, 1.0), (7, 4, 1.0),
    ];
    WeightedGraph::from_edges(8, directed, edges).unwrap()
}

/// `two_four_cycles` with a parallel edge of weight 2 next to every edge.
pub fn two_four_cycles_doubled(directed: bool) -> WeightedGraph {
    let mut g = two_four_cycles(directed);
    for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0), (4, 5), (5, 6), (6, 7), (7, 4)] {
        g.add_edge(u, v, 2.0).unwrap();
    }
    g
}

/// Directed copy of `g` in which every edge points the other way.
pub fn reversed_directed(g: &WeightedGraph) -> WeightedGraph {
    WeightedGraph::from_edges(g.n(), true, g.edges.iter().map(|e| (e.v, e.u, e.w))).unwrap()
}

/// Weight of a maximum weight matching by exhaustive search, for tiny graphs only.
pub fn brute_force_optimum<G: WeightedAdjacency>(g: &G) -> f64 {
    fn go<G: WeightedAdjacency>(g: &G, e: usize, used: &mut Vec<bool>) -> f64 {
        if e == g.edge_count() {
            return 0.0;
        }
        let mut best = go(g, e + 1, used);
        let (u, v) = g.endpoints(e);
        if u != v && !used[u] && !used[v] {
            used[u] = true;
            used[v] = true;
            best = best.max(g.weight(e) + go(g, e + 1, used));
            used[u] = false;
            used[v] = false;
        }
        best
    }
    go(g, 0, &mut vec![false; g.vertex_count()])
}
