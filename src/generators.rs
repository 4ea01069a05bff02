use rand::Rng;
use crate::graph::WeightedGraph;

/// Parameters for a random weighted pseudograph. Endpoints are drawn uniformly, so
/// parallel edges appear naturally; self-loops are only generated if `self_loops` is set.
#[derive(Clone, Debug)]
pub struct RandomGraph {
    pub n: usize,
    pub m: usize,
    pub min_weight: f64,
    pub max_weight: f64,
    pub self_loops: bool,
    pub directed: bool,
}

impl RandomGraph {
    pub fn new(n: usize, m: usize) -> RandomGraph {
        RandomGraph { n, m, min_weight: 0.0, max_weight: 1.0, self_loops: false, directed: false }
    }

    pub fn weights(mut self, min_weight: f64, max_weight: f64) -> RandomGraph {
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    pub fn self_loops(mut self, self_loops: bool) -> RandomGraph {
        self.self_loops = self_loops;
        self
    }

    pub fn directed(mut self, directed: bool) -> RandomGraph {
        self.directed = directed;
        self
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> WeightedGraph {
        let mut g = if self.directed { WeightedGraph::new_directed(self.n) } else { WeightedGraph::new(self.n) };
        // without loops an edge needs two distinct vertices
        if self.n == 0 || (self.n == 1 && !self.self_loops) {
            return g;
        }
        while g.m() < self.m {
            let u = rng.gen_range(0..self.n);
            let v = rng.gen_range(0..self.n);
            if u == v && !self.self_loops {
                continue;
            }
            let w = if self.min_weight < self.max_weight {
                rng.gen_range(self.min_weight..self.max_weight)
            } else {
                self.min_weight
            };
            g.push_edge(u, v, w);
        }
        g
    }
}
