use std::io::BufRead;
use itertools::Itertools;
use log::warn;
use crate::error::GraphError;

// Weighted graphs are stored as an edge arena plus per-vertex lists of edge ids.
// Vertices are 0, ..., n-1 and edges 0, ..., m-1 in insertion order.

pub type VertexId = usize;
pub type EdgeId = usize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub w: f64,
}

impl Edge {
    pub fn new(u: VertexId, v: VertexId, w: f64) -> Edge {
        Edge { u, v, w }
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.u == self.v
    }
}

/// Read-only adjacency queries the matching algorithms need from a graph.
///
/// Every edge must be listed in `incident_edges` of both of its endpoints (once for a
/// self-loop). Direction, if the graph has one, is not part of this interface.
pub trait WeightedAdjacency {
    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;
    fn incident_edges(&self, v: VertexId) -> &[EdgeId];
    fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId);
    fn weight(&self, e: EdgeId) -> f64;
}

/// Weighted pseudograph: parallel edges and self-loops are allowed.
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    pub directed: bool,
    pub edges: Vec<Edge>,
    pub adjs: Vec<Vec<EdgeId>>,
}

impl WeightedGraph {
    /// Undirected graph with `n` isolated vertices.
    pub fn new(n: usize) -> WeightedGraph {
        WeightedGraph { directed: false, edges: Vec::new(), adjs: vec![Vec::new(); n] }
    }

    /// Directed graph with `n` isolated vertices.
    pub fn new_directed(n: usize) -> WeightedGraph {
        WeightedGraph { directed: true, ..WeightedGraph::new(n) }
    }

    pub fn from_edges<I>(n: usize, directed: bool, edges: I) -> Result<WeightedGraph, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId, f64)>,
    {
        let mut g = if directed { WeightedGraph::new_directed(n) } else { WeightedGraph::new(n) };
        for (u, v, w) in edges {
            g.add_edge(u, v, w)?;
        }
        Ok(g)
    }

    pub fn n(&self) -> usize {
        self.adjs.len()
    }

    pub fn m(&self) -> usize {
        self.edges.len()
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.adjs.push(Vec::new());
        self.adjs.len() - 1
    }

    pub fn add_edge(&mut self, u: VertexId, v: VertexId, w: f64) -> Result<EdgeId, GraphError> {
        let n = self.n();
        if let Some(&vertex) = [u, v].iter().find(|&&x| x >= n) {
            return Err(GraphError::UnknownVertex { u, v, vertex, vertex_count: n });
        }
        if w.is_nan() {
            return Err(GraphError::NanWeight { u, v });
        }
        Ok(self.push_edge(u, v, w))
    }

    /// Inserts an edge whose endpoints and weight are known to be valid.
    pub(crate) fn push_edge(&mut self, u: VertexId, v: VertexId, w: f64) -> EdgeId {
        let e = self.edges.len();
        self.edges.push(Edge::new(u, v, w));
        self.adjs[u].push(e);
        if u != v {
            self.adjs[v].push(e);
        }
        e
    }

    pub fn edge(&self, e: EdgeId) -> &Edge {
        &self.edges[e]
    }

    /// Total weight of the given edges, summed in the given order.
    pub fn weight_of(&self, edges: &[EdgeId]) -> f64 {
        edges.iter().map(|&e| self.edges[e].w).sum()
    }

    /// Reads a graph in the DIMACS-like format
    ///
    /// ```text
    /// c comment
    /// p edge <n> <m>
    /// e <u> <v> <weight>
    /// ```
    ///
    /// with 1-based vertices. `p arc` declares a directed graph.
    pub fn new_from_reader<R: BufRead>(reader: R) -> Result<WeightedGraph, GraphError> {
        let mut graph: Option<WeightedGraph> = None;
        let mut declared_m = 0;
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let lineno = i + 1;
            let ll = line.split_whitespace().collect_vec();
            if ll.is_empty() {
                continue;
            }
            match ll[0] {
                "c" => {} // skip comments
                "p" => { // parse header
                    if ll.len() != 4 {
                        return Err(parse_error(lineno, "expected `p <edge|arc> <n> <m>`"));
                    }
                    let n = parse_field::<usize>(ll[2], lineno)?;
                    declared_m = parse_field::<usize>(ll[3], lineno)?;
                    graph = Some(match ll[1] {
                        "edge" => WeightedGraph::new(n),
                        "arc" => WeightedGraph::new_directed(n),
                        other => return Err(parse_error(lineno, format!("unknown graph kind `{}`", other))),
                    });
                }
                "e" | "a" => {
                    let g = graph.as_mut().ok_or(GraphError::MissingHeader)?;
                    if ll.len() != 4 {
                        return Err(parse_error(lineno, "expected `e <u> <v> <weight>`"));
                    }
                    let u = parse_field::<usize>(ll[1], lineno)?;
                    let v = parse_field::<usize>(ll[2], lineno)?;
                    let w = parse_field::<f64>(ll[3], lineno)?;
                    if u == 0 || v == 0 {
                        return Err(parse_error(lineno, "vertices are numbered from 1"));
                    }
                    g.add_edge(u - 1, v - 1, w)?;
                }
                other => return Err(parse_error(lineno, format!("unexpected line type `{}`", other))),
            }
        }
        let g = graph.ok_or_else(|| parse_error(0, "no p-line found, maybe the input was empty?"))?;
        if g.m() != declared_m {
            warn!("p-line declares {} edges, but {} were read", declared_m, g.m());
        }
        Ok(g)
    }

    pub fn new_from_stdin() -> Result<WeightedGraph, GraphError> {
        WeightedGraph::new_from_reader(std::io::stdin().lock())
    }
}

impl WeightedAdjacency for WeightedGraph {
    fn vertex_count(&self) -> usize {
        self.n()
    }

    fn edge_count(&self) -> usize {
        self.m()
    }

    fn incident_edges(&self, v: VertexId) -> &[EdgeId] {
        &self.adjs[v]
    }

    fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId) {
        (self.edges[e].u, self.edges[e].v)
    }

    fn weight(&self, e: EdgeId) -> f64 {
        self.edges[e].w
    }
}

fn parse_error(line: usize, reason: impl Into<String>) -> GraphError {
    GraphError::Parse { line, reason: reason.into() }
}

fn parse_field<T: std::str::FromStr>(s: &str, line: usize) -> Result<T, GraphError> {
    s.parse::<T>().map_err(|_| parse_error(line, format!("cannot parse `{}`", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_registers_both_endpoints() {
        let mut g = WeightedGraph::new(3);
        let e = g.add_edge(0, 2, 1.5).unwrap();
        assert_eq!(g.incident_edges(0), &[e]);
        assert_eq!(g.incident_edges(2), &[e]);
        assert!(g.incident_edges(1).is_empty());
        assert_eq!(g.endpoints(e), (0, 2));
    }

    #[test]
    fn self_loop_is_listed_once() {
        let mut g = WeightedGraph::new(1);
        let e = g.add_edge(0, 0, -3.0).unwrap();
        assert_eq!(g.incident_edges(0), &[e]);
        assert!(g.edge(e).is_loop());
    }

    #[test]
    fn parallel_edges_are_kept() {
        let g = WeightedGraph::from_edges(2, false, vec![(0, 1, 1.0), (1, 0, 2.0)]).unwrap();
        assert_eq!(g.m(), 2);
        assert_eq!(g.incident_edges(0), &[0, 1]);
        assert_eq!(g.weight_of(&[0, 1]), 3.0);
    }

    #[test]
    fn rejects_unknown_vertex() {
        let mut g = WeightedGraph::new(2);
        match g.add_edge(1, 5, 1.0) {
            Err(GraphError::UnknownVertex { vertex, vertex_count, .. }) => {
                assert_eq!(vertex, 5);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(g.m(), 0);
    }

    #[test]
    fn rejects_nan_weight() {
        let mut g = WeightedGraph::new(2);
        assert!(matches!(g.add_edge(0, 1, f64::NAN), Err(GraphError::NanWeight { u: 0, v: 1 })));
    }

    #[test]
    fn add_vertex_extends_graph() {
        let mut g = WeightedGraph::new(0);
        let a = g.add_vertex();
        let b = g.add_vertex();
        assert_eq!((a, b), (0, 1));
        assert!(g.add_edge(a, b, 1.0).is_ok());
    }

    #[test]
    fn reads_dimacs_like_input() {
        let input = "c a triangle\np edge 3 3\ne 1 2 1.5\n\ne 2 3 2\ne 3 1 -1\n";
        let g = WeightedGraph::new_from_reader(input.as_bytes()).unwrap();
        assert!(!g.directed);
        assert_eq!(g.n(), 3);
        assert_eq!(g.m(), 3);
        assert_eq!(*g.edge(0), Edge::new(0, 1, 1.5));
        assert_eq!(*g.edge(2), Edge::new(2, 0, -1.0));
    }

    #[test]
    fn reads_directed_input() {
        let g = WeightedGraph::new_from_reader("p arc 2 1\na 2 1 4.0\n".as_bytes()).unwrap();
        assert!(g.directed);
        assert_eq!(g.endpoints(0), (1, 0));
    }

    #[test]
    fn reader_reports_errors() {
        assert!(matches!(
            WeightedGraph::new_from_reader("e 1 2 1.0\n".as_bytes()),
            Err(GraphError::MissingHeader)
        ));
        assert!(matches!(
            WeightedGraph::new_from_reader("p edge 2 1\ne 1 x 1.0\n".as_bytes()),
            Err(GraphError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            WeightedGraph::new_from_reader("p edge 2 1\ne 0 1 1.0\n".as_bytes()),
            Err(GraphError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            WeightedGraph::new_from_reader("p edge 2 1\ne 1 3 1.0\n".as_bytes()),
            Err(GraphError::UnknownVertex { vertex: 2, .. })
        ));
        assert!(matches!(
            WeightedGraph::new_from_reader("".as_bytes()),
            Err(GraphError::Parse { .. })
        ));
    }
}
