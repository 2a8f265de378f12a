use fixedbitset::FixedBitSet;
use tracing::{debug, instrument};

use crate::graph::{Graph, VertexId};

/// Distance value for vertices not (yet) reached.
const UNREACHED: i64 = i64::MAX;

/// Single-source shortest-path result from [`dijkstra`].
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    distance: Vec<i64>,
    predecessor: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest distance from the source, or `None` if `v` is unreachable or
    /// not a vertex.
    pub fn distance(&self, v: VertexId) -> Option<i64> {
        self.distance.get(v).copied().filter(|&d| d != UNREACHED)
    }

    /// Previous vertex on the shortest path to `v`. `None` for the source,
    /// unreachable vertices and invalid ids.
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessor.get(v).copied().flatten()
    }

    /// Path from the source to `dest`, both endpoints included.
    ///
    /// `None` if `dest` is not a vertex. An empty path means `dest` is
    /// unreachable; `[source]` when `dest` is the source itself.
    pub fn path_to(&self, dest: VertexId) -> Option<Vec<VertexId>> {
        if dest >= self.distance.len() {
            return None;
        }
        if dest == self.source {
            return Some(vec![self.source]);
        }
        if self.predecessor[dest].is_none() {
            return Some(Vec::new());
        }

        let mut path = vec![dest];
        let mut current = dest;
        while let Some(prev) = self.predecessor[current] {
            path.push(prev);
            current = prev;
        }

        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm from `src` over every vertex.
///
/// Selects the next vertex by a linear scan of the unfinalized set, relaxing
/// each distinct neighbor with the minimum weight of its parallel edges.
/// Stops once the cheapest remaining vertex is unreachable. Ties between
/// equal distances are broken arbitrarily.
///
/// Weights are expected to be non-negative. Distances are summed in `i64`.
///
/// `None` if `src` is not a vertex.
#[instrument(level = "debug", skip(graph))]
pub fn dijkstra(graph: &Graph, src: VertexId) -> Option<ShortestPaths> {
    if !graph.contains_vertex(src) {
        return None;
    }

    let n = graph.vertex_count();
    let mut distance = vec![UNREACHED; n];
    let mut predecessor: Vec<Option<VertexId>> = vec![None; n];
    let mut finalized = FixedBitSet::with_capacity(n);
    let mut unvisited: Vec<VertexId> = (0..n).collect();

    distance[src] = 0;

    while let Some(current) = pop_min(&mut unvisited, &distance) {
        let base = distance[current];
        if base == UNREACHED {
            debug!(remaining = unvisited.len() + 1, "rest of graph unreachable");
            break;
        }
        finalized.insert(current);

        for adj in graph.neighbor_iter(current) {
            if finalized.contains(adj) {
                continue;
            }
            let alt = base + i64::from(graph.edge_weight(current, adj));
            if alt < distance[adj] {
                distance[adj] = alt;
                predecessor[adj] = Some(current);
            }
        }
    }

    Some(ShortestPaths {
        source: src,
        distance,
        predecessor,
    })
}

/// Remove and return the vertex with the smallest current distance.
fn pop_min(unvisited: &mut Vec<VertexId>, distance: &[i64]) -> Option<VertexId> {
    let (pos, _) = unvisited
        .iter()
        .enumerate()
        .min_by_key(|&(_, &v)| distance[v])?;
    Some(unvisited.swap_remove(pos))
}

/// Shortest path from `src` to `dest`.
///
/// `None` if either endpoint is not a vertex. `Some(vec![])` if `dest` is
/// unreachable from `src`.
pub fn shortest_path(graph: &Graph, src: VertexId, dest: VertexId) -> Option<Vec<VertexId>> {
    if !graph.contains_vertex(dest) {
        return None;
    }
    dijkstra(graph, src)?.path_to(dest)
}

/// Total weight of `path`, taking the cheapest edge for each hop.
///
/// `None` if a vertex is invalid or a hop has no edge. Empty and single-vertex
/// paths weigh 0.
pub fn path_weight(graph: &Graph, path: &[VertexId]) -> Option<i64> {
    if path.iter().any(|&v| !graph.contains_vertex(v)) {
        return None;
    }
    path.windows(2)
        .map(|hop| graph.min_edge_weight(hop[0], hop[1]).map(i64::from))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_weighted(n: usize, edges: &[(VertexId, VertexId, i32)]) -> Graph {
        let mut g = Graph::new(n.max(1)).unwrap();
        for i in 0..n {
            g.add_vertex(&format!("v{i}"));
        }
        for &(a, b, w) in edges {
            assert!(g.add_edge(a, b, w));
        }
        g
    }

    #[test]
    fn test_shortest_path_prefers_lighter_route() {
        // 0 -1-> 1 -1-> 3 (total 2) vs 0 -5-> 3
        let g = make_weighted(4, &[(0, 3, 5), (0, 1, 1), (1, 3, 1), (0, 2, 1)]);
        assert_eq!(shortest_path(&g, 0, 3), Some(vec![0, 1, 3]));
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.distance(3), Some(2));
        assert_eq!(sp.predecessor(3), Some(1));
    }

    #[test]
    fn test_shortest_path_more_hops_fewer_weight() {
        let g = make_weighted(5, &[(0, 4, 100), (0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 4, 1)]);
        assert_eq!(shortest_path(&g, 0, 4), Some(vec![0, 1, 2, 3, 4]));
    }

    #[test]
    fn test_shortest_path_self() {
        let g = make_weighted(2, &[(0, 1, 1)]);
        assert_eq!(shortest_path(&g, 1, 1), Some(vec![1]));
        assert_eq!(dijkstra(&g, 1).unwrap().distance(1), Some(0));
    }

    #[test]
    fn test_shortest_path_unreachable_is_empty() {
        let g = make_weighted(3, &[(0, 1, 1)]);
        assert_eq!(shortest_path(&g, 0, 2), Some(vec![]));
        assert_eq!(shortest_path(&g, 1, 0), Some(vec![]));
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(sp.distance(2), None);
        assert_eq!(sp.predecessor(2), None);
    }

    #[test]
    fn test_shortest_path_invalid_endpoints() {
        let g = make_weighted(2, &[(0, 1, 1)]);
        assert_eq!(shortest_path(&g, 2, 0), None);
        assert_eq!(shortest_path(&g, 0, 2), None);
        assert!(dijkstra(&g, 5).is_none());
    }

    #[test]
    fn test_shortest_path_multi_edge_uses_min() {
        // direct 0→2 has a cheap parallel edge
        let g = make_weighted(3, &[(0, 2, 10), (0, 2, 1), (0, 1, 1), (1, 2, 1)]);
        assert_eq!(shortest_path(&g, 0, 2), Some(vec![0, 2]));
        assert_eq!(dijkstra(&g, 0).unwrap().distance(2), Some(1));
    }

    #[test]
    fn test_shortest_path_cycle() {
        let g = make_weighted(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)]);
        assert_eq!(shortest_path(&g, 2, 1), Some(vec![2, 3, 0, 1]));
    }

    #[test]
    fn test_zero_weight_edges() {
        let g = make_weighted(3, &[(0, 1, 0), (1, 2, 0), (0, 2, 1)]);
        assert_eq!(dijkstra(&g, 0).unwrap().distance(2), Some(0));
        assert_eq!(shortest_path(&g, 0, 2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let g = make_weighted(3, &[(0, 1, i32::MAX), (1, 2, i32::MAX)]);
        let expected = 2 * i64::from(i32::MAX);
        assert_eq!(dijkstra(&g, 0).unwrap().distance(2), Some(expected));
    }

    #[test]
    fn test_negative_weight_terminates() {
        let g = make_weighted(2, &[(0, 1, -5), (1, 0, 1)]);
        assert_eq!(shortest_path(&g, 0, 1), Some(vec![0, 1]));
        assert_eq!(shortest_path(&g, 1, 0), Some(vec![1, 0]));
    }

    #[test]
    fn test_path_to_out_of_range() {
        let g = make_weighted(2, &[]);
        assert_eq!(dijkstra(&g, 0).unwrap().path_to(2), None);
    }

    // --- path_weight ---

    #[test]
    fn test_path_weight_matches_distance() {
        let g = make_weighted(4, &[(0, 1, 3), (1, 2, 4), (0, 2, 9), (2, 3, 1)]);
        let path = shortest_path(&g, 0, 3).unwrap();
        let sp = dijkstra(&g, 0).unwrap();
        assert_eq!(path_weight(&g, &path), sp.distance(3));
        assert_eq!(path_weight(&g, &path), Some(8));
    }

    #[test]
    fn test_path_weight_edge_cases() {
        let g = make_weighted(3, &[(0, 1, 2), (0, 1, 1)]);
        assert_eq!(path_weight(&g, &[]), Some(0));
        assert_eq!(path_weight(&g, &[2]), Some(0));
        assert_eq!(path_weight(&g, &[0, 1]), Some(1));
        assert_eq!(path_weight(&g, &[1, 0]), None);
        assert_eq!(path_weight(&g, &[0, 7]), None);
    }
}
