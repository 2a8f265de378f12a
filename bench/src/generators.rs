// ---------------------------------------------------------------------------
// Generators: deterministic for a given seed, single-threaded
// ---------------------------------------------------------------------------

use std::collections::VecDeque;

use wordgraph_core::{Graph, VertexId, Weight};

/// Simple LCG for deterministic, fast pseudo-random numbers.
pub struct FastRng(u64);

impl FastRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    pub fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn index(&mut self, len: usize) -> usize {
        self.next(len as u64) as usize
    }

    fn weight(&mut self) -> Weight {
        1 + self.next(20) as Weight
    }
}

pub type Generator = fn(usize, u64) -> Graph;

fn numbered(vertex_count: usize) -> Graph {
    let mut graph = Graph::default();
    for i in 0..vertex_count {
        graph.add_vertex(&format!("v{i}"));
    }
    graph
}

/// Word ladder: random words, with an edge (weight 1) between every pair
/// that differs in exactly one letter.
///
/// Word length grows with the target size so the graph stays sparse but
/// connected enough to have long ladders.
pub fn gen_ladder(vertex_count: usize, seed: u64) -> Graph {
    let mut rng = FastRng::new(seed);
    let mut len = 3u32;
    while 26usize.saturating_pow(len) < vertex_count.saturating_mul(8) {
        len += 1;
    }

    let mut graph = Graph::default();
    let mut attempts = 0usize;
    while graph.vertex_count() < vertex_count && attempts < vertex_count * 20 {
        attempts += 1;
        let word: String = (0..len)
            .map(|_| char::from(b'a' + rng.next(26) as u8))
            .collect();
        if graph.name_to_id(&word).is_none() {
            graph.add_vertex(&word);
        }
    }

    let words: Vec<String> = (0..graph.vertex_count())
        .filter_map(|v| graph.id_to_name(v).map(str::to_owned))
        .collect();

    for (v, word) in words.iter().enumerate() {
        let mut candidate = word.clone().into_bytes();
        for i in 0..candidate.len() {
            let letter = candidate[i];
            for c in b'a'..=b'z' {
                if c == letter {
                    continue;
                }
                candidate[i] = c;
                let key = String::from_utf8_lossy(&candidate);
                if let Some(other) = graph.name_to_id(&key) {
                    graph.add_edge(v, other, 1);
                }
            }
            candidate[i] = letter;
        }
    }

    graph
}

/// Chain 0 → 1 → … → n-1. Deepest possible BFS/DFS, one path.
pub fn gen_chain(vertex_count: usize, seed: u64) -> Graph {
    let mut rng = FastRng::new(seed);
    let mut graph = numbered(vertex_count);
    for v in 1..vertex_count {
        let w = rng.weight();
        graph.add_edge(v - 1, v, w);
    }
    graph
}

/// Erdos-Renyi: ~8 uniformly random weighted edges per vertex.
pub fn gen_random(vertex_count: usize, seed: u64) -> Graph {
    let mut rng = FastRng::new(seed);
    let mut graph = numbered(vertex_count);
    for _ in 0..vertex_count * 8 {
        let from = rng.index(vertex_count);
        let to = rng.index(vertex_count);
        let w = rng.weight();
        graph.add_edge(from, to, w);
    }
    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each vertex links forward to its K nearest ring neighbors; each link is
/// rewired to a random vertex with probability p.
pub fn gen_small_world(vertex_count: usize, seed: u64) -> Graph {
    let k = 4usize;
    let p = 0.05f64;
    let mut rng = FastRng::new(seed);
    let mut graph = numbered(vertex_count);

    for i in 0..vertex_count {
        for j in 1..=k {
            let mut target = (i + j) % vertex_count;
            if rng.next_f64() < p {
                let rewired = rng.index(vertex_count);
                if rewired != i {
                    target = rewired;
                }
            }
            let w = rng.weight();
            graph.add_edge(i, target, w);
        }
    }

    graph
}

/// Barbell: two dense random clusters joined by a thin bridge chain.
///
/// The only route between the halves runs through the bridge, so the
/// far-end shortest path has to find it.
pub fn gen_barbell(vertex_count: usize, seed: u64) -> Graph {
    let bridge_len = 10usize.min(vertex_count / 3);
    let cluster = (vertex_count - bridge_len) / 2;
    let mut rng = FastRng::new(seed);
    let mut graph = numbered(cluster * 2 + bridge_len);

    let mut wire_cluster = |graph: &mut Graph, base: VertexId| {
        for i in 0..cluster {
            for _ in 0..8usize.min(cluster.saturating_sub(1)) {
                let target = rng.index(cluster);
                if target != i {
                    let w = rng.weight();
                    graph.add_edge(base + i, base + target, w);
                }
            }
        }
    };
    wire_cluster(&mut graph, 0);
    wire_cluster(&mut graph, cluster + bridge_len);

    // cluster A's last vertex → bridge → cluster B's first vertex
    for id in cluster.saturating_sub(1)..cluster + bridge_len {
        graph.add_edge(id, id + 1, 1);
    }

    graph
}

/// Multigraph: a sparse random backbone where every edge is repeated with
/// several different weights. Stresses neighbor dedup and min-weight lookup.
pub fn gen_multi(vertex_count: usize, seed: u64) -> Graph {
    let mut rng = FastRng::new(seed);
    let mut graph = numbered(vertex_count);

    // Backbone keeps everything reachable from 0.
    let mut recent: VecDeque<VertexId> = VecDeque::with_capacity(65);
    recent.push_back(0);
    for v in 1..vertex_count {
        let parent = recent[rng.index(recent.len())];
        for _ in 0..1 + rng.next(4) {
            let w = rng.weight();
            graph.add_edge(parent, v, w);
        }
        recent.push_back(v);
        if recent.len() > 64 {
            recent.pop_front();
        }
    }

    for _ in 0..vertex_count * 2 {
        let from = rng.index(vertex_count);
        let to = rng.index(vertex_count);
        for _ in 0..1 + rng.next(3) {
            let w = rng.weight();
            graph.add_edge(from, to, w);
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_deterministic() {
        let generators: [Generator; 6] = [
            gen_ladder,
            gen_chain,
            gen_random,
            gen_small_world,
            gen_barbell,
            gen_multi,
        ];
        for generator in generators {
            let a = generator(200, 7);
            let b = generator(200, 7);
            assert_eq!(a.vertex_count(), b.vertex_count());
            assert_eq!(a.edge_count(), b.edge_count());
            assert!(a.vertex_count() > 0);
        }
    }

    #[test]
    fn test_ladder_edges_differ_by_one_letter() {
        let g = gen_ladder(300, 1);
        for v in 0..g.vertex_count() {
            let word = g.id_to_name(v).unwrap();
            for w in g.neighbors(v).unwrap() {
                let other = g.id_to_name(w).unwrap();
                let diff = word.bytes().zip(other.bytes()).filter(|(a, b)| a != b).count();
                assert_eq!(diff, 1, "{word} -> {other}");
            }
        }
    }

    #[test]
    fn test_barbell_bridge_connects_halves() {
        let g = gen_barbell(100, 3);
        assert_eq!(g.vertex_count(), 100);
        // 45-vertex clusters around a 10-vertex bridge (45..55)
        let path = wordgraph_core::shortest_path(&g, 44, 55).unwrap();
        assert_eq!(path, (44..=55).collect::<Vec<_>>());
    }

    #[test]
    fn test_chain_is_single_path() {
        let g = gen_chain(50, 9);
        assert_eq!(g.edge_count(), 49);
        assert_eq!(wordgraph_core::shortest_path(&g, 0, 49).unwrap().len(), 50);
    }
}
