use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::instrument;

use crate::graph::{Graph, VertexId};

/// Entry in the bounded-BFS frontier queue.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Vertex(VertexId),
    /// Level marker: everything queued before it belongs to the current level.
    LevelEnd,
}

/// Breadth-first search from `start`.
///
/// Returns every vertex reachable from `start` exactly once, in visit order,
/// with `start` first. Neighbors are enqueued in ascending id order, so
/// vertices at the same distance come out in a fixed order. `None` if `start`
/// is not a vertex.
#[instrument(level = "debug", skip(graph))]
pub fn bfs(graph: &Graph, start: VertexId) -> Option<Vec<VertexId>> {
    if !graph.contains_vertex(start) {
        return None;
    }

    let n = graph.vertex_count();
    let mut visited = Vec::with_capacity(n);
    let mut discovered = FixedBitSet::with_capacity(n);
    let mut frontier: VecDeque<VertexId> = VecDeque::new();

    discovered.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        visited.push(current);

        for adj in graph.neighbor_iter(current) {
            if !discovered.put(adj) {
                frontier.push_back(adj);
            }
        }
    }

    Some(visited)
}

/// Breadth-first search from `start`, grouped by distance.
///
/// Returns exactly `max_distance + 1` levels: level 0 is `[start]` and level
/// `k` holds the vertices first discovered `k` edges away, in the same order
/// [`bfs`] visits them. Levels past the reachable part of the graph are empty.
///
/// `None` if `start` is not a vertex or `max_distance` is 0.
#[instrument(level = "debug", skip(graph))]
pub fn bfs_bounded(
    graph: &Graph,
    start: VertexId,
    max_distance: usize,
) -> Option<Vec<Vec<VertexId>>> {
    if !graph.contains_vertex(start) || max_distance < 1 {
        return None;
    }

    let n = graph.vertex_count();
    let mut levels: Vec<Vec<VertexId>> = Vec::with_capacity(max_distance + 1);
    let mut level = Vec::new();
    let mut discovered = FixedBitSet::with_capacity(n);
    let mut frontier: VecDeque<Slot> = VecDeque::new();

    discovered.insert(start);
    frontier.push_back(Slot::Vertex(start));
    frontier.push_back(Slot::LevelEnd);

    while let Some(slot) = frontier.pop_front() {
        match slot {
            Slot::LevelEnd => {
                levels.push(std::mem::take(&mut level));
                if levels.len() > max_distance {
                    break;
                }
                frontier.push_back(Slot::LevelEnd);
            }
            Slot::Vertex(current) => {
                level.push(current);

                // Last level: nothing beyond it will be emitted.
                if levels.len() == max_distance {
                    continue;
                }

                for adj in graph.neighbor_iter(current) {
                    if !discovered.put(adj) {
                        frontier.push_back(Slot::Vertex(adj));
                    }
                }
            }
        }
    }

    Some(levels)
}

/// Depth-first search from `start`.
///
/// Uses an explicit stack. Neighbors are pushed in descending order so the
/// smallest id is explored first. A vertex can be pushed more than once but is
/// recorded and expanded only on its first pop. `None` if `start` is not a vertex.
#[instrument(level = "debug", skip(graph))]
pub fn dfs(graph: &Graph, start: VertexId) -> Option<Vec<VertexId>> {
    if !graph.contains_vertex(start) {
        return None;
    }

    let n = graph.vertex_count();
    let mut order = Vec::with_capacity(n);
    let mut visited = FixedBitSet::with_capacity(n);
    let mut frontier: Vec<VertexId> = vec![start];
    let mut scratch: Vec<VertexId> = Vec::new();

    while let Some(current) = frontier.pop() {
        if visited.put(current) {
            continue;
        }
        order.push(current);

        scratch.clear();
        scratch.extend(graph.neighbor_iter(current));
        frontier.extend(scratch.iter().rev());
    }

    Some(order)
}
