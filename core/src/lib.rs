//! wordgraph-core: directed, weighted multigraph with name lookup and
//! classic traversals.
//!
//! Vertices are appended with a name and get sequential ids. Each vertex
//! owns an edge list sorted by destination, which keeps parallel edges
//! together: neighbor extraction deduplicates in one pass and the weight of
//! a multi-edge resolves to its minimum. On top of that sit BFS (plain and
//! level-bounded), DFS and Dijkstra's shortest path.
//!
//! Pure computation: no I/O, no threads. Wrap a `Graph` in a single lock if
//! several threads need it.

mod error;
mod graph;
mod index;
mod path;
mod report;
mod traversal;

pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, VertexId, Weight};
pub use index::NameIndex;
pub use path::{dijkstra, path_weight, shortest_path, ShortestPaths};
pub use report::{describe, GraphReport};
pub use traversal::{bfs, bfs_bounded, dfs};
