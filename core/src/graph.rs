use tracing::{debug, trace, warn};

use crate::error::{GraphError, Result};
use crate::index::NameIndex;

/// Vertex handle. Assigned sequentially from 0 in insertion order; never
/// reused or renumbered.
pub type VertexId = usize;

/// Edge weight.
pub type Weight = i32;

/// Capacity used by `Graph::default()`.
const DEFAULT_CAPACITY: usize = 16;

/// A directed, weighted edge in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub src: VertexId,
    pub dest: VertexId,
    pub weight: Weight,
}

/// Directed weighted multigraph: vertex table + per-vertex edge lists + name index.
///
/// Each vertex's edge list is kept sorted by `dest`, so parallel edges to the
/// same destination sit next to each other. Loops and multi-edges are allowed.
///
/// Vertex rows grow by doubling `capacity` once the table is full; ids and
/// edge lists survive growth untouched.
#[derive(Debug, Clone)]
pub struct Graph {
    names: Vec<String>,
    edges: Vec<Vec<Edge>>,
    capacity: usize,
    edge_count: usize,
    index: NameIndex,
}

impl Graph {
    /// Create an empty graph with room for `capacity` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(GraphError::InvalidCapacity(capacity));
        }
        Ok(Self::empty(capacity))
    }

    fn empty(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            edges: Vec::with_capacity(capacity),
            capacity,
            edge_count: 0,
            index: NameIndex::new(),
        }
    }

    /// Append a vertex named `name`, returning its id.
    ///
    /// Names are not required to be unique. A repeated name still gets its
    /// own vertex, but name lookup resolves to the newest one.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        let id = self.names.len();

        if let Some(previous) = self.index.insert(name, id) {
            warn!(vertex_name = name, previous, id, "vertex name shadows an existing vertex");
        }

        if id == self.capacity {
            self.grow();
        }

        self.names.push(name.to_owned());
        self.edges.push(Vec::new());
        id
    }

    /// Double the vertex table.
    fn grow(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2);
        debug!(
            old_capacity = self.capacity,
            new_capacity, "growing vertex table"
        );
        let additional = new_capacity - self.names.len();
        self.names.reserve_exact(additional);
        self.edges.reserve_exact(additional);
        self.capacity = new_capacity;
    }

    /// Look up a vertex by exact name.
    pub fn name_to_id(&self, name: &str) -> Option<VertexId> {
        self.index.lookup(name)
    }

    /// Look up a vertex's name. `None` if `id` is out of range.
    pub fn id_to_name(&self, id: VertexId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id < self.names.len()
    }

    /// Add a directed edge `src → dest`. Returns `false` (and leaves the
    /// graph untouched) if either endpoint is not a vertex.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId, weight: Weight) -> bool {
        self.try_add_edge(src, dest, weight).is_ok()
    }

    /// Add a directed edge `src → dest`.
    ///
    /// The edge lands before any existing edges whose destination is `>= dest`,
    /// so the newest of several parallel edges comes first in its run.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is not a vertex.
    pub fn try_add_edge(&mut self, src: VertexId, dest: VertexId, weight: Weight) -> Result<()> {
        let count = self.vertex_count();
        for vertex in [src, dest] {
            if vertex >= count {
                return Err(GraphError::VertexOutOfRange { vertex, count });
            }
        }

        let list = &mut self.edges[src];
        let pos = list.partition_point(|e| e.dest < dest);
        list.insert(pos, Edge { src, dest, weight });
        self.edge_count += 1;

        trace!(src, dest, weight, pos, "edge added");
        Ok(())
    }

    /// The outgoing edges of `v`, sorted by destination.
    pub fn edges(&self, v: VertexId) -> Option<&[Edge]> {
        self.edges.get(v).map(Vec::as_slice)
    }

    /// Distinct neighbors of `v` in ascending order. `None` if `v` is not a vertex.
    ///
    /// Every call returns a fresh `Vec`.
    pub fn neighbors(&self, v: VertexId) -> Option<Vec<VertexId>> {
        if !self.contains_vertex(v) {
            return None;
        }
        Some(self.neighbor_iter(v).collect())
    }

    /// Walk `v`'s edge list once, skipping a destination equal to the one
    /// just emitted. Relies on the list being sorted by `dest`.
    pub(crate) fn neighbor_iter(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let list = self.edges.get(v).map(Vec::as_slice).unwrap_or(&[]);
        let mut last = None;
        list.iter().filter_map(move |e| {
            if last == Some(e.dest) {
                None
            } else {
                last = Some(e.dest);
                Some(e.dest)
            }
        })
    }

    /// Minimum weight among the edges `src → dest`, or `None` if there is no
    /// such edge (or either id is out of range).
    pub fn min_edge_weight(&self, src: VertexId, dest: VertexId) -> Option<Weight> {
        let list = self.edges.get(src)?;
        let start = list.partition_point(|e| e.dest < dest);
        list[start..]
            .iter()
            .take_while(|e| e.dest == dest)
            .map(|e| e.weight)
            .min()
    }

    /// Weight of the edge `src → dest`; the minimum if there are several.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range or no such edge exists. Callers
    /// are expected to ask only about edges they got from [`Graph::neighbors`].
    pub fn edge_weight(&self, src: VertexId, dest: VertexId) -> Weight {
        assert!(
            self.contains_vertex(src),
            "edge_weight: src vertex ({src}) invalid"
        );
        assert!(
            self.contains_vertex(dest),
            "edge_weight: dest vertex ({dest}) invalid"
        );
        match self.min_edge_weight(src, dest) {
            Some(weight) => weight,
            None => panic!("edge_weight: no edge found from {src} to {dest}"),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Current size of the vertex table. Always `>= vertex_count()`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Names in index order with the id each resolves to.
    pub fn names(&self) -> impl Iterator<Item = (&str, VertexId)> {
        self.index.iter()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let table = self.capacity * (size_of::<String>() + size_of::<Vec<Edge>>());
        let names: usize = self.names.iter().map(String::capacity).sum();
        let edges: usize = self
            .edges
            .iter()
            .map(|list| list.capacity() * size_of::<Edge>())
            .sum();

        table + names + edges + self.index.memory_usage()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty(DEFAULT_CAPACITY)
    }
}
