use std::fmt;

use crate::graph::{Graph, VertexId};
use crate::traversal::{bfs, dfs};

/// Human-readable dump of a graph, for debugging.
///
/// The short form prints the title plus vertex and edge counts. The complete
/// form adds, per vertex, the adjacency list, neighbors, BFS order and DFS order.
pub struct GraphReport<'a> {
    graph: &'a Graph,
    title: &'a str,
    complete: bool,
}

impl<'a> GraphReport<'a> {
    pub fn new(graph: &'a Graph, title: &'a str, complete: bool) -> Self {
        Self {
            graph,
            title,
            complete,
        }
    }

    fn write_section<F>(&self, f: &mut fmt::Formatter<'_>, heading: &str, row: F) -> fmt::Result
    where
        F: Fn(VertexId) -> Option<Vec<VertexId>>,
    {
        writeln!(f, "  {heading}:")?;
        for v in 0..self.graph.vertex_count() {
            write!(f, "   {v} ({}): ", self.name(v))?;
            match row(v) {
                Some(seq) => writeln!(f, "{}", join(&seq))?,
                None => writeln!(f, "<invalid>")?,
            }
        }
        Ok(())
    }

    fn name(&self, v: VertexId) -> &str {
        self.graph.id_to_name(v).unwrap_or("?")
    }
}

impl fmt::Display for GraphReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.graph;
        writeln!(f, ">>Graph: {}", self.title)?;
        writeln!(f, "  # of vertices: {}", g.vertex_count())?;
        writeln!(f, "  # of edges:    {}", g.edge_count())?;

        if !self.complete {
            return Ok(());
        }

        writeln!(f, "  Adjacency Lists:")?;
        for v in 0..g.vertex_count() {
            write!(f, "   {v} ({}): ", self.name(v))?;
            let edges = g.edges(v).unwrap_or(&[]);
            let rendered: Vec<String> = edges
                .iter()
                .map(|e| format!("({},{},{})", e.src, e.dest, e.weight))
                .collect();
            writeln!(f, "{}", rendered.join(", "))?;
        }

        self.write_section(f, "Neighbors", |v| g.neighbors(v))?;
        self.write_section(f, "BFS", |v| bfs(g, v))?;
        self.write_section(f, "DFS", |v| dfs(g, v))
    }
}

fn join(seq: &[VertexId]) -> String {
    seq.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render `graph` as text. See [`GraphReport`].
pub fn describe(graph: &Graph, title: &str, complete: bool) -> String {
    GraphReport::new(graph, title, complete).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut g = Graph::new(2).unwrap();
        g.add_vertex("cat");
        g.add_vertex("bat");
        g.add_vertex("bad");
        g.add_edge(0, 1, 1);
        g.add_edge(1, 2, 1);
        g.add_edge(1, 2, 4);
        g
    }

    #[test]
    fn test_describe_summary_only() {
        let text = describe(&sample(), "Ladder", false);
        assert_eq!(
            text,
            ">>Graph: Ladder\n  # of vertices: 3\n  # of edges:    3\n"
        );
    }

    #[test]
    fn test_describe_complete() {
        let text = describe(&sample(), "Ladder", true);
        assert!(text.contains("  Adjacency Lists:\n"));
        assert!(text.contains("   1 (bat): (1,2,4), (1,2,1)\n"));
        assert!(text.contains("  Neighbors:\n   0 (cat): 1\n   1 (bat): 2\n   2 (bad): \n"));
        assert!(text.contains("  BFS:\n   0 (cat): 0, 1, 2\n"));
        assert!(text.contains("  DFS:\n   0 (cat): 0, 1, 2\n"));
        assert!(!text.contains("-1"));
    }

    #[test]
    fn test_describe_empty_graph() {
        let g = Graph::default();
        let text = describe(&g, "empty", true);
        assert!(text.contains("# of vertices: 0"));
        assert!(text.ends_with("  DFS:\n"));
    }
}
