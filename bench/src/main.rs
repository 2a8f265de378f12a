use std::env;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wordgraph_core::{bfs, bfs_bounded, dfs, dijkstra, Graph, ShortestPaths};

mod generators;

use generators::Generator;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Benchmark the wordgraph-core traversal and shortest-path engine",
    long_about = None
)]
struct Cli {
    /// Workload to generate and benchmark.
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Target vertex count per workload. Dijkstra selects by linear scan,
    /// so its cost grows with the square of this.
    #[arg(short = 'n', long, default_value_t = 5_000, value_parser = clap::value_parser!(u64).range(2..))]
    vertices: u64,

    /// Seed for the deterministic generators.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Emit one JSON object per workload instead of a text table.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run every workload.
    All,
    /// Words linked by single-letter substitutions.
    Ladder,
    /// One long path.
    Chain,
    /// Erdos-Renyi uniform random edges.
    Random,
    /// Watts-Strogatz ring lattice + shortcuts.
    Smallworld,
    /// Two dense clusters connected by a thin bridge.
    Barbell,
    /// Random backbone with heavy parallel edges.
    Multi,
}

impl Mode {
    fn workloads(self) -> Vec<(&'static str, Generator)> {
        let all: [(Mode, &'static str, Generator); 6] = [
            (Mode::Ladder, "Word ladder", generators::gen_ladder),
            (Mode::Chain, "Chain", generators::gen_chain),
            (Mode::Random, "Erdos-Renyi random", generators::gen_random),
            (Mode::Smallworld, "Small-world (Watts-Strogatz)", generators::gen_small_world),
            (Mode::Barbell, "Barbell (cluster-bridge-cluster)", generators::gen_barbell),
            (Mode::Multi, "Multigraph", generators::gen_multi),
        ];
        all.into_iter()
            .filter(|(mode, _, _)| self == Mode::All || *mode == self)
            .map(|(_, name, generator)| (name, generator))
            .collect()
    }
}

#[derive(Debug, Serialize)]
struct WorkloadReport {
    workload: &'static str,
    vertices: usize,
    edges: usize,
    memory_bytes: usize,
    generate_ms: f64,
    neighbors_ms: f64,
    bfs: TraversalReport,
    dfs: TraversalReport,
    bounded: Vec<LevelReport>,
    path: PathReport,
}

#[derive(Debug, Serialize)]
struct TraversalReport {
    reached: usize,
    ms: f64,
}

#[derive(Debug, Serialize)]
struct LevelReport {
    depth: usize,
    level_sizes: Vec<usize>,
    ms: f64,
}

#[derive(Debug, Serialize)]
struct PathReport {
    from: usize,
    to: usize,
    hops: Option<usize>,
    weight: Option<i64>,
    ms: f64,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WORDGRAPH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("wordgraph=info,warn"));

    let format = env::var("WORDGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let vertex_count = usize::try_from(cli.vertices)?;

    if !cli.json {
        println!("wordgraph-bench");
        println!("===============");
        println!();
    }

    for (name, generator) in cli.mode.workloads() {
        info!(workload = name, vertex_count, seed = cli.seed, "running workload");
        let report = run_benchmark(name, generator, vertex_count, cli.seed)?;
        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_report(&report);
        }
    }

    Ok(())
}

fn elapsed_ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark(
    name: &'static str,
    generator: Generator,
    vertex_count: usize,
    seed: u64,
) -> Result<WorkloadReport> {
    let t = Instant::now();
    let graph: Graph = generator(vertex_count, seed);
    let generate_ms = elapsed_ms(t);

    if graph.vertex_count() == 0 {
        bail!("workload '{name}' generated an empty graph");
    }

    let t = Instant::now();
    let mut distinct = 0usize;
    for v in 0..graph.vertex_count() {
        distinct += graph.neighbors(v).map_or(0, |n| n.len());
    }
    let neighbors_ms = elapsed_ms(t);
    info!(workload = name, distinct, "neighbor extraction done");

    let t = Instant::now();
    let reached = bfs(&graph, 0).map_or(0, |order| order.len());
    let bfs_report = TraversalReport {
        reached,
        ms: elapsed_ms(t),
    };

    let t = Instant::now();
    let reached = dfs(&graph, 0).map_or(0, |order| order.len());
    let dfs_report = TraversalReport {
        reached,
        ms: elapsed_ms(t),
    };

    let mut bounded = Vec::new();
    for depth in [1, 2, 3, 5] {
        let t = Instant::now();
        let levels = bfs_bounded(&graph, 0, depth).unwrap_or_default();
        bounded.push(LevelReport {
            depth,
            level_sizes: levels.iter().map(Vec::len).collect(),
            ms: elapsed_ms(t),
        });
    }

    // Shortest path: vertex 0 to the last vertex
    let far = graph.vertex_count() - 1;
    let t = Instant::now();
    let tree = dijkstra(&graph, 0);
    let path = tree.as_ref().and_then(|sp| sp.path_to(far)).unwrap_or_default();
    let weight = tree.as_ref().and_then(|sp| sp.distance(far));
    let path_report = PathReport {
        from: tree.as_ref().map_or(0, ShortestPaths::source),
        to: far,
        hops: (!path.is_empty()).then(|| path.len() - 1),
        weight,
        ms: elapsed_ms(t),
    };

    Ok(WorkloadReport {
        workload: name,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        memory_bytes: graph.memory_usage(),
        generate_ms,
        neighbors_ms,
        bfs: bfs_report,
        dfs: dfs_report,
        bounded,
        path: path_report,
    })
}

fn print_report(report: &WorkloadReport) {
    println!("--- {} ---", report.workload);
    println!(
        "Generated in {:.1}ms: {} vertices, {} edges, ~{:.1}KB",
        report.generate_ms,
        report.vertices,
        report.edges,
        report.memory_bytes as f64 / 1024.0
    );
    println!("Neighbors (all vertices): {:.1}ms", report.neighbors_ms);
    println!(
        "BFS from 0: {} reached in {:.1}ms",
        report.bfs.reached, report.bfs.ms
    );
    println!(
        "DFS from 0: {} reached in {:.1}ms",
        report.dfs.reached, report.dfs.ms
    );

    println!();
    println!("{:>8} {:>30} {:>10}", "depth", "level sizes", "time");
    println!("{:->8} {:->30} {:->10}", "", "", "");
    for level in &report.bounded {
        let sizes: Vec<String> = level.level_sizes.iter().map(ToString::to_string).collect();
        println!(
            "{:>8} {:>30} {:>8.1}ms",
            level.depth,
            sizes.join("/"),
            level.ms
        );
    }

    println!();
    let p = &report.path;
    match (p.hops, p.weight) {
        (Some(hops), Some(weight)) => println!(
            "Shortest path {} → {}: {} hops, weight {} in {:.1}ms",
            p.from, p.to, hops, weight, p.ms
        ),
        (Some(hops), None) => println!(
            "Shortest path {} → {}: {} hops in {:.1}ms",
            p.from, p.to, hops, p.ms
        ),
        _ => println!(
            "Shortest path {} → {}: no path ({:.1}ms)",
            p.from, p.to, p.ms
        ),
    }
    println!();
}
