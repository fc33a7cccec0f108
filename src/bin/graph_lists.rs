//! Command-line driver: loads an edge-list file and runs DFS, BFS, Prim and
//! Dijkstra from a chosen start vertex, or writes a random test graph.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use adjgraph::graph::{
    breadth_first_search, depth_first_search, generate, loader, minimum_spanning_tree, render,
    shortest_path_tree, Letters, Numbers, VertexLabel, WeightedGraph,
};
use adjgraph::Result;

#[derive(Parser, Debug)]
#[command(name = "graph_lists")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log algorithm progress to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the graph algorithms on an edge-list file
    Run {
        /// Graph file: "V E" header followed by E lines of "u v w"
        file: PathBuf,

        /// Start vertex (1..=V)
        #[arg(long, short)]
        start: usize,

        /// How vertex ids are printed
        #[arg(long, value_enum, default_value = "letters")]
        labels: LabelStyle,

        /// Algorithms to run, comma separated
        #[arg(
            long,
            value_enum,
            value_delimiter = ',',
            default_value = "dfs,bfs,prim,dijkstra"
        )]
        algorithms: Vec<Algorithm>,

        /// Print the adjacency lists before running
        #[arg(long)]
        show_graph: bool,

        /// Report the wall-clock time of each algorithm
        #[arg(long)]
        timing: bool,
    },

    /// Write a random connected graph in the edge-list format
    Generate {
        #[arg(long)]
        vertices: usize,

        #[arg(long)]
        edges: usize,

        #[arg(long, default_value_t = 100)]
        max_weight: u32,

        #[arg(long, env = "ADJGRAPH_SEED", default_value_t = 0)]
        seed: u64,

        /// Output file; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LabelStyle {
    Letters,
    Numbers,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Algorithm {
    Dfs,
    Bfs,
    Prim,
    Dijkstra,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("ADJGRAPH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            EnvFilter::new(if verbose {
                "adjgraph=trace"
            } else {
                "adjgraph=warn"
            })
        });

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
    {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            file,
            start,
            labels,
            mut algorithms,
            show_graph,
            timing,
        } => {
            algorithms.sort();
            algorithms.dedup();
            let labels: &dyn VertexLabel = match labels {
                LabelStyle::Letters => &Letters,
                LabelStyle::Numbers => &Numbers,
            };
            run(&file, start, labels, &algorithms, show_graph, timing)
        }
        Commands::Generate {
            vertices,
            edges,
            max_weight,
            seed,
            output,
        } => write_random(vertices, edges, max_weight, seed, output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    file: &Path,
    start: usize,
    labels: &dyn VertexLabel,
    algorithms: &[Algorithm],
    show_graph: bool,
    timing: bool,
) -> Result<()> {
    let graph: WeightedGraph = loader::load_graph(file)?;
    graph.check_vertex(start)?;

    if show_graph {
        println!("{}", render::adjacency(&graph, labels));
    }

    for &algorithm in algorithms {
        let (report, elapsed) = run_algorithm(&graph, start, algorithm, labels)?;

        println!("{}", report);
        if timing {
            println!("{:?} execution time: {} ms\n", algorithm, elapsed.as_millis());
        }
    }
    Ok(())
}

/// Runs one algorithm and renders its report. The duration covers the
/// algorithm only.
fn run_algorithm(
    graph: &WeightedGraph,
    start: usize,
    algorithm: Algorithm,
    labels: &dyn VertexLabel,
) -> Result<(String, Duration)> {
    Ok(match algorithm {
        Algorithm::Dfs => {
            let (result, elapsed) = timed(|| depth_first_search(graph, start))?;
            (render::dfs_report(&result, labels), elapsed)
        }
        Algorithm::Bfs => {
            let (result, elapsed) = timed(|| breadth_first_search(graph, start))?;
            (render::bfs_report(&result, labels), elapsed)
        }
        Algorithm::Prim => {
            let (result, elapsed) = timed(|| minimum_spanning_tree(graph, start))?;
            (render::mst_report(&result, labels), elapsed)
        }
        Algorithm::Dijkstra => {
            let (result, elapsed) = timed(|| shortest_path_tree(graph, start))?;
            (render::spt_report(&result, labels), elapsed)
        }
    })
}

fn timed<T>(f: impl FnOnce() -> Result<T>) -> Result<(T, Duration)> {
    let began = Instant::now();
    let value = f()?;
    Ok((value, began.elapsed()))
}

fn write_random(
    vertices: usize,
    edges: usize,
    max_weight: u32,
    seed: u64,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let description = generate::random_graph(vertices, edges, max_weight, &mut rng)?;

    match output {
        Some(path) => {
            loader::write_description(&description, BufWriter::new(File::create(path)?))
        }
        None => loader::write_description(&description, io::stdout().lock()),
    }
}
