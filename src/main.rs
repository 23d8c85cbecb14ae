use anyhow::{Context, Result};
use clap::Parser;
use dsi_progress_logger::prelude::*;
use hybrid_bfs::algo::hybrid;
use hybrid_bfs::error::Error;
use hybrid_bfs::{io, utils::timer};

/// Parallel direction-optimizing breadth-first search over a static
/// undirected graph.
#[derive(Parser, Debug)]
#[command(name = "bfs", author, version)]
struct Args {
    /// Vertex to start the traversal from.
    source_node: u32,

    /// Graph file: `.mm` (MatrixMarket) or `.txt` (edge list).
    graph_path: std::path::PathBuf,

    /// Size of the rayon worker pool.
    num_threads: usize,

    /// 0 = top-down only, 1 = bottom-up only, 2 = hybrid.
    bfs_method: u8,

    /// Increase log verbosity; repeatable.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .verbosity(2 + args.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let method = match args.bfs_method {
        0 => hybrid::Method::TopDown,
        1 => hybrid::Method::BottomUp,
        2 => hybrid::Method::Hybrid,
        other => {
            eprintln!("{}", Error::UnknownMethod(other));
            std::process::exit(1);
        }
    };

    let graph = match io::load(&args.graph_path) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let threads = rayon::ThreadPoolBuilder::new()
        .num_threads(args.num_threads)
        .build()
        .context("failed to build the rayon thread pool")?;

    let event = timer::Event::new();
    let mut pl = progress_logger![display_memory = false];

    let (_solution, stats) = match hybrid::run(&graph, args.source_node, method, &threads, &mut pl)
    {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let elapsed_ms = event.elapsed_ms();
    let throughput = timer::mteps(stats.num_undirected_edges, elapsed_ms);
    log::info!(
        "completed in {} iterations, {} undirected edges",
        stats.iterations,
        stats.num_undirected_edges
    );
    println!("{elapsed_ms:.4} {throughput:.4}");

    Ok(())
}
