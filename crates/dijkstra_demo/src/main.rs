mod cli;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use dijkstra::DirectedGraph;
use dijkstra::generator::generate_case;
use dijkstra::samples;

use cli::Cli;
use cli::GraphChoice;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(&cli.log_level) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    for (i, &choice) in cli.graphs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        if let Err(e) = run_one(&cli, i, choice) {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

fn run_one(cli: &Cli, index: usize, choice: GraphChoice) -> dijkstra::Result<()> {
    let (graph, default_source) = load_graph(cli, choice)?;
    let source = cli.source.unwrap_or(default_source);
    tracing::info!(?choice, source, nodes = graph.vertex_count(), "running");

    println!("Graph {index}:");
    if !cli.quiet {
        print!("{graph}");
    }

    let paths = dijkstra::dijkstra(&graph, source)?;
    println!("Output of Dijkstra's algorithm");
    print!("{paths}");

    if let Some(target) = cli.target {
        match paths.route(target)? {
            Some((path, weight)) => {
                let hops: Vec<String> = path.iter().map(ToString::to_string).collect();
                println!(
                    "Path {source} -> {target}: {} (dist = {weight})",
                    hops.join(" -> ")
                );
            }
            None => println!("Path {source} -> {target}: unreachable"),
        }
    }
    Ok(())
}

fn load_graph(cli: &Cli, choice: GraphChoice) -> dijkstra::Result<(DirectedGraph, usize)> {
    match choice {
        GraphChoice::Small => Ok((samples::small_graph()?, 0)),
        GraphChoice::Medium => Ok((samples::medium_graph()?, 0)),
        GraphChoice::Generated => {
            let input = generate_case(cli.case, cli.size, cli.seed)?;
            Ok((input.graph, input.source))
        }
    }
}
