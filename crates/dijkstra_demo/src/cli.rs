use clap::Parser;
use clap::ValueEnum;
use dijkstra::generator::GraphCase;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum GraphChoice {
    /// 6-node sample
    Small,
    /// 10-node sample
    Medium,
    /// Seeded graph from `--case`
    Generated,
}

/// Run Dijkstra's algorithm on a sample or generated graph and print the
/// distance/predecessor table.
#[derive(Parser, Debug)]
#[command(name = "dijkstra-demo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Graphs to run; repeat to run several in order
    #[arg(long = "graph", value_enum, default_values_t = [GraphChoice::Small, GraphChoice::Medium])]
    pub graphs: Vec<GraphChoice>,

    /// Generator family used with `--graph generated`
    #[arg(long, default_value = "sparse_random", value_parser = parse_case)]
    pub case: GraphCase,

    /// Approximate node count for generated graphs
    #[arg(long, default_value_t = 16)]
    pub size: usize,

    #[arg(long, default_value_t = 0x5EED_2026)]
    pub seed: u64,

    /// Source node; generated graphs default to their own source
    #[arg(long)]
    pub source: Option<usize>,

    /// Also print the shortest path to this node
    #[arg(long)]
    pub target: Option<usize>,

    /// Log filter used when RUST_LOG is unset (e.g. `debug`, `dijkstra=trace`)
    #[arg(long, env = "DIJKSTRA_LOG", default_value = "warn")]
    pub log_level: String,

    /// Skip the adjacency dump
    #[arg(long, short)]
    pub quiet: bool,
}

fn parse_case(label: &str) -> Result<GraphCase, String> {
    GraphCase::from_label(label).ok_or_else(|| {
        let known: Vec<&str> = GraphCase::ALL.iter().map(|c| c.label()).collect();
        format!("unknown case `{label}` (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use dijkstra::generator::GraphCase;

    use super::Cli;
    use super::GraphChoice;

    #[test]
    fn defaults_run_both_samples() {
        let cli = Cli::try_parse_from(["dijkstra-demo"]).unwrap();
        assert_eq!(cli.graphs, vec![GraphChoice::Small, GraphChoice::Medium]);
        assert_eq!(cli.case, GraphCase::SparseRandom);
        assert_eq!(cli.source, None);
    }

    #[test]
    fn generated_case_is_parsed_by_label() {
        let cli = Cli::try_parse_from([
            "dijkstra-demo",
            "--graph",
            "generated",
            "--case",
            "grid_random",
            "--source",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.graphs, vec![GraphChoice::Generated]);
        assert_eq!(cli.case, GraphCase::GridRandom);
        assert_eq!(cli.source, Some(3));
    }

    #[test]
    fn unknown_case_is_rejected() {
        assert!(Cli::try_parse_from(["dijkstra-demo", "--case", "bogus"]).is_err());
    }
}
