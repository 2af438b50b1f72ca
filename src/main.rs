use clap::Parser;
use route_finder::{datasets::western_province, AStar, Path, PathPlannerError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;


/// Find the cheapest road route between two towns of the sample network
#[derive(Parser, Debug)]
#[command(name = "route-finder", version, about)]
struct Args {
    /// Town to start from
    #[arg(short, long, default_value = "Rathmalana")]
    start: String,

    /// Town to reach
    #[arg(short, long, default_value = "Horana")]
    goal: String,

    /// Give up after expanding this many towns
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Log filter, e.g. "debug" or "route_finder=trace"
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<String, PathPlannerError> {
    let (graph, positions) = western_province()?;

    let mut planner = AStar::new();
    if let Some(limit) = args.max_iterations {
        planner = planner.with_max_iterations(limit);
    }

    let path = planner.search(&graph, &args.start.as_str(), &args.goal.as_str(), &positions)?;
    Ok(report(&args.start, &args.goal, path.as_ref()))
}

/// Text printed for a finished search, unreachable goals are not an error
fn report(start: &str, goal: &str, path: Option<&Path<&str>>) -> String {
    match path {
        Some(path) => format!("Shortest path: {}\nTotal cost: {}", path.nodes.join(" -> "), path.cost),
        None => format!("No path from {start} to {goal}"),
    }
}
