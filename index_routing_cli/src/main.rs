use std::path::PathBuf;

use clap::{Parser, Subcommand};
use index_routing::router::{Router, RouterOptions};
use tracing::info;

use crate::{batch::BatchArgs, route::RouteArgs, snap::SnapArgs};

mod batch;
mod geojson_output;
mod parsers;
mod route;
mod snap;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Road graph JSON file
    #[arg(short, long, env = "INDEX_ROUTING_GRAPH", global = true)]
    graph: Option<PathBuf>,

    /// Speed cap in km/h used for weights and the A* heuristic
    #[arg(long, default_value_t = RouterOptions::default().max_speed_kmh, global = true)]
    max_speed: f64,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Route between two endpoints and print the path as a GeoJSON feature
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Route every request of a JSON file in parallel
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },
    /// Print the road point closest to some coordinates
    Snap {
        #[command(flatten)]
        args: SnapArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let Some(graph_path) = cli.graph else {
        anyhow::bail!("no road graph given, use --graph or set INDEX_ROUTING_GRAPH");
    };

    let options = RouterOptions {
        max_speed_kmh: cli.max_speed,
        ..RouterOptions::default()
    };
    let router = Router::from_json_file(&graph_path, options)?;
    info!("Loaded {}", graph_path.display());

    match cli.command {
        Commands::Route { args } => route::run(&router, args)?,
        Commands::Batch { args } => batch::run(&router, args)?,
        Commands::Snap { args } => snap::run(&router, args)?,
    }

    Ok(())
}
