use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::Context;
use clap::Args;
use index_routing::{router::Router, routing::routing_request::RoutingRequest};
use tracing::{info, warn};

use crate::geojson_output;

#[derive(Args)]
pub struct BatchArgs {
    /// JSON array of routing requests
    #[arg(short, long)]
    requests: PathBuf,
}

pub fn run(router: &Router, args: BatchArgs) -> Result<(), anyhow::Error> {
    let file = File::open(&args.requests)
        .with_context(|| format!("Cannot open {}", args.requests.display()))?;
    let requests: Vec<RoutingRequest> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid requests in {}", args.requests.display()))?;

    info!("Routing {} requests", requests.len());
    let results = router.route_many(&requests);

    let mut features = Vec::with_capacity(results.len());
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(route) => features.push(geojson_output::route_to_feature(&route)),
            Err(err) => warn!("Request {index} failed: {err}"),
        }
    }

    info!("{} of {} requests routed", features.len(), requests.len());
    println!(
        "{}",
        serde_json::to_string(&geojson_output::collection(features))?
    );

    Ok(())
}
