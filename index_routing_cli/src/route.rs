use clap::Args;
use index_routing::{
    router::Router,
    routing::routing_request::{RoutingAlgorithm, RoutingEndpoint, RoutingRequest},
};
use tracing::info;

use crate::{geojson_output, parsers};

#[derive(Args)]
pub struct RouteArgs {
    /// Start as `feature:point` or `lat,lng`
    #[arg(value_parser = parsers::parse_endpoint, allow_hyphen_values = true)]
    start: RoutingEndpoint,

    /// Finish as `feature:point` or `lat,lng`
    #[arg(value_parser = parsers::parse_endpoint, allow_hyphen_values = true)]
    finish: RoutingEndpoint,

    #[arg(short, long, value_parser = parsers::parse_algorithm)]
    algorithm: Option<RoutingAlgorithm>,
}

pub fn run(router: &Router, args: RouteArgs) -> Result<(), anyhow::Error> {
    let request = RoutingRequest {
        start: args.start,
        finish: args.finish,
        algorithm: args.algorithm,
    };

    let route = router.route(&request)?;
    info!(
        "Route of {} road points, weight {:.1}",
        route.road_points.len(),
        route.weight
    );

    let feature = geojson_output::route_to_feature(&route);
    println!("{}", serde_json::to_string_pretty(&feature)?);

    Ok(())
}
