use index_routing::{
    geopoint::GeoPoint,
    road_point::RoadPoint,
    routing::routing_request::{RoutingAlgorithm, RoutingEndpoint},
};

/// `feature:point` for a road point, `lat,lng` for coordinates.
pub fn parse_endpoint(input: &str) -> Result<RoutingEndpoint, String> {
    if let Some((feature_id, point_id)) = input.split_once(':') {
        let feature_id = feature_id
            .trim()
            .parse()
            .map_err(|_| format!("Invalid feature id in {input:?}"))?;
        let point_id = point_id
            .trim()
            .parse()
            .map_err(|_| format!("Invalid point id in {input:?}"))?;

        return Ok(RoutingEndpoint::RoadPoint(RoadPoint::new(feature_id, point_id)));
    }

    parse_coordinates(input).map(RoutingEndpoint::Coordinates)
}

pub fn parse_coordinates(input: &str) -> Result<GeoPoint, String> {
    let Some((lat, lng)) = input.split_once(',') else {
        return Err(format!(
            "Invalid endpoint {input:?}, expected feature:point or lat,lng"
        ));
    };

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("Invalid latitude in {input:?}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("Invalid longitude in {input:?}"))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(format!("Coordinates out of range: {input:?}"));
    }

    Ok(GeoPoint::new(lat, lng))
}

pub fn parse_algorithm(input: &str) -> Result<RoutingAlgorithm, String> {
    match input.to_ascii_lowercase().replace('-', "_").as_str() {
        "dijkstra" => Ok(RoutingAlgorithm::Dijkstra),
        "astar" | "a_star" => Ok(RoutingAlgorithm::AStar),
        "bidirectional_dijkstra" | "bidir" => Ok(RoutingAlgorithm::BidirectionalDijkstra),
        _ => Err(format!("Unknown algorithm {input:?}")),
    }
}
