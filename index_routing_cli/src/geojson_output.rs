use geo_types::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue};
use index_routing::router::Route;

pub fn route_to_feature(route: &Route) -> Feature {
    let line: LineString<f64> = route
        .points
        .iter()
        .map(|&point| Coord::from(point))
        .collect();

    let mut properties = JsonObject::new();
    properties.insert("weight".to_string(), JsonValue::from(route.weight));
    properties.insert(
        "road_points".to_string(),
        JsonValue::from(
            route
                .road_points
                .iter()
                .map(|road_point| road_point.to_string())
                .collect::<Vec<_>>(),
        ),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new((&line).into())),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use index_routing::{geopoint::GeoPoint, road_point::RoadPoint};

    use super::*;

    #[test]
    fn feature_has_lng_lat_line() {
        let route = Route {
            joints: vec![2, 0],
            road_points: vec![RoadPoint::new(0, 1), RoadPoint::new(0, 0)],
            points: vec![GeoPoint::new(50.0, 4.0), GeoPoint::new(50.1, 4.1)],
            weight: 12.5,
        };

        let feature = route_to_feature(&route);
        let json = serde_json::to_value(&feature).unwrap();

        assert_eq!(json["geometry"]["type"], "LineString");
        assert_eq!(json["geometry"]["coordinates"][0][0], 4.0);
        assert_eq!(json["geometry"]["coordinates"][0][1], 50.0);
        assert_eq!(json["properties"]["weight"], 12.5);
        assert_eq!(json["properties"]["road_points"][1], "0:0");
    }
}
