use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS_METERS;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance in meters.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }
}

impl From<GeoPoint> for geo_types::Coord {
    fn from(value: GeoPoint) -> Self {
        geo_types::coord! { x: value.lng, y: value.lat }
    }
}

impl From<geo_types::Point> for GeoPoint {
    fn from(value: geo_types::Point) -> Self {
        GeoPoint::new(value.y(), value.x())
    }
}

pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_itself_is_zero() {
        let point = GeoPoint::new(50.85, 4.35);
        assert_eq!(point.haversine_distance(&point), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);

        let distance = a.haversine_distance(&b);
        assert!((distance - 111_195.0).abs() < 1.0, "{distance}");
    }
}
