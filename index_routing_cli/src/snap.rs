use clap::Args;
use index_routing::{geopoint::GeoPoint, router::Router};

use crate::parsers;

#[derive(Args)]
pub struct SnapArgs {
    /// `lat,lng`
    #[arg(value_parser = parsers::parse_coordinates, allow_hyphen_values = true)]
    coordinates: GeoPoint,
}

pub fn run(router: &Router, args: SnapArgs) -> Result<(), anyhow::Error> {
    let snap = router
        .index()
        .snap(router.graph(), &args.coordinates)
        .ok_or_else(|| anyhow::anyhow!("No road near {:?}", args.coordinates))?;

    println!(
        "{} ({}, {}) at {:.1} m",
        snap.road_point, snap.coordinates.lat, snap.coordinates.lng, snap.distance
    );

    Ok(())
}
