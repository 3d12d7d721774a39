use crate::{types::JointId, weighting::Weight};

pub(crate) const INVALID_JOINT: JointId = usize::MAX;
pub(crate) const MAX_WEIGHT: Weight = f64::INFINITY;

pub(crate) const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub(crate) const KMH_TO_MPS: f64 = 1000.0 / 3600.0;

pub(crate) const DEFAULT_MAX_SPEED_KMH: f64 = 130.0;
