use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{FeatureId, PointId};

/// A point of a road: the road (feature) id and the index of the point in the
/// road geometry. Point ids grow in the forward direction of the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RoadPoint {
    feature_id: FeatureId,
    point_id: PointId,
}

impl RoadPoint {
    pub const fn new(feature_id: FeatureId, point_id: PointId) -> Self {
        RoadPoint {
            feature_id,
            point_id,
        }
    }

    pub fn feature_id(&self) -> FeatureId {
        self.feature_id
    }

    pub fn point_id(&self) -> PointId {
        self.point_id
    }
}

impl fmt::Display for RoadPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.feature_id, self.point_id)
    }
}
