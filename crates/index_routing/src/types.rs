pub type JointId = usize;
pub type FeatureId = u32;
pub type PointId = u32;
