use serde::{Deserialize, Serialize};

/// Which side of a joint an edge list is built for.
///
/// `Outgoing` edges leave the joint and point at their target, `Incoming` edges
/// arrive at the joint and their target is the joint they come from.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum EdgeDirection {
    Outgoing,
    Incoming,
}

impl EdgeDirection {
    pub fn opposite(&self) -> Self {
        match self {
            EdgeDirection::Outgoing => EdgeDirection::Incoming,
            EdgeDirection::Incoming => EdgeDirection::Outgoing,
        }
    }

    pub fn is_outgoing(&self) -> bool {
        matches!(self, EdgeDirection::Outgoing)
    }
}
