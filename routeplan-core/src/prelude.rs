// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{build_link_graph, link_set_from_json};
pub use crate::locate::{Candidate, CandidatePick, find_candidates, pick_candidate};
pub use crate::model::{CoordinateIndex, Link, LinkGraph, LinkSet};
pub use crate::routing::{
    Path, PlanOutcome, PlanRequest, RouteGeometry, assemble_route, find_path, plan_route,
};

// Core scalar types
pub use crate::NodeId;
pub use crate::Weight;
