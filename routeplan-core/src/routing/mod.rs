//! Shortest-path search and route materialization.

pub mod dijkstra;
pub mod planner;
pub mod route;

pub use dijkstra::{Path, find_path};
pub use planner::{PlanOutcome, PlanRequest, plan_route};
pub use route::{RouteGeometry, assemble_route};
