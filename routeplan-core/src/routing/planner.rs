//! The sequential planning pipeline: snap both query points, search, and
//! materialize the route.

use geo::Point;
use log::debug;

use crate::Error;
use crate::locate::{CandidatePick, find_candidates, pick_candidate};
use crate::model::LinkGraph;
use crate::routing::{Path, RouteGeometry, assemble_route, find_path};

/// One planning request: two query points in the planning projection and
/// the snap parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanRequest {
    pub start: Point<f64>,
    pub end: Point<f64>,
    /// Buffer radius for snapping each query point, meters.
    pub radius_m: f64,
    pub pick: CandidatePick,
}

impl PlanRequest {
    pub fn new(start: Point<f64>, end: Point<f64>, radius_m: f64) -> Self {
        Self {
            start,
            end,
            radius_m,
            pick: CandidatePick::default(),
        }
    }
}

/// Outcome of one planning request. "No route" answers are ordinary values,
/// distinct from the structural errors in [`Error`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Success {
        path: Path,
        geometry: RouteGeometry,
    },
    /// No graph node within the radius of the start query point.
    NoCandidateNearStart,
    /// No graph node within the radius of the end query point.
    NoCandidateNearEnd,
    /// Both endpoints snapped, but they are disconnected in the graph.
    NoPathFound,
}

/// Runs the full pipeline against an already-built graph.
///
/// # Errors
///
/// Propagates the structural errors of the stages ([`Error::UnknownNode`],
/// [`Error::MissingCoordinate`]); those indicate integration defects, not
/// unroutable inputs.
pub fn plan_route(graph: &LinkGraph, request: &PlanRequest) -> Result<PlanOutcome, Error> {
    let start_candidates = find_candidates(graph, request.start, request.radius_m);
    let Some(start_node) = pick_candidate(&start_candidates, request.pick) else {
        return Ok(PlanOutcome::NoCandidateNearStart);
    };

    let end_candidates = find_candidates(graph, request.end, request.radius_m);
    let Some(end_node) = pick_candidate(&end_candidates, request.pick) else {
        return Ok(PlanOutcome::NoCandidateNearEnd);
    };

    debug!(
        "snapped query points to nodes {start_node} ({} candidates) and {end_node} ({} candidates)",
        start_candidates.len(),
        end_candidates.len()
    );

    let path = find_path(graph, start_node, end_node)?;
    if path.is_empty() {
        return Ok(PlanOutcome::NoPathFound);
    }

    let geometry = assemble_route(&path, graph.coordinates())?;
    debug!(
        "planned route with {} nodes, total cost {}",
        path.len(),
        path.cost()
    );

    Ok(PlanOutcome::Success { path, geometry })
}
