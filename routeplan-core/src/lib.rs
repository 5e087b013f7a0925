//! Route-planning engine over a pre-supplied link network.
//!
//! The crate turns a flat batch of weighted network links into an in-memory
//! routing graph, snaps arbitrary query coordinates to nearby graph nodes,
//! runs a shortest-path search between the snapped nodes and materializes
//! the result as an ordered coordinate sequence.
//!
//! All coordinates handed to the engine are planar EPSG:3857 (Web Mercator);
//! proximity search reprojects to WGS84 internally for metric buffering.

pub mod error;
pub mod loading;
pub mod locate;
pub mod model;
pub mod prelude;
pub mod projection;
pub mod routing;

pub use error::Error;

/// Stable identifier of a network node, taken from link endpoints.
pub type NodeId = i64;

/// Traversal cost of a single link (distance, time or similar).
pub type Weight = f64;
