//! Data model for the link network and the derived routing structures.

pub mod link;
pub mod network;

pub use link::{Link, LinkSet};
pub use network::{CoordinateIndex, IndexedPoint, LinkEdge, LinkGraph, LinkNode};
