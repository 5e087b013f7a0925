//! This module is responsible for ingesting the provider's link records
//! and building the routing structures for one planning session.

mod builder;
mod records;

pub use builder::build_link_graph;
pub use records::{LinkRecord, link_set_from_json};
