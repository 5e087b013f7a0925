use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("link set contains no links")]
    EmptyInput,
    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),
    #[error("node {0} has no coordinate in the index")]
    MissingCoordinate(NodeId),
    #[error("invalid data: {0}")]
    InvalidData(String),
}
