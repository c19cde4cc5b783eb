use thiserror::Error;

/// Usage errors surfaced by graph construction, the pending queue and the
/// driver. None of them are recoverable by retrying.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("cannot create a graph with {requested} nodes (limit is u32::MAX)")]
    TooManyNodes { requested: usize },

    #[error("extract_min called on an empty queue")]
    EmptyQueue,

    #[error("path weight to node {node} overflows u64")]
    DistanceOverflow { node: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Node ids are stored as `u32`, which caps how many nodes a graph or
/// queue can hold.
#[inline]
pub(crate) fn check_node_count(count: usize) -> Result<()> {
    if count > u32::MAX as usize {
        Err(Error::TooManyNodes { requested: count })
    } else {
        Ok(())
    }
}

#[inline]
pub(crate) fn check_node(node: usize, node_count: usize) -> Result<()> {
    if node < node_count {
        Ok(())
    } else {
        Err(Error::NodeOutOfRange { node, node_count })
    }
}
