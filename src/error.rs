use std::collections::TryReserveError;

use thiserror::Error;

use crate::node::NodeId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
  /// The topological order of a graph needed more slots than the configured bound
  #[error("topological order exceeds its capacity of {limit} nodes")]
  CapacityExceeded { limit: usize },

  /// A forward value or gradient contribution left the finite reals
  #[error("{op} produced a non-finite value ({value})")]
  Domain { op: &'static str, value: f64 },

  #[error("failed to allocate graph storage: {0}")]
  Allocation(#[from] TryReserveError),

  /// A handle that does not address a live node of this graph
  #[error("node {id} does not exist in a graph of {len} nodes")]
  UnknownNode { id: NodeId, len: usize },
}

impl Error {
  pub(crate) fn domain(op: &'static str, value: f64) -> Self {
    Error::Domain { op, value }
  }

  pub(crate) fn unknown(id: NodeId, len: usize) -> Self {
    Error::UnknownNode { id, len }
  }
}
