use std::ops::Index;

use log::trace;

use crate::config::{DomainPolicy, GraphConfig};
use crate::error::{Error, Result};
use crate::node::{Node, NodeId, Op};

/// Arena holding every node of an expression graph.
///
/// Nodes reference their operands by [`NodeId`], never by ownership, and a
/// node can only reference nodes created before it. Every child index is
/// therefore smaller than its parent's, which keeps the graph acyclic.
#[derive(Debug, Default)]
pub struct Graph {
  nodes: Vec<Node>,
  config: GraphConfig,
}

/// Position in a graph to [`rewind`](Graph::rewind) back to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

impl Graph {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: GraphConfig) -> Self {
    // storage is reserved on the first push so allocation failure stays reportable
    Self {
      nodes: Vec::new(),
      config,
    }
  }

  #[inline]
  pub fn config(&self) -> &GraphConfig {
    &self.config
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Create an input or parameter node
  pub fn leaf(&mut self, value: f64) -> Result<NodeId> {
    self.push(Node::leaf(value))
  }

  pub fn node(&self, id: NodeId) -> Result<&Node> {
    self
      .nodes
      .get(id.0)
      .ok_or_else(|| Error::unknown(id, self.nodes.len()))
  }

  pub fn value(&self, id: NodeId) -> Result<f64> {
    self.node(id).map(Node::value)
  }

  pub fn grad(&self, id: NodeId) -> Result<f64> {
    self.node(id).map(Node::grad)
  }

  /// Reset every gradient accumulator in the graph to zero
  pub fn zero_grad(&mut self) {
    for node in self.nodes.iter_mut() {
      node.grad = 0.0;
    }
  }

  /// Remember the current end of the graph
  #[inline]
  pub fn mark(&self) -> Mark {
    Mark(self.nodes.len())
  }

  /// Drop every node created after `mark`.
  ///
  /// Handles to dropped nodes become invalid; handles to older nodes (usually
  /// the parameters) stay valid along with their values and gradients.
  pub fn rewind(&mut self, mark: Mark) {
    if mark.0 < self.nodes.len() {
      trace!("rewinding graph from {} to {} nodes", self.nodes.len(), mark.0);
      self.nodes.truncate(mark.0);
    }
  }

  pub(crate) fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
    &mut self.nodes
  }

  pub(crate) fn check(&self, id: NodeId) -> Result<()> {
    if id.0 < self.nodes.len() {
      Ok(())
    } else {
      Err(Error::unknown(id, self.nodes.len()))
    }
  }

  /// Apply the configured domain policy to a freshly computed value
  pub(crate) fn admit(&self, op: Op, value: f64) -> Result<f64> {
    match self.config.domain {
      DomainPolicy::Reject if !value.is_finite() => Err(Error::domain(op.name(), value)),
      _ => Ok(value),
    }
  }

  pub(crate) fn push(&mut self, node: Node) -> Result<NodeId> {
    let additional = if self.nodes.is_empty() {
      self.config.initial_capacity.max(1)
    } else {
      1
    };
    self.nodes.try_reserve(additional)?;
    let id = NodeId(self.nodes.len());
    trace!("{} = {} -> {}", id, node.op.name(), node.value);
    self.nodes.push(node);
    Ok(id)
  }
}

impl Index<NodeId> for Graph {
  type Output = Node;

  /// Panics on a handle from another graph, see [`Graph::node`] for the
  /// checked version
  #[inline]
  fn index(&self, id: NodeId) -> &Self::Output {
    &self.nodes[id.0]
  }
}
