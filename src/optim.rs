use log::debug;

use crate::error::Result;
use crate::graph::Graph;
use crate::node::NodeId;

/// Plain gradient descent, no momentum and no adaptive rates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
  learning_rate: f64,
}

impl Sgd {
  /// A non-positive rate is accepted, it just won't make progress
  pub fn new(learning_rate: f64) -> Self {
    Self { learning_rate }
  }

  #[inline]
  pub fn learning_rate(&self) -> f64 {
    self.learning_rate
  }

  /// `value -= lr * grad`, then `grad = 0` for every parameter.
  ///
  /// All handles are checked before any parameter is touched.
  pub fn step(&self, graph: &mut Graph, params: &[NodeId]) -> Result<()> {
    for &param in params {
      graph.check(param)?;
    }
    let nodes = graph.nodes_mut();
    for &param in params {
      let node = &mut nodes[param.0];
      node.value -= self.learning_rate * node.grad;
      node.grad = 0.0;
    }
    debug!("stepped {} parameters with lr {}", params.len(), self.learning_rate);
    Ok(())
  }
}
