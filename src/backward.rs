use log::{debug, trace};

use crate::config::DomainPolicy;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};
use crate::topo;

impl Graph {
  /// Reverse-mode pass: accumulate `d root / d node` into every node reachable
  /// from `root`.
  ///
  /// The root is seeded with `1.0`, then each node in reverse topological
  /// order hands its gradient to its operands through its local derivative.
  /// Every node runs exactly once, after all of its parents. Gradients add to
  /// whatever the accumulators already hold, call [`Graph::zero_grad`] (or
  /// step the parameters) between passes.
  pub fn backward(&mut self, root: NodeId) -> Result<()> {
    let order = topo::order(self, root)?;
    debug!("backward from {} over {} nodes", root, order.len());

    let reject = self.config().domain == DomainPolicy::Reject;
    let nodes = self.nodes_mut();
    // a rejected pass puts every accumulator back the way it found it
    let saved: Vec<f64> = if reject {
      order.iter().map(|id| nodes[id.0].grad).collect()
    } else {
      Vec::new()
    };
    nodes[root.0].grad = 1.0;

    for &id in order.iter().rev() {
      let node = &nodes[id.0];
      if node.is_leaf() {
        continue;
      }
      let (da, db) = pullback(nodes, node);
      trace!("{} ({}) -> {:?}, {:?}", id, node.op.name(), da, db);
      if reject {
        for (_, delta) in [da, db].into_iter().flatten() {
          if !delta.is_finite() {
            let err = Error::domain(node.op.name(), delta);
            for (id, &grad) in order.iter().zip(saved.iter()) {
              nodes[id.0].grad = grad;
            }
            return Err(err);
          }
        }
      }
      for (child, delta) in [da, db].into_iter().flatten() {
        nodes[child.0].grad += delta;
      }
    }
    Ok(())
  }
}

/// Local derivative of `node` scaled by its gradient, one entry per operand
fn pullback(nodes: &[Node], node: &Node) -> (Option<(NodeId, f64)>, Option<(NodeId, f64)>) {
  let g = node.grad;
  match (node.op, node.left, node.right) {
    (Op::Increment, Some(a), _) => (Some((a, g)), None),
    (Op::Sub, Some(a), Some(b)) => (Some((a, g)), Some((b, -g))),
    (Op::Mul, Some(x), Some(y)) => {
      let (xv, yv) = (nodes[x.0].value, nodes[y.0].value);
      (Some((x, yv * g)), Some((y, xv * g)))
    }
    (Op::Pow(k), Some(x), _) => {
      let xv = nodes[x.0].value;
      (Some((x, k * xv.powf(k - 1.0) * g)), None)
    }
    (Op::Ln, Some(b), _) => (Some((b, (1.0 / nodes[b.0].value) * g)), None),
    // constructors always link the operands their op reads
    _ => (None, None),
  }
}
