use log::debug;
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::node::NodeId;

/// Every node reachable from `root`, each exactly once, children strictly
/// before their parents.
///
/// The walk is a depth-first postorder (left, right, self). A node shared by
/// several parents is emitted on its first visit only.
pub fn order(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>> {
  graph.check(root)?;
  let nodes = graph.nodes();
  let limit = graph.config().max_order_len;

  let mut visited = FxHashSet::default();
  let mut result = Vec::new();
  // (node, children already scheduled)
  let mut stack = vec![(root, false)];

  while let Some((id, expanded)) = stack.pop() {
    if expanded {
      if let Some(limit) = limit {
        if result.len() >= limit {
          return Err(Error::CapacityExceeded { limit });
        }
      }
      result.try_reserve(1)?;
      result.push(id);
      continue;
    }
    if !visited.insert(id) {
      continue;
    }
    let node = &nodes[id.0];
    stack.push((id, true));
    // right first so that left is walked first
    stack.extend(node.right().map(|r| (r, false)));
    stack.extend(node.left().map(|l| (l, false)));
  }

  debug!("topological order from {} holds {} nodes", root, result.len());
  Ok(result)
}
