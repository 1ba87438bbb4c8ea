use std::fmt;

/// Handle to a node living in a [`Graph`](crate::Graph) arena.
///
/// Handles are plain indices: they do not own the node they point at, so the
/// same child can be shared by any number of parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
  #[inline(always)]
  pub fn index(&self) -> usize {
    self.0
  }
}

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// The operation that produced a node, carrying only the data its local
/// derivative needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
  /// Input or parameter, no children
  Leaf,
  /// `a + 1`
  Increment,
  /// `a - b`
  Sub,
  /// `x * y`
  Mul,
  /// `x^k` for a constant `k`
  Pow(f64),
  /// Natural log
  Ln,
}

impl Op {
  pub fn name(&self) -> &'static str {
    match self {
      Op::Leaf => "leaf",
      Op::Increment => "add",
      Op::Sub => "sub",
      Op::Mul => "mul",
      Op::Pow(_) => "pow",
      Op::Ln => "ln",
    }
  }
}

/// A single scalar in the expression graph
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
  pub(crate) value: f64,
  pub(crate) grad: f64,
  pub(crate) aux: f64,
  pub(crate) left: Option<NodeId>,
  pub(crate) right: Option<NodeId>,
  pub(crate) op: Op,
}

impl Node {
  pub(crate) fn leaf(value: f64) -> Self {
    Self {
      value,
      grad: 0.0,
      aux: 0.0,
      left: None,
      right: None,
      op: Op::Leaf,
    }
  }

  pub(crate) fn unary(value: f64, op: Op, operand: NodeId) -> Self {
    let aux = match op {
      Op::Pow(k) => k,
      _ => 0.0,
    };
    Self {
      value,
      grad: 0.0,
      aux,
      left: Some(operand),
      right: None,
      op,
    }
  }

  pub(crate) fn binary(value: f64, op: Op, left: NodeId, right: NodeId) -> Self {
    Self {
      value,
      grad: 0.0,
      aux: 0.0,
      left: Some(left),
      right: Some(right),
      op,
    }
  }

  #[inline(always)]
  pub fn value(&self) -> f64 {
    self.value
  }

  /// Accumulated derivative of the last backward root with respect to this node
  #[inline(always)]
  pub fn grad(&self) -> f64 {
    self.grad
  }

  /// Operation constant (the exponent of a `pow` node), `0.0` elsewhere
  #[inline(always)]
  pub fn aux(&self) -> f64 {
    self.aux
  }

  #[inline(always)]
  pub fn left(&self) -> Option<NodeId> {
    self.left
  }

  #[inline(always)]
  pub fn right(&self) -> Option<NodeId> {
    self.right
  }

  #[inline(always)]
  pub fn op(&self) -> Op {
    self.op
  }

  #[inline(always)]
  pub fn is_leaf(&self) -> bool {
    matches!(self.op, Op::Leaf)
  }

  /// Children in traversal order, left first
  pub fn children(&self) -> impl Iterator<Item = NodeId> {
    self.left.into_iter().chain(self.right)
  }
}
