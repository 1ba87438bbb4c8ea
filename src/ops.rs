//!
//! Operation constructors.
//!
//! Each constructor reads the forward value of its operands, allocates exactly
//! one node holding the result and links it to its operands. Operands are never
//! mutated. The matching local derivative lives in [`crate::backward`].
//!

use crate::error::Result;
use crate::graph::Graph;
use crate::node::{Node, NodeId, Op};

impl Graph {
  /// Increment by one: `a + 1`.
  ///
  /// Only `a` is an operand, the constant has no node and no derivative.
  pub fn add(&mut self, a: NodeId) -> Result<NodeId> {
    let av = self.value(a)?;
    let value = self.admit(Op::Increment, av + 1.0)?;
    self.push(Node::unary(value, Op::Increment, a))
  }

  pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId> {
    let (av, bv) = (self.value(a)?, self.value(b)?);
    let value = self.admit(Op::Sub, av - bv)?;
    self.push(Node::binary(value, Op::Sub, a, b))
  }

  pub fn mul(&mut self, x: NodeId, y: NodeId) -> Result<NodeId> {
    let (xv, yv) = (self.value(x)?, self.value(y)?);
    let value = self.admit(Op::Mul, xv * yv)?;
    self.push(Node::binary(value, Op::Mul, x, y))
  }

  /// `x^k` for a constant exponent
  pub fn pow(&mut self, x: NodeId, k: f64) -> Result<NodeId> {
    let xv = self.value(x)?;
    let op = Op::Pow(k);
    let value = self.admit(op, xv.powf(k))?;
    self.push(Node::unary(value, op, x))
  }

  /// Natural logarithm
  pub fn ln(&mut self, b: NodeId) -> Result<NodeId> {
    let bv = self.value(b)?;
    let value = self.admit(Op::Ln, bv.ln())?;
    self.push(Node::unary(value, Op::Ln, b))
  }

  /// Squared error of a single prediction, `(pred - target)^2`
  pub fn mse(&mut self, pred: NodeId, target: NodeId) -> Result<NodeId> {
    let diff = self.sub(pred, target)?;
    self.pow(diff, 2.0)
  }
}
