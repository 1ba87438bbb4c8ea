//!
//! # microtape
//!
//! Reverse-mode automatic differentiation over `f64` scalars.
//!
//! Nodes live in a [`Graph`] arena and are addressed by [`NodeId`] handles.
//! Operation constructors on the graph compute forward values eagerly,
//! [`Graph::backward`] pushes the derivative of an output back to every node
//! it depends on, and [`Sgd`] turns the gradients of parameter leaves into an
//! update.
//!
//! ```
//! use microtape::{Graph, Sgd};
//!
//! # fn main() -> microtape::Result<()> {
//! let mut graph = Graph::new();
//! let w = graph.leaf(0.5)?;
//! let x = graph.leaf(3.0)?;
//! let y = graph.leaf(2.0)?;
//!
//! let pred = graph.mul(w, x)?;
//! let loss = graph.mse(pred, y)?;
//! graph.backward(loss)?;
//! assert_eq!(graph.grad(w)?, -3.0);
//!
//! Sgd::new(0.01).step(&mut graph, &[w])?;
//! assert_eq!(graph.grad(w)?, 0.0);
//! # Ok(())
//! # }
//! ```
//!

mod backward;
mod config;
mod error;
mod graph;
mod node;
mod ops;
mod optim;
pub mod topo;

pub use config::{DomainPolicy, GraphConfig};
pub use error::{Error, Result};
pub use graph::{Graph, Mark};
pub use node::{Node, NodeId, Op};
pub use optim::Sgd;
