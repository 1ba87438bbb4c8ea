/// What to do when an operation leaves the finite reals (`ln(0)`, `0^-1`, ...)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DomainPolicy {
  /// Keep whatever `NaN`/`inf` the float primitive returns
  #[default]
  Propagate,
  /// Report [`Error::Domain`](crate::Error::Domain) for non-finite forward
  /// values and non-finite gradient contributions alike
  Reject,
}

/// Knobs for a [`Graph`](crate::Graph)
///
/// ```
/// use microtape::{DomainPolicy, Graph, GraphConfig};
///
/// let config = GraphConfig::default()
///   .with_max_order_len(1024)
///   .with_domain(DomainPolicy::Reject);
/// let graph = Graph::with_config(config);
/// assert!(graph.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphConfig {
  /// Upper bound on the length of a topological order, unbounded if `None`
  pub max_order_len: Option<usize>,
  pub domain: DomainPolicy,
  /// Nodes to reserve up front
  pub initial_capacity: usize,
}

impl GraphConfig {
  #[must_use]
  pub fn with_max_order_len(mut self, limit: usize) -> Self {
    self.max_order_len = Some(limit);
    self
  }

  #[must_use]
  pub fn with_domain(mut self, domain: DomainPolicy) -> Self {
    self.domain = domain;
    self
  }

  #[must_use]
  pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
    self.initial_capacity = capacity;
    self
  }
}
