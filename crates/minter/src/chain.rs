//! Ordered node chains and the shared construction context.
//!
//! A [`ProductionChain`] holds an ordered list of [`ProductionNode`]s plus a
//! chain-wide default-transform list applied to every node. Building the
//! chain lazily concatenates each node's output in insertion order. Default
//! transforms are read at build time, so defaults registered after a node was
//! appended still apply to it.

use std::fmt;
use std::sync::Arc;

use crate::error::{MinterError, MinterResult};
use crate::node::{Constructor, ProductionNode};
use crate::transform::Transform;

/// Immutable bundle of {default transforms, constructor} shared by every
/// node linked through one chain.
///
/// Linked builders capture the same context so `plus`/`plus_one` nodes share
/// identical baseline construction behavior. The bundle is effectively
/// read-only once a factory has been customized.
pub struct SharedContext<T> {
	defaults: Vec<Transform<T>>,
	constructor: Constructor<T>,
}

impl<T> SharedContext<T> {
	/// Creates a context with the given constructor and no defaults.
	pub fn new(constructor: Constructor<T>) -> Self {
		Self {
			defaults: Vec::new(),
			constructor,
		}
	}

	/// The chain-wide default transforms, in registration order.
	pub fn defaults(&self) -> &[Transform<T>] {
		&self.defaults
	}

	/// Clones the shared constructor handle.
	pub fn constructor(&self) -> Constructor<T> {
		Arc::clone(&self.constructor)
	}

	/// Replaces the constructor used by nodes created from now on.
	pub(crate) fn set_constructor(&mut self, constructor: Constructor<T>) {
		self.constructor = constructor;
	}

	pub(crate) fn push_default(&mut self, transform: Transform<T>) {
		self.defaults.push(transform);
	}

	pub(crate) fn insert_leading_default(&mut self, transform: Transform<T>) {
		self.defaults.insert(0, transform);
	}
}

impl<T> fmt::Debug for SharedContext<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SharedContext")
			.field("defaults", &self.defaults.len())
			.finish_non_exhaustive()
	}
}

/// An ordered sequence of production nodes sharing one [`SharedContext`].
///
/// The chain is append-only except for [`ProductionChain::add_root_node`],
/// which replaces every existing node with a new single root (the `many`
/// restart operation).
pub struct ProductionChain<T> {
	context: SharedContext<T>,
	nodes: Vec<ProductionNode<T>>,
}

impl<T> ProductionChain<T> {
	/// Creates an empty chain around a shared context.
	pub fn new(context: SharedContext<T>) -> Self {
		Self {
			context,
			nodes: Vec::new(),
		}
	}

	/// The shared construction context.
	pub fn context(&self) -> &SharedContext<T> {
		&self.context
	}

	pub(crate) fn context_mut(&mut self) -> &mut SharedContext<T> {
		&mut self.context
	}

	/// Clears all existing nodes and installs `node` as the sole root.
	pub fn add_root_node(&mut self, node: ProductionNode<T>) {
		self.nodes.clear();
		self.nodes.push(node);
	}

	/// Appends `node` after the existing nodes, preserving order.
	pub fn add_node(&mut self, node: ProductionNode<T>) {
		self.nodes.push(node);
	}

	/// Appends a chain-wide default transform.
	///
	/// Defaults apply to every node ever added, including nodes appended
	/// after this call. They run before any node-local transform, for
	/// every index.
	pub fn add_default_transform(&mut self, transform: Transform<T>) {
		self.context.push_default(transform);
	}

	/// The most recently added node, if any.
	///
	/// The facade uses this to know which node subsequent `with*` calls
	/// attach to.
	pub fn current_node_mut(&mut self) -> Option<&mut ProductionNode<T>> {
		self.nodes.last_mut()
	}

	/// Number of nodes currently in the chain.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Total number of instances a full build would yield.
	pub fn total_count(&self) -> usize {
		self.nodes.iter().map(ProductionNode::target_count).sum()
	}

	/// Consumes the chain into a lazy production over all nodes in
	/// insertion order.
	pub fn build(self) -> Production<T> {
		tracing::debug!(
			nodes = self.nodes.len(),
			instances = self.total_count(),
			"building production chain"
		);
		Production {
			defaults: self.context.defaults,
			nodes: self.nodes.into_iter(),
			current: None,
		}
	}

	/// Consumes the chain and produces its first instance.
	///
	/// # Errors
	///
	/// Returns [`MinterError::EmptyChain`] when the chain has no nodes or
	/// every node has a zero target count.
	pub fn first(self) -> MinterResult<T> {
		self.build().next().ok_or(MinterError::EmptyChain)
	}

	pub(crate) fn into_parts(self) -> (SharedContext<T>, Vec<ProductionNode<T>>) {
		(self.context, self.nodes)
	}
}

impl<T> fmt::Debug for ProductionChain<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProductionChain")
			.field("nodes", &self.nodes.len())
			.field("total_count", &self.total_count())
			.finish_non_exhaustive()
	}
}

/// Lazy iterator over every instance a chain produces.
///
/// Constructors and transforms run on demand, one instance per `next` call;
/// nothing is cached or replayed.
pub struct Production<T> {
	defaults: Vec<Transform<T>>,
	nodes: std::vec::IntoIter<ProductionNode<T>>,
	current: Option<(ProductionNode<T>, usize)>,
}

impl<T> Iterator for Production<T> {
	type Item = T;

	fn next(&mut self) -> Option<T> {
		loop {
			if let Some((node, index)) = self.current.as_mut() {
				if *index < node.target_count() {
					let instance = node.produce_at(*index, &self.defaults);
					*index += 1;
					return Some(instance);
				}
				self.current = None;
			}
			let node = self.nodes.next()?;
			self.current = Some((node, 0));
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let pending: usize = self
			.current
			.as_ref()
			.map(|(node, index)| node.target_count() - index)
			.unwrap_or(0);
		let remaining: usize = self
			.nodes
			.as_slice()
			.iter()
			.map(ProductionNode::target_count)
			.sum();
		let total = pending + remaining;
		(total, Some(total))
	}
}

impl<T> ExactSizeIterator for Production<T> {}

impl<T> fmt::Debug for Production<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Production")
			.field("remaining", &self.size_hint().0)
			.finish_non_exhaustive()
	}
}
