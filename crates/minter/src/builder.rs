//! Fluent chaining surface over the production engine.
//!
//! Two builder types cover the whole chaining API instead of one interface
//! per capability: [`Builder`] for single-instance idioms and [`ListBuilder`]
//! for list idioms. `many` restarts the chain with a fresh root node,
//! `plus`/`plus_one` append nodes sharing the chain's [`SharedContext`], and
//! `with*` calls always attach to the most recently added node.

use std::fmt;
use std::sync::Arc;

use crate::chain::{Production, ProductionChain, SharedContext};
use crate::error::MinterResult;
use crate::fill::FillStrategy;
use crate::guard::Guard;
use crate::node::{Constructor, ProductionNode};
use crate::reflect::Reflect;
use crate::registry;
use crate::transform::Transform;

/// Single-instance builder context.
///
/// Created via [`Builder::new`] (or [`Builder::with_constructor`]) with one
/// root node of size 1; [`Builder::build`] yields the first produced
/// instance of the chain.
pub struct Builder<T> {
	chain: ProductionChain<T>,
}

impl<T: Default + 'static> Builder<T> {
	/// Creates a builder constructing instances via `T::default`.
	pub fn new() -> Self {
		Self::with_constructor(T::default)
	}
}

impl<T: Default + 'static> Default for Builder<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: 'static> Builder<T> {
	/// Creates a builder using a custom constructor instead of `T::default`.
	///
	/// Every node linked through this builder's chain shares the
	/// constructor.
	pub fn with_constructor(constructor: impl Fn() -> T + Send + Sync + 'static) -> Self {
		Self::from_constructor(Arc::new(constructor))
	}

	pub(crate) fn from_constructor(constructor: Constructor<T>) -> Self {
		let mut chain = ProductionChain::new(SharedContext::new(constructor));
		let root = ProductionNode::new(1, chain.context().constructor());
		chain.add_root_node(root);
		Self { chain }
	}

	pub(crate) fn from_chain(chain: ProductionChain<T>) -> Self {
		Self { chain }
	}

	/// Registers a transform on the current node, applied to every index.
	pub fn with(mut self, func: impl Fn(&mut T) + Send + Sync + 'static) -> Self {
		if let Some(node) = self.chain.current_node_mut() {
			node.add_transform(Transform::new(func), Guard::Always);
		}
		self
	}

	/// Registers a chain-wide default transform, applied to every node
	/// (including nodes appended later) before any node-local transform.
	pub fn with_default(mut self, func: impl Fn(&mut T) + Send + Sync + 'static) -> Self {
		self.chain.add_default_transform(Transform::new(func));
		self
	}

	/// Registers an already-built transform as a chain-wide default.
	pub fn with_default_transform(mut self, transform: Transform<T>) -> Self {
		self.chain.add_default_transform(transform);
		self
	}

	/// Installs a fill strategy ahead of the existing defaults, so explicit
	/// setters override strategy-filled values.
	pub fn auto_fill(mut self, strategy: &FillStrategy) -> Self
	where
		T: Reflect,
	{
		self.chain
			.context_mut()
			.insert_leading_default(strategy.transform::<T>());
		self
	}

	/// Installs the process-wide default fill strategy, if one is
	/// registered. No-op otherwise.
	pub fn auto_fill_default(self) -> Self
	where
		T: Reflect,
	{
		match registry::default_fill() {
			Some(strategy) => self.auto_fill(&strategy),
			None => self,
		}
	}

	/// Restarts the chain with a single root node producing `count`
	/// instances. Subsequent `with*` calls attach to that node.
	pub fn many(mut self, count: usize) -> ListBuilder<T> {
		let node = ProductionNode::new(count, self.chain.context().constructor());
		self.chain.add_root_node(node);
		ListBuilder { chain: self.chain }
	}

	/// Appends a node producing `count` further instances, sharing the
	/// chain's defaults and constructor.
	pub fn plus(mut self, count: usize) -> ListBuilder<T> {
		let node = ProductionNode::new(count, self.chain.context().constructor());
		self.chain.add_node(node);
		ListBuilder { chain: self.chain }
	}

	/// Appends a single-instance node; subsequent `with` calls attach to it.
	pub fn plus_one(mut self) -> Builder<T> {
		let node = ProductionNode::new(1, self.chain.context().constructor());
		self.chain.add_node(node);
		self
	}

	/// Produces the first instance of the chain.
	pub fn build(self) -> T {
		let (context, nodes) = self.chain.into_parts();
		// Zero-count nodes yield nothing; the first produced instance
		// comes from the first node that actually produces.
		match nodes.into_iter().find(|node| node.target_count() > 0) {
			Some(node) => node.produce_at(0, context.defaults()),
			None => {
				let mut instance = (context.constructor())();
				for transform in context.defaults() {
					transform.apply(&mut instance, 0);
				}
				instance
			}
		}
	}
}

impl<T> fmt::Debug for Builder<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Builder").field("chain", &self.chain).finish()
	}
}

/// List builder context over the same chain.
///
/// Obtained from [`Builder::many`]/[`Builder::plus`];
/// [`ListBuilder::build`] consumes the builder into a lazy [`Production`]
/// over all nodes in insertion order.
pub struct ListBuilder<T> {
	chain: ProductionChain<T>,
}

impl<T: 'static> ListBuilder<T> {
	/// Registers a transform on the current node, applied to every index.
	pub fn with(mut self, func: impl Fn(&mut T) + Send + Sync + 'static) -> Self {
		if let Some(node) = self.chain.current_node_mut() {
			node.add_transform(Transform::new(func), Guard::Always);
		}
		self
	}

	/// Registers a transform on the first `count` instances of the current
	/// node.
	///
	/// # Errors
	///
	/// Returns [`crate::MinterError::GuardOutOfRange`] immediately when
	/// `count` exceeds the node's target count; no instance is produced.
	pub fn with_first(
		mut self,
		count: usize,
		func: impl Fn(&mut T) + Send + Sync + 'static,
	) -> MinterResult<Self> {
		if let Some(node) = self.chain.current_node_mut() {
			let guard = Guard::first(count, node.target_count())?;
			node.add_transform(Transform::new(func), guard);
		}
		Ok(self)
	}

	/// Registers a transform on the last `count` instances of the current
	/// node.
	///
	/// # Errors
	///
	/// Returns [`crate::MinterError::GuardOutOfRange`] immediately when
	/// `count` exceeds the node's target count.
	pub fn with_last(
		mut self,
		count: usize,
		func: impl Fn(&mut T) + Send + Sync + 'static,
	) -> MinterResult<Self> {
		if let Some(node) = self.chain.current_node_mut() {
			let guard = Guard::last(count, node.target_count())?;
			node.add_transform(Transform::new(func), guard);
		}
		Ok(self)
	}

	/// Registers a transform on `count` instances starting at zero-based
	/// index `start` within the current node.
	///
	/// # Errors
	///
	/// Returns [`crate::MinterError::SliceOutOfRange`] immediately when the
	/// slice does not fit inside the node.
	pub fn with_between(
		mut self,
		count: usize,
		start: usize,
		func: impl Fn(&mut T) + Send + Sync + 'static,
	) -> MinterResult<Self> {
		if let Some(node) = self.chain.current_node_mut() {
			let guard = Guard::between(count, start, node.target_count())?;
			node.add_transform(Transform::new(func), guard);
		}
		Ok(self)
	}

	/// Registers a chain-wide default transform; see [`Builder::with_default`].
	pub fn with_default(mut self, func: impl Fn(&mut T) + Send + Sync + 'static) -> Self {
		self.chain.add_default_transform(Transform::new(func));
		self
	}

	/// Registers an already-built transform as a chain-wide default.
	pub fn with_default_transform(mut self, transform: Transform<T>) -> Self {
		self.chain.add_default_transform(transform);
		self
	}

	/// Installs a fill strategy ahead of the existing defaults.
	pub fn auto_fill(mut self, strategy: &FillStrategy) -> Self
	where
		T: Reflect,
	{
		self.chain
			.context_mut()
			.insert_leading_default(strategy.transform::<T>());
		self
	}

	/// Restarts the chain with a single root node producing `count`
	/// instances; all previously configured nodes are dropped.
	pub fn many(mut self, count: usize) -> Self {
		let node = ProductionNode::new(count, self.chain.context().constructor());
		self.chain.add_root_node(node);
		self
	}

	/// Appends a node producing `count` further instances; subsequent
	/// `with*` calls attach only to the new node.
	pub fn plus(mut self, count: usize) -> Self {
		let node = ProductionNode::new(count, self.chain.context().constructor());
		self.chain.add_node(node);
		self
	}

	/// Appends a single-instance node and switches back to the
	/// single-instance chaining surface.
	pub fn plus_one(mut self) -> Builder<T> {
		let node = ProductionNode::new(1, self.chain.context().constructor());
		self.chain.add_node(node);
		Builder::from_chain(self.chain)
	}

	/// Consumes the builder into a lazy production over every node, in
	/// insertion order. Constructors and transforms run on demand.
	pub fn build(self) -> Production<T> {
		self.chain.build()
	}
}

impl<T> fmt::Debug for ListBuilder<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListBuilder")
			.field("chain", &self.chain)
			.finish()
	}
}
