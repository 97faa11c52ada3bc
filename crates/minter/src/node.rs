//! Bounded-count instance producers.
//!
//! A [`ProductionNode`] produces exactly `target_count` instances lazily.
//! For each index it constructs a fresh instance, applies the chain-wide
//! default transforms, then its own guarded transforms whose guard accepts
//! the index, all in registration order.

use std::fmt;
use std::sync::Arc;

use crate::guard::Guard;
use crate::transform::{GuardedTransform, Transform};

/// Shared constructor closure threaded through every node in a chain.
pub type Constructor<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// A bounded-count lazy instance producer.
///
/// Nodes live for the duration of one `many`/`plus`/single-instance
/// configuration step; a chain replaces its nodes wholesale when `many` is
/// invoked again.
pub struct ProductionNode<T> {
	target_count: usize,
	constructor: Constructor<T>,
	transforms: Vec<GuardedTransform<T>>,
}

impl<T> ProductionNode<T> {
	/// Creates a node producing `target_count` instances via `constructor`.
	pub fn new(target_count: usize, constructor: Constructor<T>) -> Self {
		Self {
			target_count,
			constructor,
			transforms: Vec::new(),
		}
	}

	/// Number of instances this node produces.
	pub fn target_count(&self) -> usize {
		self.target_count
	}

	/// Registers a guarded transform after all previously registered ones.
	pub fn add_transform(&mut self, transform: Transform<T>, guard: Guard) {
		self.transforms.push(GuardedTransform::new(transform, guard));
	}

	/// Constructs and mutates the instance at `index`.
	///
	/// Default transforms run first and unconditionally; the node's own
	/// transforms follow, each gated by its guard. Later transforms touching
	/// the same field overwrite earlier ones.
	pub(crate) fn produce_at(&self, index: usize, defaults: &[Transform<T>]) -> T {
		let mut instance = (self.constructor)();
		for transform in defaults {
			transform.apply(&mut instance, index);
		}
		for guarded in &self.transforms {
			if guarded.guard.accepts(index) {
				guarded.transform.apply(&mut instance, index);
			}
		}
		instance
	}

	/// Lazily produces all `target_count` instances.
	///
	/// Each enumeration re-invokes the constructor per item; nothing is
	/// cached. Enumerating twice with a side-effecting constructor runs the
	/// side effects twice.
	pub fn produce<'a>(&'a self, defaults: &'a [Transform<T>]) -> impl Iterator<Item = T> + 'a {
		(0..self.target_count).map(move |index| self.produce_at(index, defaults))
	}
}

impl<T> fmt::Debug for ProductionNode<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProductionNode")
			.field("target_count", &self.target_count)
			.field("transforms", &self.transforms.len())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;
	use rstest::rstest;

	#[derive(Debug, Default, Clone, PartialEq)]
	struct Person {
		name: String,
		age: u8,
	}

	fn default_constructor() -> Constructor<Person> {
		Arc::new(Person::default)
	}

	#[rstest]
	fn test_produces_exactly_target_count() {
		let node = ProductionNode::new(5, default_constructor());
		assert_eq!(node.produce(&[]).count(), 5);
	}

	#[rstest]
	fn test_zero_count_produces_nothing() {
		let node = ProductionNode::new(0, default_constructor());
		assert_eq!(node.produce(&[]).count(), 0);
	}

	#[rstest]
	fn test_defaults_run_before_node_transforms() {
		let mut node = ProductionNode::new(1, default_constructor());
		node.add_transform(Transform::new(|p: &mut Person| p.age = 19), Guard::Always);
		let defaults = vec![Transform::new(|p: &mut Person| p.age = 56)];
		let produced: Vec<_> = node.produce(&defaults).collect();
		assert_eq!(produced[0].age, 19);
	}

	#[rstest]
	fn test_last_registered_transform_wins() {
		let mut node = ProductionNode::new(1, default_constructor());
		node.add_transform(
			Transform::new(|p: &mut Person| p.name = "first".into()),
			Guard::Always,
		);
		node.add_transform(
			Transform::new(|p: &mut Person| p.name = "second".into()),
			Guard::Always,
		);
		let produced: Vec<_> = node.produce(&[]).collect();
		assert_eq!(produced[0].name, "second");
	}

	#[rstest]
	fn test_guard_rejection_skips_transform() {
		let mut node = ProductionNode::new(4, default_constructor());
		node.add_transform(
			Transform::new(|p: &mut Person| p.age = 99),
			Guard::first(2, 4).unwrap(),
		);
		let ages: Vec<_> = node.produce(&[]).map(|p| p.age).collect();
		assert_eq!(ages, vec![99, 99, 0, 0]);
	}

	#[rstest]
	fn test_custom_constructor_is_invoked_per_instance() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let constructor: Constructor<Person> = Arc::new(move || {
			counter.fetch_add(1, Ordering::SeqCst);
			Person {
				name: "built".into(),
				age: 1,
			}
		});
		let node = ProductionNode::new(3, constructor);
		// Not consumed yet: lazy production must not construct anything.
		let production = node.produce(&[]);
		assert_eq!(calls.load(Ordering::SeqCst), 0);
		assert_eq!(production.count(), 3);
		assert_eq!(calls.load(Ordering::SeqCst), 3);
	}

	#[rstest]
	fn test_re_enumeration_reconstructs() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&calls);
		let constructor: Constructor<Person> = Arc::new(move || {
			counter.fetch_add(1, Ordering::SeqCst);
			Person::default()
		});
		let node = ProductionNode::new(2, constructor);
		node.produce(&[]).for_each(drop);
		node.produce(&[]).for_each(drop);
		assert_eq!(calls.load(Ordering::SeqCst), 4);
	}
}
