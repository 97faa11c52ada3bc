//! Property-mutation transforms applied to produced instances.
//!
//! A [`Transform`] is the leaf unit of the production pipeline: a closure
//! that mutates one or more fields of a freshly constructed instance. Most
//! transforms ignore the production index; fill strategies use it to derive
//! sequential values.

use std::fmt;
use std::sync::Arc;

use crate::guard::Guard;

/// A shared field-mutating closure applied to one produced instance.
///
/// Transforms are stateless and cheaply cloneable; the same transform can sit
/// in a chain's default list and be applied across every node.
pub struct Transform<T> {
	func: Arc<dyn Fn(&mut T, usize) + Send + Sync>,
}

impl<T: 'static> Transform<T> {
	/// Creates a transform from an index-unaware mutation.
	///
	/// # Example
	///
	/// ```ignore
	/// let set_age = Transform::new(|person: &mut Person| person.age = 56);
	/// ```
	pub fn new(func: impl Fn(&mut T) + Send + Sync + 'static) -> Self {
		Self {
			func: Arc::new(move |instance, _index| func(instance)),
		}
	}

	/// Creates a transform that also receives the zero-based production index.
	pub fn indexed(func: impl Fn(&mut T, usize) + Send + Sync + 'static) -> Self {
		Self {
			func: Arc::new(func),
		}
	}
}

impl<T> Transform<T> {
	/// Applies the transform to an instance produced at `index`.
	pub fn apply(&self, instance: &mut T, index: usize) {
		(self.func)(instance, index);
	}
}

impl<T> Clone for Transform<T> {
	fn clone(&self) -> Self {
		Self {
			func: Arc::clone(&self.func),
		}
	}
}

impl<T> fmt::Debug for Transform<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Transform").finish_non_exhaustive()
	}
}

/// A transform paired with the guard deciding which indices it applies to.
///
/// Registration order among a node's guarded transforms is significant: each
/// applicable transform runs once, in the order it was registered, so the
/// last one registered for a given index wins.
#[derive(Debug, Clone)]
pub struct GuardedTransform<T> {
	/// The mutation to apply.
	pub transform: Transform<T>,
	/// The index predicate gating the mutation.
	pub guard: Guard,
}

impl<T> GuardedTransform<T> {
	/// Pairs a transform with a guard.
	pub fn new(transform: Transform<T>, guard: Guard) -> Self {
		Self { transform, guard }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[derive(Default)]
	struct Counter {
		value: usize,
	}

	#[rstest]
	fn test_apply_mutates_instance() {
		let transform = Transform::new(|c: &mut Counter| c.value += 1);
		let mut counter = Counter::default();
		transform.apply(&mut counter, 0);
		transform.apply(&mut counter, 1);
		assert_eq!(counter.value, 2);
	}

	#[rstest]
	fn test_indexed_transform_sees_production_index() {
		let transform = Transform::indexed(|c: &mut Counter, index| c.value = index + 1);
		let mut counter = Counter::default();
		transform.apply(&mut counter, 41);
		assert_eq!(counter.value, 42);
	}

	#[rstest]
	fn test_clone_shares_the_closure() {
		let transform = Transform::new(|c: &mut Counter| c.value = 7);
		let clone = transform.clone();
		let mut counter = Counter::default();
		clone.apply(&mut counter, 0);
		assert_eq!(counter.value, 7);
	}

	#[rstest]
	fn test_guarded_transform_skips_rejected_index() {
		let guarded = GuardedTransform::new(
			Transform::new(|c: &mut Counter| c.value = 9),
			Guard::first(1, 3).unwrap(),
		);
		let mut counter = Counter::default();
		if guarded.guard.accepts(2) {
			guarded.transform.apply(&mut counter, 2);
		}
		assert_eq!(counter.value, 0);
	}
}
