//! Reusable factory declarations.
//!
//! A [`Blueprint`] is the declaration hook for a fixed factory: implement
//! `configure` once, customizing the construction baseline through the
//! [`Customizer`], and every builder obtained from the blueprint shares that
//! baseline. Blueprints that do not pick a fill behavior fall back to the
//! process-wide default registered via [`crate::registry::set_default_fill`].

use std::sync::Arc;

use crate::builder::Builder;
use crate::fill::FillStrategy;
use crate::node::Constructor;
use crate::reflect::Reflect;
use crate::registry;
use crate::transform::Transform;

/// Customization surface handed to [`Blueprint::configure`].
///
/// Captures the pieces of the [`crate::chain::SharedContext`] every builder
/// from the blueprint starts from: the constructor, the chain-wide default
/// transforms, and the fill behavior.
pub struct Customizer<T> {
	constructor: Option<Constructor<T>>,
	defaults: Vec<Transform<T>>,
	behavior: Option<FillStrategy>,
}

impl<T: 'static> Customizer<T> {
	fn new() -> Self {
		Self {
			constructor: None,
			defaults: Vec::new(),
			behavior: None,
		}
	}

	/// Replaces the default parameterless construction with a custom
	/// constructor.
	pub fn use_constructor(&mut self, constructor: impl Fn() -> T + Send + Sync + 'static) {
		self.constructor = Some(Arc::new(constructor));
	}

	/// Registers a default field setter applied to every produced instance.
	///
	/// Setters run in registration order after the fill behavior, so they
	/// override strategy-filled values.
	pub fn set(&mut self, func: impl Fn(&mut T) + Send + Sync + 'static) {
		self.defaults.push(Transform::new(func));
	}

	/// Picks the fill behavior for untouched fields.
	///
	/// Regardless of the order of `set` and `set_default_behavior` calls,
	/// the behavior always runs ahead of the registered setters.
	pub fn set_default_behavior(&mut self, strategy: FillStrategy) {
		self.behavior = Some(strategy);
	}
}

/// A fixed factory declaration for one model type.
///
/// # Example
///
/// ```ignore
/// struct CustomerBlueprint;
///
/// impl Blueprint for CustomerBlueprint {
///     type Model = Customer;
///
///     fn configure(&self, c: &mut Customizer<Customer>) {
///         c.set_default_behavior(FillStrategy::empty());
///         c.set(|customer| customer.active = true);
///     }
/// }
///
/// let customers: Vec<_> = CustomerBlueprint.builder().many(10).build().collect();
/// ```
pub trait Blueprint {
	/// The model type this blueprint produces.
	type Model: Reflect + Default + 'static;

	/// Declares the construction baseline for the model.
	///
	/// Invoked once per [`Blueprint::builder`] call.
	fn configure(&self, customizer: &mut Customizer<Self::Model>);

	/// Creates a builder seeded with this blueprint's shared context.
	fn builder(&self) -> Builder<Self::Model> {
		let mut customizer = Customizer::new();
		self.configure(&mut customizer);

		let constructor = customizer
			.constructor
			.unwrap_or_else(|| Arc::new(<Self::Model>::default));
		let mut builder = Builder::from_constructor(constructor);
		for transform in customizer.defaults {
			builder = builder.with_default_transform(transform);
		}
		// Behavior goes in front of the setters even when it was picked
		// last during configure.
		let behavior = customizer.behavior.or_else(registry::default_fill);
		if let Some(strategy) = behavior {
			builder = builder.auto_fill(&strategy);
		}
		builder
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reflect::{FieldDescriptor, FieldKind, ScalarValue};
	use rstest::rstest;

	#[derive(Debug, Default, Clone, PartialEq)]
	struct Product {
		title: String,
		stock: u32,
		discontinued: bool,
	}

	impl Reflect for Product {
		fn fields(&self) -> &'static [FieldDescriptor] {
			const FIELDS: &[FieldDescriptor] = &[
				FieldDescriptor {
					name: "title",
					kind: FieldKind::String,
					optional: false,
				},
				FieldDescriptor {
					name: "stock",
					kind: FieldKind::U32,
					optional: false,
				},
				FieldDescriptor {
					name: "discontinued",
					kind: FieldKind::Bool,
					optional: false,
				},
			];
			FIELDS
		}

		fn set_scalar(&mut self, name: &str, value: ScalarValue) -> bool {
			match (name, value) {
				("title", ScalarValue::Str(v)) => {
					self.title = v;
					true
				}
				("stock", ScalarValue::Uint(v)) => {
					self.stock = v as u32;
					true
				}
				("discontinued", ScalarValue::Bool(v)) => {
					self.discontinued = v;
					true
				}
				_ => false,
			}
		}

		fn nested_mut(&mut self, _name: &str) -> Option<&mut dyn Reflect> {
			None
		}
	}

	struct ProductBlueprint;

	impl Blueprint for ProductBlueprint {
		type Model = Product;

		fn configure(&self, customizer: &mut Customizer<Product>) {
			customizer.use_constructor(|| Product {
				title: "unnamed".into(),
				stock: 100,
				discontinued: true,
			});
			customizer.set(|product| product.discontinued = false);
		}
	}

	struct SequentialProductBlueprint;

	impl Blueprint for SequentialProductBlueprint {
		type Model = Product;

		fn configure(&self, customizer: &mut Customizer<Product>) {
			// Setter registered before the behavior must still win.
			customizer.set(|product| product.stock = 7);
			customizer.set_default_behavior(FillStrategy::sequential());
		}
	}

	#[rstest]
	fn test_blueprint_constructor_and_setters_apply() {
		let product = ProductBlueprint.builder().build();
		assert_eq!(product.title, "unnamed");
		assert_eq!(product.stock, 100);
		assert!(!product.discontinued);
	}

	#[rstest]
	fn test_blueprint_defaults_apply_to_every_linked_node() {
		let produced: Vec<_> = ProductBlueprint.builder().many(2).plus(1).build().collect();
		assert_eq!(produced.len(), 3);
		assert!(produced.iter().all(|p| !p.discontinued));
		assert!(produced.iter().all(|p| p.stock == 100));
	}

	#[rstest]
	fn test_behavior_runs_before_setters() {
		let produced: Vec<_> = SequentialProductBlueprint.builder().many(2).build().collect();
		// Sequential fill names the titles, but the explicit stock setter
		// overrides the filled stock.
		assert_eq!(produced[0].title, "title1");
		assert_eq!(produced[1].title, "title2");
		assert_eq!(produced[0].stock, 7);
		assert_eq!(produced[1].stock, 7);
	}

	#[rstest]
	fn test_node_transforms_override_blueprint_defaults() {
		let product = ProductBlueprint.builder().with(|p| p.stock = 1).build();
		assert_eq!(product.stock, 1);
	}
}
