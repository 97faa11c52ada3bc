//! Declarative test-data builders for Rust.
//!
//! This crate removes boilerplate object construction from test suites while
//! keeping full control over which instances get which values:
//!
//! - **Builders**: fluent chaining over one or many instances (`with`,
//!   `with_first`, `with_last`, `many`, `plus`, `plus_one`, `build`)
//! - **Guards**: positional selectivity, applying a mutation to all
//!   instances, the first N, the last N, or an arbitrary slice
//! - **Fill strategies**: recursive auto-fill of untouched fields with empty
//!   or index-derived sequential values
//! - **Blueprints**: reusable factory declarations sharing a construction
//!   baseline across linked builders
//!
//! # Features
//!
//! - `macros` - `#[derive(Reflect)]` support (enabled by default)
//!
//! # Quick Start
//!
//! ## Building instances
//!
//! ```ignore
//! use minter::prelude::*;
//!
//! #[derive(Default, Reflect)]
//! struct Person {
//!     name: String,
//!     age: u8,
//! }
//!
//! // One instance
//! let person = Builder::<Person>::new().with(|p| p.name = "Ada".into()).build();
//!
//! // Ten instances: the first two aged 19, the last two aged 5,
//! // everyone else at the default 56.
//! let people: Vec<Person> = Builder::<Person>::new()
//!     .many(10)
//!     .with_default(|p| p.age = 56)
//!     .with_first(2, |p| p.age = 19)?
//!     .with_last(2, |p| p.age = 5)?
//!     .build()
//!     .collect();
//! ```
//!
//! ## Auto-filling untouched fields
//!
//! ```ignore
//! use minter::prelude::*;
//!
//! let people: Vec<Person> = Builder::<Person>::new()
//!     .auto_fill(&FillStrategy::sequential())
//!     .many(3)
//!     .build()
//!     .collect();
//! // people[2].name == "name3", people[2].age == 3
//! ```
//!
//! ## Declaring a reusable factory
//!
//! ```ignore
//! use minter::prelude::*;
//!
//! struct PersonBlueprint;
//!
//! impl Blueprint for PersonBlueprint {
//!     type Model = Person;
//!
//!     fn configure(&self, c: &mut Customizer<Person>) {
//!         c.set_default_behavior(FillStrategy::empty());
//!         c.set(|p| p.age = 30);
//!     }
//! }
//!
//! let people: Vec<Person> = PersonBlueprint.builder().many(5).build().collect();
//! ```
//!
//! # Architecture
//!
//! - [`Transform`](transform::Transform) - a field-mutating closure applied
//!   to one produced instance
//! - [`Guard`](guard::Guard) - an index predicate deciding whether a
//!   transform applies to a given produced instance
//! - [`ProductionNode`](node::ProductionNode) - a bounded-count lazy
//!   producer with its own guarded transforms
//! - [`ProductionChain`](chain::ProductionChain) - ordered nodes plus shared
//!   default transforms, concatenated lazily into one output sequence
//! - [`FillStrategy`](fill::FillStrategy) - a recursive default-value
//!   assignment policy over [`Reflect`](reflect::Reflect) types
//! - [`Builder`](builder::Builder) / [`ListBuilder`](builder::ListBuilder) -
//!   the chaining facade driving the chain
//!
//! Production is synchronous and pull-based: nothing is constructed until
//! the output sequence is consumed, and nothing is cached. Builders and
//! productions are single-threaded by contract.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blueprint;
pub mod builder;
pub mod chain;
pub mod error;
pub mod fill;
pub mod guard;
pub mod node;
pub mod prelude;
pub mod reflect;
pub mod registry;
pub mod transform;

// Re-export commonly used types at crate root
pub use blueprint::{Blueprint, Customizer};
pub use builder::{Builder, ListBuilder};
pub use chain::{Production, ProductionChain, SharedContext};
pub use error::{MinterError, MinterResult};
pub use fill::{DateIncrement, FillMode, FillStrategy};
pub use guard::Guard;
pub use node::ProductionNode;
pub use reflect::{FieldDescriptor, FieldKind, Reflect, ScalarValue};
pub use registry::{clear_default_fill, default_fill, set_default_fill};
pub use transform::{GuardedTransform, Transform};

// Re-export the Reflect derive macro when available
#[cfg(feature = "macros")]
pub use minter_macros::Reflect;
