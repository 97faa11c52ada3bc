//! Procedural macros for minter.
//!
//! This crate provides the `#[derive(Reflect)]` macro for generating
//! structural-introspection implementations.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod reflect_derive;

/// Derives a `Reflect` implementation for a struct with named fields.
///
/// The generated implementation describes every field with its declared
/// kind, sets scalar fields by name, and exposes nested composite fields
/// for recursive filling. Field types are classified syntactically:
///
/// - `String`, the integer and float primitives, `bool` and
///   `chrono::NaiveDateTime` are scalar kinds
/// - `Option<T>` is the optional form of `T`'s kind
/// - any other type is a nested composite and must itself implement
///   `Reflect` and `Default`
///
/// # Attributes
///
/// - `#[reflect(skip)]` - Exclude a field from filling
///
/// # Example
///
/// ```ignore
/// use minter::Reflect;
///
/// #[derive(Default, Reflect)]
/// pub struct Customer {
///     pub name: String,
///     pub age: u8,
///     pub shipping: Option<Address>,
///
///     #[reflect(skip)]
///     pub internal_token: String,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	reflect_derive::derive_reflect_impl(input)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}
