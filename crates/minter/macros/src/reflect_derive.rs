//! Implementation of the `#[derive(Reflect)]` macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, Type};

/// How a field participates in structural introspection.
enum Classified<'a> {
	/// Directly settable scalar: the `FieldKind` variant name, the
	/// `ScalarValue` variant name, and whether a numeric narrowing cast is
	/// needed on set.
	Scalar {
		kind: &'static str,
		variant: &'static str,
		cast: Option<&'a Type>,
	},
	/// Nested composite requiring `Reflect + Default` on its type.
	Nested,
}

pub(crate) fn derive_reflect_impl(input: DeriveInput) -> syn::Result<TokenStream> {
	let struct_name = &input.ident;

	let fields = match &input.data {
		Data::Struct(data) => match &data.fields {
			Fields::Named(fields) => &fields.named,
			_ => {
				return Err(syn::Error::new_spanned(
					&input,
					"#[derive(Reflect)] only supports structs with named fields",
				));
			}
		},
		_ => {
			return Err(syn::Error::new_spanned(
				&input,
				"#[derive(Reflect)] only supports structs",
			));
		}
	};

	let mut descriptors = Vec::new();
	let mut scalar_arms = Vec::new();
	let mut nested_arms = Vec::new();

	for field in fields {
		let ident = field
			.ident
			.as_ref()
			.ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
		let name = ident.to_string();

		if has_skip_attr(field)? {
			descriptors.push(quote! {
				::minter::reflect::FieldDescriptor {
					name: #name,
					kind: ::minter::reflect::FieldKind::Skipped,
					optional: false,
				}
			});
			continue;
		}

		let (inner_ty, optional) = unwrap_option(&field.ty)?;
		match classify(inner_ty) {
			Classified::Scalar {
				kind,
				variant,
				cast,
			} => {
				let kind = Ident::new(kind, proc_macro2::Span::call_site());
				let variant = Ident::new(variant, proc_macro2::Span::call_site());
				descriptors.push(quote! {
					::minter::reflect::FieldDescriptor {
						name: #name,
						kind: ::minter::reflect::FieldKind::#kind,
						optional: #optional,
					}
				});

				let converted = match cast {
					Some(ty) => quote! { v as #ty },
					None => quote! { v },
				};
				let assigned = if optional {
					quote! { ::core::option::Option::Some(#converted) }
				} else {
					converted
				};
				scalar_arms.push(quote! {
					#name => match value {
						::minter::reflect::ScalarValue::#variant(v) => {
							self.#ident = #assigned;
							true
						}
						_ => false,
					},
				});
			}
			Classified::Nested => {
				descriptors.push(quote! {
					::minter::reflect::FieldDescriptor {
						name: #name,
						kind: ::minter::reflect::FieldKind::Nested,
						optional: #optional,
					}
				});

				let borrowed = if optional {
					quote! {
						self.#ident.get_or_insert_with(
							<#inner_ty as ::core::default::Default>::default,
						) as &mut dyn ::minter::reflect::Reflect
					}
				} else {
					quote! { &mut self.#ident as &mut dyn ::minter::reflect::Reflect }
				};
				nested_arms.push(quote! {
					#name => ::core::option::Option::Some(#borrowed),
				});
			}
		}
	}

	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let expanded = quote! {
		#[automatically_derived]
		impl #impl_generics ::minter::reflect::Reflect for #struct_name #ty_generics #where_clause {
			fn fields(&self) -> &'static [::minter::reflect::FieldDescriptor] {
				const FIELDS: &[::minter::reflect::FieldDescriptor] = &[ #( #descriptors ),* ];
				FIELDS
			}

			#[allow(unused_variables)]
			fn set_scalar(
				&mut self,
				name: &str,
				value: ::minter::reflect::ScalarValue,
			) -> bool {
				match name {
					#( #scalar_arms )*
					_ => false,
				}
			}

			#[allow(unused_variables)]
			fn nested_mut(
				&mut self,
				name: &str,
			) -> ::core::option::Option<&mut dyn ::minter::reflect::Reflect> {
				match name {
					#( #nested_arms )*
					_ => ::core::option::Option::None,
				}
			}
		}
	};

	Ok(expanded)
}

/// Checks for a `#[reflect(skip)]` attribute on the field.
fn has_skip_attr(field: &Field) -> syn::Result<bool> {
	let mut skip = false;
	for attr in &field.attrs {
		if attr.path().is_ident("reflect") {
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("skip") {
					skip = true;
					Ok(())
				} else {
					Err(meta.error("unsupported reflect attribute; expected `skip`"))
				}
			})?;
		}
	}
	Ok(skip)
}

/// Peels one level of `Option<...>`, rejecting nested options.
fn unwrap_option(ty: &Type) -> syn::Result<(&Type, bool)> {
	let Some(inner) = option_payload(ty) else {
		return Ok((ty, false));
	};
	if option_payload(inner).is_some() {
		return Err(syn::Error::new_spanned(
			ty,
			"#[derive(Reflect)] does not support nested Option types",
		));
	}
	Ok((inner, true))
}

fn option_payload(ty: &Type) -> Option<&Type> {
	let Type::Path(path) = ty else {
		return None;
	};
	let segment = path.path.segments.last()?;
	if segment.ident != "Option" {
		return None;
	}
	let PathArguments::AngleBracketed(args) = &segment.arguments else {
		return None;
	};
	match args.args.first() {
		Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
		_ => None,
	}
}

/// Classifies a (non-`Option`) field type by its syntactic name.
fn classify(ty: &Type) -> Classified<'_> {
	let Type::Path(path) = ty else {
		return Classified::Nested;
	};
	let Some(segment) = path.path.segments.last() else {
		return Classified::Nested;
	};
	match segment.ident.to_string().as_str() {
		"String" => Classified::Scalar {
			kind: "String",
			variant: "Str",
			cast: None,
		},
		"i8" => signed("I8", ty),
		"i16" => signed("I16", ty),
		"i32" => signed("I32", ty),
		"i64" => signed("I64", ty),
		"u8" => unsigned("U8", ty),
		"u16" => unsigned("U16", ty),
		"u32" => unsigned("U32", ty),
		"u64" => unsigned("U64", ty),
		"f32" => Classified::Scalar {
			kind: "F32",
			variant: "Float",
			cast: Some(ty),
		},
		"f64" => Classified::Scalar {
			kind: "F64",
			variant: "Float",
			cast: Some(ty),
		},
		"bool" => Classified::Scalar {
			kind: "Bool",
			variant: "Bool",
			cast: None,
		},
		"NaiveDateTime" => Classified::Scalar {
			kind: "DateTime",
			variant: "DateTime",
			cast: None,
		},
		_ => Classified::Nested,
	}
}

fn signed<'a>(kind: &'static str, ty: &'a Type) -> Classified<'a> {
	Classified::Scalar {
		kind,
		variant: "Int",
		cast: Some(ty),
	}
}

fn unsigned<'a>(kind: &'static str, ty: &'a Type) -> Classified<'a> {
	Classified::Scalar {
		kind,
		variant: "Uint",
		cast: Some(ty),
	}
}
