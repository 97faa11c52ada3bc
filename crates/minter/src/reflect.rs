//! Structural introspection over fixture types.
//!
//! Fill strategies walk an instance's fields without knowing its concrete
//! type. [`Reflect`] is the object-safe capability they walk against: list
//! the fields with their declared kinds, set a scalar field by name, and
//! borrow a nested composite field for recursion.
//!
//! The `#[derive(Reflect)]` macro (feature `macros`, enabled by default)
//! generates the implementation from named-struct syntax; hand-written
//! implementations and generated code are interchangeable.

use chrono::NaiveDateTime;

/// Declared kind of a settable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// `String`.
	String,
	/// `i8`.
	I8,
	/// `i16`.
	I16,
	/// `i32`.
	I32,
	/// `i64`.
	I64,
	/// `u8`.
	U8,
	/// `u16`.
	U16,
	/// `u32`.
	U32,
	/// `u64`.
	U64,
	/// `f32`.
	F32,
	/// `f64`.
	F64,
	/// `bool`.
	Bool,
	/// `chrono::NaiveDateTime`.
	DateTime,
	/// A nested composite implementing [`Reflect`] and `Default`.
	Nested,
	/// Explicitly excluded from filling (`#[reflect(skip)]` or unsupported).
	Skipped,
}

impl FieldKind {
	/// Returns true for kinds carrying a directly settable scalar value.
	pub fn is_scalar(&self) -> bool {
		!matches!(self, Self::Nested | Self::Skipped)
	}

	/// Largest representable value for integer kinds, used by sequential
	/// fill to wrap before overflowing the target type.
	pub fn integer_max(&self) -> Option<u64> {
		match self {
			Self::I8 => Some(i8::MAX as u64),
			Self::I16 => Some(i16::MAX as u64),
			Self::I32 => Some(i32::MAX as u64),
			Self::I64 => Some(i64::MAX as u64),
			Self::U8 => Some(u8::MAX as u64),
			Self::U16 => Some(u16::MAX as u64),
			Self::U32 => Some(u32::MAX as u64),
			Self::U64 => Some(u64::MAX),
			_ => None,
		}
	}

	/// Returns true for kinds that set via [`ScalarValue::Int`].
	pub fn is_signed(&self) -> bool {
		matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
	}
}

/// Description of one publicly settable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
	/// Field name as declared on the struct.
	pub name: &'static str,
	/// Declared kind of the field (of the `Option` payload when optional).
	pub kind: FieldKind,
	/// True when the field is an `Option` of the declared kind.
	pub optional: bool,
}

/// A scalar value being written into a field.
///
/// The implementation performs the narrowing cast to the field's declared
/// type; writers pick the variant matching the field's [`FieldKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
	/// String payload.
	Str(String),
	/// Signed integer payload, narrowed on set.
	Int(i64),
	/// Unsigned integer payload, narrowed on set.
	Uint(u64),
	/// Floating-point payload, narrowed on set.
	Float(f64),
	/// Boolean payload.
	Bool(bool),
	/// Date/time payload.
	DateTime(NaiveDateTime),
}

/// Object-safe structural access to an instance's fields.
pub trait Reflect {
	/// Describes every publicly settable field, in declaration order.
	fn fields(&self) -> &'static [FieldDescriptor];

	/// Sets the scalar field `name` to `value`.
	///
	/// Returns false when the field is unknown, non-scalar, or the value
	/// variant does not match its kind; the write is then skipped. Optional
	/// fields are set to `Some` of the narrowed value.
	fn set_scalar(&mut self, name: &str, value: ScalarValue) -> bool;

	/// Borrows the nested composite field `name` for recursive filling.
	///
	/// Optional composites are default-constructed in place first, so the
	/// field is non-`None` after a successful borrow. Returns `None` for
	/// unknown or non-composite fields.
	fn nested_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;
}
