//! Recursive auto-fill strategies for untouched fields.
//!
//! A [`FillStrategy`] is a higher-order transform: a policy-parameterized
//! walker over a [`Reflect`] instance that assigns either empty/zero values
//! or values derived from the production index to every eligible field and,
//! recursively, to nested composite fields.
//!
//! Filling is best effort: fields the introspection layer cannot classify
//! are silently left alone. Recursion performs no cycle detection: the
//! object graph of the target type must be acyclic, and a cyclic graph will
//! recurse without bound.

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};

use crate::reflect::{FieldKind, Reflect, ScalarValue};
use crate::transform::Transform;

/// Unit by which sequential fill advances date/time fields per index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateIncrement {
	/// 100-nanosecond ticks.
	Ticks,
	/// Milliseconds.
	Milliseconds,
	/// Seconds.
	Seconds,
	/// Minutes.
	Minutes,
	/// Hours.
	Hours,
	/// Calendar days.
	Days,
	/// Calendar months.
	Months,
	/// Calendar years.
	Years,
}

impl DateIncrement {
	/// Advances `start` by `steps` increments, saturating at `start` when
	/// the arithmetic would leave the representable range.
	pub fn advance(&self, start: NaiveDateTime, steps: usize) -> NaiveDateTime {
		let signed = i64::try_from(steps).unwrap_or(i64::MAX);
		let advanced = match self {
			Self::Ticks => start.checked_add_signed(Duration::nanoseconds(signed.saturating_mul(100))),
			Self::Milliseconds => {
				Duration::try_milliseconds(signed).and_then(|d| start.checked_add_signed(d))
			}
			Self::Seconds => Duration::try_seconds(signed).and_then(|d| start.checked_add_signed(d)),
			Self::Minutes => Duration::try_minutes(signed).and_then(|d| start.checked_add_signed(d)),
			Self::Hours => Duration::try_hours(signed).and_then(|d| start.checked_add_signed(d)),
			Self::Days => Duration::try_days(signed).and_then(|d| start.checked_add_signed(d)),
			Self::Months => u32::try_from(steps)
				.ok()
				.and_then(|months| start.checked_add_months(Months::new(months))),
			Self::Years => u32::try_from(steps.saturating_mul(12))
				.ok()
				.and_then(|months| start.checked_add_months(Months::new(months))),
		};
		advanced.unwrap_or(start)
	}
}

/// Which value policy the walker applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
	/// Strings empty, numerics zero, dates at the legacy sentinel.
	Empty,
	/// Values derived from the production index, per field kind.
	Sequential,
	/// String fields only, set to `"{field}{index + 1}"`.
	PropertyName,
}

/// Fixed date sentinel used by empty fill.
///
/// Year 1753 keeps generated dates inside legacy date-range constraints; the
/// value is a compatibility constant, not semantically meaningful.
pub fn legacy_date_sentinel() -> NaiveDateTime {
	NaiveDate::from_ymd_opt(1753, 1, 1)
		.and_then(|date| date.and_hms_opt(0, 0, 0))
		.expect("1753-01-01T00:00:00 is a valid date")
}

/// Configuration of a recursive fill behavior.
///
/// Pure configuration, cheap to clone; materialized into a [`Transform`]
/// per target type via [`FillStrategy::transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct FillStrategy {
	mode: FillMode,
	recursive: bool,
	fill_nullables: bool,
	date_start: NaiveDateTime,
	date_increment: DateIncrement,
}

impl FillStrategy {
	fn with_mode(mode: FillMode, recursive: bool) -> Self {
		Self {
			mode,
			recursive,
			fill_nullables: true,
			date_start: legacy_date_sentinel(),
			date_increment: DateIncrement::Days,
		}
	}

	/// Empty fill: strings empty, numerics zero, bools false, dates at the
	/// legacy sentinel; recursive by default.
	pub fn empty() -> Self {
		Self::with_mode(FillMode::Empty, true)
	}

	/// Sequential fill: values derived from `(index + 1)` per field kind;
	/// recursive by default.
	pub fn sequential() -> Self {
		Self::with_mode(FillMode::Sequential, true)
	}

	/// Property-name fill: string fields set to `"{field}{index + 1}"`,
	/// everything else untouched; non-recursive.
	pub fn property_name() -> Self {
		Self::with_mode(FillMode::PropertyName, false)
	}

	/// The value policy this strategy applies.
	pub fn mode(&self) -> FillMode {
		self.mode
	}

	/// Enables or disables recursion into nested composite fields.
	pub fn recursive(mut self, recursive: bool) -> Self {
		self.recursive = recursive;
		self
	}

	/// When false, `Option` scalar fields are left unset instead of being
	/// filled with their zero-equivalent.
	pub fn fill_nullables(mut self, fill_nullables: bool) -> Self {
		self.fill_nullables = fill_nullables;
		self
	}

	/// Start date sequential fill advances from (index 0 receives it as is).
	pub fn date_start(mut self, start: NaiveDateTime) -> Self {
		self.date_start = start;
		self
	}

	/// Increment unit for sequential date/time fill. Defaults to days.
	pub fn date_increment(mut self, increment: DateIncrement) -> Self {
		self.date_increment = increment;
		self
	}

	/// Materializes the strategy into a transform for `T`.
	///
	/// Installed as a default transform, the fill runs before any node-local
	/// transform, so explicit `with*` setters override filled values.
	pub fn transform<T: Reflect + 'static>(&self) -> Transform<T> {
		let strategy = self.clone();
		Transform::indexed(move |instance: &mut T, index| strategy.fill(instance, index))
	}

	/// Fills every eligible field of `target` for the given production index.
	pub fn fill(&self, target: &mut dyn Reflect, index: usize) {
		for field in target.fields() {
			match field.kind {
				FieldKind::Skipped => {}
				FieldKind::Nested => {
					if self.recursive {
						if let Some(nested) = target.nested_mut(field.name) {
							self.fill(nested, index);
						}
					}
				}
				kind => {
					if field.optional && !self.fill_nullables {
						continue;
					}
					if let Some(value) = self.scalar_value(kind, field.name, index) {
						target.set_scalar(field.name, value);
					}
				}
			}
		}
	}

	fn scalar_value(&self, kind: FieldKind, name: &str, index: usize) -> Option<ScalarValue> {
		match self.mode {
			FillMode::Empty => self.empty_value(kind),
			FillMode::Sequential => self.sequential_value(kind, name, index),
			FillMode::PropertyName => match kind {
				FieldKind::String => Some(ScalarValue::Str(format!("{name}{}", index + 1))),
				_ => None,
			},
		}
	}

	fn empty_value(&self, kind: FieldKind) -> Option<ScalarValue> {
		match kind {
			FieldKind::String => Some(ScalarValue::Str(String::new())),
			FieldKind::F32 | FieldKind::F64 => Some(ScalarValue::Float(0.0)),
			FieldKind::Bool => Some(ScalarValue::Bool(false)),
			FieldKind::DateTime => Some(ScalarValue::DateTime(legacy_date_sentinel())),
			kind if kind.is_signed() => Some(ScalarValue::Int(0)),
			kind if kind.integer_max().is_some() => Some(ScalarValue::Uint(0)),
			_ => None,
		}
	}

	fn sequential_value(&self, kind: FieldKind, name: &str, index: usize) -> Option<ScalarValue> {
		match kind {
			FieldKind::String => Some(ScalarValue::Str(format!("{name}{}", index + 1))),
			FieldKind::F32 | FieldKind::F64 => Some(ScalarValue::Float((index + 1) as f64)),
			FieldKind::Bool => Some(ScalarValue::Bool(index % 2 == 0)),
			FieldKind::DateTime => Some(ScalarValue::DateTime(
				self.date_increment.advance(self.date_start, index),
			)),
			kind => {
				// Wraps at the type's maximum so a u8 resets to 1 after
				// 255, never to 0.
				let max = kind.integer_max()?;
				let value = (index as u64 % max) + 1;
				if kind.is_signed() {
					Some(ScalarValue::Int(value as i64))
				} else {
					Some(ScalarValue::Uint(value))
				}
			}
		}
	}
}
