//! Index guards deciding which produced instances a transform applies to.
//!
//! A guard is a predicate over the zero-based production index of a node.
//! Guards are immutable value objects created once when a transform is
//! registered; bound violations are reported at that point, never when the
//! node is later enumerated.

use crate::error::{MinterError, MinterResult};

/// Predicate over a node's zero-based production index.
///
/// Guards never influence each other: when several guarded transforms cover
/// the same index, each applicable transform runs once in registration order
/// and the last write wins. Implementations must not reorder transforms by
/// guard specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
	/// Applies to every produced index.
	Always,
	/// Applies to the first `count` indices of the node.
	First {
		/// Number of leading instances covered.
		count: usize,
	},
	/// Applies to the last `count` indices of a node producing `total`.
	Last {
		/// Number of trailing instances covered.
		count: usize,
		/// Target count of the node the guard was created for.
		total: usize,
	},
	/// Applies to `count` consecutive indices starting at `start`.
	Between {
		/// Number of instances covered.
		count: usize,
		/// Zero-based index the slice starts at.
		start: usize,
	},
}

impl Guard {
	/// Creates a guard covering the first `count` of `total` instances.
	///
	/// # Errors
	///
	/// Returns [`MinterError::GuardOutOfRange`] when `count > total`.
	pub fn first(count: usize, total: usize) -> MinterResult<Self> {
		if count > total {
			return Err(MinterError::GuardOutOfRange {
				requested: count,
				total,
			});
		}
		Ok(Self::First { count })
	}

	/// Creates a guard covering the last `count` of `total` instances.
	///
	/// # Errors
	///
	/// Returns [`MinterError::GuardOutOfRange`] when `count > total`.
	pub fn last(count: usize, total: usize) -> MinterResult<Self> {
		if count > total {
			return Err(MinterError::GuardOutOfRange {
				requested: count,
				total,
			});
		}
		Ok(Self::Last { count, total })
	}

	/// Creates a guard covering `count` instances starting at `start`,
	/// within a node producing `total`.
	///
	/// # Errors
	///
	/// Returns [`MinterError::SliceOutOfRange`] when the slice does not fit
	/// inside the node.
	pub fn between(count: usize, start: usize, total: usize) -> MinterResult<Self> {
		let end = start.checked_add(count);
		match end {
			Some(end) if end <= total => Ok(Self::Between { count, start }),
			_ => Err(MinterError::SliceOutOfRange {
				start,
				count,
				total,
			}),
		}
	}

	/// Returns true when the guard accepts the given production index.
	pub fn accepts(&self, index: usize) -> bool {
		match *self {
			Self::Always => true,
			Self::First { count } => index < count,
			Self::Last { count, total } => index >= total.saturating_sub(count),
			Self::Between { count, start } => index >= start && index < start + count,
		}
	}
}
