//! Error types for the minter crate.
//!
//! Configuration mistakes (guard bounds, slice bounds) are programmer errors
//! in test setup: they surface synchronously at the registering call, never
//! at enumeration time, and are never silently clamped.

use thiserror::Error;

/// Errors that can occur while configuring or draining a production chain.
#[derive(Debug, Error)]
pub enum MinterError {
	/// A first/last guard was registered with a count exceeding the node size.
	#[error("guard out of range: requested {requested} of {total} instances")]
	GuardOutOfRange {
		/// Number of instances the guard was asked to cover.
		requested: usize,
		/// Target count of the node the guard was registered on.
		total: usize,
	},

	/// A between-slice guard does not fit inside the node.
	#[error("slice out of range: {count} instances starting at {start} exceed {total}")]
	SliceOutOfRange {
		/// Zero-based index the slice starts at.
		start: usize,
		/// Number of instances the slice covers.
		count: usize,
		/// Target count of the node the guard was registered on.
		total: usize,
	},

	/// First-instance access on a chain with no nodes.
	#[error("production chain has no nodes to produce from")]
	EmptyChain,
}

/// Result type alias for minter operations.
pub type MinterResult<T> = Result<T, MinterError>;
