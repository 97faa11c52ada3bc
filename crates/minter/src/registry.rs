//! Process-wide default fill behavior.
//!
//! A blueprint that does not pick a fill behavior explicitly falls back to
//! the strategy registered here. The setting is process-wide mutable state
//! with explicit reset semantics; test isolation is the caller's
//! responsibility, not the registry's.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::fill::FillStrategy;

static DEFAULT_FILL: Lazy<RwLock<Option<FillStrategy>>> = Lazy::new(|| RwLock::new(None));

/// Registers the process-wide default fill strategy.
///
/// Applies to every blueprint built afterwards unless the blueprint sets its
/// own behavior.
///
/// # Example
///
/// ```ignore
/// set_default_fill(FillStrategy::sequential());
/// ```
pub fn set_default_fill(strategy: FillStrategy) {
	tracing::debug!(mode = ?strategy.mode(), "setting process-wide default fill");
	*DEFAULT_FILL.write() = Some(strategy);
}

/// Returns the currently registered default fill strategy, if any.
pub fn default_fill() -> Option<FillStrategy> {
	DEFAULT_FILL.read().clone()
}

/// Clears the process-wide default fill strategy.
///
/// This is primarily useful for testing.
pub fn clear_default_fill() {
	tracing::debug!("clearing process-wide default fill");
	*DEFAULT_FILL.write() = None;
}

/// Returns true when a process-wide default fill is registered.
pub fn has_default_fill() -> bool {
	DEFAULT_FILL.read().is_some()
}
