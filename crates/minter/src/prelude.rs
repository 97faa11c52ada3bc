//! Convenience re-exports for common usage.
//!
//! This module provides a single import for the most commonly used items
//! from the minter crate.
//!
//! # Example
//!
//! ```ignore
//! use minter::prelude::*;
//!
//! // Now you have access to:
//! // - Builder types
//! // - Fill strategies
//! // - Blueprint traits
//! // - Error types
//! ```

// Error types
pub use crate::error::{MinterError, MinterResult};

// Builder surface
pub use crate::builder::{Builder, ListBuilder};

// Production engine
pub use crate::chain::{Production, ProductionChain, SharedContext};
pub use crate::guard::Guard;
pub use crate::node::ProductionNode;
pub use crate::transform::{GuardedTransform, Transform};

// Fill strategies
pub use crate::fill::{DateIncrement, FillMode, FillStrategy};
pub use crate::reflect::{FieldDescriptor, FieldKind, Reflect, ScalarValue};

// Blueprints and the global behavior registry
pub use crate::blueprint::{Blueprint, Customizer};
pub use crate::registry::{clear_default_fill, default_fill, set_default_fill};

// Re-export the Reflect derive macro when available
#[cfg(feature = "macros")]
pub use minter_macros::Reflect;
