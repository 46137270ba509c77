//! # Line-Item Id Generation
//!
//! The original storefront minted ids inline from a timestamp plus a random
//! suffix, so uniqueness was coincidental non-collision. Here the generator
//! is an injected trait: uniqueness is a property of the generator, and the
//! store never invents ids itself.
//!
//! ## Contract
//! - Every call returns a value never returned before by this generator
//! - Ids are never recycled, even after the item they named is removed

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

// =============================================================================
// Generator Trait
// =============================================================================

/// Source of unique line-item identifiers.
///
/// Takes `&self` so generators can sit behind the store's shared handle;
/// implementations use interior mutability where they need state.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier, unique for the lifetime of the generator.
    fn next_id(&self) -> String;
}

// =============================================================================
// UUID Generator (production)
// =============================================================================

/// UUID v4 generator: globally unique without coordination.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// =============================================================================
// Sequential Generator (tests, deterministic fixtures)
// =============================================================================

/// Monotonically increasing counter with a fixed prefix: `li-1`, `li-2`, ...
///
/// The counter only ever moves forward, so removed ids are never reissued.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    /// Creates a generator starting at `{prefix}-1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        SequentialIds::new("li")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
