//! # Error Types
//!
//! Domain-specific error types for oja-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                 │
//! │                                                                      │
//! │  oja-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                        │
//! │  └── ValidationError  - Input validation failures                    │
//! │                                                                      │
//! │  oja-store errors (separate crate)                                   │
//! │  └── StorageError     - Storage-slot read/write failures             │
//! │                                                                      │
//! │  Flow: ValidationError → CoreError → store caller                    │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//!
//! ## Deliberately Narrow
//! Most cart operations are infallible: removing an absent id, updating an
//! absent id, and clearing an empty cart are all defined as no-ops, not
//! errors. The only error path in this crate is the input-validation policy
//! applied on add.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Produced by the add-time validation policy in [`crate::validation`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive (> 0).
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: i64 },

    /// Monetary amount must be non-negative (>= 0).
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: String, value: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
