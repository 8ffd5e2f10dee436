//! # Error Types
//!
//! Domain-specific error types for cartpack-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cartpack-core errors (this file)                                      │
//! │  ├── CoreError        - Packing request rejected                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cartpack-cli errors (separate crate)                                  │
//! │  └── CliError         - I/O, manifest and config failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! An item that fits no container is a normal outcome. It lands in
//! [`crate::PackingSummary::unpacked`], never in an `Err`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Reasons a packing request is refused before any packing happens.
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
/// Field names point at the offending value, e.g. `items[2].length_cm`.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field or collection is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., NaN or infinite dimension).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
