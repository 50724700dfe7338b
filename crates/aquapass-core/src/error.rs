//! # Error Types
//!
//! Domain-specific error types for aquapass-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aquapass-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  aquapass-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  aquapass-service errors (boundary crate)                              │
//! │  └── ServiceError     - What the GUI sees (incl. expected outcomes)    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ServiceError → GUI      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (serial, PESEL prefix, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use chrono::NaiveDateTime;
use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Billing interval is empty or reversed.
    ///
    /// ## When This Occurs
    /// - Exit timestamp is equal to or earlier than the entry timestamp
    /// - Terminal clock was adjusted backwards between entry and exit
    ///
    /// The tariff walk refuses such intervals before touching any state.
    #[error("invalid billing interval: exit {exit} is not after entry {entry}")]
    InvalidInterval {
        entry: NaiveDateTime,
        exit: NaiveDateTime,
    },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used for early validation before business logic runs - a rejected
/// input never reaches the database.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-digit characters, wrong length).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// The PESEL check digit does not match the weighted sum.
    ///
    /// ## When This Occurs
    /// - Typo while keying the identifier at the front desk
    /// - Deliberately corrupted or fabricated identifier
    #[error("identifier failed checksum verification")]
    InvalidChecksum,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
