//! # Validation Module
//!
//! Input validation for front-desk requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: GUI                                                          │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate operator feedback                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Service boundary (Rust)                                      │
//! │  └── THIS MODULE: runs BEFORE any state mutation, so a rejected        │
//! │      request never leaves a partial write behind                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::pesel;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Oldest plausible visitor age; anything above is a keying error.
pub const MAX_VISITOR_AGE: i64 = 130;

/// Longest accepted name component.
pub const MAX_NAME_LEN: usize = 100;

// =============================================================================
// Identifier
// =============================================================================

/// Validates a visitor identifier (PESEL checksum rule).
///
/// Thin wrapper so callers validate everything through one module;
/// the rule itself lives in [`crate::pesel`].
pub fn validate_pesel(id: &str) -> ValidationResult<()> {
    pesel::validate(id)
}

// =============================================================================
// Person Fields
// =============================================================================

/// Validates a given or family name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
pub fn validate_person_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a visitor age.
///
/// ## Rules
/// - Non-negative
/// - At most [`MAX_VISITOR_AGE`]
pub fn validate_age(age: i64) -> ValidationResult<()> {
    if !(0..=MAX_VISITOR_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 0,
            max: MAX_VISITOR_AGE,
        });
    }

    Ok(())
}

// =============================================================================
// Wristband Serial
// =============================================================================

/// Validates a wristband serial as keyed at check-out.
///
/// Only shape is checked here; whether an active band with this serial
/// exists is the pool's question, not validation's.
pub fn validate_serial(serial: i64) -> ValidationResult<()> {
    if serial <= 0 {
        return Err(ValidationError::OutOfRange {
            field: "serial".to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
