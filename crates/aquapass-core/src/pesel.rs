//! # PESEL Module
//!
//! Validation and test-data generation for the national identifier that
//! keys visitor records.
//!
//! ## Checksum Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PESEL: 11 digits                                                       │
//! │                                                                         │
//! │    d1 d2 d3 d4 d5 d6 d7 d8 d9 d10 | d11                                │
//! │    └──────── payload ───────────┘   └ check digit                      │
//! │                                                                         │
//! │  weights:  1  3  7  9  1  3  7  9  1  3                                │
//! │                                                                         │
//! │  check = (10 - (Σ dᵢ·wᵢ) mod 10) mod 10                                │
//! │                                                                         │
//! │  The payload encodes date of birth with a century offset folded        │
//! │  into the month field (1800s +80, 1900s +0, 2000s +20, 2100s +40,      │
//! │  2200s +60) followed by a 4-digit sequence number.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is a pure function with no external dependency; any implementation
//! must reproduce it bit-for-bit, so the weights and the fold are spelled
//! out rather than abstracted.

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// Positional weights for the checksum, applied to the first ten digits.
const WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Number of digits in a well-formed identifier.
const PESEL_LEN: usize = 11;

// =============================================================================
// Validation
// =============================================================================

/// Validates a PESEL identifier.
///
/// ## Rules
/// - Exactly 11 ASCII digits
/// - The 11th digit must equal the weighted checksum of the first ten
///
/// ## Example
/// ```rust
/// use aquapass_core::pesel;
///
/// assert!(pesel::validate("44051401359").is_ok());
/// assert!(pesel::validate("44051401358").is_err()); // corrupted check digit
/// assert!(pesel::validate("1234").is_err());        // wrong length
/// ```
pub fn validate(pesel: &str) -> Result<(), ValidationError> {
    let pesel = pesel.trim();

    if pesel.is_empty() {
        return Err(ValidationError::Required {
            field: "pesel".to_string(),
        });
    }

    if pesel.len() != PESEL_LEN || !pesel.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "pesel".to_string(),
            reason: "must be exactly 11 digits".to_string(),
        });
    }

    let digits: Vec<u32> = pesel.bytes().map(|b| u32::from(b - b'0')).collect();

    if check_digit(&digits[..10]) != digits[10] {
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(())
}

/// Computes the check digit for a ten-digit payload.
fn check_digit(payload: &[u32]) -> u32 {
    let weighted: u32 = payload
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(digit, weight)| digit * weight)
        .sum();
    (10 - weighted % 10) % 10
}

// =============================================================================
// Generation
// =============================================================================

/// Generates a well-formed PESEL from a date of birth and sequence number.
///
/// ## Usage
/// Deterministic helper for the seed binary and for tests; `sequence` is
/// truncated to four digits. Real identifiers come from visitors, this
/// only has to satisfy the same checksum rule.
pub fn generate(birth_date: NaiveDate, sequence: u32) -> String {
    let year = birth_date.year();

    // Century is folded into the month field.
    let month_offset: u32 = match year {
        1800..=1899 => 80,
        1900..=1999 => 0,
        2000..=2099 => 20,
        2100..=2199 => 40,
        _ => 60,
    };

    let payload = format!(
        "{:02}{:02}{:02}{:04}",
        year.rem_euclid(100),
        birth_date.month() + month_offset,
        birth_date.day(),
        sequence % 10_000
    );

    let digits: Vec<u32> = payload.bytes().map(|b| u32::from(b - b'0')).collect();

    format!("{payload}{}", check_digit(&digits))
}

// =============================================================================
// Unit Tests
// =============================================================================
